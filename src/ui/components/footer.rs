//! Footer: store details and the help bar.

use crate::ui::helpers::{position_cursor, print_centered, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the store details line at `row`, with the copyright after it when
/// both fit.
pub fn render_store_details(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let line = details_line(footer, cols);

    position_cursor(row, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(&line, cols);
    print!("{}", Theme::reset());
    row + 1
}

fn details_line(footer: &FooterInfo, cols: usize) -> String {
    if footer.details.is_empty() {
        return footer.copyright.clone();
    }
    let joined = format!("{}  │  {}", footer.details, footer.copyright);
    if width(&joined) <= cols {
        joined
    } else {
        footer.details.clone()
    }
}

/// Renders keybinding hints centered at `row`, with the store contact on the
/// right when there is room.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let contact_width = width(&footer.contact) + 2;
    let fits_contact = width(&footer.keybindings) + contact_width * 2 <= cols;
    let hint_cols = if fits_contact { cols - contact_width } else { cols };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, hint_cols);
    if fits_contact {
        print!(" {} ", footer.contact);
    }
    print!("{}", Theme::reset());
    row + 1
}
