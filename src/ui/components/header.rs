//! Header bar: store name on the left, call-to-action badge on the right.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///  Miftah Store                                  Call Now: 092218897
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let name = format!(" {} ", header.store_name);
    let badge = format!(" {} ", header.call_to_action);
    let gap = cols.saturating_sub(width(&name) + width(&badge));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{name}", Theme::bold());
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::reset());

    if width(&name) + width(&badge) <= cols {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{}", Theme::bg(&theme.colors.accent_bg));
        print!("{badge}");
        print!("{}", Theme::reset());
    }

    row + 1
}
