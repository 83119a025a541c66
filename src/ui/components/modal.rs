//! Detail modal listing a product's color options.

use super::draw_box;
use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MAX_MODAL_WIDTH: usize = 60;

/// Renders the modal centered over the grid.
///
/// ```text
/// ┌ Premium Wireless Headphones - Color Options ┐
/// │                                             │
/// │  [1] Midnight Black   products/...-black.jpg│
/// │  [2] Pearl White      products/...-white.jpg│
/// │                                             │
/// │  $299.99                                    │
/// │  Call 092218897 to order                    │
/// └─────────────────────────────────────────────┘
/// ```
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let box_width = MAX_MODAL_WIDTH.min(cols.saturating_sub(4)).max(10);
    let inner = box_width - 2;
    let box_height = modal.variants.len() + 7;
    let top = rows.saturating_sub(box_height) / 2 + 1;
    let left = cols.saturating_sub(box_width) / 2 + 1;

    draw_box(top, left, box_width, box_height, &theme.colors.border, &theme.colors.text_normal);

    let title = truncate(&modal.title, inner.saturating_sub(2));
    position_cursor(top, left + 2);
    print!("{}{} {title} {}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());

    let color_width = modal
        .variants
        .iter()
        .map(|v| width(&v.color))
        .max()
        .unwrap_or(0);

    for (offset, variant) in modal.variants.iter().enumerate() {
        let line = format!(" [{}] {:<color_width$}  {}", variant.number, variant.color, variant.image);
        let line = truncate(&line, inner.saturating_sub(2));
        position_cursor(top + 2 + offset, left + 1);
        if variant.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!(" {line}{}", " ".repeat(inner.saturating_sub(width(&line) + 1)));
        print!("{}", Theme::reset());
    }

    let price_row = top + 3 + modal.variants.len();
    position_cursor(price_row, left + 2);
    print!("{}{}{}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg), modal.price, Theme::reset());

    position_cursor(price_row + 1, left + 2);
    print!("{}", Theme::fg(&theme.colors.accent_bg));
    print!("{}", truncate(&modal.order_hint, inner.saturating_sub(2)));
    print!("{}", Theme::reset());
}
