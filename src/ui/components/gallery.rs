//! Full-screen variant gallery.

use super::draw_box;
use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GalleryInfo;

/// Renders the gallery over the whole pane except the footer rows.
///
/// The frame shows the color name and its image reference; arrows are drawn
/// only when there is more than one color to step through.
pub fn render_gallery(gallery: &GalleryInfo, theme: &Theme, rows: usize, cols: usize) {
    let height = rows.saturating_sub(3).max(7);
    draw_box(1, 1, cols, height, &theme.colors.border, &theme.colors.text_normal);

    let inner = cols.saturating_sub(2);
    let middle = height / 2;

    position_cursor(2, 2);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print_centered(&gallery.title, inner);
    print!("{}", Theme::reset());

    position_cursor(middle, 2);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_bg));
    print_centered(&gallery.color, inner);
    print!("{}", Theme::reset());

    position_cursor(middle + 1, 2);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&gallery.image, inner);
    print!("{}", Theme::reset());

    if gallery.can_navigate {
        print!("{}", Theme::fg(&theme.colors.selection_bg));
        position_cursor(middle, 4);
        print!("◀");
        position_cursor(middle, cols.saturating_sub(3));
        print!("▶");
        print!("{}", Theme::reset());
    }

    position_cursor(height.saturating_sub(1), 2);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&gallery.position, inner);
    print!("{}", Theme::reset());
}
