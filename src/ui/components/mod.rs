//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Store name and call-to-action
//! - [`search`]: Search box with inline error
//! - [`categories`]: Category chips
//! - [`grid`]: Product cards and the shuffle indicator
//! - [`empty`]: "No products found" message
//! - [`modal`]: Detail modal with color options
//! - [`gallery`]: Full-screen variant gallery
//! - [`footer`]: Store details and keybinding hints
//!
//! # Layouts
//!
//! - [`render_storefront`]: header, search, chips, grid, footer, and the
//!   detail modal on top when open
//! - [`render_gallery_mode`]: gallery and footer only

mod categories;
mod empty;
mod footer;
mod gallery;
mod grid;
mod header;
mod modal;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GalleryInfo, UIViewModel};

use categories::render_categories;
use empty::render_empty_state;
use footer::{render_footer, render_store_details};
use grid::{render_cards, render_grid_title};
use header::render_header;
use modal::render_modal;
use search::render_search_bar;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws a framed box with a blank interior.
pub(crate) fn draw_box(top: usize, left: usize, width: usize, height: usize, border: &str, fill: &str) {
    if width < 2 || height < 2 {
        return;
    }
    let inner = width - 2;

    position_cursor(top, left);
    print!("{}┌{}┐", Theme::fg(border), "─".repeat(inner));
    for row in top + 1..top + height - 1 {
        position_cursor(row, left);
        print!("{}│{}{}{}│", Theme::fg(border), Theme::fg(fill), " ".repeat(inner), Theme::fg(border));
    }
    position_cursor(top + height - 1, left);
    print!("└{}┘{}", "─".repeat(inner), Theme::reset());
}

fn render_footer_block(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(3);
    render_store_details(footer_row - 2, &vm.footer, theme, cols);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the landing page.
///
/// ```text
/// [Header]
/// [Border]
/// [Search box - 3 lines]
/// [Search error]
/// [Category chips]
/// [blank]
/// [Grid title / Refreshing...]
/// [Cards or empty state]
/// [Store details / copyright]
/// [Border]
/// [Footer]
/// ```
pub fn render_storefront(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_categories(current_row, &vm.categories, theme, cols) + 1;
    current_row = render_grid_title(current_row, &vm.grid, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_cards(current_row, &vm.grid, theme);
    }

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme, rows, cols);
    }

    render_footer_block(vm, theme, cols, rows);
}

/// Renders the gallery, which replaces the landing page while open.
pub fn render_gallery_mode(vm: &UIViewModel, gallery: &GalleryInfo, theme: &Theme, cols: usize, rows: usize) {
    gallery::render_gallery(gallery, theme, rows, cols);
    render_footer_block(vm, theme, cols, rows);
}
