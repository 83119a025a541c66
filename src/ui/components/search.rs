//! Search box with its inline validation error.

use crate::ui::helpers::{position_cursor, truncate, truncate_start, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

const SEARCH_LABEL: &str = " Search: ";

/// Renders the 3-line search box plus one error line at `row`.
///
/// ```text
///   ┌──────────────────────────────┐
///   │ Search: wireless▏            │
///   └──────────────────────────────┘
///   Search query must be less than 50 characters
/// ```
///
/// Input wider than the box shows its tail, so the caret stays on the
/// latest keystroke.
///
/// Returns the row after the error line.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_focus_border
    } else {
        &theme.colors.search_bar_border
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let cursor_mark = if search.is_focused { "▏" } else { "" };
    let content = search_line(search, inner_width.saturating_sub(width(cursor_mark)));

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(border));
    if search.is_placeholder {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{content}{}", Theme::reset());
    print!("{}{cursor_mark}", Theme::fg(border));
    print!("{}", " ".repeat(inner_width.saturating_sub(width(&content) + width(cursor_mark))));
    print!("│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 3, 1);
    match &search.error {
        Some(error) => {
            print!("{margin}{}", Theme::fg(&theme.colors.error_fg));
            print!("{}", truncate(error, box_width));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }

    row + 4
}

/// Label plus input, at most `budget` characters wide.
fn search_line(search: &SearchBarInfo, budget: usize) -> String {
    let text_budget = budget.saturating_sub(width(SEARCH_LABEL));
    let text = if search.is_placeholder {
        truncate(&search.text, text_budget)
    } else {
        truncate_start(&search.text, text_budget)
    };
    truncate(&format!("{SEARCH_LABEL}{text}"), budget)
}
