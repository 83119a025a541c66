//! Category filter chips.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryChip;

/// Renders chips on one line, numbered for the `1`-`9` shortcuts.
///
/// Chips that do not fit are dropped from the right.
pub fn render_categories(row: usize, chips: &[CategoryChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");
    let mut used = 2;

    for (index, chip) in chips.iter().enumerate() {
        let label = if index < 9 {
            format!(" {} {} ", index + 1, chip.label)
        } else {
            format!(" {} ", chip.label)
        };
        if used + width(&label) + 1 > cols {
            break;
        }

        if chip.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_selected_fg));
            print!("{}", Theme::bg(&theme.colors.chip_selected_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.chip_fg));
        }
        print!("{label}{} ", Theme::reset());
        used += width(&label) + 1;
    }

    row + 1
}
