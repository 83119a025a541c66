//! Product card grid.

use crate::app::state::{CARD_HEIGHT, CARD_WIDTH};
use crate::ui::helpers::{position_cursor, render_highlighted_text, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridInfo, ProductCard};

/// Gap between cards.
const GUTTER: usize = 2;

/// Renders the grid title line with the shuffle indicator.
pub fn render_grid_title(row: usize, grid: &GridInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("  {}{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), grid.title, Theme::reset());
    if grid.is_shuffling {
        print!("  {}{}Refreshing...{}", Theme::dim(), Theme::fg(&theme.colors.shuffling_fg), Theme::reset());
    }
    row + 1
}

/// Renders the cards row-major starting at `row`, `grid.columns` per row.
///
/// Returns the row after the last card row.
pub fn render_cards(row: usize, grid: &GridInfo, theme: &Theme) -> usize {
    let columns = grid.columns.max(1);
    let mut next_row = row;

    for (index, card) in grid.cards.iter().enumerate() {
        let card_row = row + (index / columns) * CARD_HEIGHT;
        let card_col = 3 + (index % columns) * CARD_WIDTH;
        render_card(card_row, card_col, card, grid.is_shuffling, theme);
        next_row = card_row + CARD_HEIGHT;
    }

    next_row
}

fn render_card(row: usize, col: usize, card: &ProductCard, dimmed: bool, theme: &Theme) {
    let box_width = CARD_WIDTH - GUTTER;
    let inner = box_width - 2;
    let border = if card.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.card_border
    };
    let dim = if dimmed { Theme::dim() } else { "" };

    position_cursor(row, col);
    print!("{dim}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner), Theme::reset());

    // Name line, in selection colors under the cursor.
    let name_style = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{dim}{}", Theme::fg(&theme.colors.text_normal))
    };
    position_cursor(row + 1, col);
    print!("{dim}{}│{}", Theme::fg(border), Theme::reset());
    print!("{name_style} ");
    render_highlighted_text(&card.name, &card.highlight_ranges, theme, &name_style);
    print!("{}", " ".repeat(inner.saturating_sub(width(&card.name) + 1)));
    print!("{}{dim}{}│{}", Theme::reset(), Theme::fg(border), Theme::reset());

    let lines = [
        (card.price.as_str(), &theme.colors.price_fg, Theme::bold()),
        (card.hint.as_str(), &theme.colors.text_dim, Theme::dim()),
    ];
    for (offset, (text, color, weight)) in lines.into_iter().enumerate() {
        let text = truncate(text, inner - 1);
        position_cursor(row + 2 + offset, col);
        print!("{dim}{}│{}", Theme::fg(border), Theme::reset());
        print!("{dim}{weight}{} {text}{}", Theme::fg(color), Theme::reset());
        print!("{}", " ".repeat(inner.saturating_sub(width(&text) + 1)));
        print!("{dim}{}│{}", Theme::fg(border), Theme::reset());
    }

    position_cursor(row + 4, col);
    print!("{dim}{}└{}┘{}", Theme::fg(border), "─".repeat(inner), Theme::reset());
}
