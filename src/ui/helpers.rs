//! Shared rendering utilities.
//!
//! All widths and ranges here are in characters, not bytes, so product names
//! with non-ASCII text neither split a code point nor misalign the grid.

use crate::ui::theme::Theme;

/// Moves the terminal cursor (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character count of `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in "..." when cut.
///
/// # Examples
///
/// ```
/// use storefront::ui::helpers::truncate;
///
/// assert_eq!(truncate("Smart Fitness Watch", 12), "Smart Fit...");
/// assert_eq!(truncate("Watch", 12), "Watch");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Like [`truncate`], but keeps the end of `text` so the latest typed
/// characters stay visible.
#[must_use]
pub fn truncate_start(text: &str, max: usize) -> String {
    let len = width(text);
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().skip(len - max).collect();
    }
    let kept: String = text.chars().skip(len - (max - 3)).collect();
    format!("...{kept}")
}

/// Character ranges `(start, end)` of every case-insensitive occurrence of
/// `query` in `text`, non-overlapping, left to right.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    // Lowercasing may expand a character; fall back to no highlight then.
    if needle.is_empty() || haystack.len() != width(text) {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Prints `text` padded to `cols` and centered.
pub fn print_centered(text: &str, cols: usize) {
    let len = width(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{}", truncate(text, cols));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Prints `text` with `ranges` in the match highlight colors.
///
/// `restore` is re-emitted after each highlighted section so the surrounding
/// styling (e.g. a selected card's background) continues.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_start_keeps_the_tail() {
        assert_eq!(truncate_start("wireless headphones", 10), "...dphones");
        assert_eq!(truncate_start("wireless", 10), "wireless");
        assert_eq!(truncate_start("écouter", 2), "er");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Écouteurs sans fil", 10), "Écouteu...");
        assert_eq!(truncate("abc", 2), "ab");
        assert_eq!(width("Écouteurs"), 9);
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Pro Tablet Pro", "pro"), vec![(0, 3), (11, 14)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Laptop", "").is_empty());
        assert!(match_ranges("Laptop", "phone").is_empty());
    }
}
