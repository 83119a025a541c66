//! Storefront color schemes and ANSI escape helpers.
//!
//! Two themes are built in: `storefront-dark` (default) and
//! `storefront-light`. Custom themes use the same TOML layout:
//!
//! ```toml
//! name = "my-store"
//!
//! [colors]
//! header_fg = "#f8fafc"
//! accent_fg = "#0f172a"
//! accent_bg = "#f59e0b"
//! # ... every field of ThemeColors
//! ```

use crate::domain::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Call-to-action badge.
    pub accent_fg: String,
    pub accent_bg: String,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    /// Search box border while typing.
    pub search_focus_border: String,
    /// Inline validation error.
    pub error_fg: String,

    pub chip_fg: String,
    pub chip_selected_fg: String,
    pub chip_selected_bg: String,

    pub card_border: String,
    /// Card under the cursor, and the highlighted color option.
    pub selection_fg: String,
    pub selection_bg: String,
    pub price_fg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    /// "Refreshing..." indicator.
    pub shuffling_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILTIN: [&'static str; 2] = ["storefront-dark", "storefront-light"];

    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "storefront-dark" => include_str!("../../themes/storefront-dark.toml"),
            "storefront-light" => include_str!("../../themes/storefront-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| StorefrontError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| StorefrontError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Falls back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `storefront-dark` theme.
    fn default() -> Self {
        Self::from_name("storefront-dark").expect("built-in storefront-dark theme parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in Theme::BUILTIN {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn light_theme_has_no_header_background() {
        let theme = Theme::from_name("storefront-light").unwrap();
        assert!(theme.colors.header_bg.is_none());
        assert!(Theme::default().colors.header_bg.is_some());
    }

    #[test]
    fn escape_sequences_encode_rgb() {
        assert_eq!(Theme::fg("#ff8000"), "\u{001b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let dark = include_str!("../../themes/storefront-dark.toml").replace("storefront-dark", "custom");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(dark.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn malformed_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(StorefrontError::Theme(_))));
    }
}
