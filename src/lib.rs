//! Storefront: a product landing page rendered as a Zellij plugin.
//!
//! The plugin shows a store header with a call-to-action, a search box with
//! debounced validation, category chips, and a grid of product cards that
//! reshuffles itself every few seconds. Opening a card shows its color
//! options; a full-screen gallery steps through them.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← key map, timer queue
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - FilterController (search + category, debounce)   │
//! │  - ShuffleScheduler (display order)                 │
//! │  - Navigator (detail modal, gallery)                │
//! │  - handle_event / compute_viewmodel                 │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ Domain (domain/)      │
//! │ - View model          │          │ - Product, Category   │
//! │ - Components          │          │ - Catalog fixture     │
//! │ - Themes              │          │ - Errors              │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing → OpenTelemetry → JSON-lines journal     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls Zellij host functions. Side effects leave the
//! handler as [`Action`]s, so everything below the shim runs in ordinary
//! unit tests.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/storefront.wasm" {
//!         store_name "Miftah Store"
//!         phone "092218897"
//!         email "info@miftahstore.com"
//!         support_hours "24/7 Support"
//!         catalog_file "~/shop/catalog.toml"
//!         theme "storefront-light"
//!         shuffle_period_secs "8"
//!         shuffle_settle_ms "300"
//!         search_debounce_ms "300"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use storefront::{handle_event, initialize, Config, Event};
//!
//! let config = Config { shuffle_seed: Some(7), ..Config::default() };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::CursorRight)?;
//! handle_event(&mut state, &Event::OpenSelected)?;
//! assert!(state.navigator.is_detail_open());
//! # Ok::<(), storefront::StorefrontError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, StoreInfo, Timings};
pub use domain::{Catalog, Result, StorefrontError};
pub use ui::Theme;

use infrastructure::expand_tilde;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom TOML catalog. The embedded catalog is used when unset or invalid.
    pub catalog_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme file; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the span journal. Default: `"info"`.
    pub trace_level: String,

    /// Trace journal directory. Default: `~/.local/share/zellij/storefront`.
    pub data_dir: Option<String>,

    pub store: StoreInfo,
    pub timings: Timings,

    /// Fixed seed for reproducible shuffles; entropy when unset.
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            data_dir: None,
            store: StoreInfo::default(),
            timings: Timings::default(),
            shuffle_seed: None,
        }
    }
}

/// Parses `key` from the map. Missing keys are `Ok(None)`.
fn parse_key<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| StorefrontError::Config(format!("invalid value for {key}: {raw:?}")))
        })
        .transpose()
}

/// Like [`parse_key`] but rejects zero, which would make a timer spin.
fn parse_positive(config: &BTreeMap<String, String>, key: &str) -> Result<Option<u64>> {
    match parse_key::<u64>(config, key)? {
        Some(0) => Err(StorefrontError::Config(format!("{key} must be greater than zero"))),
        value => Ok(value),
    }
}

/// Logs an invalid value and falls back to the default.
fn or_default<T>(parsed: Result<Option<T>>, default: T) -> T {
    match parsed {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "using default configuration value");
            default
        }
    }
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Parses configuration, falling back to defaults on missing or invalid values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use storefront::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("shuffle_period_secs".to_string(), "12".to_string());
    /// map.insert("search_debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.timings.shuffle_period, Duration::from_secs(12));
    /// assert_eq!(config.timings.search_debounce, Duration::from_millis(300));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let timings = Timings {
            shuffle_period: or_default(
                parse_positive(config, "shuffle_period_secs").map(|v| v.map(Duration::from_secs)),
                defaults.timings.shuffle_period,
            ),
            shuffle_settle: or_default(
                parse_positive(config, "shuffle_settle_ms").map(|v| v.map(Duration::from_millis)),
                defaults.timings.shuffle_settle,
            ),
            search_debounce: or_default(
                parse_key::<u64>(config, "search_debounce_ms").map(|v| v.map(Duration::from_millis)),
                defaults.timings.search_debounce,
            ),
        };

        let store = StoreInfo {
            name: non_empty(config, "store_name").unwrap_or(defaults.store.name),
            phone: non_empty(config, "phone").unwrap_or(defaults.store.phone),
            email: non_empty(config, "email").unwrap_or(defaults.store.email),
            coverage: non_empty(config, "coverage").unwrap_or(defaults.store.coverage),
            hours: non_empty(config, "support_hours").unwrap_or(defaults.store.hours),
            copyright_year: or_default(parse_key::<u16>(config, "copyright_year"), defaults.store.copyright_year),
        };

        Self {
            catalog_file: non_empty(config, "catalog_file"),
            theme_name: non_empty(config, "theme"),
            theme_file: non_empty(config, "theme_file"),
            trace_level: non_empty(config, "trace_level").unwrap_or(defaults.trace_level),
            data_dir: non_empty(config, "data_dir"),
            store,
            timings,
            shuffle_seed: or_default(parse_key::<u64>(config, "shuffle_seed").map(|v| v.map(Some)), None),
        }
    }
}

fn load_catalog(config: &Config) -> Catalog {
    let Some(path) = &config.catalog_file else {
        return Catalog::builtin();
    };
    let path = expand_tilde(path);
    Catalog::from_file(&path).unwrap_or_else(|e| {
        tracing::warn!(catalog_file = %path, error = %e, "failed to load catalog, using built-in");
        Catalog::builtin()
    })
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial application state from configuration.
///
/// The shuffle is not started here; the shim starts it once the grid is
/// shown.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = load_catalog(config);
    let theme = load_theme(config);
    let rng = config
        .shuffle_seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

    tracing::debug!(
        products = catalog.products().len(),
        theme = %theme.name,
        seeded = config.shuffle_seed.is_some(),
        "storefront initialized"
    );

    AppState::new(catalog, theme, config.store.clone(), config.timings, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/shop.toml"),
            ("theme", "storefront-light"),
            ("trace_level", "debug"),
            ("shuffle_period_secs", "5"),
            ("shuffle_settle_ms", "150"),
            ("search_debounce_ms", "0"),
            ("shuffle_seed", "99"),
            ("store_name", "Corner Shop"),
            ("phone", "555-0100"),
            ("email", "hello@corner.shop"),
            ("coverage", "Downtown only"),
            ("support_hours", "9-5 weekdays"),
            ("copyright_year", "2026"),
            ("data_dir", "/tmp/traces"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("~/shop.toml"));
        assert_eq!(config.theme_name.as_deref(), Some("storefront-light"));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.timings.shuffle_period, Duration::from_secs(5));
        assert_eq!(config.timings.shuffle_settle, Duration::from_millis(150));
        assert_eq!(config.timings.search_debounce, Duration::ZERO);
        assert_eq!(config.shuffle_seed, Some(99));
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.store.phone, "555-0100");
        assert_eq!(config.store.email, "hello@corner.shop");
        assert_eq!(config.store.coverage, "Downtown only");
        assert_eq!(config.store.hours, "9-5 weekdays");
        assert_eq!(config.store.copyright(), "© 2026 Corner Shop. All rights reserved.");
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/traces"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("shuffle_period_secs", "0"),
            ("shuffle_settle_ms", "-1"),
            ("shuffle_seed", "abc"),
            ("store_name", "   "),
            ("copyright_year", "last year"),
        ]));
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.shuffle_seed, None);
        assert_eq!(config.store, StoreInfo::default());
    }

    #[test]
    fn parse_key_reports_config_error() {
        let err = parse_key::<u64>(&map(&[("shuffle_seed", "x")]), "shuffle_seed").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn unreadable_catalog_falls_back_to_builtin() {
        let config = Config {
            catalog_file: Some("/nonexistent/catalog.toml".to_string()),
            shuffle_seed: Some(1),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.catalog, Catalog::builtin());
    }

    #[test]
    fn custom_catalog_and_theme_are_loaded() {
        let mut catalog = tempfile::NamedTempFile::new().unwrap();
        catalog
            .write_all(
                br#"
categories = ["All", "Audio"]

[[products]]
id = 10
name = "Studio Monitor"
category = "Audio"
price = "$499.00"
image = "monitor.jpg"
variants = [{ color = "Walnut", image = "monitor-walnut.jpg" }]
"#,
            )
            .unwrap();

        let config = Config {
            catalog_file: Some(catalog.path().display().to_string()),
            theme_name: Some("storefront-light".to_string()),
            shuffle_seed: Some(3),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.catalog.products().len(), 1);
        assert_eq!(state.theme.name, "storefront-light");
    }

    #[test]
    fn same_seed_gives_same_shuffle() {
        let config = Config {
            shuffle_seed: Some(42),
            ..Config::default()
        };
        let mut a = initialize(&config);
        let mut b = initialize(&config);
        a.shuffle.shuffle_now();
        b.shuffle.shuffle_now();
        assert_eq!(a.shuffle.order(), b.shuffle.order());
    }
}
