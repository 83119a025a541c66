//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshot of the state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers (header, search, grid, modal, ...)
//! - [`helpers`]: Character-safe truncation, match ranges, highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CategoryChip, EmptyState, FooterInfo, GalleryInfo, GridInfo, HeaderInfo, ModalInfo,
    ProductCard, SearchBarInfo, UIViewModel, VariantChip,
};
