//! Domain layer for the storefront plugin.
//!
//! Core types independent of Zellij APIs: the product model, the catalog
//! fixture, and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product, variant and category models
//! - [`catalog`]: Validated catalog fixture loading
//!
//! # Examples
//!
//! ```
//! use storefront::domain::{Catalog, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let laptop = catalog.product(ProductId(2)).unwrap();
//! assert_eq!(laptop.price, "$1,299.99");
//! ```

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{
    CatalogError, FilterError, NavigatorError, Result, SearchError, StorefrontError,
    SEARCH_QUERY_LIMIT,
};
pub use product::{Category, Product, ProductId, Variant};
