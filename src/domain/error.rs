//! Error types for the storefront plugin.
//!
//! [`StorefrontError`] is the crate-wide error, with a [`Result`] alias. The
//! narrower enums describe one layer each:
//!
//! - [`SearchError`]: the only user-facing error (search input too long)
//! - [`FilterError`]: category selection outside the catalog's list
//! - [`NavigatorError`]: contract violations from the detail/gallery modal
//! - [`CatalogError`]: fixture loading and validation failures
//!
//! All errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// Maximum number of characters accepted in the search box after trimming.
pub const SEARCH_QUERY_LIMIT: usize = 50;

/// The main error type for storefront operations.
///
/// Errors that abort an operation convert into this type through `#[from]`.
/// Search and navigator errors never do: the filter keeps a rejected query
/// as inline state and the handler discards navigator violations.
///
/// # Examples
///
/// ```
/// use storefront::domain::{FilterError, StorefrontError};
///
/// let err: StorefrontError = FilterError::UnknownCategory("Garden".into()).into();
/// assert_eq!(err.to_string(), "unknown category: Garden");
/// ```
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog fixture could not be loaded or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Category filter update was rejected.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Search input validation failure.
///
/// This is the only error shown to the user; it is rendered inline under the
/// search box while the last valid query stays active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Trimmed input is longer than the allowed number of characters.
    #[error("Search query must be less than {limit} characters")]
    TooLong {
        /// Character limit that was exceeded.
        limit: usize,
    },
}

/// Category filter failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The requested category is not part of the catalog's category list.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Detail/gallery navigation contract violation.
///
/// These indicate a defect in the calling layer; the UI never offers an
/// affordance that produces them. The handler logs and discards them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// A variant operation was invoked with no product selected.
    #[error("no product is selected")]
    NoProductSelected,

    /// Variant index is outside `0..count`.
    #[error("variant index {index} is out of range for {count} variants")]
    VariantOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of variants of the selected product.
        count: usize,
    },

    /// The gallery can only be opened from the detail view.
    #[error("gallery can only be opened from the detail view")]
    GalleryNotAvailable,
}

/// Catalog fixture loading failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// TOML content could not be parsed into a catalog.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two products share the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(u32),

    /// A product has no color variants.
    #[error("product {0} has no variants")]
    NoVariants(u32),

    /// The category list does not contain the "All" entry.
    #[error("category list must include \"All\"")]
    MissingAllCategory,

    /// A product references a category that is not listed.
    #[error("product {id} uses unlisted category {category:?}")]
    UnlistedCategory {
        /// Product id.
        id: u32,
        /// Category label on the product.
        category: String,
    },
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_are_prefixed() {
        let err: StorefrontError = CatalogError::DuplicateId(3).into();
        assert_eq!(err.to_string(), "Catalog error: duplicate product id 3");
    }

    #[test]
    fn search_error_names_the_limit() {
        let err = SearchError::TooLong { limit: SEARCH_QUERY_LIMIT };
        assert_eq!(err.to_string(), "Search query must be less than 50 characters");
    }
}
