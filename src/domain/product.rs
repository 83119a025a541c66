//! Product domain model.
//!
//! A [`Product`] is one card in the storefront grid. Each product carries an
//! ordered list of color [`Variant`]s shown in the detail modal and gallery.
//! Image fields are opaque references; the terminal UI only displays them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable product identifier from the catalog fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category label. `"All"` is the distinguished value meaning no filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Label of the category that matches every product.
    pub const ALL: &'static str = "All";

    /// Creates a category from its display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The "All" category.
    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Returns `true` for the "All" category.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A color option of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Display label, e.g. "Midnight Black".
    pub color: String,
    /// Opaque image reference.
    pub image: String,
}

/// A product shown in the grid.
///
/// Products are immutable once the catalog is loaded. `variants` is never
/// empty; [`Catalog`](super::Catalog) rejects fixtures that violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Display-formatted price, e.g. "$1,299.99".
    pub price: String,
    /// Primary image reference used on the grid card.
    pub image: String,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Number of color variants.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// An empty query matches every product.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::domain::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// let headphones = &catalog.products()[0];
    /// assert!(headphones.name_matches("WIRELESS"));
    /// assert!(!headphones.name_matches("tablet"));
    /// ```
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
