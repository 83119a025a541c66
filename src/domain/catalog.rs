//! Product catalog fixture.
//!
//! The catalog is the read-only collaborator behind the grid: an ordered
//! product list plus the category labels offered by the filter bar. It is
//! loaded once at plugin start, either from the embedded default fixture or
//! from a TOML file named by the `catalog_file` configuration key.
//!
//! # TOML Format
//!
//! ```toml
//! categories = ["All", "Audio"]
//!
//! [[products]]
//! id = 1
//! name = "Premium Wireless Headphones"
//! category = "Audio"
//! price = "$299.99"
//! image = "products/headphones-black.jpg"
//! variants = [
//!     { color = "Midnight Black", image = "products/headphones-black.jpg" },
//! ]
//! ```

use super::error::CatalogError;
use super::product::{Category, Product, ProductId};
use crate::domain::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../catalog/storefront.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Validated, immutable product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from parts, enforcing the fixture invariants.
    ///
    /// "All" is moved to the front of the category list so the filter bar
    /// always starts with it.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::MissingAllCategory`] if "All" is not listed
    /// - [`CatalogError::DuplicateId`] if two products share an id
    /// - [`CatalogError::NoVariants`] if a product has no variants
    /// - [`CatalogError::UnlistedCategory`] if a product's category is not listed
    pub fn new(
        mut categories: Vec<Category>,
        products: Vec<Product>,
    ) -> std::result::Result<Self, CatalogError> {
        let Some(all_pos) = categories.iter().position(Category::is_all) else {
            return Err(CatalogError::MissingAllCategory);
        };
        let all = categories.remove(all_pos);
        categories.insert(0, all);

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id.0));
            }
            if product.variants.is_empty() {
                return Err(CatalogError::NoVariants(product.id.0));
            }
            if product.category.is_all() || !categories.contains(&product.category) {
                return Err(CatalogError::UnlistedCategory {
                    id: product.id.0,
                    category: product.category.to_string(),
                });
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog validated"
        );

        Ok(Self { categories, products })
    }

    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML, or any validation
    /// error from [`Catalog::new`].
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.categories, file.products)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a catalog error if
    /// its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&contents)?)
    }

    /// The embedded default catalog (six products, five categories).
    ///
    /// # Panics
    ///
    /// Panics if the embedded fixture fails validation (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG).expect("built-in catalog should always validate")
    }

    /// All products in fixture order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category labels, "All" first.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Product ids in fixture order; the initial display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Variant;
    use std::io::Write;

    fn product(id: u32, category: &str, variants: usize) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            category: Category::new(category),
            price: "$1.00".to_string(),
            image: "img.jpg".to_string(),
            variants: (0..variants)
                .map(|i| Variant {
                    color: format!("Color {i}"),
                    image: format!("img-{i}.jpg"),
                })
                .collect(),
        }
    }

    #[test]
    fn builtin_catalog_has_six_products_and_all_first() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.categories()[0].as_str(), "All");
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.products().iter().all(|p| p.variant_count() == 3));
    }

    #[test]
    fn all_category_is_moved_to_front() {
        let catalog = Catalog::new(
            vec![Category::new("Audio"), Category::all()],
            vec![product(1, "Audio", 1)],
        )
        .unwrap();
        assert!(catalog.categories()[0].is_all());
    }

    #[test]
    fn rejects_missing_all_category() {
        let err = Catalog::new(vec![Category::new("Audio")], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingAllCategory));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(
            vec![Category::all(), Category::new("Audio")],
            vec![product(1, "Audio", 1), product(1, "Audio", 2)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_empty_variants() {
        let err = Catalog::new(
            vec![Category::all(), Category::new("Audio")],
            vec![product(7, "Audio", 0)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NoVariants(7)));
    }

    #[test]
    fn rejects_unlisted_category() {
        let err = Catalog::new(vec![Category::all()], vec![product(2, "Garden", 1)]).unwrap_err();
        assert!(matches!(err, CatalogError::UnlistedCategory { id: 2, .. }));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
categories = ["Audio", "All"]

[[products]]
id = 9
name = "Studio Monitor"
category = "Audio"
price = "$99.00"
image = "monitor.jpg"
variants = [{{ color = "Black", image = "monitor.jpg" }}]
"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.ids(), vec![ProductId(9)]);
        assert_eq!(catalog.product(ProductId(9)).unwrap().name, "Studio Monitor");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("categories = [").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
