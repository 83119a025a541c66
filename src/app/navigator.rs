//! Product detail modal and variant gallery state machine.
//!
//! # States
//!
//! ```text
//!            open_detail               open_gallery(i)
//!   Closed ──────────────▶ Detail ─────────────────────▶ Gallery
//!     ▲                     │  ▲                            │
//!     │     close_detail    │  └──────── close_gallery ─────┤
//!     └─────────────────────┴───────────── close_detail ────┘
//! ```
//!
//! The gallery is a nested view of the detail modal, so "gallery open while
//! detail closed" has no representation in [`ModalView`]. Every selection
//! carries a variant index that is kept within `0..variant_count`.

use crate::domain::{NavigatorError, Product, Variant};

/// A selected product with the highlighted variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub product: Product,
    variant_index: usize,
}

impl Selection {
    fn new(product: Product) -> Self {
        Self {
            product,
            variant_index: 0,
        }
    }

    #[must_use]
    pub const fn variant_index(&self) -> usize {
        self.variant_index
    }

    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.product.variant_count()
    }

    /// The highlighted variant.
    #[must_use]
    pub fn variant(&self) -> Option<&Variant> {
        self.product.variants.get(self.variant_index)
    }

    fn check_index(&self, index: usize) -> Result<(), NavigatorError> {
        let count = self.variant_count();
        if index < count {
            Ok(())
        } else {
            Err(NavigatorError::VariantOutOfRange { index, count })
        }
    }
}

/// Which part of the modal is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalView {
    /// No product selected; the grid has focus.
    #[default]
    Closed,
    /// Detail modal listing the product's color options.
    Detail(Selection),
    /// Full-screen gallery over the product's variants.
    Gallery(Selection),
}

/// Detail/gallery navigator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    view: ModalView,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> &ModalView {
        &self.view
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match &self.view {
            ModalView::Closed => None,
            ModalView::Detail(selection) | ModalView::Gallery(selection) => Some(selection),
        }
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selection().map(|s| &s.product)
    }

    #[must_use]
    pub fn selected_variant_index(&self) -> Option<usize> {
        self.selection().map(Selection::variant_index)
    }

    /// True in both the detail and gallery views.
    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        !matches!(self.view, ModalView::Closed)
    }

    #[must_use]
    pub const fn is_gallery_open(&self) -> bool {
        matches!(self.view, ModalView::Gallery(_))
    }

    fn selection_mut(&mut self) -> Result<&mut Selection, NavigatorError> {
        match &mut self.view {
            ModalView::Closed => Err(NavigatorError::NoProductSelected),
            ModalView::Detail(selection) | ModalView::Gallery(selection) => Ok(selection),
        }
    }

    /// Opens the detail view for `product` at its first variant.
    ///
    /// Replaces any current selection, closing the gallery if it was open.
    pub fn open_detail(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, product = %product.name, "detail opened");
        self.view = ModalView::Detail(Selection::new(product));
    }

    /// Closes the modal (and the gallery within it) and clears the selection.
    pub fn close_detail(&mut self) {
        if self.is_detail_open() {
            tracing::debug!("detail closed");
        }
        self.view = ModalView::Closed;
    }

    /// Opens the gallery at `index`.
    ///
    /// # Errors
    ///
    /// - [`NavigatorError::NoProductSelected`] when the modal is closed
    /// - [`NavigatorError::GalleryNotAvailable`] when the gallery is already open
    /// - [`NavigatorError::VariantOutOfRange`] for an invalid index
    pub fn open_gallery(&mut self, index: usize) -> Result<(), NavigatorError> {
        let selection = match std::mem::take(&mut self.view) {
            ModalView::Detail(selection) => selection,
            ModalView::Closed => return Err(NavigatorError::NoProductSelected),
            gallery @ ModalView::Gallery(_) => {
                self.view = gallery;
                return Err(NavigatorError::GalleryNotAvailable);
            }
        };

        if let Err(err) = selection.check_index(index) {
            self.view = ModalView::Detail(selection);
            return Err(err);
        }

        let mut selection = selection;
        selection.variant_index = index;
        tracing::debug!(variant_index = index, "gallery opened");
        self.view = ModalView::Gallery(selection);
        Ok(())
    }

    /// Returns from the gallery to the detail view, keeping the variant index.
    ///
    /// No-op outside the gallery.
    pub fn close_gallery(&mut self) {
        if let ModalView::Gallery(selection) = std::mem::take(&mut self.view) {
            tracing::debug!(variant_index = selection.variant_index, "gallery closed");
            self.view = ModalView::Detail(selection);
        } else {
            tracing::trace!("close_gallery outside gallery ignored");
        }
    }

    /// Moves to the next variant, wrapping from last to first.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::NoProductSelected`] when the modal is closed.
    pub fn next_variant(&mut self) -> Result<usize, NavigatorError> {
        let selection = self.selection_mut()?;
        let count = selection.variant_count();
        if count > 1 {
            selection.variant_index = (selection.variant_index + 1) % count;
        }
        Ok(selection.variant_index)
    }

    /// Moves to the previous variant, wrapping from first to last.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::NoProductSelected`] when the modal is closed.
    pub fn prev_variant(&mut self) -> Result<usize, NavigatorError> {
        let selection = self.selection_mut()?;
        let count = selection.variant_count();
        if count > 1 {
            selection.variant_index = if selection.variant_index == 0 {
                count - 1
            } else {
                selection.variant_index - 1
            };
        }
        Ok(selection.variant_index)
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// - [`NavigatorError::NoProductSelected`] when the modal is closed
    /// - [`NavigatorError::VariantOutOfRange`] for an invalid index
    pub fn select_variant(&mut self, index: usize) -> Result<(), NavigatorError> {
        let selection = self.selection_mut()?;
        selection.check_index(index)?;
        selection.variant_index = index;
        Ok(())
    }
}
