//! Search and category filter controller.
//!
//! [`FilterController`] owns the search box state and the selected category,
//! and derives the visible subset of the grid from them.
//!
//! # Debounce
//!
//! Keystrokes update the displayed input immediately and arm the debounce
//! slot. Validation runs only when the live token fires; each keystroke
//! supersedes the previous token, so the last keystroke wins.
//!
//! ```text
//! "a" ──arm(g1)──┐
//! "ab" ─arm(g2)──┼──▶ fire(g1): stale, ignored
//!                └──▶ fire(g2): validate("ab") → apply
//! ```
//!
//! A failed validation records the error and leaves the active query (and
//! therefore the matched set) as it was.
//!
//! While the view is hidden a pending validation is suspended rather than
//! dropped; [`FilterController::resume`] re-arms it so the box and the
//! active query cannot drift apart.

use super::timers::{TimerKind, TimerSlot, TimerToken};
use super::validator::validate;
use crate::domain::{Catalog, Category, FilterError, Product, ProductId, SearchError};

/// Text state of the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text as typed, shown in the search box.
    pub raw_input: String,
    /// Last successfully validated query; drives filtering.
    pub sanitized_query: String,
    /// Validation error from the most recent applied input.
    pub error: Option<SearchError>,
}

impl SearchState {
    /// Inline error text, empty when the input is valid.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Result of applying a debounced validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Token was stale or cancelled; nothing changed.
    Superseded,
    /// Query validated and became active.
    Applied,
    /// Validation failed; previous query kept.
    Rejected(SearchError),
}

/// Search box and category filter state.
#[derive(Debug, Clone)]
pub struct FilterController {
    search: SearchState,
    category: Category,
    categories: Vec<Category>,
    debounce: TimerSlot,
    /// A validation was pending when the view was hidden.
    suspended: bool,
}

impl FilterController {
    /// Creates a controller offering the catalog's categories, starting at "All".
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            search: SearchState::default(),
            category: Category::all(),
            categories: catalog.categories().to_vec(),
            debounce: TimerSlot::new(TimerKind::SearchDebounce),
            suspended: false,
        }
    }

    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether a debounced validation is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Selects a category.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownCategory`] if `category` is not offered
    /// by the catalog.
    pub fn set_category(&mut self, category: Category) -> Result<(), FilterError> {
        if !self.categories.contains(&category) {
            return Err(FilterError::UnknownCategory(category.to_string()));
        }
        tracing::debug!(category = %category, "category selected");
        self.category = category;
        Ok(())
    }

    /// Moves the category selection by `step` positions, wrapping around.
    pub fn cycle_category(&mut self, step: isize) {
        let len = self.categories.len();
        if len == 0 {
            return;
        }
        let current = self
            .categories
            .iter()
            .position(|c| c == &self.category)
            .unwrap_or(0);
        let len = len as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.category = self.categories[next].clone();
        tracing::debug!(category = %self.category, "category cycled");
    }

    /// Records a keystroke and arms the debounce.
    ///
    /// The returned token must be scheduled; any earlier token is superseded.
    pub fn set_search_input(&mut self, raw: impl Into<String>) -> TimerToken {
        self.search.raw_input = raw.into();
        self.suspended = false;
        let token = self.debounce.arm();
        tracing::trace!(
            input = %self.search.raw_input,
            generation = token.generation,
            "search input debounced"
        );
        token
    }

    /// Appends a typed character to the raw input.
    pub fn push_char(&mut self, c: char) -> TimerToken {
        let mut raw = std::mem::take(&mut self.search.raw_input);
        raw.push(c);
        self.set_search_input(raw)
    }

    /// Removes the last character of the raw input.
    pub fn pop_char(&mut self) -> TimerToken {
        let mut raw = std::mem::take(&mut self.search.raw_input);
        raw.pop();
        self.set_search_input(raw)
    }

    /// Applies the pending validation if `token` is still live.
    pub fn on_debounce(&mut self, token: TimerToken) -> SearchOutcome {
        if !self.debounce.fire(token) {
            tracing::trace!(generation = token.generation, "stale debounce ignored");
            return SearchOutcome::Superseded;
        }
        self.apply()
    }

    /// Validates the current input immediately, cancelling the debounce.
    pub fn apply_now(&mut self) -> SearchOutcome {
        self.debounce.cancel();
        self.suspended = false;
        self.apply()
    }

    fn apply(&mut self) -> SearchOutcome {
        match validate(&self.search.raw_input) {
            Ok(query) => {
                tracing::debug!(query = %query, "search query applied");
                self.search.sanitized_query = query;
                self.search.error = None;
                SearchOutcome::Applied
            }
            Err(err) => {
                tracing::debug!(error = %err, "search input rejected, keeping previous query");
                self.search.error = Some(err.clone());
                SearchOutcome::Rejected(err)
            }
        }
    }

    /// Clears the search box without validation or debounce.
    pub fn clear_search(&mut self) {
        self.debounce.cancel();
        self.suspended = false;
        self.search = SearchState::default();
        tracing::debug!("search cleared");
    }

    /// Cancels a pending debounce, remembering that the input still needs
    /// validation.
    pub fn suspend(&mut self) {
        if self.debounce.is_armed() {
            self.debounce.cancel();
            self.suspended = true;
            tracing::debug!(input = %self.search.raw_input, "search validation suspended");
        }
    }

    /// Re-arms a validation interrupted by [`suspend`](Self::suspend).
    ///
    /// The returned token must be scheduled.
    pub fn resume(&mut self) -> Option<TimerToken> {
        if !std::mem::take(&mut self.suspended) {
            return None;
        }
        tracing::debug!(input = %self.search.raw_input, "search validation resumed");
        Some(self.debounce.arm())
    }

    /// Whether `product` passes the category and query filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.category.is_all() || product.category == self.category)
            && product.name_matches(&self.search.sanitized_query)
    }

    /// Visible products in `order`, skipping ids unknown to `catalog`.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog, order: &[ProductId]) -> Vec<&'a Product> {
        let _span = tracing::debug_span!(
            "visible_products",
            total = order.len(),
            category = %self.category,
            query_len = self.search.sanitized_query.len()
        )
        .entered();

        order
            .iter()
            .filter_map(|id| catalog.product(*id))
            .filter(|product| self.matches(product))
            .collect()
    }
}
