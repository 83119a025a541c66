//! Application state and view model computation.
//!
//! [`AppState`] composes the storefront's controllers: the filter controller
//! (search box and category), the shuffle scheduler (display order), and the
//! detail/gallery navigator. It also owns the grid cursor, which the keyboard
//! uses in place of clicking a card.
//!
//! # Derived State
//!
//! The visible grid is never stored. It is recomputed from the scheduler's
//! display order and the filter on demand, so a reorder and a filter change
//! compose without bookkeeping. Only the cursor must be kept consistent: it
//! is clamped whenever the visible list may have shrunk, and after a reorder
//! it follows the product it was on.
//!
//! # Example
//!
//! ```rust
//! use storefront::app::{AppState, StoreInfo, Timings};
//! use storefront::domain::Catalog;
//! use storefront::ui::Theme;
//! use rand::SeedableRng;
//!
//! let rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let state = AppState::new(
//!     Catalog::builtin(),
//!     Theme::default(),
//!     StoreInfo::default(),
//!     Timings::default(),
//!     rng,
//! );
//! assert_eq!(state.visible_products().len(), 6);
//! let viewmodel = state.compute_viewmodel(40, 120);
//! assert_eq!(viewmodel.grid.title, "Featured Products (6)");
//! ```

use super::filter::FilterController;
use super::modes::InputMode;
use super::navigator::{ModalView, Navigator, Selection};
use super::shuffle::{ShuffleScheduler, DEFAULT_SETTLE_DELAY, DEFAULT_SHUFFLE_PERIOD};
use crate::domain::{Catalog, Product, ProductId};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CategoryChip, EmptyState, FooterInfo, GalleryInfo, GridInfo, HeaderInfo, ModalInfo,
    ProductCard, SearchBarInfo, UIViewModel, VariantChip,
};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Width of one grid card including its border and gutter.
pub const CARD_WIDTH: usize = 30;

/// Height of one grid card including its border.
pub const CARD_HEIGHT: usize = 5;

/// Maximum cards per grid row.
pub const MAX_GRID_COLUMNS: usize = 4;

/// Rows used by everything except the grid: header, search box with its
/// error line, category chips, grid title, store details, footer.
const CHROME_ROWS: usize = 13;

const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Store branding shown in the header, the detail modal and the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Delivery area, e.g. "Available Nationwide".
    pub coverage: String,
    /// Support hours, e.g. "24/7 Support".
    pub hours: String,
    pub copyright_year: u16,
}

impl StoreInfo {
    /// Copyright notice for the footer.
    #[must_use]
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", self.copyright_year, self.name)
    }
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Miftah Store".to_string(),
            phone: "092218897".to_string(),
            email: "info@miftahstore.com".to_string(),
            coverage: "Available Nationwide".to_string(),
            hours: "24/7 Support".to_string(),
            copyright_year: 2024,
        }
    }
}

/// Timer durations, configurable through the plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub shuffle_period: Duration,
    pub shuffle_settle: Duration,
    pub search_debounce: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            shuffle_period: DEFAULT_SHUFFLE_PERIOD,
            shuffle_settle: DEFAULT_SETTLE_DELAY,
            search_debounce: Duration::from_millis(300),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub filter: FilterController,
    pub shuffle: ShuffleScheduler,
    pub navigator: Navigator,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub store: StoreInfo,
    pub debounce_delay: Duration,

    /// Index into [`visible_products`](Self::visible_products).
    cursor: usize,

    /// Last known pane width, used for vertical cursor movement.
    viewport_cols: usize,
}

impl AppState {
    /// Creates the initial state: grid in catalog order, category "All",
    /// empty search, modal closed, shuffle stopped.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, store: StoreInfo, timings: Timings, rng: ChaCha8Rng) -> Self {
        let filter = FilterController::new(&catalog);
        let shuffle = ShuffleScheduler::new(catalog.ids(), timings.shuffle_period, timings.shuffle_settle, rng);
        Self {
            catalog,
            filter,
            shuffle,
            navigator: Navigator::new(),
            input_mode: InputMode::Browse,
            theme,
            store,
            debounce_delay: timings.search_debounce,
            cursor: 0,
            viewport_cols: 80,
        }
    }

    /// Products passing the filter, in display order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.visible_products(&self.catalog, self.shuffle.order())
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn product_under_cursor(&self) -> Option<&Product> {
        self.visible_products().get(self.cursor).copied()
    }

    /// Records the pane width so cursor movement matches the rendered grid.
    pub fn set_viewport_cols(&mut self, cols: usize) {
        self.viewport_cols = cols;
    }

    /// Cards per grid row for a pane `cols` wide.
    #[must_use]
    pub fn columns_for(cols: usize) -> usize {
        (cols / CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS)
    }

    #[must_use]
    pub fn grid_columns(&self) -> usize {
        Self::columns_for(self.viewport_cols)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.visible_products().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let columns = self.grid_columns();
        if self.cursor >= columns {
            self.cursor -= columns;
        }
    }

    pub fn move_cursor_down(&mut self) {
        let columns = self.grid_columns();
        let len = self.visible_products().len();
        if self.cursor + columns < len {
            self.cursor += columns;
        } else if self.cursor / columns < len.saturating_sub(1) / columns {
            // Partial last row: land on its last card.
            self.cursor = len - 1;
        }
    }

    /// Keeps the cursor inside the visible list.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_products().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Moves the cursor onto `id` if it is visible, otherwise clamps.
    pub fn focus_product(&mut self, id: Option<ProductId>) {
        let position = id.and_then(|id| self.visible_products().iter().position(|p| p.id == id));
        match position {
            Some(index) => self.cursor = index,
            None => self.clamp_cursor(),
        }
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let visible = self.visible_products();
        let empty_state = visible.is_empty().then(|| EmptyState {
            message: "No products found".to_string(),
            subtitle: "Try a different search or category".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            categories: self.compute_categories(),
            grid: self.compute_grid(&visible, rows, cols),
            empty_state,
            modal: self.compute_modal(),
            gallery: self.compute_gallery(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            store_name: self.store.name.clone(),
            call_to_action: format!("Call Now: {}", self.store.phone),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let search = self.filter.search();
        let is_placeholder = search.raw_input.is_empty();
        SearchBarInfo {
            text: if is_placeholder {
                SEARCH_PLACEHOLDER.to_string()
            } else {
                search.raw_input.clone()
            },
            is_placeholder,
            is_focused: self.input_mode == InputMode::Search,
            error: search.error.as_ref().map(ToString::to_string),
        }
    }

    fn compute_categories(&self) -> Vec<CategoryChip> {
        self.filter
            .categories()
            .iter()
            .map(|category| CategoryChip {
                label: category.to_string(),
                is_selected: category == self.filter.category(),
            })
            .collect()
    }

    /// Scrolls the grid so the cursor row stays inside the window.
    fn compute_grid(&self, visible: &[&Product], rows: usize, cols: usize) -> GridInfo {
        let columns = Self::columns_for(cols);
        let window_rows = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        let cursor_row = self.cursor / columns;
        let first_row = cursor_row.saturating_sub(window_rows - 1);

        let start = (first_row * columns).min(visible.len());
        let end = (start + window_rows * columns).min(visible.len());
        // Box borders, gutter, and one space of padding each side.
        let name_width = CARD_WIDTH.saturating_sub(6);
        let query = &self.filter.search().sanitized_query;

        let cards = visible[start..end]
            .iter()
            .enumerate()
            .map(|(offset, product)| {
                let name = truncate(&product.name, name_width);
                let highlight_ranges = if query.is_empty() {
                    vec![]
                } else {
                    match_ranges(&name, query)
                };
                ProductCard {
                    name,
                    price: product.price.clone(),
                    hint: "Enter for color options".to_string(),
                    is_selected: start + offset == self.cursor,
                    highlight_ranges,
                }
            })
            .collect();

        GridInfo {
            title: format!("Featured Products ({})", visible.len()),
            is_shuffling: self.shuffle.is_shuffling(),
            columns,
            cards,
        }
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        let selection = self.navigator.selection()?;
        let product = &selection.product;
        Some(ModalInfo {
            title: format!("{} - Color Options", product.name),
            variants: product
                .variants
                .iter()
                .enumerate()
                .map(|(index, variant)| VariantChip {
                    number: index + 1,
                    color: variant.color.clone(),
                    image: variant.image.clone(),
                    is_selected: index == selection.variant_index(),
                })
                .collect(),
            price: product.price.clone(),
            order_hint: format!("Call {} to order", self.store.phone),
        })
    }

    fn compute_gallery(&self) -> Option<GalleryInfo> {
        let ModalView::Gallery(selection) = self.navigator.view() else {
            return None;
        };
        let variant = selection.variant()?;
        Some(GalleryInfo {
            title: selection.product.name.clone(),
            color: variant.color.clone(),
            image: variant.image.clone(),
            position: format!("{} / {}", selection.variant_index() + 1, selection.variant_count()),
            can_navigate: selection.variant_count() > 1,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.navigator.view(), self.input_mode) {
            (ModalView::Gallery(selection), _) if Self::single_variant(selection) => "Esc: back to colors",
            (ModalView::Gallery(_), _) => "←/→: previous/next color  Esc: back to colors",
            (ModalView::Detail(_), _) => "←/→ or 1-9: choose color  Enter: view gallery  Esc: close",
            (ModalView::Closed, InputMode::Search) => "Type to search  Enter: apply  Ctrl+u: clear  Esc: back to grid",
            (ModalView::Closed, InputMode::Browse) => {
                "hjkl/arrows: move  Enter: colors  /: search  Tab or 1-9: category  x: clear  q: quit"
            }
        };

        let store = &self.store;
        let details = [store.email.as_str(), store.coverage.as_str(), store.hours.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        FooterInfo {
            keybindings: keybindings.to_string(),
            contact: format!("{} · {}", store.name, store.phone),
            details,
            copyright: store.copyright(),
        }
    }

    fn single_variant(selection: &Selection) -> bool {
        selection.variant_count() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use rand::SeedableRng;

    fn state() -> AppState {
        AppState::new(
            Catalog::builtin(),
            Theme::default(),
            StoreInfo::default(),
            Timings::default(),
            ChaCha8Rng::seed_from_u64(9),
        )
    }

    #[test]
    fn initial_state_shows_whole_catalog_in_order() {
        let state = state();
        let ids: Vec<_> = state.visible_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, state.catalog.ids());
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn cursor_moves_by_rows_and_stays_in_bounds() {
        let mut state = state();
        state.set_viewport_cols(90);
        assert_eq!(state.grid_columns(), 3);

        state.move_cursor_down();
        assert_eq!(state.cursor(), 3);
        state.move_cursor_down();
        assert_eq!(state.cursor(), 3);
        state.move_cursor_right();
        state.move_cursor_right();
        state.move_cursor_right();
        assert_eq!(state.cursor(), 5);
        state.move_cursor_up();
        assert_eq!(state.cursor(), 2);
        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn down_on_partial_last_row_lands_on_last_card() {
        let mut state = state();
        state.set_viewport_cols(120);
        assert_eq!(state.grid_columns(), 4);
        state.move_cursor_right();
        state.move_cursor_right();
        state.move_cursor_right();
        state.move_cursor_down();
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn clamp_after_filter_shrinks_grid() {
        let mut state = state();
        state.set_viewport_cols(200);
        for _ in 0..5 {
            state.move_cursor_right();
        }
        state.filter.set_category(Category::new("Audio")).unwrap();
        state.clamp_cursor();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn focus_product_follows_id() {
        let mut state = state();
        state.shuffle.shuffle_now();
        state.focus_product(Some(ProductId(4)));
        assert_eq!(state.product_under_cursor().map(|p| p.id), Some(ProductId(4)));
    }

    #[test]
    fn viewmodel_reports_empty_state_and_search_error() {
        let mut state = state();
        let token = state.filter.set_search_input("z".repeat(51));
        state.filter.on_debounce(token);
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.search_bar.error.as_deref(), Some("Search query must be less than 50 characters"));
        assert!(vm.empty_state.is_none());

        let token = state.filter.set_search_input("nothing like this");
        state.filter.on_debounce(token);
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No products found");
        assert!(vm.search_bar.error.is_none());
    }

    #[test]
    fn viewmodel_highlights_query_in_card_names() {
        let mut state = state();
        let token = state.filter.set_search_input("wireless");
        state.filter.on_debounce(token);
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.grid.cards.len(), 2);
        assert!(vm.grid.cards.iter().all(|card| !card.highlight_ranges.is_empty()));
    }

    #[test]
    fn viewmodel_modal_and_gallery() {
        let mut state = state();
        let headphones = state.catalog.product(ProductId(1)).cloned().unwrap();
        state.store.phone = "555".to_string();
        state.navigator.open_detail(headphones);
        state.navigator.open_gallery(1).unwrap();

        let vm = state.compute_viewmodel(40, 120);
        let modal = vm.modal.unwrap();
        assert_eq!(modal.title, "Premium Wireless Headphones - Color Options");
        assert_eq!(modal.order_hint, "Call 555 to order");
        assert!(modal.variants[1].is_selected);

        let gallery = vm.gallery.unwrap();
        assert_eq!(gallery.position, "2 / 3");
        assert_eq!(gallery.color, "Pearl White");
        assert!(gallery.can_navigate);
    }

    #[test]
    fn footer_carries_store_contact_details() {
        let mut state = state();
        let footer = state.compute_viewmodel(40, 120).footer;
        assert_eq!(footer.contact, "Miftah Store · 092218897");
        assert_eq!(footer.details, "info@miftahstore.com · Available Nationwide · 24/7 Support");
        assert_eq!(footer.copyright, "© 2024 Miftah Store. All rights reserved.");

        state.store.coverage.clear();
        let footer = state.compute_viewmodel(40, 120).footer;
        assert_eq!(footer.details, "info@miftahstore.com · 24/7 Support");
    }

    #[test]
    fn grid_window_scrolls_to_cursor() {
        let mut state = state();
        state.set_viewport_cols(30);
        for _ in 0..5 {
            state.move_cursor_down();
        }
        let vm = state.compute_viewmodel(CHROME_ROWS + 2 * CARD_HEIGHT, 30);
        assert_eq!(vm.grid.cards.len(), 2);
        assert!(vm.grid.cards[1].is_selected);
    }
}
