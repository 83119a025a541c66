//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: truncated names, selection flags,
//! highlight ranges, and pre-formatted labels.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Category chips in display order, "All" first.
    pub categories: Vec<CategoryChip>,
    pub grid: GridInfo,
    /// Shown instead of the grid when no product matches.
    pub empty_state: Option<EmptyState>,
    /// Detail modal overlay, when a product is selected.
    pub modal: Option<ModalInfo>,
    /// Full-screen gallery, replacing everything else while open.
    pub gallery: Option<GalleryInfo>,
    pub footer: FooterInfo,
}

/// Store branding and call-to-action.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub store_name: String,
    /// e.g. "Call Now: 092218897".
    pub call_to_action: String,
}

/// Search box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Raw input, or the placeholder when empty.
    pub text: String,
    pub is_placeholder: bool,
    pub is_focused: bool,
    /// Inline validation error.
    pub error: Option<String>,
}

/// One category filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub label: String,
    pub is_selected: bool,
}

/// Product grid section.
#[derive(Debug, Clone)]
pub struct GridInfo {
    /// Section title with the visible count.
    pub title: String,
    /// Grid is dimmed and shows "Refreshing..." while true.
    pub is_shuffling: bool,
    /// Cards per row.
    pub columns: usize,
    /// Cards inside the scroll window, row-major.
    pub cards: Vec<ProductCard>,
}

/// One product card.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub hint: String,
    pub is_selected: bool,
    /// Character ranges of the name matching the active query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty grid message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail modal listing color options.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    /// "{name} - Color Options".
    pub title: String,
    pub variants: Vec<VariantChip>,
    pub price: String,
    /// "Call {phone} to order".
    pub order_hint: String,
}

/// One color option inside the detail modal.
#[derive(Debug, Clone)]
pub struct VariantChip {
    /// 1-based shortcut number.
    pub number: usize,
    pub color: String,
    pub image: String,
    pub is_selected: bool,
}

/// Full-screen variant gallery.
#[derive(Debug, Clone)]
pub struct GalleryInfo {
    pub title: String,
    pub color: String,
    pub image: String,
    /// e.g. "2 / 3".
    pub position: String,
    /// False for single-variant products; arrows are hidden.
    pub can_navigate: bool,
}

/// Footer help bar.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// "name · phone", shown beside the keybindings.
    pub contact: String,
    /// Email, delivery area and support hours.
    pub details: String,
    pub copyright: String,
}
