//! Application layer: state, controllers, events and actions.
//!
//! ```text
//! Key/Timer/Visible → Event → handle_event → AppState mutations → Actions
//!                                  ▲                                │
//!                                  └──── TimerFired ◀── TimerQueue ◀┘
//! ```
//!
//! # Modules
//!
//! - [`validator`]: Search input validation
//! - [`filter`]: Search box and category filter with debounce
//! - [`shuffle`]: Periodic reordering of the grid
//! - [`navigator`]: Detail modal and variant gallery state machine
//! - [`timers`]: Generation-counted timer tokens and the deadline queue
//! - [`state`]: [`AppState`] composition and view model computation
//! - [`handler`]: Event processing
//! - [`actions`]: Side effects for the plugin runtime
//! - [`modes`]: Input mode

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod navigator;
pub mod shuffle;
pub mod state;
pub mod timers;
pub mod validator;

pub use actions::Action;
pub use filter::{FilterController, SearchOutcome, SearchState};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Modifiers};
pub use navigator::{ModalView, Navigator, Selection};
pub use shuffle::{ScheduledTimer, ShuffleScheduler, ShuffleStep};
pub use state::{AppState, StoreInfo, Timings};
pub use timers::{TimerKind, TimerQueue, TimerSlot, TimerToken};
pub use validator::validate;
