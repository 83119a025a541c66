//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the library never calls Zellij APIs
//! itself, which keeps every state transition testable on the host.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storefront::app::{Action, TimerKind, TimerToken};
//!
//! let action = Action::ScheduleTimer {
//!     token: TimerToken { kind: TimerKind::SearchDebounce, generation: 1 },
//!     delay: Duration::from_millis(300),
//! };
//! assert!(matches!(action, Action::ScheduleTimer { .. }));
//! ```

use super::timers::TimerToken;
use std::time::Duration;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses 'q' on the grid.
    CloseFocus,

    /// Asks the host to wake the plugin after `delay`.
    ///
    /// The plugin records the token in its timer queue and feeds it back as
    /// [`Event::TimerFired`](super::Event::TimerFired) once due.
    ScheduleTimer {
        /// Token to deliver when the timer fires.
        token: TimerToken,
        /// Delay from now.
        delay: Duration,
    },
}
