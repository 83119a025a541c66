//! Periodic reordering of the product grid.
//!
//! The [`ShuffleScheduler`] owns the grid's display order. While running it
//! ticks on a fixed period; each tick raises the `is_shuffling` flag (the
//! grid dims and shows "Refreshing...") and arms a short settle delay, after
//! which the order is replaced by a uniformly random permutation.
//!
//! # Timeline
//!
//! ```text
//!   start        period            period + settle       2·period
//!     │────────────▲──────────────────────▲────────────────────▲──▶
//!                  │ is_shuffling = true  │ shuffle, clear     │
//!                  │ arm settle, re-arm   │                    │
//! ```
//!
//! A tick that arrives while a settle is still pending is skipped, so two
//! reorders never overlap even with configured timings where the settle
//! delay exceeds the period.

use super::timers::{TimerKind, TimerSlot, TimerToken};
use crate::domain::ProductId;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Default interval between shuffle ticks.
pub const DEFAULT_SHUFFLE_PERIOD: Duration = Duration::from_secs(8);

/// Default delay between raising the indicator and reordering.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// A timer the caller must schedule with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub delay: Duration,
}

/// What a timer firing did to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShuffleStep {
    /// Token was stale or the scheduler is stopped.
    Ignored,
    /// A tick started the settle window; the returned timers must be scheduled.
    Settling(Vec<ScheduledTimer>),
    /// A tick arrived mid-settle and was skipped; the period was re-armed.
    Skipped(ScheduledTimer),
    /// The display order was reshuffled.
    Reordered,
}

/// Owner of the grid display order and its shuffle timers.
#[derive(Debug, Clone)]
pub struct ShuffleScheduler {
    order: Vec<ProductId>,
    is_shuffling: bool,
    running: bool,
    period: Duration,
    settle: Duration,
    period_slot: TimerSlot,
    settle_slot: TimerSlot,
    rng: ChaCha8Rng,
}

impl ShuffleScheduler {
    /// Creates a stopped scheduler over `order`.
    #[must_use]
    pub fn new(order: Vec<ProductId>, period: Duration, settle: Duration, rng: ChaCha8Rng) -> Self {
        Self {
            order,
            is_shuffling: false,
            running: false,
            period,
            settle,
            period_slot: TimerSlot::new(TimerKind::ShufflePeriod),
            settle_slot: TimerSlot::new(TimerKind::ShuffleSettle),
            rng,
        }
    }

    /// Current display order.
    #[must_use]
    pub fn order(&self) -> &[ProductId] {
        &self.order
    }

    /// Whether the settle window is open (grid dimmed).
    #[must_use]
    pub const fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Starts ticking. Returns the first period timer, or `None` if already running.
    pub fn start(&mut self) -> Option<ScheduledTimer> {
        if self.running {
            return None;
        }
        self.running = true;
        tracing::debug!(period_ms = self.period.as_millis() as u64, "shuffle scheduler started");
        Some(self.arm_period())
    }

    /// Stops ticking and cancels any pending settle delay.
    ///
    /// Timers already handed to the host become no-ops.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.is_shuffling = false;
        self.period_slot.cancel();
        self.settle_slot.cancel();
        tracing::debug!("shuffle scheduler stopped");
    }

    fn arm_period(&mut self) -> ScheduledTimer {
        ScheduledTimer {
            token: self.period_slot.arm(),
            delay: self.period,
        }
    }

    /// Handles a fired shuffle timer.
    pub fn on_timer(&mut self, token: TimerToken) -> ShuffleStep {
        if !self.running {
            return ShuffleStep::Ignored;
        }

        match token.kind {
            TimerKind::ShufflePeriod => {
                if !self.period_slot.fire(token) {
                    return ShuffleStep::Ignored;
                }
                if self.is_shuffling {
                    tracing::debug!("shuffle tick skipped, previous reorder still settling");
                    return ShuffleStep::Skipped(self.arm_period());
                }
                self.is_shuffling = true;
                let settle = ScheduledTimer {
                    token: self.settle_slot.arm(),
                    delay: self.settle,
                };
                ShuffleStep::Settling(vec![settle, self.arm_period()])
            }
            TimerKind::ShuffleSettle => {
                if !self.settle_slot.fire(token) {
                    return ShuffleStep::Ignored;
                }
                self.shuffle_now();
                ShuffleStep::Reordered
            }
            TimerKind::SearchDebounce => ShuffleStep::Ignored,
        }
    }

    /// Applies a uniform random permutation (Fisher–Yates) and clears the flag.
    pub fn shuffle_now(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.is_shuffling = false;
        tracing::debug!(order = ?self.order, "display order shuffled");
    }
}
