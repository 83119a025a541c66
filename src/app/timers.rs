//! Cancellable timer tokens and the deadline queue.
//!
//! Zellij timers (`set_timeout`) cannot be cancelled and carry no identity,
//! so cancellation is modelled here. Every timer family owns a [`TimerSlot`];
//! arming the slot bumps its generation and hands out a [`TimerToken`]. A
//! token only fires if its generation is still current, which makes
//! superseded and cancelled timers no-ops.
//!
//! The [`TimerQueue`] is the bridge to the host: the plugin records each
//! scheduled token with its deadline and, on every host wake-up, pops the
//! token with the earliest deadline. One `set_timeout` yields one wake-up.
//!
//! ```text
//! controller.arm() ──▶ Action::ScheduleTimer ──▶ TimerQueue + set_timeout
//!                                                      │
//!      Event::TimerFired(token) ◀── pop on wake ◀──────┘
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Timer family a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Deferred validation of the search input.
    SearchDebounce,
    /// Recurring shuffle tick.
    ShufflePeriod,
    /// Settle delay between the shuffle indicator and the reorder.
    ShuffleSettle,
}

/// Identity of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Generation-counted slot for a single timer family.
///
/// At most one token per slot is live at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    #[must_use]
    pub const fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            armed: false,
        }
    }

    /// Arms the slot, superseding any previously issued token.
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Cancels the live token, if any.
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    /// Consumes `token` if it is the live one.
    ///
    /// Returns `false` for stale, cancelled, or foreign tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed && token.kind == self.kind && token.generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Deadline-ordered queue of scheduled tokens.
///
/// Deadlines are offsets from an arbitrary origin chosen by the host (the
/// plugin uses the instant it was loaded).
#[derive(Debug, Default, Clone)]
pub struct TimerQueue {
    pending: BinaryHeap<Reverse<(Duration, u64, TimerToken)>>,
    sequence: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token` as due at `now + delay`.
    pub fn schedule(&mut self, token: TimerToken, now: Duration, delay: Duration) {
        self.sequence += 1;
        self.pending
            .push(Reverse((now + delay, self.sequence, token)));
    }

    /// Returns the token to fire for one host wake-up.
    ///
    /// Each wake-up answers exactly one scheduled timeout, and host timers
    /// fire in deadline order, so the earliest token is the one that woke.
    /// Ties go to the token scheduled first.
    pub fn on_wake(&mut self) -> Option<TimerToken> {
        self.pending.pop().map(|Reverse((_, _, token))| token)
    }

    /// Number of scheduled tokens not yet delivered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn rearming_supersedes_previous_token() {
        let mut slot = TimerSlot::new(TimerKind::SearchDebounce);
        let first = slot.arm();
        let second = slot.arm();

        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.fire(second), "a token fires at most once");
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut slot = TimerSlot::new(TimerKind::ShuffleSettle);
        let token = slot.arm();
        slot.cancel();
        assert!(!slot.is_armed());
        assert!(!slot.fire(token));
    }

    #[test]
    fn foreign_kind_is_rejected() {
        let mut debounce = TimerSlot::new(TimerKind::SearchDebounce);
        let mut period = TimerSlot::new(TimerKind::ShufflePeriod);
        let _ = debounce.arm();
        let period_token = period.arm();
        assert!(!debounce.fire(period_token));
    }

    #[test]
    fn wakes_deliver_tokens_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let late = TimerToken { kind: TimerKind::ShufflePeriod, generation: 1 };
        let early = TimerToken { kind: TimerKind::SearchDebounce, generation: 4 };
        queue.schedule(late, ms(0), ms(8_000));
        queue.schedule(early, ms(100), ms(300));

        assert_eq!(queue.on_wake(), Some(early));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.on_wake(), Some(late));
        assert!(queue.is_empty());
        assert_eq!(queue.on_wake(), None);
    }

    #[test]
    fn simultaneous_deadlines_fire_one_per_wake() {
        let mut queue = TimerQueue::new();
        let first = TimerToken { kind: TimerKind::SearchDebounce, generation: 1 };
        let second = TimerToken { kind: TimerKind::SearchDebounce, generation: 2 };
        let later = TimerToken { kind: TimerKind::SearchDebounce, generation: 3 };
        queue.schedule(first, ms(0), ms(300));
        queue.schedule(second, ms(0), ms(300));
        queue.schedule(later, ms(100), ms(300));

        assert_eq!(queue.on_wake(), Some(first));
        assert_eq!(queue.on_wake(), Some(second));
        assert_eq!(queue.len(), 1, "a later deadline is not released early");
        assert_eq!(queue.on_wake(), Some(later));
    }
}
