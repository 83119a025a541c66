//! Event handling and state transition logic.
//!
//! The plugin shim translates Zellij key, visibility and timer events into
//! [`Event`]s; [`handle_event`] mutates [`AppState`] and returns whether a
//! re-render is needed together with the [`Action`]s to execute.
//!
//! ```text
//! Zellij event ─▶ main.rs key map ─▶ Event ─▶ handle_event ─▶ (render?, actions)
//!                                                                     │
//!      Event::TimerFired ◀── TimerQueue ◀── set_timeout ◀── ScheduleTimer
//! ```
//!
//! Navigator contract violations (e.g. a gallery request with the modal
//! closed) are logged at `warn` and ignored; they never reach the user.

use super::actions::Action;
use super::filter::SearchOutcome;
use super::modes::InputMode;
use super::shuffle::{ScheduledTimer, ShuffleStep};
use super::state::AppState;
use super::timers::{TimerKind, TimerToken};
use crate::domain::{NavigatorError, Result};

/// Events delivered to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Grid cursor movement.
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Opens the detail modal for the product under the cursor.
    OpenSelected,

    /// Gives the search box keyboard focus.
    FocusSearch,
    /// Validates the pending input immediately and returns to the grid.
    SubmitSearch,
    /// Returns to the grid; the pending debounce keeps running.
    LeaveSearch,
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character of the search input.
    Backspace,
    /// Empties the search box without validation.
    ClearSearch,

    NextCategory,
    PrevCategory,
    /// Selects the category at a 0-based position in the chip list.
    SelectCategory(usize),

    /// Cycles the highlighted color forward (detail and gallery).
    NextVariant,
    /// Cycles the highlighted color backward (detail and gallery).
    PrevVariant,
    /// Highlights the color at a 0-based index.
    SelectVariant(usize),
    /// Opens the gallery at a 0-based color index.
    OpenGallery(usize),
    /// Returns from the gallery to the detail modal.
    CloseGallery,
    /// Closes the modal, and the gallery within it.
    CloseDetail,

    /// The grid became visible; starts the shuffle and resumes a suspended
    /// search validation.
    ViewShown,
    /// The grid was hidden; stops the shuffle and suspends pending searches.
    ViewHidden,

    /// A scheduled timer is due.
    TimerFired(TimerToken),

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutating `state`.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for failures the shim should log; navigator contract violations
/// are absorbed here and do not produce errors.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorLeft => {
            state.move_cursor_left();
            Ok((true, vec![]))
        }
        Event::CursorRight => {
            state.move_cursor_right();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(product) = state.product_under_cursor().cloned() else {
                tracing::debug!("no product under cursor");
                return Ok((false, vec![]));
            };
            state.navigator.open_detail(product);
            Ok((true, vec![]))
        }

        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Browse;
            if state.filter.apply_now() == SearchOutcome::Applied {
                state.clamp_cursor();
            }
            Ok((true, vec![]))
        }
        Event::LeaveSearch => {
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let token = state.filter.push_char(*c);
            Ok((true, vec![schedule_debounce(state, token)]))
        }
        Event::Backspace => {
            if state.filter.search().raw_input.is_empty() {
                return Ok((false, vec![]));
            }
            let token = state.filter.pop_char();
            Ok((true, vec![schedule_debounce(state, token)]))
        }
        Event::ClearSearch => {
            state.filter.clear_search();
            state.clamp_cursor();
            Ok((true, vec![]))
        }

        Event::NextCategory => {
            state.filter.cycle_category(1);
            state.clamp_cursor();
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            state.filter.cycle_category(-1);
            state.clamp_cursor();
            Ok((true, vec![]))
        }
        Event::SelectCategory(index) => {
            let Some(category) = state.filter.categories().get(*index).cloned() else {
                tracing::debug!(index, "no category at index");
                return Ok((false, vec![]));
            };
            state.filter.set_category(category)?;
            state.clamp_cursor();
            Ok((true, vec![]))
        }

        Event::NextVariant => navigate(state.navigator.next_variant().map(drop)),
        Event::PrevVariant => navigate(state.navigator.prev_variant().map(drop)),
        Event::SelectVariant(index) => navigate(state.navigator.select_variant(*index)),
        Event::OpenGallery(index) => navigate(state.navigator.open_gallery(*index)),
        Event::CloseGallery => {
            state.navigator.close_gallery();
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            state.navigator.close_detail();
            Ok((true, vec![]))
        }

        Event::ViewShown => {
            let mut actions: Vec<Action> = state.shuffle.start().into_iter().map(schedule).collect();
            if let Some(token) = state.filter.resume() {
                actions.push(schedule_debounce(state, token));
            }
            Ok((true, actions))
        }
        Event::ViewHidden => {
            state.shuffle.stop();
            state.filter.suspend();
            Ok((false, vec![]))
        }

        Event::TimerFired(token) => Ok(on_timer(state, *token)),

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn schedule(timer: ScheduledTimer) -> Action {
    Action::ScheduleTimer {
        token: timer.token,
        delay: timer.delay,
    }
}

fn schedule_debounce(state: &AppState, token: TimerToken) -> Action {
    Action::ScheduleTimer {
        token,
        delay: state.debounce_delay,
    }
}

fn navigate(result: std::result::Result<(), NavigatorError>) -> Result<(bool, Vec<Action>)> {
    match result {
        Ok(()) => Ok((true, vec![])),
        Err(err) => {
            tracing::warn!(error = %err, "navigator request ignored");
            Ok((false, vec![]))
        }
    }
}

fn on_timer(state: &mut AppState, token: TimerToken) -> (bool, Vec<Action>) {
    match token.kind {
        TimerKind::SearchDebounce => match state.filter.on_debounce(token) {
            SearchOutcome::Superseded => (false, vec![]),
            SearchOutcome::Applied => {
                state.clamp_cursor();
                (true, vec![])
            }
            SearchOutcome::Rejected(_) => (true, vec![]),
        },
        TimerKind::ShufflePeriod | TimerKind::ShuffleSettle => {
            let anchor = state.product_under_cursor().map(|p| p.id);
            match state.shuffle.on_timer(token) {
                ShuffleStep::Ignored => (false, vec![]),
                ShuffleStep::Skipped(next) => (false, vec![schedule(next)]),
                ShuffleStep::Settling(timers) => (true, timers.into_iter().map(schedule).collect()),
                ShuffleStep::Reordered => {
                    state.focus_product(anchor);
                    (true, vec![])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{StoreInfo, Timings};
    use crate::domain::{Catalog, ProductId};
    use crate::ui::Theme;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> AppState {
        AppState::new(
            Catalog::builtin(),
            Theme::default(),
            StoreInfo::default(),
            Timings::default(),
            ChaCha8Rng::seed_from_u64(21),
        )
    }

    fn tokens(actions: &[Action]) -> Vec<TimerToken> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::ScheduleTimer { token, .. } => Some(*token),
                Action::CloseFocus => None,
            })
            .collect()
    }

    #[test]
    fn typing_schedules_debounce_with_configured_delay() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('p')).unwrap();
        assert!(render);
        assert!(matches!(
            actions.as_slice(),
            [Action::ScheduleTimer { token, delay }]
                if token.kind == TimerKind::SearchDebounce && *delay == Timings::default().search_debounce
        ));
        assert_eq!(state.filter.search().raw_input, "p");
    }

    #[test]
    fn only_last_debounce_applies() {
        let mut state = state();
        let mut scheduled = vec![];
        for c in "tab".chars() {
            let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
            scheduled.extend(tokens(&actions));
        }

        for token in &scheduled[..2] {
            let (render, _) = handle_event(&mut state, &Event::TimerFired(*token)).unwrap();
            assert!(!render);
        }
        assert_eq!(state.filter.search().sanitized_query, "");

        handle_event(&mut state, &Event::TimerFired(scheduled[2])).unwrap();
        assert_eq!(state.filter.search().sanitized_query, "tab");
        assert_eq!(state.visible_products().len(), 1);
    }

    #[test]
    fn backspace_on_empty_input_does_nothing() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_search_flushes_and_returns_to_grid() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "watch".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::SubmitSearch).unwrap();

        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(!state.filter.is_pending());
        assert_eq!(state.product_under_cursor().map(|p| p.id), Some(ProductId(4)));
    }

    #[test]
    fn open_selected_opens_detail_for_cursor_product() {
        let mut state = state();
        handle_event(&mut state, &Event::CursorRight).unwrap();
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(state.navigator.selected_product().map(|p| p.id), Some(ProductId(2)));
        assert_eq!(state.navigator.selected_variant_index(), Some(0));
    }

    #[test]
    fn navigator_violations_are_absorbed() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::OpenGallery(0)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::OpenSelected).unwrap();
        let (render, _) = handle_event(&mut state, &Event::SelectVariant(8)).unwrap();
        assert!(!render);
        assert_eq!(state.navigator.selected_variant_index(), Some(0));
    }

    #[test]
    fn select_category_out_of_range_is_ignored() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::SelectCategory(42)).unwrap();
        assert!(!render);
        assert!(state.filter.category().is_all());

        handle_event(&mut state, &Event::SelectCategory(2)).unwrap();
        assert_eq!(state.filter.category().as_str(), "Computing");
        assert_eq!(state.visible_products().len(), 2);
    }

    #[test]
    fn shuffle_cycle_keeps_cursor_on_same_product() {
        let mut state = state();
        handle_event(&mut state, &Event::CursorRight).unwrap();
        handle_event(&mut state, &Event::CursorRight).unwrap();
        let focused = state.product_under_cursor().map(|p| p.id);

        let (_, actions) = handle_event(&mut state, &Event::ViewShown).unwrap();
        let period = tokens(&actions)[0];
        let (_, actions) = handle_event(&mut state, &Event::TimerFired(period)).unwrap();
        assert!(state.shuffle.is_shuffling());
        assert!(state.compute_viewmodel(40, 120).grid.is_shuffling);

        let settle = tokens(&actions)[0];
        assert_eq!(settle.kind, TimerKind::ShuffleSettle);
        handle_event(&mut state, &Event::TimerFired(settle)).unwrap();

        assert!(!state.shuffle.is_shuffling());
        assert_eq!(state.product_under_cursor().map(|p| p.id), focused);
    }

    #[test]
    fn hiding_view_stops_shuffle_and_debounce() {
        let mut state = state();
        let (_, shown) = handle_event(&mut state, &Event::ViewShown).unwrap();
        let (_, typed) = handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::ViewHidden).unwrap();

        let order = state.shuffle.order().to_vec();
        for token in tokens(&shown).into_iter().chain(tokens(&typed)) {
            let (render, actions) = handle_event(&mut state, &Event::TimerFired(token)).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.shuffle.order(), order.as_slice());
        assert_eq!(state.filter.search().sanitized_query, "");
    }

    #[test]
    fn showing_view_again_revalidates_interrupted_input() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "laptop".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::ViewHidden).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::ViewShown).unwrap();
        let debounce: Vec<TimerToken> = tokens(&actions)
            .into_iter()
            .filter(|t| t.kind == TimerKind::SearchDebounce)
            .collect();
        assert_eq!(debounce.len(), 1);

        handle_event(&mut state, &Event::TimerFired(debounce[0])).unwrap();
        assert_eq!(state.filter.search().sanitized_query, "laptop");
        assert_eq!(state.visible_products().len(), 1);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::{select, Index};

        /// One step of a session: an input event, or one of the timers
        /// scheduled so far firing (in any order, stale or not).
        #[derive(Debug, Clone)]
        enum Step {
            Send(Event),
            Fire(Index),
        }

        fn event_strategy() -> impl Strategy<Value = Event> {
            let simple = select(vec![
                Event::CursorLeft,
                Event::CursorRight,
                Event::CursorUp,
                Event::CursorDown,
                Event::OpenSelected,
                Event::FocusSearch,
                Event::SubmitSearch,
                Event::LeaveSearch,
                Event::Backspace,
                Event::ClearSearch,
                Event::NextCategory,
                Event::PrevCategory,
                Event::NextVariant,
                Event::PrevVariant,
                Event::CloseGallery,
                Event::CloseDetail,
                Event::ViewShown,
                Event::ViewHidden,
            ]);
            prop_oneof![
                4 => simple,
                3 => prop::char::range('a', 'z').prop_map(Event::Char),
                1 => (0usize..8).prop_map(Event::SelectCategory),
                1 => (0usize..5).prop_map(Event::SelectVariant),
                1 => (0usize..5).prop_map(Event::OpenGallery),
            ]
        }

        fn step_strategy() -> impl Strategy<Value = Step> {
            prop_oneof![
                3 => event_strategy().prop_map(Step::Send),
                1 => any::<Index>().prop_map(Step::Fire),
            ]
        }

        fn assert_invariants(state: &AppState) -> std::result::Result<(), TestCaseError> {
            let navigator = &state.navigator;
            prop_assert!(!navigator.is_gallery_open() || navigator.is_detail_open());
            if let Some(selection) = navigator.selection() {
                prop_assert!(selection.variant_index() < selection.variant_count());
            }

            let visible = state.visible_products();
            prop_assert!(visible.is_empty() || state.cursor() < visible.len());
            prop_assert!(visible.iter().all(|product| state.filter.matches(product)));

            let mut order = state.shuffle.order().to_vec();
            order.sort();
            prop_assert_eq!(order, state.catalog.ids());
            Ok(())
        }

        proptest! {
            /// Property: no event sequence reaches an inconsistent state.
            ///
            /// The gallery is never open without the detail modal, the
            /// selected variant and the grid cursor stay in bounds, and the
            /// shuffle only permutes the catalog.
            #[test]
            fn random_sessions_keep_state_consistent(
                seed in any::<u64>(),
                steps in proptest::collection::vec(step_strategy(), 0..120),
            ) {
                let mut state = AppState::new(
                    Catalog::builtin(),
                    Theme::default(),
                    StoreInfo::default(),
                    Timings::default(),
                    ChaCha8Rng::seed_from_u64(seed),
                );
                let mut pending: Vec<TimerToken> = Vec::new();

                for step in steps {
                    let event = match step {
                        Step::Send(event) => event,
                        Step::Fire(index) if !pending.is_empty() => {
                            Event::TimerFired(pending.swap_remove(index.index(pending.len())))
                        }
                        Step::Fire(_) => continue,
                    };
                    let (_, actions) = handle_event(&mut state, &event)
                        .map_err(|e| TestCaseError::fail(e.to_string()))?;
                    pending.extend(tokens(&actions));
                    assert_invariants(&state)?;
                }
            }
        }
    }
}
