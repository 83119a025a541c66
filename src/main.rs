//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the storefront library and Zellij. It maps
//! keys to library events, executes returned actions, and bridges Zellij's
//! uncancellable `set_timeout` to the library's timer tokens.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`,
//!    subscribe to `Key`, `Timer` and `Visible`, start the shuffle
//! 2. **Update**: Translate events, delegate to `handle_event`, run actions
//! 3. **Render**: Record the pane width, delegate to `storefront::ui::render`
//!
//! # Timers
//!
//! Every `Action::ScheduleTimer` is recorded in a [`TimerQueue`] with its
//! deadline and mirrored by a `set_timeout`. Each `Event::Timer` pops the
//! earliest token and replays it as `Event::TimerFired`; superseded tokens
//! are rejected by the library.
//!
//! # Keybindings
//!
//! Gallery: `←/→`, `h/l` (color), `Esc` (back to colors)
//!
//! Detail: `←/→`, `h/l` (color), `1`-`9` (pick color), `Enter` (gallery),
//! `Esc` (close)
//!
//! Search box: characters, `Backspace`, `Ctrl+u` (clear), `Enter` (apply),
//! `Esc` (back to grid)
//!
//! Grid: `hjkl`/arrows (move), `Enter` (color options), `/` (search),
//! `Tab`/`Shift+Tab`, `1`-`9` (category), `x` (clear search), `q` (quit)

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use std::time::{Duration, Instant};
    use zellij_tile::prelude::*;

    use storefront::app::{Modifiers, TimerQueue, TimerToken};
    use storefront::{handle_event, Action, AppState, Config, Event, InputMode};

    /// Plugin state wrapper.
    pub struct State {
        app: AppState,
        timers: TimerQueue,
        /// Origin for timer deadlines.
        loaded_at: Instant,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: storefront::initialize(&Config::default()),
                timers: TimerQueue::new(),
                loaded_at: Instant::now(),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            storefront::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            self.app = storefront::initialize(&config);
            self.loaded_at = Instant::now();

            subscribe(&[EventType::Key, EventType::Timer, EventType::Visible]);
            self.dispatch(&Event::ViewShown);

            tracing::debug!(
                store = %config.store.name,
                products = self.app.catalog.products().len(),
                "plugin load complete"
            );
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::event_name(&event);
            let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

            match event {
                zellij_tile::prelude::Event::Key(key) => {
                    let Some(event) = self.map_key_event(&key) else {
                        return false;
                    };
                    self.dispatch(&event)
                }
                zellij_tile::prelude::Event::Timer(_) => {
                    match self.timers.on_wake() {
                        Some(token) => self.dispatch(&Event::TimerFired(token)),
                        None => false,
                    }
                }
                zellij_tile::prelude::Event::Visible(true) => self.dispatch(&Event::ViewShown),
                zellij_tile::prelude::Event::Visible(false) => self.dispatch(&Event::ViewHidden),
                _ => false,
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.app.set_viewport_cols(cols);
            storefront::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn elapsed(&self) -> Duration {
            self.loaded_at.elapsed()
        }

        /// Runs one library event; returns whether to re-render.
        fn dispatch(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    for action in &actions {
                        self.execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, event = ?event, "error handling event");
                    false
                }
            }
        }

        fn execute_action(&mut self, action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("hiding plugin pane");
                    hide_self();
                }
                Action::ScheduleTimer { token, delay } => self.schedule(*token, *delay),
            }
        }

        fn schedule(&mut self, token: TimerToken, delay: Duration) {
            self.timers.schedule(token, self.elapsed(), delay);
            set_timeout(delay.as_secs_f64());
        }

        fn event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::Timer(elapsed) => format!("Timer({elapsed:.3})"),
                zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
                _ => "Other".to_string(),
            }
        }

        fn digit(c: char) -> Option<usize> {
            c.to_digit(10)
                .filter(|d| (1..=9).contains(d))
                .map(|d| d as usize - 1)
        }

        fn modifiers(key: &KeyWithModifier) -> Modifiers {
            let held = |modifier| key.key_modifiers.contains(&modifier);
            Modifiers {
                ctrl: held(KeyModifier::Ctrl),
                alt: held(KeyModifier::Alt),
                shift: held(KeyModifier::Shift),
                super_key: held(KeyModifier::Super),
            }
        }

        /// Maps a key to a library event for the current context.
        ///
        /// The gallery takes precedence over the detail modal, which takes
        /// precedence over the search box and the grid.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");
            let navigator = &self.app.navigator;

            if navigator.is_gallery_open() {
                return match key.bare_key {
                    BareKey::Left | BareKey::Char('h') => Some(Event::PrevVariant),
                    BareKey::Right | BareKey::Char('l') => Some(Event::NextVariant),
                    BareKey::Esc => Some(Event::CloseGallery),
                    _ => None,
                };
            }

            if navigator.is_detail_open() {
                return match key.bare_key {
                    BareKey::Left | BareKey::Char('h') => Some(Event::PrevVariant),
                    BareKey::Right | BareKey::Char('l') => Some(Event::NextVariant),
                    BareKey::Enter => navigator.selected_variant_index().map(Event::OpenGallery),
                    BareKey::Char(c) => Self::digit(c).map(Event::SelectVariant),
                    BareKey::Esc => Some(Event::CloseDetail),
                    _ => None,
                };
            }

            if self.app.input_mode == InputMode::Search {
                if key.bare_key == BareKey::Char('u') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                    return Some(Event::ClearSearch);
                }
                return match key.bare_key {
                    BareKey::Enter => Some(Event::SubmitSearch),
                    BareKey::Esc => Some(Event::LeaveSearch),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) if Self::modifiers(key).is_typing() => Some(Event::Char(c)),
                    _ => None,
                };
            }

            if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
                return Some(Event::PrevCategory);
            }

            match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Some(Event::CursorLeft),
                BareKey::Right | BareKey::Char('l') => Some(Event::CursorRight),
                BareKey::Up | BareKey::Char('k') => Some(Event::CursorUp),
                BareKey::Down | BareKey::Char('j') => Some(Event::CursorDown),
                BareKey::Enter => Some(Event::OpenSelected),
                BareKey::Char('/') => Some(Event::FocusSearch),
                BareKey::Tab => Some(Event::NextCategory),
                BareKey::Char('x') => Some(Event::ClearSearch),
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Char(c) => Self::digit(c).map(Event::SelectCategory),
                _ => None,
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("storefront is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm in Zellij");
}
