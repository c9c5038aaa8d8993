//! Host-facing pad
//!
//! [`NumericEntryPad`] owns one [`EntryState`] and replays the effects of
//! every key press to a [`PadHost`]. This is what a form embeds; the form
//! only ever sees committed amounts and the close/done signals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{self, Effect, EntryState};
use crate::keys::Key;

/// Receiver for the pad's outgoing events
///
/// All methods default to no-ops so a host only implements what it needs.
pub trait PadHost {
    /// The committed amount changed
    fn on_change(&mut self, _value: &str) {}

    /// The close key was pressed
    fn on_close(&mut self) {}

    /// The done key was pressed
    fn on_done(&mut self) {}
}

/// Host that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl PadHost for NoopHost {}

type ChangeFn = Box<dyn FnMut(&str)>;
type SignalFn = Box<dyn FnMut()>;

/// Adapts optional closures to [`PadHost`]
#[derive(Default)]
pub struct Callbacks {
    on_change: Option<ChangeFn>,
    on_close: Option<SignalFn>,
    on_done: Option<SignalFn>,
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_done", &self.on_done.is_some())
            .finish()
    }
}

impl Callbacks {
    /// Creates callbacks with no handlers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the change handler
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the close handler
    #[must_use]
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Sets the done handler
    #[must_use]
    pub fn on_done(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }
}

impl PadHost for Callbacks {
    fn on_change(&mut self, value: &str) {
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
    }

    fn on_close(&mut self) {
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    fn on_done(&mut self) {
        if let Some(f) = self.on_done.as_mut() {
            f();
        }
    }
}

/// An event delivered to a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum PadEvent {
    /// `on_change(value)`
    Change(String),
    /// `on_close()`
    Close,
    /// `on_done()`
    Done,
}

/// Host that records every event in order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingHost {
    events: Vec<PadEvent>,
}

impl RecordingHost {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first
    #[must_use]
    pub fn events(&self) -> &[PadEvent] {
        &self.events
    }

    /// Returns the last value passed to `on_change`
    #[must_use]
    pub fn last_change(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            PadEvent::Change(v) => Some(v.as_str()),
            PadEvent::Close | PadEvent::Done => None,
        })
    }

    /// Drops all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PadHost for RecordingHost {
    fn on_change(&mut self, value: &str) {
        self.events.push(PadEvent::Change(value.to_string()));
    }

    fn on_close(&mut self) {
        self.events.push(PadEvent::Close);
    }

    fn on_done(&mut self) {
        self.events.push(PadEvent::Done);
    }
}

/// An amount keypad bound to a host
#[derive(Debug)]
pub struct NumericEntryPad<H: PadHost = NoopHost> {
    state: EntryState,
    host: H,
}

impl Default for NumericEntryPad<NoopHost> {
    fn default() -> Self {
        Self::new(None, NoopHost)
    }
}

impl<H: PadHost> NumericEntryPad<H> {
    /// Mounts a pad, seeded with `initial_amount` or `"-0"`
    #[must_use]
    pub fn new(initial_amount: Option<&str>, host: H) -> Self {
        Self {
            state: core::initialize(initial_amount),
            host,
        }
    }

    /// Feeds one key and replays its effect to the host.
    ///
    /// Returns the effect so front ends can decide whether to redraw.
    pub fn press(&mut self, key: Key) -> Effect {
        let transition = core::press(&self.state, key);
        self.state = transition.state;
        match &transition.effect {
            Effect::Notify(value) => self.host.on_change(value),
            Effect::Close => self.host.on_close(),
            Effect::Done => self.host.on_done(),
            Effect::Redraw | Effect::None => {}
        }
        transition.effect
    }

    /// Feeds a sequence of keys
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    /// Re-seeds the pad with an amount coming from the host.
    ///
    /// Discards any pending operation; the host is not notified.
    pub fn set_amount(&mut self, amount: &str) {
        let next = core::apply_external_amount(&self.state, amount);
        if next != self.state {
            debug!(amount, "pad re-seeded by host");
        }
        self.state = next;
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EntryState {
        &self.state
    }

    /// Returns the number being typed
    #[must_use]
    pub fn value(&self) -> &str {
        &self.state.current
    }

    /// Returns the string to render
    #[must_use]
    pub fn display(&self) -> String {
        core::display_string(&self.state)
    }

    /// Returns the host
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unmounts the pad, handing back the host
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
