//! Keyboard mirroring
//!
//! Physical keyboards reach the pad through these adapters. Every adapter
//! resolves to the same [`Key`](crate::keys::Key) values the on-screen buttons send, so there is
//! a single code path into the state machine.

mod browser;
#[cfg(feature = "terminal")]
mod terminal;

pub use browser::{browser_key_to_key, KeyboardInput};
#[cfg(feature = "terminal")]
pub use terminal::{InputHandler, TerminalAction};
