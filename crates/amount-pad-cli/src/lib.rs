//! amount-pad CLI library
//!
//! Command-line front end for the [`amount_pad`] keypad: replay key scripts,
//! drive the pad from a terminal, and print the keypad layout.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod logging;
mod output;
pub mod replay;

pub use commands::{Cli, ColorArg, Commands, InteractiveArgs, ReplayArgs, ReplayFormat};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_json, render_layout, render_text, ReplayReport};
