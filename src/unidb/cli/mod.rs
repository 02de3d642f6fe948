//! # CLI Layer
//!
//! One possible UI client for unidb, and the only place that knows about
//! the terminal: argument parsing, logging setup, stdin/stdout, colors and
//! exit codes.
//!
//! ## Structure
//!
//! - `commands::run()`: parse args, resolve config, pick a store backend,
//!   start the session
//! - `session`: the menu loop and per-choice handlers
//! - `prompt`: typed line input with re-prompting on malformed numbers
//! - `menu`: menu number to action mapping
//! - `render`: tables, cards, statistics and messages as strings
//! - `setup`: clap definitions

mod commands;
mod menu;
mod prompt;
mod render;
mod session;
mod setup;

pub use commands::run;
