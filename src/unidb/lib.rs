//! # Unidb Architecture
//!
//! Unidb is an in-memory registry of students and faculty with an
//! interactive console on top. The library holds everything with rules
//! attached; the binary only talks to a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, colors, exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session registry, dispatches on RecordKind      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per action, returns CmdResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs) over Storage (store/)               │
//! │  - RecordStore trait: LinearStore, IndexedStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never reads
//! stdin and never exits the process. "Not found" is a value, not an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per action
//! - [`registry`]: Student and faculty collections and their operations
//! - [`store`]: Storage abstraction and backends
//! - [`model`]: `Student`, `Faculty`, `RecordKind`
//! - [`config`]: Configuration file and directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;
