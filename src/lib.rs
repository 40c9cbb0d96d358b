//! TUI Pipes (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pipes::{core,input,store,term,types}`
//! and holds the application layer: the screen state machine, configuration and
//! logging setup used by the binary.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_pipes_core as core;
pub use tui_pipes_input as input;
pub use tui_pipes_store as store;
pub use tui_pipes_term as term;
pub use tui_pipes_types as types;
