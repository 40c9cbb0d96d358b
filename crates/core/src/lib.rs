//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the pipe puzzle rules: tiles, the board, the water trace,
//! scoring and the leaderboard record rule. It has **no dependencies** on
//! terminal I/O or the filesystem:
//!
//! - **Deterministic**: the same seed generates the same board
//! - **Testable**: every rule is a plain function or method
//! - **Portable**: drives the terminal front end or a headless test equally
//!
//! # Module Structure
//!
//! - [`tile`]: pipe kind + angle, rotation and the per-kind flow table
//! - [`grid`]: `rows x cols` board with fixed Start/End corners
//! - [`flow`]: traces water from Start and reports how it stopped
//! - [`scoring`]: score from board size, time and moves
//! - [`records`]: best score per player and the storage trait
//! - [`game_state`]: one puzzle session (moves, clock, pause, cursor)
//! - [`rng`]: small LCG for reproducible boards
//!
//! # Example
//!
//! ```
//! use tui_pipes_core::GameSession;
//! use tui_pipes_types::GameAction;
//!
//! let mut session = GameSession::new(9, 9, 12345).unwrap();
//! session.apply_action(GameAction::RotateCw);
//! session.tick();
//!
//! assert_eq!(session.moves(), 1);
//! assert!(!session.path().is_empty()); // the Start cell is always wet
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](game_state::GameSession::tick) once per fixed step
//! (60 per second). The clock stops while paused and once solved.

pub mod error;
pub mod flow;
pub mod game_state;
pub mod grid;
pub mod records;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tile;

pub use tui_pipes_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use flow::{trace, trace_into, FlowOutcome, FlowPath, FlowStep};
pub use game_state::GameSession;
pub use grid::{validate_dimensions, Grid};
pub use records::{Leaderboard, MemoryStore, RecordEntry, RecordStore};
pub use rng::SimpleRng;
pub use scoring::{calculate_score, effective_time, effective_turns, elapsed_secs, format_clock};
pub use snapshot::GameSnapshot;
pub use tile::Tile;
