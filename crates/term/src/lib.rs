//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain framebuffer and
//! [`TerminalRenderer`] flushes only what changed. No widget toolkit.
//!
//! - [`game_view`]: the board, water, cursor, side panel and overlays
//! - [`menu_view`]: main menu and leaderboard screens
//! - [`renderer`]: diffing crossterm backend

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_pipes_core as core;
pub use tui_pipes_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, RecordStatus, Viewport};
pub use menu_view::{MenuState, MenuView};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
