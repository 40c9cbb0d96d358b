//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`] and
//! [`crate::types::MenuAction`]. Layout-dependent work (which board cell a click
//! lands on) belongs to the view; this crate only reports the screen position.

pub mod map;
pub mod mouse;

pub use tui_pipes_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit};
pub use mouse::{handle_mouse_event, Click};
