//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`]s. Terminals deliver
//! their own key auto-repeat, so a held key simply produces repeated commands.

pub mod map;

pub use arena_tetris_types as types;

pub use map::{accepts_kind, handle_key_event, should_quit};
