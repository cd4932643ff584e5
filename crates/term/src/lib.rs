//! Terminal rendering module.
//!
//! The game is drawn into a plain framebuffer of styled characters, which the
//! renderer then flushes to the terminal. Keeping the view pure means the
//! drawing code can be tested without a terminal.
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: snapshot to framebuffer (arena, piece, score panel)
//! - [`renderer`]: crossterm output with diff-based redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
