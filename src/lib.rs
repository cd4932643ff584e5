//! Arena Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `arena_tetris::{core,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;
