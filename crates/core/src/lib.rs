//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else. It does no I/O and
//! knows nothing about terminals, so it can run headless in tests, benchmarks
//! or any front-end.
//!
//! # Module Structure
//!
//! - [`pieces`]: canonical tetromino matrices (the piece catalog)
//! - [`rng`]: uniform random piece selection
//! - [`arena`]: the playfield with collision, merge and row sweeping
//! - [`rotation`]: transpose-and-flip rotation with a horizontal wall-kick search
//! - [`clock`]: automatic drop timer
//! - [`game_state`]: player, commands, landing and game-over handling
//! - [`snapshot`]: frame data handed to renderers
//! - [`draw`]: draw-command emission for display surfaces
//!
//! # Game Rules
//!
//! - Each spawn picks one of the seven pieces uniformly at random
//! - A piece drops one row every drop interval (1000ms by default)
//! - A piece that cannot drop is merged into the arena, full rows are swept,
//!   and the next piece spawns centred on the top row
//! - A sweep awards 10 points for its first row and doubles for every
//!   further row in the same sweep (10, 20, 40, 80)
//! - If a new piece collides on spawn, the arena and score are reset and the
//!   game continues
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::GameState;
//! use arena_tetris_types::{Command, GameConfig};
//!
//! let config = GameConfig { seed: Some(12345), ..GameConfig::default() };
//! let mut game = GameState::new(&config);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::SoftDrop);
//! game.apply(Command::Tick(16));
//!
//! assert_eq!(game.score(), 0);
//! ```

pub mod arena;
pub mod clock;
pub mod draw;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use arena::{Arena, SweepResult};
pub use clock::GameClock;
pub use draw::{paint, CellPainter};
pub use game_state::{DropOutcome, GameState, Player};
pub use pieces::Shape;
pub use rng::PieceRandomizer;
pub use rotation::{rotate, rotate_with_kick, KickSteps};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
