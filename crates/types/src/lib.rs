//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the game core, the terminal front-end and the input mapper alike.
//!
//! # Cell values
//!
//! The playfield and piece matrices store small integers:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1..=7 | filled by a piece of the matching [`PieceKind`] |
//!
//! The non-zero value doubles as the colour index used by renderers.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Time between automatic drops |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{GameConfig, PieceKind, RotateDirection};
//!
//! assert_eq!(PieceKind::T.cell_value(), 3);
//! assert_eq!(
//!     RotateDirection::Clockwise.opposite(),
//!     RotateDirection::CounterClockwise
//! );
//!
//! let config = GameConfig { arena_width: 1, ..GameConfig::default() }.validated();
//! assert_eq!(config.arena_width, 4);
//! ```

use std::env;

/// A single matrix cell: 0 is empty, 1..=7 identifies a piece kind.
pub type CellValue = u8;

/// The empty cell value.
pub const EMPTY: CellValue = 0;

/// Side length of the largest tetromino matrix (the I piece).
pub const MAX_PIECE_SIZE: usize = 4;

/// Default playfield width in cells.
pub const DEFAULT_ARENA_WIDTH: u16 = 12;

/// Default playfield height in cells.
pub const DEFAULT_ARENA_HEIGHT: u16 = 20;

/// Smallest accepted playfield side (the I piece must fit).
pub const MIN_ARENA_SIDE: u16 = 4;

/// Largest accepted playfield side.
pub const MAX_ARENA_SIDE: u16 = 64;

/// Frame interval of the terminal game loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default automatic drop interval (one row per second)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Points for the first row cleared in a sweep; each further row in the same
/// sweep is worth double the previous one.
pub const SWEEP_BASE_POINTS: u32 = 10;

/// The seven tetromino piece kinds, in catalog order `IOTJLSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// The non-zero value written into the matrix for this kind.
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.cell_value(), 1);
    /// assert_eq!(PieceKind::Z.cell_value(), 7);
    /// ```
    pub fn cell_value(&self) -> CellValue {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    /// The direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Integer anchor of a piece matrix's top-left corner on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Commands applied to the game state.
///
/// Input handlers produce the movement/rotation commands; the game loop
/// produces `Tick` once per frame with the elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop piece one row (lands it if blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Advance the drop timer by the given milliseconds
    Tick(u32),
}

/// Core-side notifications, drained by the game loop after each command.
///
/// `ScoreChanged` is the feed for score displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece merged into the arena
    Landed {
        kind: PieceKind,
        rows_cleared: u32,
        points: u32,
    },
    /// The score now has this value
    ScoreChanged(u32),
    /// A spawn collided; the arena and score were reset
    GameOver { final_score: u32 },
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub arena_width: u16,
    pub arena_height: u16,
    pub drop_interval_ms: u32,
    /// Seed for piece selection; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Log file for tracing output; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from `TETRIS_*` environment variables.
    ///
    /// Missing or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let arena_width = lookup("TETRIS_ARENA_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .filter(|w| arena_side_ok(*w))
            .unwrap_or(defaults.arena_width);

        let arena_height = lookup("TETRIS_ARENA_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|h| arena_side_ok(*h))
            .unwrap_or(defaults.arena_height);

        let drop_interval_ms = lookup("TETRIS_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms: &u32| *ms > 0)
            .unwrap_or(defaults.drop_interval_ms);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            arena_width,
            arena_height,
            drop_interval_ms,
            seed,
            log_path,
        }
    }

    /// Clamp the arena sides into `MIN_ARENA_SIDE..=MAX_ARENA_SIDE` and the
    /// drop interval to at least 1ms.
    ///
    /// `GameState` is always built from the validated copy.
    pub fn validated(&self) -> Self {
        Self {
            arena_width: self.arena_width.clamp(MIN_ARENA_SIDE, MAX_ARENA_SIDE),
            arena_height: self.arena_height.clamp(MIN_ARENA_SIDE, MAX_ARENA_SIDE),
            drop_interval_ms: self.drop_interval_ms.max(1),
            ..self.clone()
        }
    }
}

fn arena_side_ok(side: u16) -> bool {
    (MIN_ARENA_SIDE..=MAX_ARENA_SIDE).contains(&side)
}
