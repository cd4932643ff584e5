//! Snapshot module - frame data handed to renderers

use crate::pieces::Shape;
use crate::types::{CellValue, PieceKind, Position, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major arena cells (`height * width`)
    pub arena: Vec<CellValue>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub drop_counter_ms: u32,
    pub drop_interval_ms: u32,
    pub started: bool,
}

impl GameSnapshot {
    /// Arena cell at (x, y); `EMPTY` outside the arena
    pub fn cell(&self, x: u16, y: u16) -> CellValue {
        if x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.arena
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(EMPTY)
    }
}
