//! Draw-command emission for display surfaces.
//!
//! A frame is the arena's filled cells followed by the active piece overlay,
//! each reported as "fill cell (x, y) with value v". Empty cells are skipped;
//! surfaces are expected to clear themselves before painting.

use crate::snapshot::GameSnapshot;
use crate::types::{CellValue, EMPTY};

/// A surface addressable in unit cells
pub trait CellPainter {
    fn fill_cell(&mut self, x: i32, y: i32, value: CellValue);
}

impl<F: FnMut(i32, i32, CellValue)> CellPainter for F {
    fn fill_cell(&mut self, x: i32, y: i32, value: CellValue) {
        self(x, y, value)
    }
}

/// Paint one frame: arena first, then the active piece on top.
pub fn paint<P: CellPainter + ?Sized>(snap: &GameSnapshot, painter: &mut P) {
    let width = snap.width.max(1) as usize;
    for (i, &value) in snap.arena.iter().enumerate() {
        if value != EMPTY {
            painter.fill_cell((i % width) as i32, (i / width) as i32, value);
        }
    }

    if let Some(active) = snap.active {
        for (x, y, value) in active.shape.filled() {
            painter.fill_cell(
                active.position.x + x as i32,
                active.position.y + y as i32,
                value,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::types::{GameConfig, PieceKind};

    #[test]
    fn arena_cells_come_before_piece_cells() {
        let config = GameConfig {
            arena_width: 10,
            arena_height: 20,
            seed: Some(3),
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config);
        state.spawn_piece(PieceKind::O);
        state.arena_mut().set(9, 19, 6);

        let mut calls = Vec::new();
        paint(&state.snapshot(), &mut |x, y, v| calls.push((x, y, v)));

        assert_eq!(
            calls,
            vec![(9, 19, 6), (4, 0, 2), (5, 0, 2), (4, 1, 2), (5, 1, 2)]
        );
    }
}
