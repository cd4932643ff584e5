//! Arena module - the playfield grid
//!
//! The arena is a `width x height` grid of cell values in a flat row-major
//! vector. Its dimensions are fixed at construction; clearing and sweeping
//! mutate the cells in place.
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward, so row
//! 0 is the top of the playfield.

use crate::pieces::Shape;
use crate::types::{CellValue, Position, EMPTY, SWEEP_BASE_POINTS};

/// Outcome of one [`Arena::sweep`] pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    pub rows_cleared: u32,
    pub points: u32,
}

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellValue>,
}

impl Arena {
    /// Create an empty arena
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is inside the arena and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// One row as a slice; `None` if out of bounds
    pub fn row(&self, y: usize) -> Option<&[CellValue]> {
        if y >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&self.cells[y * w..(y + 1) * w])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// True when every cell of row `y` is filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map_or(false, |row| row.iter().all(|&c| c != EMPTY))
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Test a piece at `pos` against the arena.
    ///
    /// Any filled piece cell that lands on a filled arena cell or outside the
    /// arena (any side) is a collision.
    pub fn collide(&self, shape: &Shape, pos: Position) -> bool {
        shape
            .filled()
            .any(|(x, y, _)| !self.is_free(pos.x + x as i32, pos.y + y as i32))
    }

    /// Write the filled cells of `shape` at `pos`.
    ///
    /// Returns false and leaves the arena untouched if the piece collides.
    pub fn merge(&mut self, shape: &Shape, pos: Position) -> bool {
        if self.collide(shape, pos) {
            return false;
        }
        for (x, y, v) in shape.filled() {
            self.set(pos.x + x as i32, pos.y + y as i32, v);
        }
        true
    }

    /// Remove every full row and award points.
    ///
    /// Rows are scanned bottom-up, stopping before row 0. A cleared row is
    /// removed, the rows above shift down by one, an empty row appears at the
    /// top, and the same index is checked again so stacked full rows all go in
    /// one pass. Each further row cleared in the pass is worth double the last.
    pub fn sweep(&mut self) -> SweepResult {
        let width = self.width as usize;
        let mut result = SweepResult::default();
        if width == 0 {
            return result;
        }
        let mut row_points = SWEEP_BASE_POINTS;

        let mut y = self.height as usize;
        while y > 1 {
            y -= 1;
            if !self.is_row_full(y) {
                continue;
            }

            // Shift rows 0..y down by one, overwriting row y.
            self.cells.copy_within(0..y * width, width);
            self.cells[..width].fill(EMPTY);

            result.rows_cleared += 1;
            result.points = result.points.saturating_add(row_points);
            row_points = row_points.saturating_mul(2);

            // Re-examine the same index.
            y += 1;
        }

        result
    }

    /// Copy cells into `out`, reusing its allocation
    pub fn write_cells(&self, out: &mut Vec<CellValue>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn index_calculation() {
        let arena = Arena::new(10, 20);
        assert_eq!(arena.index(0, 0), Some(0));
        assert_eq!(arena.index(9, 0), Some(9));
        assert_eq!(arena.index(0, 1), Some(10));
        assert_eq!(arena.index(9, 19), Some(199));
        assert_eq!(arena.index(-1, 0), None);
        assert_eq!(arena.index(10, 0), None);
        assert_eq!(arena.index(0, 20), None);
    }

    #[test]
    fn sweep_ignores_top_row() {
        let mut arena = Arena::new(4, 4);
        for x in 0..4 {
            arena.set(x, 0, 1);
        }
        assert_eq!(arena.sweep(), SweepResult::default());
        assert!(arena.is_row_full(0));
    }

    #[test]
    fn sweep_handles_adjacent_full_rows() {
        let mut arena = Arena::new(3, 5);
        for y in 2..5 {
            for x in 0..3 {
                arena.set(x, y, 5);
            }
        }
        arena.set(1, 1, 2);

        let result = arena.sweep();
        assert_eq!(result.rows_cleared, 3);
        assert_eq!(result.points, 10 + 20 + 40);
        // The lone cell from row 1 fell three rows.
        assert_eq!(arena.get(1, 4), Some(2));
        assert_eq!(arena.cells().iter().filter(|&&c| c != EMPTY).count(), 1);
    }

    #[test]
    fn merge_rejects_colliding_piece_without_writing() {
        let mut arena = Arena::new(4, 4);
        arena.set(1, 1, 7);
        let shape = Shape::for_kind(PieceKind::O);
        assert!(!arena.merge(&shape, Position::new(0, 0)));
        assert_eq!(arena.get(0, 0), Some(EMPTY));
        assert_eq!(arena.get(1, 1), Some(7));
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let mut arena = Arena::new(3, 2);
        arena.set(1, 0, 1);
        arena.set(0, 1, 2);
        arena.set(2, 1, 3);
        let rows: Vec<Vec<CellValue>> = arena.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 0], vec![2, 0, 3]]);
    }
}
