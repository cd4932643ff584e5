//! Pieces module - canonical tetromino matrices
//!
//! Each shape is stored in a fixed 4x4 array with an explicit active size
//! (2 for O, 4 for I, 3 for the rest). Only the `size x size` top-left block is
//! meaningful; the rest stays zero. Square matrices are what the
//! transpose-and-flip rotation in [`crate::rotation`] relies on.

use crate::types::{CellValue, PieceKind, EMPTY, MAX_PIECE_SIZE};

/// Backing storage for a piece matrix (rows outer, columns inner)
pub type ShapeCells = [[CellValue; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];

/// A square piece matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: ShapeCells,
    size: usize,
}

impl Shape {
    /// Build a shape from raw cells and an active size.
    ///
    /// Cells outside the active block are zeroed so they can never be
    /// mistaken for filled minos.
    pub fn from_cells(mut cells: ShapeCells, size: usize) -> Self {
        let size = size.min(MAX_PIECE_SIZE);
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if x >= size || y >= size {
                    *cell = EMPTY;
                }
            }
        }
        Self { cells, size }
    }

    /// Canonical spawn matrix for a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        let v = kind.cell_value();
        match kind {
            PieceKind::I => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [v, v, v, v],
                    [0, 0, 0, 0],
                    [0, 0, 0, 0],
                ],
                4,
            ),
            PieceKind::O => Self::from_cells(
                [
                    [v, v, 0, 0],
                    [v, v, 0, 0],
                    [0, 0, 0, 0],
                    [0, 0, 0, 0],
                ],
                2,
            ),
            PieceKind::T => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [v, v, v, 0],
                    [0, v, 0, 0],
                    [0, 0, 0, 0],
                ],
                3,
            ),
            PieceKind::J => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [v, v, v, 0],
                    [0, 0, v, 0],
                    [0, 0, 0, 0],
                ],
                3,
            ),
            PieceKind::L => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [v, v, v, 0],
                    [v, 0, 0, 0],
                    [0, 0, 0, 0],
                ],
                3,
            ),
            PieceKind::S => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [0, v, v, 0],
                    [v, v, 0, 0],
                    [0, 0, 0, 0],
                ],
                3,
            ),
            PieceKind::Z => Self::from_cells(
                [
                    [0, 0, 0, 0],
                    [v, v, 0, 0],
                    [0, v, v, 0],
                    [0, 0, 0, 0],
                ],
                3,
            ),
        }
    }

    /// Side length of the active block (also its width)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (x, y); `EMPTY` outside the active block
    pub fn get(&self, x: usize, y: usize) -> CellValue {
        if x >= self.size || y >= self.size {
            return EMPTY;
        }
        self.cells[y][x]
    }

    pub fn cells(&self) -> &ShapeCells {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut ShapeCells {
        &mut self.cells
    }

    /// Iterate the non-zero cells as `(x, y, value)`
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != EMPTY).then_some((x, y, v))
            })
        })
    }
}

/// Horizontal spawn column that centres `shape` on an arena of `arena_width`
pub fn spawn_x(arena_width: u16, shape: &Shape) -> i32 {
    (arena_width / 2) as i32 - (shape.size() / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_minos_of_its_own_value() {
        for kind in PieceKind::ALL {
            let shape = Shape::for_kind(kind);
            let filled: Vec<_> = shape.filled().collect();
            assert_eq!(filled.len(), 4, "{:?}", kind);
            assert!(filled.iter().all(|&(_, _, v)| v == kind.cell_value()));
        }
    }

    #[test]
    fn sizes_match_catalog() {
        assert_eq!(Shape::for_kind(PieceKind::I).size(), 4);
        assert_eq!(Shape::for_kind(PieceKind::O).size(), 2);
        for kind in [PieceKind::T, PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::Z] {
            assert_eq!(Shape::for_kind(kind).size(), 3);
        }
    }

    #[test]
    fn from_cells_zeroes_outside_active_block() {
        let shape = Shape::from_cells([[9; 4]; 4], 2);
        assert_eq!(shape.get(1, 1), 9);
        assert_eq!(shape.cells()[3][3], EMPTY);
        assert_eq!(shape.get(2, 0), EMPTY);
        assert_eq!(shape.filled().count(), 4);
    }

    #[test]
    fn spawn_x_centres_piece() {
        assert_eq!(spawn_x(10, &Shape::for_kind(PieceKind::O)), 4);
        assert_eq!(spawn_x(10, &Shape::for_kind(PieceKind::I)), 3);
        assert_eq!(spawn_x(12, &Shape::for_kind(PieceKind::T)), 5);
    }
}
