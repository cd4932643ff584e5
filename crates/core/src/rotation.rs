//! Rotation module - matrix rotation and the horizontal wall-kick search
//!
//! Rotation is a transpose of the active block followed by a flip: reversing
//! each row turns the piece clockwise, reversing the row order turns it
//! counter-clockwise. Shapes are square, so the result always fits.
//!
//! When a rotated piece collides, it is nudged sideways with steps of
//! +1, -2, +3, -4, ... until it fits. The search gives up once the next step
//! would exceed the piece width, so at most the columns +1, -1 and +2 from the
//! start are tested.

use crate::arena::Arena;
use crate::pieces::Shape;
use crate::types::{Position, RotateDirection};

/// Rotate a shape 90° in place
pub fn rotate(shape: &mut Shape, direction: RotateDirection) {
    let size = shape.size();
    let cells = shape.cells_mut();

    for y in 0..size {
        for x in 0..y {
            let tmp = cells[x][y];
            cells[x][y] = cells[y][x];
            cells[y][x] = tmp;
        }
    }

    match direction {
        RotateDirection::Clockwise => {
            for row in cells.iter_mut().take(size) {
                row[..size].reverse();
            }
        }
        RotateDirection::CounterClockwise => {
            cells[..size].reverse();
        }
    }
}

/// Horizontal kick steps tried after a colliding rotation.
///
/// Yields relative steps (+1, -2, +3, ...) and stops when the following step
/// would be a positive value larger than `width`.
#[derive(Debug, Clone)]
pub struct KickSteps {
    next: i32,
    width: i32,
    done: bool,
}

impl KickSteps {
    pub fn new(width: usize) -> Self {
        Self {
            next: 1,
            width: width as i32,
            done: false,
        }
    }
}

impl Iterator for KickSteps {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.done {
            return None;
        }
        let step = self.next;
        self.next = -(step + step.signum());
        if self.next > self.width {
            self.done = true;
        }
        Some(step)
    }
}

/// Rotate `shape` and find a nearby column where it fits.
///
/// On success `shape` and `pos` hold the rotated piece and its (possibly
/// kicked) position. On failure the rotation is undone, `pos.x` restored, and
/// false returned.
pub fn rotate_with_kick(
    arena: &Arena,
    shape: &mut Shape,
    pos: &mut Position,
    direction: RotateDirection,
) -> bool {
    let start_x = pos.x;
    rotate(shape, direction);

    let mut steps = KickSteps::new(shape.size());
    while arena.collide(shape, *pos) {
        let Some(step) = steps.next() else {
            break;
        };
        pos.x += step;
        if steps.done {
            break;
        }
    }

    if steps.done {
        rotate(shape, direction.opposite());
        pos.x = start_x;
        tracing::trace!(?direction, "rotation reverted: no kick fits");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn kick_steps_for_common_widths() {
        assert_eq!(KickSteps::new(2).collect::<Vec<_>>(), vec![1, -2]);
        assert_eq!(KickSteps::new(3).collect::<Vec<_>>(), vec![1, -2, 3, -4]);
        assert_eq!(KickSteps::new(4).collect::<Vec<_>>(), vec![1, -2, 3, -4]);
    }

    #[test]
    fn t_piece_rotates_clockwise() {
        let mut shape = Shape::for_kind(PieceKind::T);
        rotate(&mut shape, RotateDirection::Clockwise);
        // 0 0 0      0 3 0
        // 3 3 3  ->  3 3 0
        // 0 3 0      0 3 0
        let expected = Shape::from_cells(
            [
                [0, 3, 0, 0],
                [3, 3, 0, 0],
                [0, 3, 0, 0],
                [0, 0, 0, 0],
            ],
            3,
        );
        assert_eq!(shape, expected);
    }

    #[test]
    fn t_piece_rotates_counter_clockwise() {
        let mut shape = Shape::for_kind(PieceKind::T);
        rotate(&mut shape, RotateDirection::CounterClockwise);
        // 0 0 0      0 3 0
        // 3 3 3  ->  0 3 3
        // 0 3 0      0 3 0
        let expected = Shape::from_cells(
            [
                [0, 3, 0, 0],
                [0, 3, 3, 0],
                [0, 3, 0, 0],
                [0, 0, 0, 0],
            ],
            3,
        );
        assert_eq!(shape, expected);
    }

    #[test]
    fn opposite_rotation_undoes() {
        for kind in PieceKind::ALL {
            let original = Shape::for_kind(kind);
            let mut shape = original;
            rotate(&mut shape, RotateDirection::Clockwise);
            rotate(&mut shape, RotateDirection::CounterClockwise);
            assert_eq!(shape, original, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_without_collision_keeps_position() {
        let arena = Arena::new(10, 20);
        let mut shape = Shape::for_kind(PieceKind::L);
        let mut pos = Position::new(4, 5);
        assert!(rotate_with_kick(&arena, &mut shape, &mut pos, RotateDirection::Clockwise));
        assert_eq!(pos, Position::new(4, 5));
    }
}
