//! Piece catalog, rotation and randomizer tests

use std::collections::HashSet;

use arena_tetris::core::pieces::spawn_x;
use arena_tetris::core::{rotate, PieceRandomizer, Shape};
use arena_tetris::types::{PieceKind, RotateDirection};

#[test]
fn test_catalog_sizes_and_values() {
    for kind in PieceKind::ALL {
        let shape = Shape::for_kind(kind);
        let expected_size = match kind {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        };
        assert_eq!(shape.size(), expected_size, "{kind:?}");

        let filled: Vec<_> = shape.filled().collect();
        assert_eq!(filled.len(), 4, "{kind:?} has four minos");
        assert!(filled.iter().all(|&(_, _, v)| v == kind.cell_value()));
    }
}

#[test]
fn test_cell_values_are_distinct() {
    let values: HashSet<_> = PieceKind::ALL.iter().map(|k| k.cell_value()).collect();
    assert_eq!(values.len(), 7);
    assert!(values.iter().all(|v| (1..=7).contains(v)));
}

#[test]
fn test_i_piece_is_horizontal_on_second_row() {
    let shape = Shape::for_kind(PieceKind::I);
    let cells: Vec<_> = shape.filled().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_rotate_four_times_is_identity() {
    for kind in PieceKind::ALL {
        for direction in [RotateDirection::Clockwise, RotateDirection::CounterClockwise] {
            let original = Shape::for_kind(kind);
            let mut shape = original;
            for _ in 0..4 {
                rotate(&mut shape, direction);
            }
            assert_eq!(shape, original, "{kind:?} {direction:?}");
        }
    }
}

#[test]
fn test_opposite_rotation_undoes() {
    for kind in PieceKind::ALL {
        let original = Shape::for_kind(kind);
        let mut shape = original;
        rotate(&mut shape, RotateDirection::Clockwise);
        rotate(&mut shape, RotateDirection::CounterClockwise);
        assert_eq!(shape, original);
    }
}

#[test]
fn test_rotation_keeps_mino_count() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::for_kind(kind);
        for _ in 0..4 {
            rotate(&mut shape, RotateDirection::CounterClockwise);
            assert_eq!(shape.filled().count(), 4);
            assert_eq!(shape.size(), Shape::for_kind(kind).size());
        }
    }
}

#[test]
fn test_spawn_column_centres_piece() {
    assert_eq!(spawn_x(10, &Shape::for_kind(PieceKind::O)), 4);
    assert_eq!(spawn_x(10, &Shape::for_kind(PieceKind::I)), 3);
    assert_eq!(spawn_x(10, &Shape::for_kind(PieceKind::T)), 4);
    assert_eq!(spawn_x(12, &Shape::for_kind(PieceKind::T)), 5);
}

#[test]
fn test_seeded_randomizer_is_reproducible() {
    let mut a = PieceRandomizer::new(99);
    let mut b = PieceRandomizer::new(99);
    let seq_a: Vec<_> = (0..50).map(|_| a.next_kind()).collect();
    let seq_b: Vec<_> = (0..50).map(|_| b.next_kind()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_randomizer_produces_every_kind() {
    let mut rng = PieceRandomizer::new(3);
    let seen: HashSet<_> = (0..500).map(|_| rng.next_kind()).collect();
    assert_eq!(seen.len(), 7);
}
