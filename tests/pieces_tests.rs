//! Piece catalog and rotation properties

use classic_tetris::core::{piece_def, random_piece, rotate, Shape, SimpleRng, CATALOG};
use classic_tetris::types::{PieceKind, Rgb, RotateDir};

#[test]
fn test_catalog_matrices() {
    let expected: [(PieceKind, &[&[u8]], &str); 7] = [
        (
            PieceKind::I,
            &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            "#00FFFF",
        ),
        (PieceKind::J, &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]], "#0000FF"),
        (PieceKind::L, &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]], "#FFA500"),
        (PieceKind::O, &[&[1, 1], &[1, 1]], "#FFFF00"),
        (PieceKind::S, &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]], "#00FF00"),
        (PieceKind::T, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]], "#800080"),
        (PieceKind::Z, &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]], "#FF0000"),
    ];

    for (kind, matrix, color) in expected {
        let def = piece_def(kind);
        assert_eq!(def.kind, kind);
        assert_eq!(def.shape, Shape::from_rows(matrix), "{:?}", kind);
        assert_eq!(def.color.to_hex(), color);
    }
}

#[test]
fn test_catalog_order_and_cell_counts() {
    let kinds: Vec<PieceKind> = CATALOG.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, PieceKind::ALL.to_vec());
    for def in CATALOG.iter() {
        assert_eq!(def.shape.cells().len(), 4, "{:?}", def.kind);
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        for dir in [RotateDir::Clockwise, RotateDir::CounterClockwise] {
            let start = piece_def(kind).shape;
            let mut shape = start;
            for _ in 0..4 {
                shape = rotate(&shape, dir);
            }
            assert_eq!(shape, start, "{:?} {:?}", kind, dir);
        }
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in PieceKind::ALL {
        let start = piece_def(kind).shape;
        for dir in [RotateDir::Clockwise, RotateDir::CounterClockwise] {
            let turned = rotate(&start, dir);
            assert_eq!(rotate(&turned, dir.opposite()), start, "{:?} {:?}", kind, dir);
        }
    }
}

#[test]
fn test_rotation_preserves_size_and_cell_count() {
    for kind in PieceKind::ALL {
        let start = piece_def(kind).shape;
        let turned = rotate(&start, RotateDir::Clockwise);
        assert_eq!(turned.size(), start.size());
        assert_eq!(turned.cells().len(), start.cells().len());
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = piece_def(PieceKind::O).shape;
    assert_eq!(rotate(&o, RotateDir::Clockwise), o);
    assert_eq!(rotate(&o, RotateDir::CounterClockwise), o);
}

#[test]
fn test_j_clockwise() {
    let j = piece_def(PieceKind::J).shape;
    let turned = rotate(&j, RotateDir::Clockwise);
    assert_eq!(
        turned,
        Shape::from_rows(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]])
    );
}

#[test]
#[should_panic(expected = "square")]
fn test_non_square_matrix_is_rejected() {
    let _ = Shape::from_rows(&[&[1, 1, 1], &[1, 1]]);
}

#[test]
fn test_random_piece_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(99);
    let mut b = SimpleRng::new(99);
    for _ in 0..50 {
        assert_eq!(random_piece(&mut a).kind, random_piece(&mut b).kind);
    }
}

#[test]
fn test_random_piece_returns_catalog_entries() {
    let mut rng = SimpleRng::new(3);
    for _ in 0..100 {
        let def = random_piece(&mut rng);
        assert!(std::ptr::eq(def, piece_def(def.kind)));
        assert_ne!(def.color, Rgb::new(0, 0, 0));
    }
}
