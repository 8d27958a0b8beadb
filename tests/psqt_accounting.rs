// tests/psqt_accounting.rs
//
// The board keeps `psqtmat` and `pkhash` incrementally; any sequence of piece
// placements and removals must leave them equal to a from-scratch recount.

use basalt::game::defs::squarename::*;
use basalt::game::defs::{Color, Piece};
use basalt::{position_from_fen, Position};

fn assert_derived_consistent(pos: &Position) {
    assert_eq!(pos.psqtmat, pos.psqtmat_from_scratch());
    assert_eq!(pos.pkhash, pos.pkhash_from_scratch());
}

#[test]
fn start_position_sums_cancel() {
    let pos = Position::default();
    assert_eq!(pos.psqtmat, 0);
    assert_derived_consistent(&pos);
}

#[test]
fn psqtmat_tracks_an_opening_sequence() {
    let mut pos = Position::default();

    // 1. e4 e5 2. Nf3 Nc6 3. Bb5
    let moves = [
        (Color::White, Piece::Pawn, E2, E4),
        (Color::Black, Piece::Pawn, E7, E5),
        (Color::White, Piece::Knight, G1, F3),
        (Color::Black, Piece::Knight, B8, C6),
        (Color::White, Piece::Bishop, F1, B5),
    ];

    for (c, p, from, to) in moves {
        pos.clear_piece(c, p, from);
        pos.set_piece(c, p, to);
        assert_derived_consistent(&pos);
    }
}

#[test]
fn psqtmat_tracks_captures_and_promotions() {
    let mut pos = position_from_fen("4k3/P6r/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_derived_consistent(&pos);

    // a7-a8=Q
    pos.clear_piece(Color::White, Piece::Pawn, A7);
    pos.set_piece(Color::White, Piece::Queen, A8);
    assert_derived_consistent(&pos);

    // Rh7-h8 followed by Rh8xa8, removing the fresh queen
    pos.clear_piece(Color::Black, Piece::Rook, H7);
    pos.set_piece(Color::Black, Piece::Rook, H8);
    assert_derived_consistent(&pos);

    pos.clear_piece(Color::Black, Piece::Rook, H8);
    pos.clear_piece(Color::White, Piece::Queen, A8);
    pos.set_piece(Color::Black, Piece::Rook, A8);
    assert_derived_consistent(&pos);
}

#[test]
fn pkhash_ignores_non_pawn_king_pieces() {
    let mut pos = position_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let before = pos.pkhash;

    pos.set_piece(Color::White, Piece::Rook, A1);
    assert_eq!(pos.pkhash, before);
    pos.clear_piece(Color::White, Piece::Rook, A1);

    pos.clear_piece(Color::White, Piece::Pawn, E2);
    assert_ne!(pos.pkhash, before);
    pos.set_piece(Color::White, Piece::Pawn, E2);
    assert_eq!(pos.pkhash, before);
}

#[test]
fn equal_structures_share_a_pkhash() {
    let a = position_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let b = position_from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
    let c = position_from_fen("4k3/8/8/8/8/8/4P3/4K2R w K - 0 1").unwrap();
    assert_eq!(a.pkhash, b.pkhash);
    assert_eq!(a.pkhash, c.pkhash);

    let d = position_from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").unwrap();
    assert_ne!(a.pkhash, d.pkhash);
}
