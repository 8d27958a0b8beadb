// src/eval/tests.rs

use crate::eval::params::*;
use crate::eval::score::score_mg;
use crate::eval::{game_phase, king, passers, pawns, pieces, scale_factor, EvalInfo};
use crate::game::board::{BitBoard, Position};
use crate::game::defs::squarename::*;
use crate::game::defs::Color;
use crate::game::io::position_from_fen;

// Runs the evaluators that precede king safety, in pipeline order.
fn run_through_queens(pos: &Position) -> EvalInfo {
    let mut ei = EvalInfo::new(pos, None);
    pawns::evaluate_pawns(&mut ei, pos, Color::White);
    pawns::evaluate_pawns(&mut ei, pos, Color::Black);
    pieces::evaluate_knights(&mut ei, pos, Color::White);
    pieces::evaluate_knights(&mut ei, pos, Color::Black);
    pieces::evaluate_bishops(&mut ei, pos, Color::White);
    pieces::evaluate_bishops(&mut ei, pos, Color::Black);
    pieces::evaluate_rooks(&mut ei, pos, Color::White);
    pieces::evaluate_rooks(&mut ei, pos, Color::Black);
    pieces::evaluate_queens(&mut ei, pos, Color::White);
    pieces::evaluate_queens(&mut ei, pos, Color::Black);
    ei
}

#[test]
fn lone_e6_pawn_is_a_scored_passer() {
    // White pawn e6, kings e4 and e8
    let pos = position_from_fen("4k3/8/4P3/8/4K3/8/8/8 w - - 0 1").unwrap();
    let mut ei = run_through_queens(&pos);
    assert_eq!(ei.passed_pawns, BitBoard::from_square(E6));

    king::evaluate_kings(&mut ei, &pos, Color::White);
    king::evaluate_kings(&mut ei, &pos, Color::Black);

    // e7 is empty but covered by the black king, so the passer advances
    // freely yet not safely; both kings stand two squares away and the
    // promotion path is contested.
    let expected = PASSED_PAWN[1][0][5]
        + 2 * PASSED_FRIENDLY_DISTANCE[5]
        + 2 * PASSED_ENEMY_DISTANCE[5];
    assert_eq!(passers::evaluate_passed_pawns(&mut ei, &pos, Color::White), expected);
    assert_eq!(passers::evaluate_passed_pawns(&mut ei, &pos, Color::Black), 0);
}

#[test]
fn uncontested_passer_gets_the_safe_path_bonus() {
    // Same passer, black king tucked away on a8
    let pos = position_from_fen("k7/8/4P3/8/4K3/8/8/8 w - - 0 1").unwrap();
    let mut ei = run_through_queens(&pos);
    king::evaluate_kings(&mut ei, &pos, Color::White);
    king::evaluate_kings(&mut ei, &pos, Color::Black);

    let expected = PASSED_PAWN[1][1][5]
        + 2 * PASSED_FRIENDLY_DISTANCE[5]
        + 4 * PASSED_ENEMY_DISTANCE[5]
        + PASSED_SAFE_PROMOTION_PATH;
    assert_eq!(passers::evaluate_passed_pawns(&mut ei, &pos, Color::White), expected);
}

#[test]
fn king_safety_penalty_fires_under_a_heavy_attack() {
    // White king g1 under queen h3, bishop d6 and rook h8; quiet white army
    let pos = position_from_fen("4k2r/8/3b4/8/8/7q/PPP5/R5K1 w - - 0 1").unwrap();
    let mut ei = run_through_queens(&pos);

    assert!(ei.king_attackers_count[1] >= 3);
    let white_king = king::evaluate_kings(&mut ei, &pos, Color::White);

    // KingDefenders tops out at +/-32 mg, so anything this deep proves the
    // quadratic safety term fired.
    assert!(
        score_mg(white_king) < -100,
        "king eval mg was {}",
        score_mg(white_king)
    );
}

#[test]
fn candidate_passer_and_isolation_land_in_the_pawn_king_subtotal() {
    // White pawn b5 against black pawn c6: both are candidates, both isolated
    let pos = position_from_fen("6k1/8/2p5/1P6/8/8/8/6K1 w - - 0 1").unwrap();
    let ei = run_through_queens(&pos);

    assert!(ei.passed_pawns.is_empty());
    assert_eq!(ei.pkeval[0], PAWN_CANDIDATE_PASSER[0][4] + PAWN_ISOLATED);
    assert_eq!(ei.pkeval[1], PAWN_CANDIDATE_PASSER[0][2] + PAWN_ISOLATED);
}

#[test]
fn stacked_pawns_charge_once_per_extra_pawn() {
    // Tripled white pawns on the e-file
    let pos = position_from_fen("4k3/8/8/4P3/4P3/4P3/8/4K3 w - - 0 1").unwrap();
    let ei = run_through_queens(&pos);

    // two extras stacked and all three isolated; with no enemy pawns at all
    // every pawn of the stack counts as passed
    let expected = 2 * PAWN_STACKED + 3 * PAWN_ISOLATED;
    assert_eq!(ei.pkeval[0], expected);
    assert_eq!(
        ei.passed_pawns,
        BitBoard::from_square(E3) | BitBoard::from_square(E4) | BitBoard::from_square(E5)
    );
}

#[test]
fn scale_factors_by_material_configuration() {
    let ocb = position_from_fen("8/8/3bk3/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    assert_eq!(scale_factor(&ocb), SCALE_OCB_BISHOPS_ONLY);

    let ocb_knights = position_from_fen("1n2k3/8/3b4/8/8/8/4B3/1N2K3 w - - 0 1").unwrap();
    assert_eq!(scale_factor(&ocb_knights), SCALE_OCB_ONE_KNIGHT);

    let ocb_rooks = position_from_fen("r3k3/8/3b4/8/8/8/4B3/R3K3 w - - 0 1").unwrap();
    assert_eq!(scale_factor(&ocb_rooks), SCALE_OCB_ONE_ROOK);

    // bishops on the same shade scale normally
    let same_shade = position_from_fen("8/8/4k3/8/2b5/8/4B3/4K3 w - - 0 1").unwrap();
    assert_eq!(scale_factor(&same_shade), SCALE_NORMAL);

    // any queen on the board scales normally
    let with_queens = position_from_fen("3qk3/8/3b4/8/8/8/4B3/3QK3 w - - 0 1").unwrap();
    assert_eq!(scale_factor(&with_queens), SCALE_NORMAL);
}

#[test]
fn phase_runs_from_opening_to_bare_kings() {
    assert_eq!(game_phase(&Position::default()), 0);

    let kings = position_from_fen("8/8/8/3k4/8/8/1K6/8 w - - 0 1").unwrap();
    assert_eq!(game_phase(&kings), 256);

    // a single queen each leaves two thirds of the phase on the board
    let queens = position_from_fen("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
    assert_eq!(game_phase(&queens), (16 * 256 + 12) / 24);
}

#[test]
fn mobility_area_excludes_blocked_pawns_and_king() {
    let pos = Position::default();
    let ei = EvalInfo::new(&pos, None);
    // own king square is excluded
    assert!(!ei.mobility_areas[0].contains(E1));
    // squares covered by enemy pawns are out
    assert!(!ei.mobility_areas[0].contains(A6));
    assert!(ei.mobility_areas[0].contains(E4));
}
