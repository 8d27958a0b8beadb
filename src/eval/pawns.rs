// src/eval/pawns.rs

use crate::eval::params::*;
use crate::eval::score::Score;
use crate::eval::trace::trace;
use crate::eval::EvalInfo;
use crate::game::board::masks::{ADJACENT_FILES, PASSED_PAWN_MASKS, PAWN_CONNECTED};
use crate::game::board::rankfile::FILES;
use crate::game::board::{BitBoard, PieceMovement, Position};
use crate::game::defs::{Color, Piece, Square};

/// Scores the pawn structure of `us` into the pawn-king subtotal and fills
/// the passed-pawn set. Always feeds the shared attack maps and the king
/// attack counts first; the structure terms themselves are skipped when the
/// pawn-king cache already holds them.
pub fn evaluate_pawns(ei: &mut EvalInfo, pos: &Position, us: Color) -> Score {
    let them = !us;
    let u = us as usize;
    let t = them as usize;
    let forward: i32 = if us == Color::White { 8 } else { -8 };

    ei.attacked_by2[u] |= ei.pawn_attacks[u] & ei.attacked[u];
    ei.attacked[u] |= ei.pawn_attacks[u];
    ei.attacked_by[u][Piece::Pawn as usize] = ei.pawn_attacks[u];

    let king_attacks = ei.pawn_attacks[u] & ei.king_areas[t];
    ei.king_attacks_count[u] += king_attacks.count();

    // The pawn-king cache holds the rest of the pawn evaluation
    if ei.pk_entry_hit {
        return 0;
    }

    let my_pawns = pos.pieces(us, Piece::Pawn);
    let enemy_pawns = pos.pieces(them, Piece::Pawn);

    let mut pkeval: Score = 0;
    let mut temp_pawns = my_pawns;

    while temp_pawns.any() {
        let sq = temp_pawns.pop_lsb();
        trace!(pawn_value[u] += 1);
        trace!(pawn_psqt[sq.relative_square32(us)][u] += 1);

        debug_assert!(sq.relative_rank(us) >= 1 && sq.relative_rank(us) <= 6);
        let ahead = Square((sq.0 as i32 + forward) as u8);

        let stoppers = enemy_pawns & PASSED_PAWN_MASKS[u][sq.0 as usize];
        let threats = enemy_pawns & PieceMovement::pawn_attacks(us, sq);
        let support = my_pawns & PieceMovement::pawn_attacks(them, sq);
        let push_threats = enemy_pawns & PieceMovement::pawn_attacks(us, ahead);
        let push_support = my_pawns & PieceMovement::pawn_attacks(them, ahead);
        let leftovers = stoppers ^ threats ^ push_threats;

        // Record passers for later evaluation; they carry no pawn term here
        if stoppers.is_empty() {
            ei.passed_pawns |= BitBoard::from_square(sq);
        }

        // A candidate becomes a passer by advancing one square, trading its
        // supporters against the remaining stoppers
        else if leftovers.is_empty() && push_support.count() >= push_threats.count() {
            let flag = (support.count() >= threats.count()) as usize;
            pkeval += PAWN_CANDIDATE_PASSER[flag][sq.relative_rank(us) as usize];
            trace!(pawn_candidate_passer[flag][sq.relative_rank(us) as usize][u] += 1);
        }

        // No own pawn on either adjacent file
        if (ADJACENT_FILES[sq.get_file() as usize] & my_pawns).is_empty() {
            pkeval += PAWN_ISOLATED;
            trace!(pawn_isolated[u] += 1);
        }

        // A later pawn in the scan on the same file: each extra pawn of a
        // stack is charged exactly once
        if (FILES[sq.get_file() as usize] & temp_pawns).any() {
            pkeval += PAWN_STACKED;
            trace!(pawn_stacked[u] += 1);
        }

        // Backward: unsupported and unable to step forward safely
        if (PASSED_PAWN_MASKS[t][sq.0 as usize] & my_pawns).is_empty()
            && ei.pawn_attacks[t].contains(ahead) {
            let flag = (FILES[sq.get_file() as usize] & enemy_pawns).is_empty() as usize;
            pkeval += PAWN_BACKWARDS[flag];
            trace!(pawn_backwards[flag][u] += 1);
        }

        // Connected and not backward
        else if (PAWN_CONNECTED[u][sq.0 as usize] & my_pawns).any() {
            pkeval += PAWN_CONNECTED32[sq.relative_square32(us)];
            trace!(pawn_connected[sq.relative_square32(us)][u] += 1);
        }
    }

    ei.pkeval[u] = pkeval;

    0
}
