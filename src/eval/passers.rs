// src/eval/passers.rs

use crate::eval::params::*;
use crate::eval::score::Score;
use crate::eval::trace::trace;
use crate::eval::EvalInfo;
use crate::game::board::masks::FORWARD_RANKS;
use crate::game::board::rankfile::FILES;
use crate::game::board::{BitBoard, PieceMovement, Position};
use crate::game::defs::{distance_between, Color};

/// Scores the passers collected by the pawn evaluator, once the full attack
/// maps exist to judge how contested the promotion path is.
pub fn evaluate_passed_pawns(ei: &mut EvalInfo, pos: &Position, us: Color) -> Score {
    let them = !us;
    let u = us as usize;
    let t = them as usize;

    let occupied = pos.occupied();
    let mut temp_pawns = pos.side(us) & ei.passed_pawns;

    let mut eval: Score = 0;

    while temp_pawns.any() {
        let sq = temp_pawns.pop_lsb();
        let rank = sq.relative_rank(us) as usize;

        // Rank bonus, split by whether the stop square is free and unattacked
        let stop_square = PieceMovement::pawn_advance(BitBoard::from_square(sq), BitBoard::EMPTY, us);
        let can_advance = (stop_square & occupied).is_empty() as usize;
        let safe_advance = (stop_square & ei.attacked[t]).is_empty() as usize;
        eval += PASSED_PAWN[can_advance][safe_advance][rank];
        trace!(passed_pawn[can_advance][safe_advance][rank][u] += 1);

        // Kings race passers in the endgame
        let dist = distance_between(sq, ei.king_square[u]) as i32;
        eval += dist * PASSED_FRIENDLY_DISTANCE[rank];
        trace!(passed_friendly_distance[rank][u] += dist);

        let dist = distance_between(sq, ei.king_square[t]) as i32;
        eval += dist * PASSED_ENEMY_DISTANCE[rank];
        trace!(passed_enemy_distance[rank][u] += dist);

        // The entire path to promotion is free of enemy influence
        let path = FORWARD_RANKS[u][sq.get_rank() as usize] & FILES[sq.get_file() as usize];
        if (path & ei.attacked[t]).is_empty() {
            eval += PASSED_SAFE_PROMOTION_PATH;
            trace!(passed_safe_promotion_path[u] += 1);
        }
    }

    eval
}
