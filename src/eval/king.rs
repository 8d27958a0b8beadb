// src/eval/king.rs

use crate::eval::params::*;
use crate::eval::score::{make_score, Score};
use crate::eval::trace::trace;
use crate::eval::EvalInfo;
use crate::game::board::magics::magics;
use crate::game::board::masks::FORWARD_RANKS;
use crate::game::board::rankfile::FILES;
use crate::game::board::{Position, KNIGHT_ATK};
use crate::game::defs::{mirror_file, Color, Piece};

/// King safety and shelter for `us` as the defending side. The safety term
/// needs the finished attack maps of both sides; the shelter and storm terms
/// depend on pawns and kings only and live in the pawn-king subtotal.
pub fn evaluate_kings(ei: &mut EvalInfo, pos: &Position, us: Color) -> Score {
    let them = !us;
    let u = us as usize;
    let t = them as usize;

    let my_pawns = pos.pieces(us, Piece::Pawn);
    let enemy_pawns = pos.pieces(them, Piece::Pawn);
    let enemy_queens = pos.pieces(them, Piece::Queen);

    let my_defenders = my_pawns
        | pos.pieces(us, Piece::Knight)
        | pos.pieces(us, Piece::Bishop);

    let king_sq = ei.king_square[u];
    let king_file = king_sq.get_file();
    let king_rank = king_sq.get_rank();

    trace!(king_value[u] += 1);
    trace!(king_psqt[king_sq.relative_square32(us)][u] += 1);

    let mut eval: Score = 0;

    // Pawns and minors sheltering inside our king area
    let defenders = (my_defenders & ei.king_areas[u]).count();
    eval += KING_DEFENDERS[defenders as usize];
    trace!(king_defenders[defenders as usize][u] += 1);

    // Run the safety model with two attackers, or one attacker while the
    // opponent still has a queen in reserve
    if ei.king_attackers_count[t] > 1 - enemy_queens.count() {

        // Attacked, defended at most once, and held only by our queen or king
        let weak = ei.attacked[t]
            & !ei.attacked_by2[u]
            & (!ei.attacked[u] | ei.attacked_by[u][Piece::Queen as usize] | ei.attacked_by[u][Piece::King as usize]);

        // Squares the attacker may land on: not blocked by their own pieces,
        // and either undefended or weak and doubly attacked
        let safe = !pos.side(them)
            & (!ei.attacked[u] | (weak & ei.attacked_by2[t]));

        let occupied = pos.occupied();
        let knight_threats = KNIGHT_ATK[king_sq.0 as usize];
        let bishop_threats = magics().bishop_attacks(king_sq, occupied);
        let rook_threats = magics().rook_attacks(king_sq, occupied);
        let queen_threats = bishop_threats | rook_threats;

        let knight_checks = knight_threats & safe & ei.attacked_by[t][Piece::Knight as usize];
        let bishop_checks = bishop_threats & safe & ei.attacked_by[t][Piece::Bishop as usize];
        let rook_checks = rook_threats & safe & ei.attacked_by[t][Piece::Rook as usize];
        let queen_checks = queen_threats & safe & ei.attacked_by[t][Piece::Queen as usize];

        let mut count = ei.king_attackers_count[t] * ei.king_attackers_weight[t];

        // The typical king area is nine squares; rescale the raw attack
        // count for zones clipped by the board edge
        count += KS_ATTACK_VALUE * 9 * ei.king_attacks_count[t] / ei.king_areas[u].count()
            + KS_WEAK_SQUARES * (weak & ei.king_areas[u]).count()
            + KS_FRIENDLY_PAWNS * (my_pawns & ei.king_areas[u] & !weak).count()
            + KS_NO_ENEMY_QUEENS * enemy_queens.is_empty() as i32
            + KS_SAFE_QUEEN_CHECK * queen_checks.count()
            + KS_SAFE_ROOK_CHECK * rook_checks.count()
            + KS_SAFE_BISHOP_CHECK * bishop_checks.count()
            + KS_SAFE_KNIGHT_CHECK * knight_checks.count()
            + KS_ADJUSTMENT;

        if count > 0 {
            eval -= make_score(count * count / 720, count / 20);
        }
    }

    // Shelter and storm live in the pawn-king cache
    if ei.pk_entry_hit {
        return eval;
    }

    // Distance 7 marks a file with no pawn at all
    for file in king_file.saturating_sub(1)..=(king_file + 1).min(7) {
        let ours = my_pawns & FILES[file as usize] & FORWARD_RANKS[u][king_rank as usize];
        let our_dist = if ours.is_empty() {
            7
        } else {
            (king_rank as i32 - ours.backmost(us).get_rank() as i32).unsigned_abs() as usize
        };

        let theirs = enemy_pawns & FILES[file as usize] & FORWARD_RANKS[u][king_rank as usize];
        let their_dist = if theirs.is_empty() {
            7
        } else {
            (king_rank as i32 - theirs.backmost(us).get_rank() as i32).unsigned_abs() as usize
        };

        ei.pkeval[u] += KING_SHELTER[(file == king_file) as usize][file as usize][our_dist];
        trace!(king_shelter[(file == king_file) as usize][file as usize][our_dist][u] += 1);

        let blocked = (our_dist != 7 && our_dist + 1 == their_dist) as usize;
        ei.pkeval[u] += KING_STORM[blocked][mirror_file(file) as usize][their_dist];
        trace!(king_storm[blocked][mirror_file(file) as usize][their_dist][u] += 1);
    }

    eval
}
