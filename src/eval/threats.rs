// src/eval/threats.rs

use crate::eval::params::*;
use crate::eval::score::Score;
use crate::eval::trace::trace;
use crate::eval::EvalInfo;
use crate::game::board::rankfile::{RANK_3, RANK_6};
use crate::game::board::{PieceMovement, Position};
use crate::game::defs::{Color, Piece};

/// Attack and hanging-piece taxonomy for `us`, plus threats we could create
/// with a safe pawn push. Needs the finished attack maps of both sides.
pub fn evaluate_threats(ei: &mut EvalInfo, pos: &Position, us: Color) -> Score {
    let them = !us;
    let u = us as usize;
    let t = them as usize;
    let rank3_rel = if us == Color::White { RANK_3 } else { RANK_6 };

    let friendly = pos.side(us);
    let enemy = pos.side(them);
    let occupied = friendly | enemy;

    let pawns = pos.pieces(us, Piece::Pawn);
    let knights = pos.pieces(us, Piece::Knight);
    let bishops = pos.pieces(us, Piece::Bishop);
    let rooks = pos.pieces(us, Piece::Rook);
    let queens = pos.pieces(us, Piece::Queen);

    let attacks_by_pawns = ei.attacked_by[t][Piece::Pawn as usize];
    let attacks_by_minors = ei.attacked_by[t][Piece::Knight as usize] | ei.attacked_by[t][Piece::Bishop as usize];
    let attacks_by_majors = ei.attacked_by[t][Piece::Rook as usize] | ei.attacked_by[t][Piece::Queen as usize];

    // Squares with more attackers than defenders and no pawn holding them
    let poorly_defended = (ei.attacked[t] & !ei.attacked[u])
        | (ei.attacked_by2[t] & !ei.attacked_by2[u] & !ei.attacked_by[u][Piece::Pawn as usize]);

    // Attacked and defended exactly once each: capturing the attacker or
    // keeping the defense both cost something
    let overloaded = (knights | bishops | rooks | queens)
        & ei.attacked[u] & !ei.attacked_by2[u]
        & ei.attacked[t] & !ei.attacked_by2[t];

    // Enemy non-pawns we could hit by pushing a pawn one square (or two from
    // the third rank), ignoring pushes that land on a pawn-covered square or
    // one we do not influence at all
    let mut push_threat = PieceMovement::pawn_advance(pawns, occupied, us);
    push_threat |= PieceMovement::pawn_advance(push_threat & !attacks_by_pawns & rank3_rel, occupied, us);
    push_threat &= !attacks_by_pawns & (ei.attacked[u] | !ei.attacked[t]);
    let push_threat = PieceMovement::pawn_attack_span(
        push_threat,
        enemy & !ei.attacked_by[u][Piece::Pawn as usize],
        us,
    );

    let mut eval: Score = 0;

    // Our pawns nobody is holding together
    let count = (pawns & !attacks_by_pawns & poorly_defended).count();
    eval += count * THREAT_WEAK_PAWN;
    trace!(threat_weak_pawn[u] += count);

    // Pawns hitting our minors
    let count = ((knights | bishops) & attacks_by_pawns).count();
    eval += count * THREAT_MINOR_ATTACKED_BY_PAWN;
    trace!(threat_minor_attacked_by_pawn[u] += count);

    // Minor on minor
    let count = ((knights | bishops) & attacks_by_minors).count();
    eval += count * THREAT_MINOR_ATTACKED_BY_MINOR;
    trace!(threat_minor_attacked_by_minor[u] += count);

    // Majors against minors nobody is really defending
    let count = ((knights | bishops) & poorly_defended & attacks_by_majors).count();
    eval += count * THREAT_MINOR_ATTACKED_BY_MAJOR;
    trace!(threat_minor_attacked_by_major[u] += count);

    // Rooks cheaply attacked
    let count = (rooks & (attacks_by_pawns | attacks_by_minors)).count();
    eval += count * THREAT_ROOK_ATTACKED_BY_LESSER;
    trace!(threat_rook_attacked_by_lesser[u] += count);

    // Queens touched by anything
    let count = (queens & ei.attacked[t]).count();
    eval += count * THREAT_QUEEN_ATTACKED_BY_ONE;
    trace!(threat_queen_attacked_by_one[u] += count);

    let count = overloaded.count();
    eval += count * THREAT_OVERLOADED_PIECES;
    trace!(threat_overloaded_pieces[u] += count);

    let count = push_threat.count();
    eval += count * THREAT_BY_PAWN_PUSH;
    trace!(threat_by_pawn_push[u] += count);

    eval
}
