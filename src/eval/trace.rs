// src/eval/trace.rs
//
// Per-term hit counters for offline weight tuning. Every evaluation term
// bumps its counter (by one, or by the multiplicity it was applied with)
// next to the score it contributes. Counters are thread-local; builds
// without the `tuning` feature compile all of this away.

#[cfg(feature = "tuning")]
use std::cell::RefCell;

#[cfg(feature = "tuning")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "tuning")]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvalTrace {
    pub pawn_value: [i32; 2],
    pub knight_value: [i32; 2],
    pub bishop_value: [i32; 2],
    pub rook_value: [i32; 2],
    pub queen_value: [i32; 2],
    pub king_value: [i32; 2],

    pub pawn_psqt: [[i32; 2]; 32],
    pub knight_psqt: [[i32; 2]; 32],
    pub bishop_psqt: [[i32; 2]; 32],
    pub rook_psqt: [[i32; 2]; 32],
    pub queen_psqt: [[i32; 2]; 32],
    pub king_psqt: [[i32; 2]; 32],

    pub pawn_candidate_passer: [[[i32; 2]; 8]; 2],
    pub pawn_isolated: [i32; 2],
    pub pawn_stacked: [i32; 2],
    pub pawn_backwards: [[i32; 2]; 2],
    pub pawn_connected: [[i32; 2]; 32],

    pub knight_outpost: [[i32; 2]; 2],
    pub knight_behind_pawn: [i32; 2],
    pub knight_mobility: [[i32; 2]; 9],

    pub bishop_pair: [i32; 2],
    pub bishop_rammed_pawns: [i32; 2],
    pub bishop_outpost: [[i32; 2]; 2],
    pub bishop_behind_pawn: [i32; 2],
    pub bishop_mobility: [[i32; 2]; 14],

    pub rook_file: [[i32; 2]; 2],
    pub rook_on_seventh: [i32; 2],
    pub rook_mobility: [[i32; 2]; 15],

    pub queen_mobility: [[i32; 2]; 28],

    pub king_defenders: [[i32; 2]; 12],
    pub king_shelter: [[[[i32; 2]; 8]; 8]; 2],
    pub king_storm: [[[[i32; 2]; 8]; 4]; 2],

    pub passed_pawn: [[[[i32; 2]; 8]; 2]; 2],
    pub passed_friendly_distance: [[i32; 2]; 8],
    pub passed_enemy_distance: [[i32; 2]; 8],
    pub passed_safe_promotion_path: [i32; 2],

    pub threat_weak_pawn: [i32; 2],
    pub threat_minor_attacked_by_pawn: [i32; 2],
    pub threat_minor_attacked_by_minor: [i32; 2],
    pub threat_minor_attacked_by_major: [i32; 2],
    pub threat_rook_attacked_by_lesser: [i32; 2],
    pub threat_queen_attacked_by_one: [i32; 2],
    pub threat_overloaded_pieces: [i32; 2],
    pub threat_by_pawn_push: [i32; 2],
}

#[cfg(feature = "tuning")]
thread_local! {
    static TRACE: RefCell<EvalTrace> = RefCell::new(EvalTrace::default());
}

#[cfg(feature = "tuning")]
pub fn with<F: FnOnce(&mut EvalTrace)>(f: F) {
    TRACE.with(|t| f(&mut t.borrow_mut()))
}

#[cfg(feature = "tuning")]
pub fn reset() {
    TRACE.with(|t| *t.borrow_mut() = EvalTrace::default());
}

#[cfg(feature = "tuning")]
pub fn snapshot() -> EvalTrace {
    TRACE.with(|t| t.borrow().clone())
}

#[cfg(feature = "tuning")]
macro_rules! trace {
    ($($term:tt)*) => {
        crate::eval::trace::with(|t| { t.$($term)*; })
    };
}

#[cfg(not(feature = "tuning"))]
macro_rules! trace {
    ($($term:tt)*) => {};
}

pub(crate) use trace;
