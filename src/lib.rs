// src/lib.rs

//! Static chess position evaluation.
//!
//! The crate scores a legal position from the side to move's perspective in
//! centipawns. Scores are tapered (middlegame, endgame) pairs packed into a
//! single integer, blended by remaining material at the end of evaluation.
//! Pawn-structure and king-shelter subtotals are memoized in an optional
//! pawn-king cache keyed by a pawn-and-king-only Zobrist hash.

pub mod eval;
pub mod game;

pub use eval::pktable::PawnKingTable;
pub use eval::{evaluate, Score};
pub use game::board::Position;
pub use game::io::position_from_fen;
