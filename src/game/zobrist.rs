// src/game/zobrist.rs

use std::sync::OnceLock;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::game::defs::{Color, Piece, Square};

// Fixed seed so pawn-king hashes are stable across runs and threads.
const PK_SEED: u64 = 0x9D39_247E_3377_6D41;

pub static PK_KEYS: OnceLock<PawnKingKeys> = OnceLock::new();

#[inline]
pub fn pk_keys() -> &'static PawnKingKeys {
    PK_KEYS.get_or_init(|| PawnKingKeys::new_with_seed(PK_SEED))
}

/// Zobrist keys covering only pawn and king placement, the inputs of the
/// cached pawn-structure and king-shelter evaluation.
pub struct PawnKingKeys {
    pawns: [[u64; 64]; 2],
    kings: [[u64; 64]; 2],
}

impl PawnKingKeys {
    fn new_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut pawns = [[0u64; 64]; 2];
        for c in 0..2 {
            for s in 0..64 {
                pawns[c][s] = rng.next_u64();
            }
        }

        let mut kings = [[0u64; 64]; 2];
        for c in 0..2 {
            for s in 0..64 {
                kings[c][s] = rng.next_u64();
            }
        }

        Self { pawns, kings }
    }

    /// Key for a placement; zero for pieces outside the pawn-king hash, so
    /// callers may xor unconditionally.
    #[inline]
    pub fn piece_key(&self, c: Color, p: Piece, sq: Square) -> u64 {
        match p {
            Piece::Pawn => self.pawns[c as usize][sq.0 as usize],
            Piece::King => self.kings[c as usize][sq.0 as usize],
            _ => 0,
        }
    }
}
