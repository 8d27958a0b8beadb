// src/game/board/position.rs

use std::fmt;
use colored::*;

use crate::eval::psqt::PSQT;
use crate::eval::score::Score;
use crate::game::board::BitBoard;
use crate::game::defs::Piece;
use crate::game::zobrist::pk_keys;
use crate::game::{defs, gamestate};

#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Position {
    pub bb_sides: [BitBoard; 2],
    pub bb_pieces: [[BitBoard; 6]; 2],
    pub state: gamestate::State,
    /// Running sum of PSQT plus material over every piece on the board,
    /// maintained incrementally by `set_piece`/`clear_piece`.
    pub psqtmat: Score,
    /// Zobrist hash over pawn and king placement only.
    pub pkhash: u64,
}

impl Position {
    pub fn side(&self, c: defs::Color) -> BitBoard { self.bb_sides[c as usize] }
    pub fn pieces(&self, c: defs::Color, p: defs::Piece) -> BitBoard { self.bb_pieces[c as usize][p as usize] }
    pub fn occupied(&self) -> BitBoard { BitBoard(self.bb_sides[0].0 | self.bb_sides[1].0) }

    /// An empty board with default game state. Derived sums start at zero.
    pub fn empty() -> Self {
        Self {
            bb_sides: [BitBoard(0); 2],
            bb_pieces: [[BitBoard(0); 6]; 2],
            state: gamestate::State::default(),
            psqtmat: 0,
            pkhash: 0,
        }
    }

    pub fn set_piece(&mut self, c: defs::Color, p: defs::Piece, sq: defs::Square) {
        let bit = 1u64 << sq.0;
        self.bb_pieces[c as usize][p as usize].0 |= bit;
        self.bb_sides[c as usize].0 |= bit;
        self.psqtmat += PSQT[c as usize][p as usize][sq.0 as usize];
        self.pkhash ^= pk_keys().piece_key(c, p, sq);
    }

    pub fn clear_piece(&mut self, c: defs::Color, p: defs::Piece, sq: defs::Square) {
        let bit = 1u64 << sq.0;
        self.bb_pieces[c as usize][p as usize].0 &= !bit;
        self.bb_sides[c as usize].0 &= !bit;
        self.psqtmat -= PSQT[c as usize][p as usize][sq.0 as usize];
        self.pkhash ^= pk_keys().piece_key(c, p, sq);
    }

    pub fn piece_at(&self, sq: defs::Square) -> Option<(defs::Color, defs::Piece)> {
        let bit = 1u64 << sq.0;
        for &c in &[defs::Color::White, defs::Color::Black] {
            for &p in &Piece::ALL {
                if (self.pieces(c, p).0 & bit) != 0 {
                    return Some((c, p));
                }
            }
        }
        None
    }

    /// PSQT plus material summed from scratch; `psqtmat` must always agree.
    pub fn psqtmat_from_scratch(&self) -> Score {
        let mut total = 0;
        for &c in &[defs::Color::White, defs::Color::Black] {
            for &p in &Piece::ALL {
                for sq in self.pieces(c, p) {
                    total += PSQT[c as usize][p as usize][sq.0 as usize];
                }
            }
        }
        total
    }

    pub fn pkhash_from_scratch(&self) -> u64 {
        let mut hash = 0;
        for &c in &[defs::Color::White, defs::Color::Black] {
            for &p in &[Piece::Pawn, Piece::King] {
                for sq in self.pieces(c, p) {
                    hash ^= pk_keys().piece_key(c, p, sq);
                }
            }
        }
        hash
    }

    /// Rebuilds the derived sums after the bitboards were edited directly.
    pub fn refresh_derived(&mut self) {
        self.psqtmat = self.psqtmat_from_scratch();
        self.pkhash = self.pkhash_from_scratch();
    }
}

impl Default for Position {
    fn default() -> Self {
        let mut pos = Self {
            bb_sides: [BitBoard(defs::StartPosition::WHITE_SIDE), BitBoard(defs::StartPosition::BLACK_SIDE)],
            bb_pieces: [
                [
                    BitBoard(defs::StartPosition::WHITE_KING),
                    BitBoard(defs::StartPosition::WHITE_QUEEN),
                    BitBoard(defs::StartPosition::WHITE_ROOKS),
                    BitBoard(defs::StartPosition::WHITE_KNIGHTS),
                    BitBoard(defs::StartPosition::WHITE_BISHOPS),
                    BitBoard(defs::StartPosition::WHITE_PAWNS)
                ],
                [
                    BitBoard(defs::StartPosition::BLACK_KING),
                    BitBoard(defs::StartPosition::BLACK_QUEEN),
                    BitBoard(defs::StartPosition::BLACK_ROOKS),
                    BitBoard(defs::StartPosition::BLACK_KNIGHTS),
                    BitBoard(defs::StartPosition::BLACK_BISHOPS),
                    BitBoard(defs::StartPosition::BLACK_PAWNS)
                ]
            ],
            state: gamestate::State::default(),
            psqtmat: 0,
            pkhash: 0,
        };
        pos.refresh_derived();
        pos
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = [
            ["♔\u{FE0E}", "♕\u{FE0E}", "♖\u{FE0E}", "♘\u{FE0E}", "♗\u{FE0E}", "♙\u{FE0E}"],
            ["♚\u{FE0E}", "♛\u{FE0E}", "♜\u{FE0E}", "♞\u{FE0E}", "♝\u{FE0E}", "♟\u{FE0E}"],
        ];

        let light = (240, 217, 181);
        let dark = (181, 136, 99);

        for rank in (0..8).rev() {
            write!(f, "{} ", (rank + 1).to_string().red())?;
            for file in 0..8 {
                let sq_index = rank * 8 + file;
                let bit: u64 = 1u64 << sq_index;
                let mut symbol = " ".to_string();
                for color in 0..2 {
                    for piece in 0..6 {
                        if self.bb_pieces[color][piece].0 & bit != 0 {
                            symbol = symbols[color][piece].to_string();
                            break;
                        }
                    }
                }
                let (r, g, b) = if (rank + file) % 2 == 0 { light } else { dark };
                let square = format!(" {} ", symbol)
                    .on_truecolor(r, g, b)
                    .truecolor(0, 0, 0);
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   {}", " a  b  c  d  e  f  g  h".red())?;
        Ok(())
    }
}
