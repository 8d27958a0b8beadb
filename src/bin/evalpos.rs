// src/bin/evalpos.rs
// Prints a position and its static evaluation for a FEN given on the
// command line.
//
// CLI: `cargo run --bin evalpos -- "<fen>"`

use anyhow::{anyhow, Context, Result};
use basalt::eval::params::SCALE_NORMAL;
use basalt::eval::{evaluate, game_phase, scale_factor};
use basalt::game::io::position_from_fen;
use basalt::PawnKingTable;

fn main() -> Result<()> {
    let fen = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if fen.is_empty() {
        return Err(anyhow!("usage: evalpos \"<fen>\""));
    }

    let pos = position_from_fen(&fen)
        .map_err(|e| anyhow!(e))
        .context("parsing FEN")?;

    println!("{pos}");

    let mut table = PawnKingTable::new();
    let score = evaluate(&pos, Some(&mut table));

    println!("eval:  {score:+} cp (side to move)");
    println!("phase: {}/256", game_phase(&pos));
    println!("scale: {}/{}", scale_factor(&pos), SCALE_NORMAL);

    Ok(())
}
