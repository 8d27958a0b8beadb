// src/bin/trace_dump.rs
// Reads a file of FEN lines and emits per-term evaluation counters for
// offline gradient-free weight tuning.
// - Lines may carry an outcome tag: `<fen> | <y>` with y in {-1, 0, 1}
//   from White's perspective; untagged lines get 0.
// - Progress bar via `indicatif`
//
// Output format: a continuous stream of bincode-serialized `TraceRow`
// (read back by repeatedly calling `bincode::deserialize_from` until EOF).
//
// CLI: `cargo run --features tuning --bin trace_dump -- <input.fens> <output.bin>`

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use basalt::eval::trace::{self, EvalTrace};
use basalt::{evaluate, position_from_fen};

/// Skip unparseable lines instead of aborting the dump
const SKIP_INVALID: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRow {
    pub fen: String,
    /// Game outcome from White's perspective: -1.0 loss, 0.0 draw, +1.0 win
    pub y: f32,
    /// Static evaluation from the side to move's perspective
    pub eval: i32,
    /// Per-term, per-side hit counters for this position
    pub counts: EvalTrace,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or_else(|| anyhow!("usage: trace_dump <input.fens> <output.bin>"))?;
    let output = args
        .next()
        .ok_or_else(|| anyhow!("usage: trace_dump <input.fens> <output.bin>"))?;

    let reader = BufReader::new(File::open(&input).with_context(|| format!("opening {input}"))?);
    let mut writer = BufWriter::new(File::create(&output).with_context(|| format!("creating {output}"))?);

    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;
    let bar = ProgressBar::new(lines.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    let mut written = 0usize;
    for line in &lines {
        bar.inc(1);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (fen, y) = match line.rsplit_once('|') {
            Some((fen, tag)) => (fen.trim(), tag.trim().parse::<f32>().unwrap_or(0.0)),
            None => (line, 0.0),
        };

        let pos = match position_from_fen(fen) {
            Ok(pos) => pos,
            Err(err) if SKIP_INVALID => {
                bar.set_message(format!("skipped: {err}"));
                continue;
            }
            Err(err) => return Err(anyhow!(err)),
        };

        trace::reset();
        let eval = evaluate(&pos, None);
        let counts = trace::snapshot();

        let row = TraceRow { fen: fen.to_string(), y, eval, counts };
        bincode::serialize_into(&mut writer, &row).context("serializing row")?;
        written += 1;
    }

    writer.flush()?;
    bar.finish_with_message(format!("{written} rows"));
    Ok(())
}
