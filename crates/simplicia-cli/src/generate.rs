//! Synthetic chain-complex generator
//!
//! Writes two description files covering opposite construction orders:
//! the left-to-right file declares each edge between already-unified
//! vertices, while the right-to-left file always bridges into the
//! untouched end of the chain, forcing the class-unification flood fill
//! to do maximal work. Useful for comparing construction timings.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_chains(vertices: usize, ltr_path: &Path, rtl_path: &Path) -> Result<()> {
    if vertices == 0 {
        bail!("vertex count must be positive");
    }

    let ltr = File::create(ltr_path)
        .with_context(|| format!("failed to create '{}'", ltr_path.display()))?;
    let rtl = File::create(rtl_path)
        .with_context(|| format!("failed to create '{}'", rtl_path.display()))?;
    write_chain(BufWriter::new(ltr), vertices, false)?;
    write_chain(BufWriter::new(rtl), vertices, true)?;

    println!(
        "{} {} vertices, {} edges per file",
        "Wrote:".green().bold(),
        vertices,
        vertices - 1
    );
    Ok(())
}

fn write_chain<W: Write>(mut out: W, vertices: usize, reversed: bool) -> Result<()> {
    let direction = if reversed {
        "right-to-left"
    } else {
        "left-to-right"
    };
    writeln!(out, "# {direction} chain with {vertices} vertices")?;

    for i in 0..vertices {
        writeln!(out, "v{i}")?;
    }
    for i in 0..vertices - 1 {
        if reversed {
            writeln!(out, "e{i} v{} v{}", vertices - 1 - i, vertices - 2 - i)?;
        } else {
            writeln!(out, "e{i} v{i} v{}", i + 1)?;
        }
    }
    out.flush()?;
    Ok(())
}
