//! Line-oriented complex description loader
//!
//! One simplex per line, `<id> <face1> ... <facen>`, tokens separated by
//! whitespace. A line starting with `#` is a comment; blank lines are
//! skipped. Faces must be declared before the simplices that use them,
//! and the first bad line aborts the rest of the input.

use crate::complex::SimplicialComplex;
use crate::error::{ComplexError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse a single description line into the complex.
pub fn process_line(complex: &mut SimplicialComplex, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let Some(id) = tokens.next() else {
        return Ok(());
    };
    if id.starts_with('#') {
        return Ok(());
    }
    let face_ids: Vec<&str> = tokens.collect();
    complex.declare_simplex(id, &face_ids)?;
    Ok(())
}

/// Consume a whole description input, annotating errors with their
/// 1-based line number.
pub fn load_from_reader<R: BufRead>(complex: &mut SimplicialComplex, reader: R) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        process_line(complex, &line).map_err(|source| ComplexError::Parse {
            line: index + 1,
            source: Box::new(source),
        })?;
    }
    debug!(
        simplices = complex.len(),
        max_dimension = complex.max_dimension(),
        "complex loaded"
    );
    Ok(())
}

/// Load a description file into a fresh complex.
///
/// The hash table is sized from the file length, assuming roughly ten
/// bytes per simplex and a target load factor of 0.5.
pub fn load_path(path: impl AsRef<Path>) -> Result<SimplicialComplex> {
    let file = File::open(path)?;
    let estimated = file.metadata()?.len() as usize / 10;
    let mut complex = SimplicialComplex::with_capacity(estimated);
    load_from_reader(&mut complex, BufReader::new(file))?;
    Ok(complex)
}
