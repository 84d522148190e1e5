//! # Simplicia
//!
//! An in-memory simplicial complex with incremental Betti numbers and
//! dimension-bounded structural queries.
//!
//! A complex is built one simplex at a time from a textual description:
//! each simplex names the already-declared faces that bound it, and the
//! complex wires up the reverse (coface) adjacency as it goes. While the
//! complex is built, an incremental classification of simplices into
//! homology classes keeps running counts of the first three Betti
//! numbers (connected components, independent cycles, enclosed voids).
//! Once built, the complex answers face/coface enumeration queries over
//! a dimension range.
//!
//! ```
//! use simplicia::SimplicialComplex;
//!
//! let mut complex = SimplicialComplex::with_capacity(8);
//! complex.declare_simplex("v0", &[]).unwrap();
//! complex.declare_simplex("v1", &[]).unwrap();
//! complex.declare_simplex("e0", &["v0", "v1"]).unwrap();
//!
//! let betti = complex.betti_snapshot();
//! assert_eq!((betti.b0, betti.b1, betti.b2), (1, 0, 0));
//! ```

pub mod betti;
pub mod complex;
pub mod error;
pub mod parser;
pub mod simplex;

mod traversal;

pub use betti::BettiSnapshot;
pub use complex::{HashStats, SimplicialComplex};
pub use error::{ComplexError, Result};
pub use parser::{load_from_reader, load_path, process_line};
pub use simplex::{Simplex, SimplexKey};
