//! In-memory simplicial complex with hashed id lookup
//!
//! Simplices live in an arena and are addressed by [`SimplexKey`]; a
//! separate open hash table maps identifiers to keys. Chains within a
//! bucket keep insertion order, which makes the hash statistics
//! deterministic for a given input.

use crate::betti::{BettiAccumulator, BettiSnapshot};
use crate::error::{ComplexError, Result};
use crate::simplex::{Simplex, SimplexKey};
use crate::traversal;
use serde::Serialize;
use tracing::debug;

/// Hash-table diagnostics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HashStats {
    /// Total bucket count
    pub buckets: usize,
    /// Buckets holding at least one simplex
    pub occupied: usize,
    /// Entries beyond the first in any bucket
    pub collisions: usize,
    /// `occupied / buckets`
    pub load_factor: f64,
}

/// An in-memory simplicial complex
#[derive(Debug)]
pub struct SimplicialComplex {
    arena: Vec<Simplex>,
    buckets: Vec<Vec<SimplexKey>>,
    max_dimension: usize,
    betti: BettiAccumulator,
}

impl SimplicialComplex {
    /// Create an empty complex with a default-sized table.
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    /// Create a complex sized for roughly `expected` simplices.
    ///
    /// The table is sized for a target load factor of 0.5.
    pub fn with_capacity(expected: usize) -> Self {
        let table_size = (expected * 2).max(1);
        Self {
            arena: Vec::with_capacity(expected),
            buckets: vec![Vec::new(); table_size],
            max_dimension: 0,
            betti: BettiAccumulator::new(),
        }
    }

    // djb2 by Dan Bernstein; bucket placement only, not a security
    // property.
    fn bucket_of(&self, id: &str) -> usize {
        let mut hash: u32 = 5381;
        for byte in id.bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u32::from(byte));
        }
        hash as usize % self.buckets.len()
    }

    /// Look up a simplex by id.
    pub fn lookup(&self, id: &str) -> Option<&Simplex> {
        self.lookup_key(id).map(|key| &self.arena[key as usize])
    }

    pub(crate) fn lookup_key(&self, id: &str) -> Option<SimplexKey> {
        self.buckets[self.bucket_of(id)]
            .iter()
            .copied()
            .find(|&key| self.arena[key as usize].id == id)
    }

    pub(crate) fn get(&self, key: SimplexKey) -> &Simplex {
        &self.arena[key as usize]
    }

    /// Declare a new simplex bounded by the given existing faces.
    ///
    /// A vertex is declared with an empty face list; anything else needs
    /// at least two faces, each one dimension below the new simplex.
    /// Validation runs before any mutation, so on error the complex is
    /// unchanged.
    pub fn declare_simplex(&mut self, id: &str, face_ids: &[&str]) -> Result<SimplexKey> {
        if self.lookup_key(id).is_some() {
            return Err(ComplexError::DuplicateId(id.to_string()));
        }
        if face_ids.len() == 1 {
            return Err(ComplexError::MalformedSingleFace(id.to_string()));
        }

        let dimension = if face_ids.is_empty() {
            0
        } else {
            face_ids.len() - 1
        };
        let mut faces = Vec::with_capacity(face_ids.len());
        for face_id in face_ids {
            let key = self
                .lookup_key(face_id)
                .ok_or_else(|| ComplexError::UnknownFace((*face_id).to_string()))?;
            let face_dimension = self.arena[key as usize].dimension();
            if face_dimension + 1 != dimension {
                return Err(ComplexError::DimensionMismatch {
                    id: id.to_string(),
                    face: (*face_id).to_string(),
                    expected: dimension - 1,
                    actual: face_dimension,
                });
            }
            faces.push(key);
        }

        let key = self.arena.len() as SimplexKey;
        let mut simplex = Simplex::new(id);
        simplex.faces.clone_from(&faces);
        self.arena.push(simplex);
        let bucket = self.bucket_of(id);
        self.buckets[bucket].push(key);
        for face in faces {
            self.arena[face as usize].cofaces.push(key);
        }

        if dimension > self.max_dimension {
            self.max_dimension = dimension;
        }
        // The simplex must be fully linked before the Betti update: the
        // flood fill walks the coface edges wired just above.
        self.betti.observe(&mut self.arena, key);
        debug!(id, dimension, "declared simplex");
        Ok(key)
    }

    /// Enumerate faces of `id` with dimension in `[min_dim, max_dim]`.
    ///
    /// `max_dim` is clamped to the simplex's own dimension and `min_dim`
    /// to 0. Results are grouped by dimension, low to high; within a
    /// dimension, depth-first in declaration order, each simplex once.
    pub fn faces_at(&self, id: &str, min_dim: i64, max_dim: i64) -> Result<Vec<(String, usize)>> {
        if min_dim > max_dim {
            return Err(ComplexError::InvalidRange {
                min: min_dim,
                max: max_dim,
            });
        }
        let key = self
            .lookup_key(id)
            .ok_or_else(|| ComplexError::NotFound(id.to_string()))?;
        Ok(traversal::faces_at(self, key, min_dim, max_dim))
    }

    /// Enumerate cofaces of `id` with dimension in `[min_dim, max_dim]`.
    ///
    /// `min_dim` is clamped to the simplex's own dimension and `max_dim`
    /// to the complex's maximum dimension. Ordering matches
    /// [`Self::faces_at`].
    pub fn cofaces_at(&self, id: &str, min_dim: i64, max_dim: i64) -> Result<Vec<(String, usize)>> {
        if min_dim > max_dim {
            return Err(ComplexError::InvalidRange {
                min: min_dim,
                max: max_dim,
            });
        }
        let key = self
            .lookup_key(id)
            .ok_or_else(|| ComplexError::NotFound(id.to_string()))?;
        Ok(traversal::cofaces_at(self, key, min_dim, max_dim))
    }

    /// Running Betti numbers; meaningful once the input is consumed.
    pub fn betti_snapshot(&self) -> BettiSnapshot {
        self.betti.snapshot()
    }

    /// Hash-table diagnostics.
    pub fn hash_statistics(&self) -> HashStats {
        let occupied = self.buckets.iter().filter(|chain| !chain.is_empty()).count();
        HashStats {
            buckets: self.buckets.len(),
            occupied,
            collisions: self.arena.len() - occupied,
            load_factor: occupied as f64 / self.buckets.len() as f64,
        }
    }

    /// Number of simplices in the complex.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the complex holds no simplices.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Largest dimension of any declared simplex.
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }
}

impl Default for SimplicialComplex {
    fn default() -> Self {
        Self::new()
    }
}
