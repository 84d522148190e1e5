//! Incremental Betti-number accumulator
//!
//! The k-th Betti number counts the k-dimensional "holes" of a complex:
//! connected components (k = 0), independent cycles (k = 1), enclosed
//! voids (k = 2). Instead of building boundary matrices, the accumulator
//! classifies simplices into provisional homology classes as the complex
//! is constructed. A new simplex whose faces all sit in one class opens
//! a new k-dimensional feature; a simplex whose faces straddle classes
//! closes a (k-1)-dimensional one and the classes are merged. The rule
//! is only derived for dimensions 0 through 2, so anything higher just
//! taints the dimension-2 count.

use crate::simplex::{Simplex, SimplexKey};
use serde::Serialize;
use tracing::warn;

/// The first three Betti numbers of a complex
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BettiSnapshot {
    /// Connected components
    pub b0: i64,
    /// Independent 1-dimensional cycles
    pub b1: i64,
    /// Independent 2-dimensional voids
    pub b2: i64,
    /// Set once any simplex above dimension 2 was observed
    pub unreliable: bool,
}

/// Running homology-class state, owned by the complex
#[derive(Debug, Default)]
pub(crate) struct BettiAccumulator {
    counts: [i64; 3],
    unreliable: bool,
    next_tag: u64,
}

impl BettiAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold one simplex into the running counts.
    ///
    /// The simplex must be fully linked: its face list complete and the
    /// coface back-edges on every face already set.
    pub(crate) fn observe(&mut self, arena: &mut [Simplex], key: SimplexKey) {
        let dimension = arena[key as usize].dimension();
        if dimension > 2 {
            if !self.unreliable {
                warn!(
                    id = %arena[key as usize].id,
                    dimension,
                    "simplex above dimension 2; Betti2 is unreliable from here on"
                );
            }
            self.unreliable = true;
            return;
        }

        if faces_share_tag(arena, key) {
            // A new independent feature at this dimension.
            self.counts[dimension] += 1;
        } else {
            // Fills in a feature one dimension down, merging the
            // classes its faces belonged to.
            self.counts[dimension - 1] -= 1;
            let min = min_face_tag(arena, key);
            for index in 0..arena[key as usize].faces.len() {
                let face = arena[key as usize].faces[index];
                if arena[face as usize].class_tag != min {
                    flood_fill_tag(arena, face, min);
                }
            }
        }

        arena[key as usize].class_tag = self.next_tag;
        self.next_tag += 1;
    }

    pub(crate) fn snapshot(&self) -> BettiSnapshot {
        BettiSnapshot {
            b0: self.counts[0],
            b1: self.counts[1],
            b2: self.counts[2],
            unreliable: self.unreliable,
        }
    }
}

/// Vacuously true for a vertex.
fn faces_share_tag(arena: &[Simplex], key: SimplexKey) -> bool {
    let faces = &arena[key as usize].faces;
    let Some(&first) = faces.first() else {
        return true;
    };
    let tag = arena[first as usize].class_tag;
    faces[1..]
        .iter()
        .all(|&face| arena[face as usize].class_tag == tag)
}

fn min_face_tag(arena: &[Simplex], key: SimplexKey) -> u64 {
    arena[key as usize]
        .faces
        .iter()
        .map(|&face| arena[face as usize].class_tag)
        .min()
        .unwrap_or(u64::MAX)
}

/// Retag every n-simplex connected to `start` through an (n+1)-simplex.
///
/// Walks coface edges to siblings and stops at simplices that already
/// carry the target tag. Uses an explicit worklist: coface chains can
/// get long on large complexes even though face-descent depth is small.
fn flood_fill_tag(arena: &mut [Simplex], start: SimplexKey, tag: u64) {
    let mut pending = vec![start];
    while let Some(key) = pending.pop() {
        if arena[key as usize].class_tag == tag {
            continue;
        }
        arena[key as usize].class_tag = tag;
        for coface_index in 0..arena[key as usize].cofaces.len() {
            let coface = arena[key as usize].cofaces[coface_index];
            for face_index in 0..arena[coface as usize].faces.len() {
                let sibling = arena[coface as usize].faces[face_index];
                if arena[sibling as usize].class_tag != tag {
                    pending.push(sibling);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::SimplicialComplex;

    fn betti_of(complex: &SimplicialComplex) -> (i64, i64, i64, bool) {
        let snapshot = complex.betti_snapshot();
        (snapshot.b0, snapshot.b1, snapshot.b2, snapshot.unreliable)
    }

    #[test]
    fn test_single_vertex() {
        let mut complex = SimplicialComplex::with_capacity(1);
        complex.declare_simplex("v0", &[]).unwrap();
        assert_eq!(betti_of(&complex), (1, 0, 0, false));
    }

    #[test]
    fn test_disconnected_vertices() {
        let mut complex = SimplicialComplex::with_capacity(4);
        for i in 0..3 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        assert_eq!(betti_of(&complex), (3, 0, 0, false));
    }

    #[test]
    fn test_edge_merges_components() {
        let mut complex = SimplicialComplex::with_capacity(4);
        complex.declare_simplex("v0", &[]).unwrap();
        complex.declare_simplex("v1", &[]).unwrap();
        complex.declare_simplex("e0", &["v0", "v1"]).unwrap();
        assert_eq!(betti_of(&complex), (1, 0, 0, false));
    }

    #[test]
    fn test_triangle_boundary_has_one_cycle() {
        let mut complex = SimplicialComplex::with_capacity(8);
        for i in 0..3 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        complex.declare_simplex("e0", &["v0", "v1"]).unwrap();
        complex.declare_simplex("e1", &["v1", "v2"]).unwrap();
        complex.declare_simplex("e2", &["v2", "v0"]).unwrap();
        assert_eq!(betti_of(&complex), (1, 1, 0, false));
    }

    #[test]
    fn test_filled_triangle_kills_the_cycle() {
        let mut complex = SimplicialComplex::with_capacity(8);
        for i in 0..3 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        complex.declare_simplex("e0", &["v0", "v1"]).unwrap();
        complex.declare_simplex("e1", &["v1", "v2"]).unwrap();
        complex.declare_simplex("e2", &["v2", "v0"]).unwrap();
        complex.declare_simplex("f0", &["e0", "e1", "e2"]).unwrap();
        assert_eq!(betti_of(&complex), (1, 0, 0, false));
    }

    #[test]
    fn test_hollow_tetrahedron_has_a_void() {
        let mut complex = SimplicialComplex::with_capacity(16);
        for i in 0..4 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for (a, b) in edges {
            let (fa, fb) = (format!("v{a}"), format!("v{b}"));
            complex
                .declare_simplex(&format!("e{a}{b}"), &[&fa, &fb])
                .unwrap();
        }
        let triangles = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
        for (a, b, c) in triangles {
            let (ab, ac, bc) = (
                format!("e{a}{b}"),
                format!("e{a}{c}"),
                format!("e{b}{c}"),
            );
            complex
                .declare_simplex(&format!("f{a}{b}{c}"), &[&ab, &ac, &bc])
                .unwrap();
        }
        assert_eq!(betti_of(&complex), (1, 0, 1, false));
    }

    #[test]
    fn test_dimension_three_taints_betti2() {
        let mut complex = SimplicialComplex::with_capacity(16);
        for i in 0..4 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for (a, b) in edges {
            let (fa, fb) = (format!("v{a}"), format!("v{b}"));
            complex
                .declare_simplex(&format!("e{a}{b}"), &[&fa, &fb])
                .unwrap();
        }
        let triangles = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
        for (a, b, c) in triangles {
            let (ab, ac, bc) = (
                format!("e{a}{b}"),
                format!("e{a}{c}"),
                format!("e{b}{c}"),
            );
            complex
                .declare_simplex(&format!("f{a}{b}{c}"), &[&ab, &ac, &bc])
                .unwrap();
        }
        let before = complex.betti_snapshot();
        complex
            .declare_simplex("t0", &["f012", "f013", "f023", "f123"])
            .unwrap();

        let after = complex.betti_snapshot();
        assert!(after.unreliable);
        // Counts are untouched above dimension 2.
        assert_eq!((after.b0, after.b1, after.b2), (before.b0, before.b1, before.b2));
    }

    #[test]
    fn test_two_components_then_bridge() {
        let mut complex = SimplicialComplex::with_capacity(16);
        for i in 0..4 {
            complex.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        complex.declare_simplex("e0", &["v0", "v1"]).unwrap();
        complex.declare_simplex("e1", &["v2", "v3"]).unwrap();
        assert_eq!(betti_of(&complex), (2, 0, 0, false));

        complex.declare_simplex("bridge", &["v1", "v2"]).unwrap();
        assert_eq!(betti_of(&complex), (1, 0, 0, false));
    }

    #[test]
    fn test_construction_order_does_not_matter_for_chain() {
        // Same chain declared left-to-right and right-to-left; the
        // flood fill does very different work but the counts agree.
        let mut ltr = SimplicialComplex::with_capacity(32);
        let mut rtl = SimplicialComplex::with_capacity(32);
        let n = 10;
        for i in 0..n {
            ltr.declare_simplex(&format!("v{i}"), &[]).unwrap();
            rtl.declare_simplex(&format!("v{i}"), &[]).unwrap();
        }
        for i in 0..n - 1 {
            let (a, b) = (format!("v{i}"), format!("v{}", i + 1));
            ltr.declare_simplex(&format!("e{i}"), &[&a, &b]).unwrap();
            let (c, d) = (format!("v{}", n - 1 - i), format!("v{}", n - 2 - i));
            rtl.declare_simplex(&format!("e{i}"), &[&c, &d]).unwrap();
        }
        assert_eq!(betti_of(&ltr), (1, 0, 0, false));
        assert_eq!(betti_of(&rtl), (1, 0, 0, false));
    }
}
