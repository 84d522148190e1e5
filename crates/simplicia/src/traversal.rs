//! Dimension-bounded face and coface enumeration
//!
//! Both directions run one depth-first pass per target dimension, low to
//! high. A simplex reachable along several paths is reported once per
//! pass; the visited set is scoped to the pass, so a simplex consumed
//! while enumerating one dimension can still be traversed through when a
//! later dimension is collected.

use crate::complex::SimplicialComplex;
use crate::simplex::SimplexKey;
use std::collections::HashSet;

#[derive(Clone, Copy)]
enum Direction {
    Down,
    Up,
}

pub(crate) fn faces_at(
    complex: &SimplicialComplex,
    start: SimplexKey,
    min_dim: i64,
    max_dim: i64,
) -> Vec<(String, usize)> {
    let start_dimension = complex.get(start).dimension() as i64;
    let min = min_dim.max(0);
    let max = max_dim.min(start_dimension);
    collect(complex, start, min, max, Direction::Down)
}

pub(crate) fn cofaces_at(
    complex: &SimplicialComplex,
    start: SimplexKey,
    min_dim: i64,
    max_dim: i64,
) -> Vec<(String, usize)> {
    let start_dimension = complex.get(start).dimension() as i64;
    let min = min_dim.max(start_dimension);
    let max = max_dim.min(complex.max_dimension() as i64);
    collect(complex, start, min, max, Direction::Up)
}

fn collect(
    complex: &SimplicialComplex,
    start: SimplexKey,
    min: i64,
    max: i64,
    direction: Direction,
) -> Vec<(String, usize)> {
    let mut results = Vec::new();
    let mut dimension = min;
    while dimension <= max {
        let mut seen = HashSet::new();
        visit(
            complex,
            start,
            dimension as usize,
            direction,
            &mut seen,
            &mut results,
        );
        dimension += 1;
    }
    results
}

// Recursion depth is bounded by the dimension gap between the start
// simplex and the target, not by the size of the complex.
fn visit(
    complex: &SimplicialComplex,
    key: SimplexKey,
    target: usize,
    direction: Direction,
    seen: &mut HashSet<SimplexKey>,
    out: &mut Vec<(String, usize)>,
) {
    let simplex = complex.get(key);
    if simplex.dimension() == target {
        if seen.insert(key) {
            out.push((simplex.id.clone(), target));
        }
        return;
    }
    let next = match direction {
        Direction::Down => &simplex.faces,
        Direction::Up => &simplex.cofaces,
    };
    for &neighbor in next {
        visit(complex, neighbor, target, direction, seen, out);
    }
}
