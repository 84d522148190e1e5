//! Simplex records and arena keys

/// Stable index of a simplex in the complex's arena.
///
/// Keys are handed out in declaration order and never invalidated, so
/// face and coface lists can hold them instead of pointers.
pub type SimplexKey = u32;

/// A single simplex: a vertex, edge, triangle, or higher analog.
#[derive(Debug, Clone)]
pub struct Simplex {
    /// Unique identifier
    pub id: String,
    /// Immediate lower-dimensional faces, in declaration order
    pub faces: Vec<SimplexKey>,
    /// Simplices that list this one as a face, in declaration order
    pub cofaces: Vec<SimplexKey>,
    /// Homology-class tag assigned during construction
    pub(crate) class_tag: u64,
}

impl Simplex {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            faces: Vec::new(),
            cofaces: Vec::new(),
            class_tag: 0,
        }
    }

    /// Dimension of the simplex: `|faces| - 1`, or 0 for a vertex.
    pub fn dimension(&self) -> usize {
        if self.faces.is_empty() {
            0
        } else {
            self.faces.len() - 1
        }
    }
}
