//! Error types for complex construction and queries

use thiserror::Error;

/// Result type alias for complex operations
pub type Result<T> = std::result::Result<T, ComplexError>;

/// Main error type for complex construction and queries
#[derive(Error, Debug)]
pub enum ComplexError {
    /// A simplex with this id was already declared
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),

    /// A face id that has not been declared yet
    #[error("Couldn't find a simplex with id '{0}'")]
    UnknownFace(String),

    /// A simplex with exactly one face is topologically invalid
    #[error("Malformed simplex '{0}' with exactly one face")]
    MalformedSingleFace(String),

    /// A referenced face does not sit one dimension below its parent
    #[error("Face '{face}' of '{id}' must have dimension {expected}, not {actual}")]
    DimensionMismatch {
        /// Simplex being declared
        id: String,
        /// Offending face
        face: String,
        /// Required face dimension (parent dimension minus one)
        expected: usize,
        /// Dimension the face actually has
        actual: usize,
    },

    /// Query against an id that does not exist
    #[error("No simplices have id '{0}'")]
    NotFound(String),

    /// Query with an inverted dimension range
    #[error("The minimum of {min} cannot be bigger than the maximum of {max}")]
    InvalidRange {
        /// Requested lower bound
        min: i64,
        /// Requested upper bound
        max: i64,
    },

    /// IO error while reading a description file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Construction error annotated with its input line number
    #[error("Line {line}: {source}")]
    Parse {
        /// 1-based line number in the description input
        line: usize,
        /// The underlying construction error
        #[source]
        source: Box<ComplexError>,
    },
}
