//! Error types for fractal planet generation

use thiserror::Error;

/// Errors that can occur while configuring or running world generation
///
/// Every variant raised from [`WorldGenerator::generate`](crate::WorldGenerator::generate)
/// is fatal for that run: the generator must be re-initialized (or dropped)
/// before it can produce another world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldGenError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A finalized section classified both poles as interior
    #[error("section bounded by circles {circles:?} contains both the north and the south pole")]
    PoleConflict {
        /// Bounding circles of the offending section
        circles: Vec<usize>,
    },

    /// Centroid requested for a section with no boundary intersections and no polygon
    #[error("section has neither boundary intersections nor polygon vertices")]
    EmptySection,

    /// The boundary points of a section cancel out and its circles give no fallback
    #[error("section bounded by circles {circles:?} has no well-defined centroid")]
    DegenerateSection {
        /// Bounding circles of the offending section
        circles: Vec<usize>,
    },

    /// Two circle normals are too close to define an intersection
    #[error("great circles {first} and {second} do not intersect in a unique pair of points")]
    DegenerateCircles {
        /// Index of the older circle
        first: usize,
        /// Index of the newer circle
        second: usize,
    },

    /// A circle index was not found in the circle set
    #[error("unknown great circle {0}")]
    UnknownCircle(usize),

    /// No intersection entry exists for a pair of circles
    #[error("no intersection recorded for circles {0} and {1}")]
    MissingIntersection(usize, usize),

    /// Rejection sampling could not place a new circle
    #[error("could not place great circle {circle} after {attempts} attempts")]
    SamplingExhausted {
        /// Index the new circle would have received
        circle: usize,
        /// Number of rejected candidates
        attempts: usize,
    },

    /// `generate()` was called on a generator whose run already finished or failed
    #[error("generator run already consumed, call init() before generating again")]
    RunConsumed,
}

/// Result type alias for world generation
pub type Result<T> = std::result::Result<T, WorldGenError>;
