//! Great circles and their pairwise intersections
//!
//! [`CircleSet`] is the single source of truth for a generation run: the
//! ordered list of great circles and the append-only table of their
//! intersection points. Sections never copy this data, they only hold circle
//! indices and [`IntersectionRef`]s into it.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldGenError};
use crate::sphere::UnitVector;

/// Minimum angle (radians) between any two circle planes
///
/// Candidates closer than this to an existing circle are redrawn, which keeps
/// every cross product between normals well away from zero.
pub const MIN_CIRCLE_SEPARATION: f64 = 0.01;

/// Candidates drawn per circle before sampling gives up
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Which half of the sphere a region occupies relative to a circle's normal
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// `p · normal >= 0`
    Positive,
    /// `p · normal < 0`
    Negative,
}

impl Side {
    /// `+1.0` or `-1.0`
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Positive => 1.0,
            Side::Negative => -1.0,
        }
    }

    /// The other side
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }

    /// Side of `point` relative to the plane with `normal`
    ///
    /// Points exactly on the circle count as positive.
    #[inline]
    pub fn of(point: &UnitVector, normal: &UnitVector) -> Side {
        if point.dot(normal) >= 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }

    /// Whether `point` lies on this side of the circle with `normal` (boundary included)
    #[inline]
    pub fn admits(self, point: &UnitVector, normal: &UnitVector) -> bool {
        self.sign() * point.dot(normal) >= 0.0
    }
}

/// A great circle, identified by its creation order
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircle {
    /// Position in creation order (0..N-1)
    pub index: usize,
    /// Unit normal of the circle's plane
    pub normal: UnitVector,
}

impl GreatCircle {
    /// Smallest angle between this circle's plane and a candidate normal
    ///
    /// A normal and its antipode describe the same circle, so both are checked.
    pub fn separation(&self, normal: &UnitVector) -> f64 {
        self.normal.dot(normal).abs().clamp(0.0, 1.0).acos()
    }
}

/// Unordered pair of circle indices, stored as `(low, high)`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    #[inline]
    pub fn low(&self) -> usize {
        self.low
    }

    #[inline]
    pub fn high(&self) -> usize {
        self.high
    }

    /// Both circle indices
    #[inline]
    pub fn circles(&self) -> [usize; 2] {
        [self.low, self.high]
    }

    #[inline]
    pub fn involves(&self, circle: usize) -> bool {
        self.low == circle || self.high == circle
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Reference to one of the two intersection points of a circle pair
///
/// `Positive` is the canonical point stored in the table, `Negative` its antipode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntersectionRef {
    pub pair: PairKey,
    pub side: Side,
}

impl IntersectionRef {
    pub fn new(pair: PairKey, side: Side) -> Self {
        Self { pair, side }
    }

    /// The antipodal intersection point of the same pair
    pub fn antipode(self) -> Self {
        Self {
            pair: self.pair,
            side: self.side.flip(),
        }
    }
}

/// Ordered great circles plus their intersection table
#[derive(Debug, Clone, Default)]
pub struct CircleSet {
    circles: Vec<GreatCircle>,
    intersections: BTreeMap<PairKey, UnitVector>,
}

impl CircleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of circles placed so far
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// All circles in creation order
    #[inline]
    pub fn circles(&self) -> &[GreatCircle] {
        &self.circles
    }

    /// The intersection table, keyed by circle pair
    #[inline]
    pub fn intersections(&self) -> &BTreeMap<PairKey, UnitVector> {
        &self.intersections
    }

    /// Normal of the circle at `index`
    pub fn normal(&self, index: usize) -> Result<UnitVector> {
        self.circles
            .get(index)
            .map(|circle| circle.normal)
            .ok_or(WorldGenError::UnknownCircle(index))
    }

    /// Resolve an intersection reference to its point on the sphere
    pub fn resolve(&self, reference: IntersectionRef) -> Result<UnitVector> {
        let canonical = self
            .intersections
            .get(&reference.pair)
            .ok_or(WorldGenError::MissingIntersection(
                reference.pair.low(),
                reference.pair.high(),
            ))?;

        Ok(match reference.side {
            Side::Positive => *canonical,
            Side::Negative => -*canonical,
        })
    }

    /// Append a circle with the given normal and record its intersection with
    /// every earlier circle
    ///
    /// The canonical point for a pair `(i, j)` with `i < j` is `n_i × n_j`,
    /// normalized. Returns the new circle's index.
    pub fn push(&mut self, normal: UnitVector) -> Result<usize> {
        let index = self.circles.len();

        let mut entries = Vec::with_capacity(index);
        for circle in &self.circles {
            let point = circle
                .normal
                .cross(&normal)
                .ok_or(WorldGenError::DegenerateCircles {
                    first: circle.index,
                    second: index,
                })?;
            entries.push((PairKey::new(circle.index, index), point));
        }

        self.intersections.extend(entries);
        self.circles.push(GreatCircle { index, normal });
        Ok(index)
    }

    /// Draw a random circle that keeps at least [`MIN_CIRCLE_SEPARATION`] from
    /// every existing one, then [`push`](Self::push) it
    pub fn sample_circle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let normal = UnitVector::random(rng);
            let separated = self
                .circles
                .iter()
                .all(|circle| circle.separation(&normal) >= MIN_CIRCLE_SEPARATION);

            if separated {
                return self.push(normal);
            }
        }

        Err(WorldGenError::SamplingExhausted {
            circle: self.circles.len(),
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    /// Smallest pairwise separation between circle planes, if there are two or more circles
    pub fn min_separation(&self) -> Option<f64> {
        let mut min: Option<f64> = None;
        for (i, a) in self.circles.iter().enumerate() {
            for b in &self.circles[i + 1..] {
                let separation = a.separation(&b.normal);
                min = Some(min.map_or(separation, |m| m.min(separation)));
            }
        }
        min
    }
}
