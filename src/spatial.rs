//! Spatial indexing for fast point-to-polygon lookups
//!
//! This module is only available with the `spatial-index` feature.

use glam::DVec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

use crate::sphere::UnitVector;

/// KD-tree over polygon centroids
///
/// The nearest centroid is a strong first guess for the polygon containing a
/// point; [`WorldMap::find_polygon_at`](crate::WorldMap::find_polygon_at)
/// confirms it with an exact containment test.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 3, 32>,
}

impl SpatialIndex {
    /// Build the index from polygon centroids
    ///
    /// # Example
    ///
    /// ```
    /// use rust_fractal_planet::*;
    ///
    /// let centers = vec![
    ///     DVec3::new(1.0, 0.0, 0.0),
    ///     DVec3::new(0.0, 1.0, 0.0),
    ///     DVec3::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&centers);
    /// assert_eq!(index.find_nearest(DVec3::new(1.0, 0.1, 0.0)), 0);
    /// ```
    pub fn new(centers: &[DVec3]) -> Self {
        let points: Vec<[f64; 3]> = centers.iter().map(|c| c.to_array()).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Build the index from unit vectors
    pub fn from_unit_vectors(centers: &[UnitVector]) -> Self {
        let points: Vec<DVec3> = centers.iter().map(UnitVector::xyz).collect();
        Self::new(&points)
    }

    /// Index of the centroid closest to `position`
    pub fn find_nearest(&self, position: DVec3) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&position.to_array());
        result.item
    }
}
