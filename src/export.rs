//! Flat export of a world's land polygons
//!
//! Renderers that do not link against this crate get one record per land
//! polygon, `[textureId, lon0, lat0, lon1, lat1, ...]`, plus the seed needed to
//! regenerate the world. Ocean polygons are dropped.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::TextureId;
use crate::polygon::MapPolygon;
use crate::world::WorldMap;

/// One textured polygon as `(longitude, latitude)` vertex pairs in degrees
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecord {
    pub texture: TextureId,
    pub coordinates: Vec<(f64, f64)>,
}

impl PolygonRecord {
    /// Build a record from a land polygon, `None` for ocean
    pub fn from_polygon(polygon: &MapPolygon) -> Option<Self> {
        let texture = polygon.texture?;
        Some(Self {
            texture,
            coordinates: polygon.lon_lat(),
        })
    }

    /// Flatten to `[textureId, lon0, lat0, lon1, lat1, ...]`
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(1 + self.coordinates.len() * 2);
        flat.push(f64::from(self.texture));
        for &(lon, lat) in &self.coordinates {
            flat.push(lon);
            flat.push(lat);
        }
        flat
    }
}

/// Exported world: seed plus land polygon records
///
/// # Example
///
/// ```
/// use rust_fractal_planet::*;
///
/// let config = WorldConfigBuilder::new().seed(5).circles(10).unwrap().build().unwrap();
/// let world = WorldMap::generate(config).unwrap();
///
/// let export = WorldExport::from_world(&world);
/// assert_eq!(export.seed, 5);
/// for record in export.flat_records() {
///     assert_eq!(record.len(), 7);
/// }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WorldExport {
    /// Seed the world was generated from
    pub seed: u64,
    /// Land polygons in world order
    pub polygons: Vec<PolygonRecord>,
}

impl WorldExport {
    pub fn from_world(world: &WorldMap) -> Self {
        Self {
            seed: world.config().seed,
            polygons: world
                .polygons()
                .iter()
                .filter_map(PolygonRecord::from_polygon)
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// All records in flat form
    pub fn flat_records(&self) -> Vec<Vec<f64>> {
        self.polygons.iter().map(PolygonRecord::to_flat).collect()
    }
}
