//! WorldMap main structure

use crate::config::WorldConfig;
use crate::error::Result;
use crate::generator::WorldGenerator;
use crate::polygon::MapPolygon;
use crate::sphere::UnitVector;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A finished fractal world
///
/// Holds every generated polygon in memory for fast queries. The world is a
/// pure function of its configuration: regenerate it from the stored
/// [`WorldConfig`] instead of saving the polygons.
///
/// # Examples
///
/// ```
/// use rust_fractal_planet::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .detail(WorldDetail::Coarse)
///     .build()
///     .unwrap();
///
/// let world = WorldMap::generate(config).unwrap();
/// println!("Generated {} polygons", world.polygon_count());
///
/// if let Some(polygon) = world.get_polygon(0) {
///     println!("Polygon 0 texture: {:?}", polygon.texture);
/// }
/// ```
#[derive(Clone)]
pub struct WorldMap {
    /// Configuration used to generate this world
    config: WorldConfig,

    /// All polygons (indexed by polygon ID)
    polygons: Vec<MapPolygon>,

    /// Lowest and highest polygon height
    height_range: (u32, u32),

    /// Index over polygon centroids (requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl WorldMap {
    /// Generate a world from configuration
    ///
    /// # Errors
    ///
    /// Propagates any error raised by [`WorldGenerator::generate`]
    ///
    /// # Example
    ///
    /// ```
    /// use rust_fractal_planet::*;
    ///
    /// let config = WorldConfigBuilder::new()
    ///     .seed(12345)
    ///     .circles(8)
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    ///
    /// let world = WorldMap::generate(config).unwrap();
    /// assert!(world.polygon_count() > 0);
    /// ```
    pub fn generate(config: WorldConfig) -> Result<Self> {
        let mut generator = WorldGenerator::new(config.clone());
        generator.generate()?;
        let height_range = generator.height_range().unwrap_or((0, 0));

        let polygons = generator
            .take_sections()
            .iter()
            .enumerate()
            .map(|(id, section)| MapPolygon::from_section(id, section))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let centers: Vec<UnitVector> = polygons.iter().map(|p| p.center).collect();
            SpatialIndex::from_unit_vectors(&centers)
        };

        tracing::debug!(
            seed = config.seed,
            polygons = polygons.len(),
            "Built world map"
        );

        Ok(Self {
            config,
            polygons,
            height_range,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Configuration used to generate this world
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Lowest and highest polygon height
    #[inline]
    pub fn height_range(&self) -> (u32, u32) {
        self.height_range
    }

    /// Get a polygon by ID
    ///
    /// Returns `None` if the ID is out of bounds.
    #[inline]
    pub fn get_polygon(&self, id: usize) -> Option<&MapPolygon> {
        self.polygons.get(id)
    }

    /// All polygons as a slice
    #[inline]
    pub fn polygons(&self) -> &[MapPolygon] {
        &self.polygons
    }

    /// Polygons above sea level
    pub fn land_polygons(&self) -> impl Iterator<Item = &MapPolygon> {
        self.polygons.iter().filter(|p| !p.is_ocean())
    }

    /// Find the polygon containing `point`
    ///
    /// With the `spatial-index` feature the polygon with the nearest centroid
    /// is tried first. Falls back to a linear scan, and finally to the nearest
    /// centroid for points lost between polygons to rounding.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_fractal_planet::*;
    /// # let config = WorldConfigBuilder::new().seed(1).circles(6).unwrap().build().unwrap();
    /// let world = WorldMap::generate(config).unwrap();
    /// let id = world.find_polygon_at(&UnitVector::from_lat_lon(12.0, 34.0));
    /// assert!(id.is_some());
    /// ```
    pub fn find_polygon_at(&self, point: &UnitVector) -> Option<usize> {
        #[cfg(feature = "spatial-index")]
        {
            let guess = self.spatial_index.find_nearest(point.xyz());
            if self.polygons.get(guess).is_some_and(|p| p.contains(point)) {
                return Some(guess);
            }
        }

        self.polygons
            .iter()
            .position(|p| p.contains(point))
            .or_else(|| self.nearest_polygon(point))
    }

    fn nearest_polygon(&self, point: &UnitVector) -> Option<usize> {
        self.polygons
            .iter()
            .map(|p| p.center.dot(point))
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Total surface area of all polygons (4π for a complete partition)
    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(MapPolygon::area).sum()
    }
}
