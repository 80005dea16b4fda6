//! Map Polygon Structure
//!
//! One textured triangle of a finished world, detached from the circle set it
//! was cut from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::TextureId;
use crate::error::{Result, WorldGenError};
use crate::generation::Section;
use crate::sphere::{polygon_contains, triangle_area, UnitVector};

/// A single polygon on the world surface
///
/// Each polygon carries:
/// - A unique ID (its position in the world's polygon list)
/// - The texture picked from its height and pole proximity (`None` = ocean)
/// - The height it was generated with
/// - A centroid for placing entities
/// - Three vertices sorted by descending bearing around the centroid
///
/// # Design Notes
///
/// Polygons are NOT serialized individually for save games. A world is
/// rebuilt from its [`WorldConfig`](crate::WorldConfig), which keeps saves compact.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MapPolygon {
    /// Unique identifier (0 to polygon_count-1)
    ///
    /// IDs are deterministic: the same configuration yields the same IDs at
    /// the same positions.
    pub id: usize,

    /// Texture id, `None` for ocean
    pub texture: Option<TextureId>,

    /// Number of circles the polygon lies on the positive side of
    pub height: u32,

    /// Centroid on the unit sphere
    pub center: UnitVector,

    /// Boundary vertices on the unit sphere
    pub vertices: Vec<UnitVector>,
}

impl MapPolygon {
    /// Create a new polygon
    ///
    /// This is typically called during world generation, not by user code.
    pub fn new(
        id: usize,
        texture: Option<TextureId>,
        height: u32,
        center: UnitVector,
        vertices: Vec<UnitVector>,
    ) -> Self {
        Self {
            id,
            texture,
            height,
            center,
            vertices,
        }
    }

    /// Detach a finalized section
    ///
    /// # Errors
    ///
    /// Returns `EmptySection` if the section was never finalized
    pub fn from_section(id: usize, section: &Section) -> Result<Self> {
        let center = section.center().ok_or(WorldGenError::EmptySection)?;
        if !section.is_finalized() {
            return Err(WorldGenError::EmptySection);
        }
        Ok(Self::new(
            id,
            section.texture(),
            section.height(),
            center,
            section.polygon().to_vec(),
        ))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon is below sea level (no texture)
    #[inline]
    pub fn is_ocean(&self) -> bool {
        self.texture.is_none()
    }

    /// Vertices as `(longitude, latitude)` pairs in degrees
    pub fn lon_lat(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|v| (v.lon(), v.lat())).collect()
    }

    /// Whether the polygon crosses the 0/360 meridian
    ///
    /// True when the vertex longitudes span more than 180 degrees.
    pub fn straddles_seam(&self) -> bool {
        let (min, max) = self
            .vertices
            .iter()
            .map(UnitVector::lon)
            .fold((f64::MAX, f64::MIN), |(lo, hi), lon| (lo.min(lon), hi.max(lon)));
        max - min > 180.0
    }

    /// Like [`lon_lat`](Self::lon_lat), but seam-straddling polygons get their
    /// western vertices shifted by +360 so the ring is continuous on a flat map
    pub fn unwrapped_lon_lat(&self) -> Vec<(f64, f64)> {
        let shift = self.straddles_seam();
        self.vertices
            .iter()
            .map(|v| {
                let lon = if shift && v.lon() < 180.0 {
                    v.lon() + 360.0
                } else {
                    v.lon()
                };
                (lon, v.lat())
            })
            .collect()
    }

    /// Whether `point` lies inside this polygon (boundary included)
    pub fn contains(&self, point: &UnitVector) -> bool {
        polygon_contains(&self.vertices, self.center.xyz(), point.xyz())
    }

    /// Surface area on the unit sphere (steradians)
    ///
    /// Fans the polygon around its centroid and sums the spherical excess of
    /// each triangle.
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        if self.vertices.len() == 3 {
            return triangle_area(
                self.vertices[0].xyz(),
                self.vertices[1].xyz(),
                self.vertices[2].xyz(),
            );
        }

        let center = self.center.xyz();
        (0..self.vertices.len())
            .map(|i| {
                let a = self.vertices[i].xyz();
                let b = self.vertices[(i + 1) % self.vertices.len()].xyz();
                triangle_area(center, a, b)
            })
            .sum()
    }

    /// Great circle distance between centroids on a sphere of `radius`
    pub fn distance_to(&self, other: &MapPolygon, radius: f64) -> f64 {
        radius * self.center.distance(&other.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn octant(id: usize, texture: Option<TextureId>) -> MapPolygon {
        MapPolygon::new(
            id,
            texture,
            2,
            UnitVector::from_xyz(1.0, 1.0, 1.0).unwrap(),
            vec![
                UnitVector::from_lat_lon(90.0, 0.0),
                UnitVector::from_lat_lon(0.0, 90.0),
                UnitVector::from_lat_lon(0.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_polygon_creation() {
        let polygon = octant(4, Some(3));
        assert_eq!(polygon.id, 4);
        assert_eq!(polygon.vertex_count(), 3);
        assert!(!polygon.is_ocean());
        assert!(octant(0, None).is_ocean());
    }

    #[test]
    fn test_octant_area() {
        let polygon = octant(0, None);
        assert!((polygon.area() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_contains() {
        let polygon = octant(0, None);
        assert!(polygon.contains(&UnitVector::from_lat_lon(30.0, 45.0)));
        assert!(polygon.contains(&UnitVector::from_lat_lon(0.0, 45.0)));
        assert!(!polygon.contains(&UnitVector::from_lat_lon(30.0, 135.0)));
        assert!(!polygon.contains(&UnitVector::from_lat_lon(-10.0, 45.0)));
    }

    #[test]
    fn test_distance_to() {
        let a = MapPolygon::new(0, None, 0, UnitVector::from_lat_lon(0.0, 0.0), Vec::new());
        let b = MapPolygon::new(1, None, 0, UnitVector::from_lat_lon(0.0, 90.0), Vec::new());
        assert!((a.distance_to(&b, 10.0) - 10.0 * FRAC_PI_2).abs() < 1e-9);

        let c = MapPolygon::new(2, None, 0, UnitVector::from_lat_lon(0.0, 180.0), Vec::new());
        assert!((a.distance_to(&c, 1.0) - PI).abs() < 1e-9);
    }

    #[test]
    fn test_seam_detection_and_unwrap() {
        let polygon = MapPolygon::new(
            0,
            Some(1),
            1,
            UnitVector::from_lat_lon(10.0, 0.0),
            vec![
                UnitVector::from_lat_lon(20.0, 350.0),
                UnitVector::from_lat_lon(0.0, 10.0),
                UnitVector::from_lat_lon(0.0, 345.0),
            ],
        );
        assert!(polygon.straddles_seam());

        let unwrapped = polygon.unwrapped_lon_lat();
        assert!((unwrapped[0].0 - 350.0).abs() < 1e-9);
        assert!((unwrapped[1].0 - 370.0).abs() < 1e-9);
        let span = unwrapped.iter().map(|p| p.0).fold(f64::MIN, f64::max)
            - unwrapped.iter().map(|p| p.0).fold(f64::MAX, f64::min);
        assert!(span < 180.0);

        assert!(!octant(0, None).straddles_seam());
        assert_eq!(octant(0, None).unwrapped_lon_lat(), octant(0, None).lon_lat());
    }

    #[test]
    fn test_from_unfinalized_section_fails() {
        let section = Section::from_parts(Default::default(), Vec::new(), 0);
        assert_eq!(
            MapPolygon::from_section(0, &section),
            Err(WorldGenError::EmptySection)
        );
    }
}
