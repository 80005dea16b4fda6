//! Unit vectors on the sphere surface
//!
//! [`UnitVector`] is the value type every other module works with: circle
//! normals, intersection points, section centroids and polygon vertices are
//! all unit vectors carrying their derived latitude and longitude.
//!
//! # Conventions
//!
//! - The north pole is `+Z`, the south pole `-Z`.
//! - Longitude is measured from `+X` towards `+Y` and lies in `[0, 360)`.
//! - Latitude lies in `[-90, 90]`.

use std::ops::Neg;

use glam::{DQuat, DVec3};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vectors shorter than this cannot be normalized onto the sphere
const MIN_NORMALIZE_LENGTH: f64 = 1e-12;

/// A point on the unit sphere with cached latitude/longitude (degrees)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVector {
    xyz: DVec3,
    lat: f64,
    lon: f64,
}

impl UnitVector {
    /// The true north pole
    pub const NORTH_POLE: UnitVector = UnitVector {
        xyz: DVec3::Z,
        lat: 90.0,
        lon: 0.0,
    };

    /// The true south pole
    pub const SOUTH_POLE: UnitVector = UnitVector {
        xyz: DVec3::NEG_Z,
        lat: -90.0,
        lon: 0.0,
    };

    /// Create a unit vector from latitude and longitude in degrees
    ///
    /// Latitude is clamped to `[-90, 90]`, longitude wrapped into `[0, 360)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_fractal_planet::UnitVector;
    ///
    /// let v = UnitVector::from_lat_lon(0.0, 450.0);
    /// assert!((v.lon() - 90.0).abs() < 1e-9);
    /// assert!((v.y() - 1.0).abs() < 1e-9);
    /// ```
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        let lat = lat.clamp(-90.0, 90.0);
        let lon = wrap_longitude(lon);
        let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon.to_radians().sin_cos();

        Self {
            xyz: DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
            lat,
            lon,
        }
    }

    /// Create a unit vector by normalizing an arbitrary vector
    ///
    /// Returns `None` for (near) zero-length or non-finite input.
    pub fn from_vec(v: DVec3) -> Option<Self> {
        if !v.is_finite() || v.length() < MIN_NORMALIZE_LENGTH {
            return None;
        }
        let xyz = v.normalize();
        let lat = xyz.z.clamp(-1.0, 1.0).asin().to_degrees();
        let lon = wrap_longitude(xyz.y.atan2(xyz.x).to_degrees());

        Some(Self { xyz, lat, lon })
    }

    /// Create a unit vector by normalizing raw Cartesian components
    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Option<Self> {
        Self::from_vec(DVec3::new(x, y, z))
    }

    /// Draw a point uniformly distributed over the sphere
    ///
    /// Latitude uses the arcsine transform so that area, not angle, is uniform.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lat = rng.gen_range(-1.0..=1.0_f64).asin().to_degrees();
        let lon = rng.gen_range(0.0..360.0);
        Self::from_lat_lon(lat, lon)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    /// Cartesian components as a glam vector
    #[inline]
    pub fn xyz(&self) -> DVec3 {
        self.xyz
    }

    /// Latitude in degrees, `[-90, 90]`
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, `[0, 360)`
    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Dot product; its sign tells which side of a great circle (given by its
    /// normal) this point lies on
    #[inline]
    pub fn dot(&self, other: &UnitVector) -> f64 {
        self.xyz.dot(other.xyz)
    }

    /// Normalized cross product
    ///
    /// For two circle normals this is one of the two points where the circles
    /// meet; the other is its negation. Returns `None` for parallel inputs.
    pub fn cross(&self, other: &UnitVector) -> Option<UnitVector> {
        Self::from_vec(self.xyz.cross(other.xyz))
    }

    /// Great-circle distance in radians
    pub fn distance(&self, other: &UnitVector) -> f64 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }

    /// Rotate around `axis` by `angle_degrees` (right-handed)
    pub fn rotate(&self, axis: &UnitVector, angle_degrees: f64) -> UnitVector {
        let rotation = DQuat::from_axis_angle(axis.xyz, angle_degrees.to_radians());
        Self::from_vec(rotation * self.xyz).unwrap_or(*self)
    }
}

impl Neg for UnitVector {
    type Output = UnitVector;

    fn neg(self) -> UnitVector {
        let lon = if self.lat.abs() >= 90.0 {
            self.lon
        } else {
            wrap_longitude(self.lon + 180.0)
        };
        UnitVector {
            xyz: -self.xyz,
            lat: -self.lat,
            lon,
        }
    }
}

/// One of the two geographic poles
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pole {
    North,
    South,
}

impl Pole {
    /// The pole as a unit vector
    pub fn vector(self) -> UnitVector {
        match self {
            Pole::North => UnitVector::NORTH_POLE,
            Pole::South => UnitVector::SOUTH_POLE,
        }
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = lon.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Orthonormal (east, north) basis of the tangent plane at `center`
///
/// Near the poles east is undefined, so a fixed reference axis is used instead.
pub(crate) fn tangent_basis(center: DVec3) -> (DVec3, DVec3) {
    let reference = if center.z.abs() < 0.9 { DVec3::Z } else { DVec3::X };
    let east = reference.cross(center).normalize();
    let north = center.cross(east).normalize();
    (east, north)
}

/// Bearing of `point` seen from the tangent frame `(east, north)`
#[inline]
pub(crate) fn bearing(basis: (DVec3, DVec3), point: DVec3) -> f64 {
    point.dot(basis.1).atan2(point.dot(basis.0))
}

/// Test whether `point` lies inside the convex spherical polygon `vertices`
///
/// `interior` is any point strictly inside the polygon; it fixes the orientation
/// of every edge so vertex winding does not matter.
pub(crate) fn polygon_contains(vertices: &[UnitVector], interior: DVec3, point: DVec3) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    (0..vertices.len()).all(|i| {
        let a = vertices[i].xyz;
        let b = vertices[(i + 1) % vertices.len()].xyz;
        let edge_normal = a.cross(b);
        let orientation = edge_normal.dot(interior).signum();
        edge_normal.dot(point) * orientation >= 0.0
    })
}

/// Area (spherical excess) of the spherical triangle `abc` on the unit sphere
pub(crate) fn triangle_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    let triple = a.dot(b.cross(c)).abs();
    let denominator = 1.0 + a.dot(b) + b.dot(c) + c.dot(a);
    2.0 * triple.atan2(denominator)
}
