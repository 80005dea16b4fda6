//! World Configuration and Builder
//!
//! This module provides configuration types for deterministic world generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldGenError};

/// Texture identifier supplied by mod content
///
/// Opaque to the generator; it only picks ids from the configured lists.
pub type TextureId = i32;

/// Upper bound on the number of great circles per world
///
/// The partition grows quadratically with the circle count, so this keeps a
/// single `generate()` call bounded.
pub const MAX_CIRCLES: usize = 512;

/// Detail presets for the fractal globe
///
/// Each preset maps to a number of great circles. More circles give smaller,
/// more numerous polygons and a wider height range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WorldDetail {
    /// 16 circles: a handful of large continents
    Coarse,
    /// 48 circles (default)
    #[default]
    Standard,
    /// 96 circles: detailed coastlines
    Fine,
    /// Explicit circle count
    Custom {
        /// Number of great circles to place
        circles: usize,
    },
}

impl WorldDetail {
    /// Number of great circles for this preset
    pub fn circle_count(self) -> usize {
        match self {
            WorldDetail::Coarse => 16,
            WorldDetail::Standard => 48,
            WorldDetail::Fine => 96,
            WorldDetail::Custom { circles } => circles,
        }
    }

    /// Get a human-readable name for this preset
    pub fn name(self) -> &'static str {
        match self {
            WorldDetail::Coarse => "Coarse",
            WorldDetail::Standard => "Standard",
            WorldDetail::Fine => "Fine",
            WorldDetail::Custom { .. } => "Custom",
        }
    }
}

/// Configuration for deterministic world generation
///
/// The same configuration always produces the identical world, so saving the
/// configuration (the seed in particular) is enough to rebuild a map.
///
/// # Example
///
/// ```rust
/// use rust_fractal_planet::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .detail(WorldDetail::Coarse)
///     .water_threshold(60)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.number_of_circles(), 16);
/// assert_eq!(config.water_threshold, 60);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Random seed for circle placement
    pub seed: u64,

    /// Detail preset (determines the number of great circles)
    pub detail: WorldDetail,

    /// Share of the height range, in percent, that lies below sea level
    ///
    /// Sections must be strictly above this level to receive a land texture.
    pub water_threshold: u32,

    /// Polar cap size in percent
    ///
    /// A section whose centroid has `|c · pole| > 1 - poles_threshold / 100`
    /// receives a pole texture. 0 disables polar caps.
    pub poles_threshold: u32,

    /// Land textures ordered from lowest to highest altitude
    pub altitude_textures: Vec<TextureId>,

    /// Polar textures ordered from the pole outwards (may be empty)
    pub pole_textures: Vec<TextureId>,
}

impl WorldConfig {
    /// Number of great circles to place
    #[inline]
    pub fn number_of_circles(&self) -> usize {
        self.detail.circle_count()
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfigBuilder::new().seed(0).build_unchecked()
    }
}

/// Check a circle count against the supported range
///
/// A single circle is accepted on purpose: generation then fails with
/// [`WorldGenError::EmptySection`], since no intersections exist to build polygons from.
pub(crate) fn validate_circles(circles: usize) -> Result<()> {
    if circles == 0 || circles > MAX_CIRCLES {
        return Err(WorldGenError::InvalidConfig(format!(
            "number of circles must be in 1..={} (got {})",
            MAX_CIRCLES, circles
        )));
    }
    Ok(())
}

/// Check a percentage setting
pub(crate) fn validate_percent(name: &str, value: u32) -> Result<()> {
    if value > 100 {
        return Err(WorldGenError::InvalidConfig(format!(
            "{} must be <= 100 (got {})",
            name, value
        )));
    }
    Ok(())
}

/// Builder for creating WorldConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_fractal_planet::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(12345)
///     .circles(24)
///     .unwrap()
///     .poles_threshold(15)
///     .unwrap()
///     .altitude_textures(vec![10, 11, 12])
///     .unwrap()
///     .pole_textures(vec![20])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.number_of_circles(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct WorldConfigBuilder {
    seed: Option<u64>,
    detail: WorldDetail,
    water_threshold: u32,
    poles_threshold: u32,
    altitude_textures: Vec<TextureId>,
    pole_textures: Vec<TextureId>,
}

impl WorldConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - detail: Standard (48 circles)
    /// - water_threshold: 50 %
    /// - poles_threshold: 10 %
    /// - altitude_textures: 0 through 5
    /// - pole_textures: 6, 7
    pub fn new() -> Self {
        Self {
            seed: None,
            detail: WorldDetail::default(),
            water_threshold: 50,
            poles_threshold: 10,
            altitude_textures: (0..=5).collect(),
            pole_textures: vec![6, 7],
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the detail preset
    pub fn detail(mut self, detail: WorldDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Set an explicit number of great circles
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `circles` is 0 or above [`MAX_CIRCLES`]
    pub fn circles(mut self, circles: usize) -> Result<Self> {
        validate_circles(circles)?;
        self.detail = WorldDetail::Custom { circles };
        Ok(self)
    }

    /// Set the water threshold in percent
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the value is above 100
    pub fn water_threshold(mut self, percent: u32) -> Result<Self> {
        validate_percent("water threshold", percent)?;
        self.water_threshold = percent;
        Ok(self)
    }

    /// Set the polar cap threshold in percent
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the value is above 100
    pub fn poles_threshold(mut self, percent: u32) -> Result<Self> {
        validate_percent("poles threshold", percent)?;
        self.poles_threshold = percent;
        Ok(self)
    }

    /// Set the land textures, lowest altitude first
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the list is empty
    pub fn altitude_textures(mut self, textures: Vec<TextureId>) -> Result<Self> {
        if textures.is_empty() {
            return Err(WorldGenError::InvalidConfig(
                "at least one altitude texture is required".to_string(),
            ));
        }
        self.altitude_textures = textures;
        Ok(self)
    }

    /// Set the polar textures, innermost first
    ///
    /// An empty list disables polar caps.
    pub fn pole_textures(mut self, textures: Vec<TextureId>) -> Self {
        self.pole_textures = textures;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a custom detail preset carries an unsupported circle count
    pub fn build(self) -> Result<WorldConfig> {
        validate_circles(self.detail.circle_count())?;
        Ok(self.build_unchecked())
    }

    fn build_unchecked(self) -> WorldConfig {
        WorldConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            detail: self.detail,
            water_threshold: self.water_threshold,
            poles_threshold: self.poles_threshold,
            altitude_textures: self.altitude_textures,
            pole_textures: self.pole_textures,
        }
    }
}

impl Default for WorldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
