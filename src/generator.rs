//! WorldGenerator: the fractal great-circle partition
//!
//! Places great circles one at a time. Every active [`Section`] is tested
//! against each new circle and may split in two; once all circles are placed
//! the leaves are turned into triangles and textured from their height and
//! their distance to the poles.

use std::fmt::Write as _;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{validate_circles, validate_percent, TextureId, WorldConfig, WorldDetail};
use crate::error::{Result, WorldGenError};
use crate::generation::{CircleSet, GreatCircle, PairKey, Section, Side};
use crate::sphere::UnitVector;

/// Progress of a generator's single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Initialized, `generate()` not called yet
    Ready,
    /// `generate()` finished; results are available
    Complete,
    /// `generate()` raised; the state is inconsistent and must be discarded
    Failed,
}

/// Orchestrates one world generation run
///
/// Generic over the random source `R`; [`WorldGenerator::new`] uses
/// [`ChaCha8Rng`]. A generator runs once: after `generate()` returns (with or
/// without an error) it must be re-initialized with [`init`](Self::init)
/// before generating again.
///
/// # Example
///
/// ```
/// use rust_fractal_planet::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(7)
///     .circles(6)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut generator = WorldGenerator::new(config);
/// let leaves = generator.generate().unwrap();
/// assert!(leaves.iter().all(|leaf| leaf.polygon().len() == 3));
/// ```
#[derive(Debug, Clone)]
pub struct WorldGenerator<R = ChaCha8Rng> {
    config: WorldConfig,
    rng: R,
    circles: CircleSet,
    active: Vec<Section>,
    pending: Vec<Section>,
    leaves: Vec<Section>,
    height_range: Option<(u32, u32)>,
    state: RunState,
}

impl WorldGenerator<ChaCha8Rng> {
    /// Create a generator driven by [`ChaCha8Rng`]
    pub fn new(config: WorldConfig) -> Self {
        Self::with_rng(config)
    }
}

impl<R: Rng + SeedableRng> WorldGenerator<R> {
    /// Create a generator with a caller-chosen random source
    pub fn with_rng(config: WorldConfig) -> Self {
        let rng = R::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            circles: CircleSet::new(),
            active: Vec::new(),
            pending: Vec::new(),
            leaves: Vec::new(),
            height_range: None,
            state: RunState::Ready,
        }
    }

    /// Reset all run state and reseed the random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unsupported circle count or a percentage above 100
    pub fn init(
        &mut self,
        seed: u64,
        number_of_circles: usize,
        water_threshold: u32,
        poles_threshold: u32,
    ) -> Result<()> {
        validate_circles(number_of_circles)?;
        validate_percent("water threshold", water_threshold)?;
        validate_percent("poles threshold", poles_threshold)?;

        self.config.seed = seed;
        self.config.detail = WorldDetail::Custom {
            circles: number_of_circles,
        };
        self.config.water_threshold = water_threshold;
        self.config.poles_threshold = poles_threshold;
        self.reset();
        Ok(())
    }

    /// Replace the land texture list (lowest altitude first)
    pub fn set_altitude_textures(&mut self, textures: Vec<TextureId>) {
        self.config.altitude_textures = textures;
    }

    /// Replace the polar texture list (innermost first)
    pub fn set_pole_textures(&mut self, textures: Vec<TextureId>) {
        self.config.pole_textures = textures;
    }

    fn reset(&mut self) {
        self.rng = R::seed_from_u64(self.config.seed);
        self.circles = CircleSet::new();
        self.active.clear();
        self.pending.clear();
        self.leaves.clear();
        self.height_range = None;
        self.state = RunState::Ready;
    }

    /// Run the whole generation
    ///
    /// Returns the finalized, textured leaf sections. On error a diagnostic
    /// dump of all circles, intersections and sections is logged before the
    /// error is returned, and the generator is left in [`RunState::Failed`].
    ///
    /// # Errors
    ///
    /// - `RunConsumed` if this generator already ran since the last `init()`
    /// - `EmptySection` for a single-circle world
    /// - `PoleConflict` if a leaf claims both poles
    pub fn generate(&mut self) -> Result<&[Section]> {
        if self.state != RunState::Ready {
            return Err(WorldGenError::RunConsumed);
        }

        match self.run() {
            Ok(()) => {
                self.state = RunState::Complete;
                Ok(&self.leaves)
            }
            Err(error) => {
                self.state = RunState::Failed;
                self.dump_diagnostics(&error);
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<()> {
        let first = self.circles.sample_circle(&mut self.rng)?;
        self.active.push(Section::hemisphere(first, Side::Positive, 1));
        self.active.push(Section::hemisphere(first, Side::Negative, 0));

        for _ in 1..self.config.number_of_circles() {
            let circle = self.circles.sample_circle(&mut self.rng)?;

            for section in &mut self.active {
                if let Some(sibling) = section.intersect_with_great_circle(circle, &self.circles)? {
                    self.pending.push(sibling);
                }
            }

            tracing::debug!(
                circle,
                active = self.active.len(),
                split = self.pending.len(),
                "Placed great circle"
            );
            self.active.append(&mut self.pending);
        }

        let mut leaves = Vec::with_capacity(self.active.len() * 3);
        for section in &mut self.active {
            leaves.extend(section.finalize_polygon(&self.circles)?);
        }
        self.leaves = leaves;

        self.assign_textures();
        Ok(())
    }

    /// Texture every leaf from its height and pole proximity
    fn assign_textures(&mut self) {
        let Some(min) = self.leaves.iter().map(Section::height).min() else {
            return;
        };
        let max = self.leaves.iter().map(Section::height).max().unwrap_or(min);
        self.height_range = Some((min, max));

        let range = i64::from(max - min);
        let sea_level = range * i64::from(self.config.water_threshold) / 100;
        let land_range = range - sea_level;

        let poles_fraction = f64::from(self.config.poles_threshold) / 100.0;
        let pole_limit = 1.0 - poles_fraction;
        let altitude = &self.config.altitude_textures;
        let poles = &self.config.pole_textures;

        for leaf in &mut self.leaves {
            let pole_dot = leaf
                .center()
                .map(|center| center.dot(&UnitVector::NORTH_POLE).abs())
                .unwrap_or(0.0);

            let texture = if !poles.is_empty() && pole_dot > pole_limit {
                let distance = (1.0 - pole_dot) / poles_fraction;
                let index = (distance * poles.len() as f64) as usize;
                Some(poles[index.min(poles.len() - 1)])
            } else if land_range > 0 && !altitude.is_empty() {
                let percent = (i64::from(leaf.height()) - i64::from(min) - sea_level) * 100 / land_range;
                if percent > 0 {
                    let index = (percent * altitude.len() as i64 / 100) as usize;
                    Some(altitude[index.min(altitude.len() - 1)])
                } else {
                    None
                }
            } else {
                None
            };
            leaf.set_texture(texture);
        }

        tracing::info!(
            leaves = self.leaves.len(),
            min_height = min,
            max_height = max,
            sea_level,
            "World generation complete"
        );
    }

    fn dump_diagnostics(&self, error: &WorldGenError) {
        tracing::error!(
            %error,
            circles = self.circles.len(),
            active = self.active.len(),
            pending = self.pending.len(),
            "World generation failed"
        );
        for line in self.diagnostic_report().lines() {
            tracing::error!("{}", line);
        }
    }

    /// Render every circle, intersection, active and pending section as text
    pub fn diagnostic_report(&self) -> String {
        let mut report = String::new();

        let _ = writeln!(report, "circles: {}", self.circles.len());
        for circle in self.circles.circles() {
            let _ = writeln!(
                report,
                "  circle {}: normal=({:.6}, {:.6}, {:.6})",
                circle.index,
                circle.normal.x(),
                circle.normal.y(),
                circle.normal.z()
            );
        }

        let _ = writeln!(report, "intersections: {}", self.circles.intersections().len());
        for (pair, point) in self.circles.intersections() {
            let _ = writeln!(
                report,
                "  {}: lat={:.6} lon={:.6}",
                pair,
                point.lat(),
                point.lon()
            );
        }

        let _ = writeln!(report, "active sections: {}", self.active.len());
        for (i, section) in self.active.iter().enumerate() {
            let _ = writeln!(report, "  [{}] {}", i, section);
        }

        let _ = writeln!(report, "pending sections: {}", self.pending.len());
        for (i, section) in self.pending.iter().enumerate() {
            let _ = writeln!(report, "  [{}] {}", i, section);
        }

        report
    }

    /// Configuration of the current run
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Great circles placed so far
    #[inline]
    pub fn circles(&self) -> &[GreatCircle] {
        self.circles.circles()
    }

    /// The circle set, including the intersection table
    #[inline]
    pub fn circle_set(&self) -> &CircleSet {
        &self.circles
    }

    /// Canonical intersection point of two circles
    pub fn intersection(&self, a: usize, b: usize) -> Option<UnitVector> {
        self.circles.intersections().get(&PairKey::new(a, b)).copied()
    }

    /// Sections before triangulation (after a run, these are finalized parents)
    #[inline]
    pub fn active_sections(&self) -> &[Section] {
        &self.active
    }

    /// Finalized, textured leaf sections (empty until a run completes)
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.leaves
    }

    /// Lowest and highest leaf height of the completed run
    #[inline]
    pub fn height_range(&self) -> Option<(u32, u32)> {
        self.height_range
    }

    /// Hand the leaves over, leaving the generator consumed
    pub(crate) fn take_sections(&mut self) -> Vec<Section> {
        std::mem::take(&mut self.leaves)
    }
}
