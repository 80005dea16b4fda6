//! Core partition algorithm
//!
//! Splits the sphere with random great circles. [`circles`] owns the circle
//! list and intersection table, [`section`] the regions cut out of the sphere.

pub mod circles;
pub mod section;

pub use circles::{
    CircleSet, GreatCircle, IntersectionRef, PairKey, Side, MAX_SAMPLING_ATTEMPTS,
    MIN_CIRCLE_SEPARATION,
};
pub use section::Section;

use crate::config::WorldConfig;
use crate::error::Result;
use crate::generator::WorldGenerator;

/// Run a full generation from configuration
///
/// Returns the textured leaf sections together with the circle set needed to
/// evaluate their side tests.
pub fn generate_sections(config: &WorldConfig) -> Result<(Vec<Section>, CircleSet)> {
    let mut generator = WorldGenerator::new(config.clone());
    generator.generate()?;
    let circles = generator.circle_set().clone();
    Ok((generator.take_sections(), circles))
}
