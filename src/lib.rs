//! Fractal great-circle planet generation
//!
//! Builds a world map by cutting a sphere with random great circles. Every
//! cut raises the terrain on one side, so regions that keep landing on the
//! raised side become mountains and the rest sinks below sea level. The
//! resulting regions are triangulated and textured, ready for any engine.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_fractal_planet::*;
//!
//! // Generate a world
//! let config = WorldConfigBuilder::new()
//!     .seed(42)
//!     .detail(WorldDetail::Coarse)
//!     .water_threshold(55).unwrap()
//!     .build().unwrap();
//!
//! let world = WorldMap::generate(config).unwrap();
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&world, &BasicColorMapper::default(), 1.0);
//! println!("Generated {} triangles", mesh.triangle_count());
//!
//! // Or export the land polygons as lon/lat records
//! let export = WorldExport::from_world(&world);
//! println!("{} land polygons", export.len());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): KD-tree lookup of the polygon under a point
//! - `serde`: Serialization support for configuration, polygons and exports

// Modules
pub mod error;
pub mod config;
pub mod sphere;
pub mod generation;
pub mod generator;
pub mod polygon;
pub mod world;
pub mod export;
pub mod mesh;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{WorldGenError, Result};
pub use config::{TextureId, WorldConfig, WorldConfigBuilder, WorldDetail, MAX_CIRCLES};
pub use sphere::{Pole, UnitVector};
pub use generation::{CircleSet, GreatCircle, IntersectionRef, PairKey, Section, Side};
pub use generator::{RunState, WorldGenerator};
pub use polygon::MapPolygon;
pub use world::WorldMap;
pub use export::{PolygonRecord, WorldExport};
pub use mesh::{MeshData, generate_mesh, generate_mesh_with_visibility, ColorMapper, BasicColorMapper, PaletteColorMapper, TerrainColor};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
