//! Complete workflow demonstration for rust_fractal_planet
//!
//! Run with `RUST_LOG=debug` to watch each great circle being placed.

use rust_fractal_planet::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== rust_fractal_planet Demo ===\n");

    // Step 1: Configure world
    println!("Step 1: Configuring world...");
    let config = WorldConfigBuilder::new()
        .seed(12345)
        .detail(WorldDetail::Standard)
        .water_threshold(55)?
        .poles_threshold(12)?
        .build()?;

    println!("  Seed: {}", config.seed);
    println!(
        "  Detail: {} ({} circles)",
        config.detail.name(),
        config.number_of_circles()
    );
    println!("  Water: {}%  Poles: {}%", config.water_threshold, config.poles_threshold);

    // Step 2: Generate world
    println!("\nStep 2: Generating world...");
    let world = WorldMap::generate(config)?;
    let (min, max) = world.height_range();
    println!("  Generated {} polygons", world.polygon_count());
    println!("  Heights: {}..={}", min, max);

    // Step 3: Texture distribution
    println!("\nStep 3: Texture distribution:");
    let mut counts = std::collections::BTreeMap::new();
    for polygon in world.polygons() {
        *counts.entry(polygon.texture).or_insert(0usize) += 1;
    }
    for (texture, count) in &counts {
        let pct = (*count as f64 / world.polygon_count() as f64) * 100.0;
        let label = match texture {
            Some(id) => format!("texture {}", id),
            None => "ocean".to_string(),
        };
        println!("  {}: {} ({:.1}%)", label, count, pct);
    }

    // Step 4: Point queries
    println!("\nStep 4: Point queries:");
    for (lat, lon) in [(0.0, 0.0), (45.0, 90.0), (-89.5, 200.0)] {
        let point = UnitVector::from_lat_lon(lat, lon);
        if let Some(id) = world.find_polygon_at(&point) {
            let polygon = &world.polygons()[id];
            println!(
                "  ({:>6.1}, {:>6.1}) -> polygon {} (height {}, {:?})",
                lat, lon, id, polygon.height, polygon.texture
            );
        }
    }

    // Step 5: Export and mesh
    println!("\nStep 5: Export and mesh...");
    let export = WorldExport::from_world(&world);
    println!("  Exported {} land polygons", export.len());
    if let Some(record) = export.flat_records().first() {
        println!("  First record: {:?}", record);
    }

    let mesh = generate_mesh(&world, &BasicColorMapper::default(), 6371.0);
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());

    println!("\n=== Demo Complete ===");
    Ok(())
}
