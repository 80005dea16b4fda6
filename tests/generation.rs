//! End-to-end properties of generated worlds

use std::f64::consts::PI;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_fractal_planet::generation::MIN_CIRCLE_SEPARATION;
use rust_fractal_planet::*;

fn config(seed: u64, circles: usize) -> WorldConfig {
    WorldConfigBuilder::new()
        .seed(seed)
        .circles(circles)
        .unwrap()
        .build()
        .unwrap()
}

fn run(seed: u64, circles: usize) -> WorldGenerator {
    let mut generator = WorldGenerator::new(config(seed, circles));
    generator.generate().unwrap();
    generator
}

#[test]
fn every_point_lies_in_exactly_one_leaf() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);

    for (seed, circles) in [(1, 2), (2, 5), (3, 12)] {
        let generator = run(seed, circles);
        let set = generator.circle_set();

        for _ in 0..400 {
            let point = UnitVector::random(&mut rng);
            let hits = generator
                .sections()
                .iter()
                .filter(|leaf| leaf.contains(&point, set).unwrap())
                .count();
            assert_eq!(hits, 1, "N={} point {:?} hit {} leaves", circles, point, hits);
        }
    }
}

#[test]
fn heights_stay_within_circle_count() {
    for circles in [2, 3, 8, 20] {
        let generator = run(40 + circles as u64, circles);
        let (min, max) = generator.height_range().unwrap();
        assert!(max <= circles as u32 - 1, "N={} max height {}", circles, max);
        assert!(min < max);

        for leaf in generator.sections() {
            assert!(leaf.height() >= min && leaf.height() <= max);
        }
    }
}

#[test]
fn every_leaf_is_a_triangle() {
    let generator = run(77, 16);
    assert!(!generator.sections().is_empty());
    for leaf in generator.sections() {
        assert_eq!(leaf.polygon().len(), 3);
        assert!(leaf.boundary().is_empty());
        assert!(leaf.center().is_some());
    }
}

#[test]
fn circles_keep_minimum_separation() {
    let generator = run(5, 60);
    let min = generator.circle_set().min_separation().unwrap();
    assert!(min >= MIN_CIRCLE_SEPARATION);
}

#[test]
fn two_circles_split_land_from_ocean() {
    let config = WorldConfigBuilder::new()
        .seed(2)
        .circles(2)
        .unwrap()
        .water_threshold(50)
        .unwrap()
        .poles_threshold(0)
        .unwrap()
        .altitude_textures(vec![1, 2, 3, 4])
        .unwrap()
        .build()
        .unwrap();

    let world = WorldMap::generate(config).unwrap();
    assert_eq!(world.height_range(), (0, 1));
    for polygon in world.polygons() {
        match polygon.height {
            0 => assert!(polygon.is_ocean()),
            _ => assert_eq!(polygon.texture, Some(4)),
        }
    }

    // The two hemispheres of the first circle each hold half the sphere
    let land: f64 = world.land_polygons().map(MapPolygon::area).sum();
    assert!((land - 2.0 * PI).abs() < 1e-6);
}

#[test]
fn single_circle_fails_and_keeps_diagnostics() {
    let mut generator = WorldGenerator::new(config(9, 1));
    assert_eq!(generator.generate().err(), Some(WorldGenError::EmptySection));
    assert_eq!(generator.state(), RunState::Failed);
    assert!(generator.diagnostic_report().contains("circle 0"));
}

#[test]
fn same_seed_same_world() {
    let a = WorldMap::generate(config(2024, 30)).unwrap();
    let b = WorldMap::generate(config(2024, 30)).unwrap();
    assert_eq!(a.polygons(), b.polygons());
    assert_eq!(WorldExport::from_world(&a), WorldExport::from_world(&b));
}

#[test]
fn polygon_areas_cover_the_sphere() {
    for (seed, circles) in [(11, 2), (12, 7), (13, 25)] {
        let world = WorldMap::generate(config(seed, circles)).unwrap();
        assert!(
            (world.total_area() - 4.0 * PI).abs() < 1e-6,
            "N={} area {}",
            circles,
            world.total_area()
        );
    }
}

#[test]
fn pole_is_a_fan_apex() {
    let generator = run(21, 10);
    for pole in [UnitVector::NORTH_POLE, UnitVector::SOUTH_POLE] {
        let apexes = generator
            .sections()
            .iter()
            .filter(|leaf| leaf.polygon().contains(&pole))
            .count();
        assert!(apexes >= 3, "pole {:?} shared by {} leaves", pole, apexes);
    }
}
