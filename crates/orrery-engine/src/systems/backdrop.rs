//! Static scene dressing generated once at startup:
//! the starfield and the orbit path polylines.

use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::api::config::{OrbitPathConfig, StarfieldConfig};
use crate::api::types::BodyId;
use crate::core::scene::Scene;

/// Scatter `count` star points uniformly inside a cube of side `spread`
/// centered on the origin.
pub fn generate_starfield<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Vec<Vec3> {
    let half = config.spread / 2.0;
    if half <= 0.0 {
        return vec![Vec3::ZERO; config.count];
    }
    (0..config.count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Closed circle of `segments + 1` evenly spaced points in the XZ plane.
/// The last point repeats the first.
pub fn circle_points(radius: f64, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let a = TAU * i as f64 / segments as f64;
            Vec3::new((radius * a.cos()) as f32, 0.0, (radius * a.sin()) as f32)
        })
        .collect()
}

/// One orbit path per orbiting body.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    pub body: BodyId,
    pub points: Vec<Vec3>,
}

pub fn orbit_paths(scene: &Scene, config: &OrbitPathConfig) -> Vec<OrbitPath> {
    scene
        .iter()
        .filter_map(|body| {
            let radius = body.orbital_radius_scene?;
            Some(OrbitPath {
                body: body.id,
                points: circle_points(radius, config.segments),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimulationConfig;
    use crate::assets::Catalog;
    use crate::core::factory::build_scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starfield_fills_the_cube() {
        let config = StarfieldConfig { count: 500, spread: 200.0, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(4);
        let stars = generate_starfield(&config, &mut rng);
        assert_eq!(stars.len(), 500);
        for s in &stars {
            assert!(s.abs().max_element() <= 100.0);
        }
    }

    #[test]
    fn circle_is_closed_and_round() {
        let pts = circle_points(50.0, 128);
        assert_eq!(pts.len(), 129);
        assert!(pts[0].distance(pts[128]) < 1e-3);
        for p in &pts {
            assert!((p.length() - 50.0).abs() < 1e-3);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn every_planet_gets_a_path() {
        let catalog = Catalog::solar_system().unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let scene = build_scene(&catalog, &SimulationConfig::default(), &mut rng).unwrap();
        let paths = orbit_paths(&scene, &OrbitPathConfig::default());
        assert_eq!(paths.len(), catalog.len() - 1);
        let neptune = scene.find_by_name("Neptune").unwrap();
        let path = paths.iter().find(|p| p.body == neptune.id).unwrap();
        assert!((path.points[0].length() as f64 - 30.05 * 50.0).abs() < 0.1);
    }
}
