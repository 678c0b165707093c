//! Body factory: turns catalog entries into runtime bodies.

use std::f64::consts::TAU;
use std::sync::Arc;

use glam::Vec3;
use rand::Rng;

use crate::api::config::SimulationConfig;
use crate::api::types::BodyId;
use crate::assets::{BodyDefinition, Catalog};
use crate::components::{Body, VisualPart};
use crate::core::scene::Scene;
use crate::error::{ConfigError, ConfigResult};

/// Create one body from its definition.
///
/// The star sits at the origin with no orbit. Every other body gets
/// `orbital_radius_au × distance_factor` and an independent phase drawn
/// uniformly from `[0, 2π)`.
pub fn create_body<R: Rng>(
    id: BodyId,
    def: Arc<BodyDefinition>,
    config: &SimulationConfig,
    rng: &mut R,
) -> ConfigResult<Body> {
    let visual_radius = def.visual_radius * config.size_factor;

    if def.is_star {
        return Ok(Body {
            id,
            def,
            orbital_radius_scene: None,
            angle: 0.0,
            rotation_angle: 0.0,
            position: Vec3::ZERO,
            visual_radius,
        });
    }

    let au = def
        .orbital_radius_au
        .filter(|au| au.is_finite() && *au > 0.0)
        .ok_or_else(|| ConfigError::MissingOrbitalRadius { name: def.name.clone() })?;

    let mut body = Body {
        id,
        def,
        orbital_radius_scene: Some(au * config.distance_factor),
        angle: rng.gen_range(0.0..TAU),
        rotation_angle: 0.0,
        position: Vec3::ZERO,
        visual_radius,
    };
    body.sync_position();
    Ok(body)
}

/// Build the full scene: one body per catalog entry plus its visual parts.
pub fn build_scene<R: Rng>(
    catalog: &Catalog,
    config: &SimulationConfig,
    rng: &mut R,
) -> ConfigResult<Scene> {
    let mut scene = Scene::new();

    for (i, def) in catalog.bodies().iter().enumerate() {
        let id = BodyId(i as u32);
        let body = create_body(id, Arc::new(def.clone()), config, rng)?;
        let radius = body.visual_radius;
        scene.spawn(body);

        scene.attach(VisualPart::sphere(id, radius, def.color).with_emissive(def.is_star));
        if let Some(ring) = &def.rings {
            scene.attach(VisualPart::ring(
                id,
                ring.inner_radius * config.size_factor,
                ring.outer_radius * config.size_factor,
                ring.tilt,
                def.color,
            ));
        }
    }

    log::info!("built scene with {} bodies, {} parts", scene.len(), scene.parts().len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn def(name: &str, is_star: bool, au: Option<f64>) -> Arc<BodyDefinition> {
        Arc::new(BodyDefinition {
            name: name.into(),
            radius_km: 6371.0,
            visual_radius: 5.0,
            color: Color::from_hex(0x0077ff),
            is_star,
            orbital_radius_au: au,
            orbital_speed_factor: if is_star { 0.0 } else { 1.0 },
            rotation_speed_factor: 0.004,
            rings: None,
            distance_from_sun_display: None,
            orbital_period_display: None,
            atmospheric_composition: None,
            moons_display: None,
        })
    }

    #[test]
    fn star_sits_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let sun = create_body(BodyId(0), def("Sun", true, None), &SimulationConfig::default(), &mut rng).unwrap();
        assert_eq!(sun.position, Vec3::ZERO);
        assert!(sun.orbital_radius_scene.is_none());
    }

    #[test]
    fn planet_radius_scales_by_distance_factor() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SimulationConfig { distance_factor: 50.0, ..Default::default() };
        let earth = create_body(BodyId(1), def("Earth", false, Some(1.5)), &config, &mut rng).unwrap();
        assert_eq!(earth.orbital_radius_scene, Some(75.0));
        assert!((earth.planar_distance() - 75.0).abs() < 1e-3);
    }

    #[test]
    fn initial_angles_are_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let config = SimulationConfig::default();
        for i in 0..200 {
            let body = create_body(BodyId(i), def("P", false, Some(1.0)), &config, &mut rng).unwrap();
            assert!(body.angle >= 0.0 && body.angle < TAU, "angle {} out of range", body.angle);
        }
    }

    #[test]
    fn angles_are_independent_per_body() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SimulationConfig::default();
        let a = create_body(BodyId(1), def("A", false, Some(1.0)), &config, &mut rng).unwrap();
        let b = create_body(BodyId(2), def("B", false, Some(1.0)), &config, &mut rng).unwrap();
        assert_ne!(a.angle, b.angle);
    }

    #[test]
    fn planet_without_orbit_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = create_body(BodyId(1), def("Rogue", false, None), &SimulationConfig::default(), &mut rng);
        assert!(matches!(err, Err(ConfigError::MissingOrbitalRadius { .. })));
    }

    #[test]
    fn size_factor_scales_visual_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SimulationConfig { size_factor: 2.0, ..Default::default() };
        let body = create_body(BodyId(1), def("Earth", false, Some(1.0)), &config, &mut rng).unwrap();
        assert_eq!(body.visual_radius, 10.0);
    }

    #[test]
    fn build_scene_spawns_whole_catalog() {
        let catalog = Catalog::solar_system().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let scene = build_scene(&catalog, &SimulationConfig::default(), &mut rng).unwrap();
        assert_eq!(scene.len(), catalog.len());
        // One sphere each, plus Saturn's ring.
        assert_eq!(scene.parts().len(), catalog.len() + 1);
        assert!(scene.parts()[0].emissive);
    }
}
