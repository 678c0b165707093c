//! Per-frame orbital update: spin and revolve every body.
//!
//! Circular, planar orbits only. Angular rates are cosmetic, not Keplerian.

use crate::api::config::SimulationConfig;
use crate::components::Body;

/// Orbital rate per unit `time_scale`.
pub const ORBIT_RATE: f64 = 5.0;
/// Spin rate per unit `time_scale`. Four times `ORBIT_RATE` so bodies
/// visibly spin faster than they revolve.
pub const ROTATION_RATE: f64 = 20.0;

/// Damping divisor for orbital speed at a given radius.
/// Flatter than 1/r: outer planets are slower without crawling.
pub fn radius_damping(orbital_radius_au: f64) -> f64 {
    orbital_radius_au * 0.4 + 0.6
}

/// Phase advance of `body` over `dt` seconds. Zero for the star.
pub fn orbital_step(body: &Body, config: &SimulationConfig, dt: f64) -> f64 {
    match (body.def.is_star, body.def.orbital_radius_au) {
        (false, Some(au)) => {
            let base = config.time_scale * ORBIT_RATE;
            body.def.orbital_speed_factor * base * dt / radius_damping(au)
        }
        _ => 0.0,
    }
}

/// Spin advance of `body` over `dt` seconds. Sign follows the factor.
pub fn rotation_step(body: &Body, config: &SimulationConfig, dt: f64) -> f64 {
    body.def.rotation_speed_factor * config.time_scale * ROTATION_RATE * dt
}

/// Advance one body by an already accepted `dt`.
pub fn advance_body(body: &mut Body, config: &SimulationConfig, dt: f64) {
    if body.def.rotation_speed_factor != 0.0 {
        body.rotation_angle += rotation_step(body, config, dt);
    }
    if !body.def.is_star {
        body.angle += orbital_step(body, config, dt);
        body.sync_position();
    }
}

/// Advance every body by an already accepted `dt`.
pub fn advance_bodies<'a>(
    bodies: impl Iterator<Item = &'a mut Body>,
    config: &SimulationConfig,
    dt: f64,
) {
    for body in bodies {
        advance_body(body, config, dt);
    }
}
