use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Built-in catalog: the Sun and the eight planets.
const SOLAR_SYSTEM_JSON: &str = include_str!("solar_system.json");

/// RGB color parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_hex(self) -> u32 {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (c(self.r) << 16) | (c(self.g) << 8) | c(self.b)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6)
            .ok_or_else(|| ConfigError::InvalidColor(s.clone()))?;
        let hex = u32::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidColor(s.clone()))?;
        Ok(Self::from_hex(hex))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        format!("#{:06x}", c.to_hex())
    }
}

/// Flat ring attached to a body (e.g. Saturn's rings).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingDefinition {
    /// Inner radius in scene units, before `size_factor`.
    pub inner_radius: f32,
    /// Outer radius in scene units, before `size_factor`.
    pub outer_radius: f32,
    /// Tilt of the ring plane about the X axis (radians).
    #[serde(default)]
    pub tilt: f32,
}

/// Immutable description of one celestial body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDefinition {
    pub name: String,
    /// Physical radius in kilometres (display only).
    pub radius_km: f64,
    /// Sphere radius in scene units, before `size_factor`.
    pub visual_radius: f32,
    pub color: Color,
    #[serde(default)]
    pub is_star: bool,
    /// Mean orbital radius in AU. Absent for the star.
    #[serde(default, rename = "orbitalRadiusAU")]
    pub orbital_radius_au: Option<f64>,
    /// Angular rate relative to Earth (Earth = 1.0, star = 0).
    #[serde(default)]
    pub orbital_speed_factor: f64,
    /// Signed spin rate; negative is retrograde.
    #[serde(default)]
    pub rotation_speed_factor: f64,
    #[serde(default)]
    pub rings: Option<RingDefinition>,

    #[serde(default)]
    pub distance_from_sun_display: Option<String>,
    #[serde(default)]
    pub orbital_period_display: Option<String>,
    #[serde(default)]
    pub atmospheric_composition: Option<String>,
    #[serde(default)]
    pub moons_display: Option<String>,
}

impl BodyDefinition {
    /// Check the per-body invariants. Star-count checks live on `Catalog`.
    pub fn validate(&self) -> ConfigResult<()> {
        let name = || self.name.clone();
        positive(&self.name, "radiusKm", self.radius_km)?;
        positive(&self.name, "visualRadius", self.visual_radius as f64)?;
        finite(&self.name, "orbitalSpeedFactor", self.orbital_speed_factor)?;
        finite(&self.name, "rotationSpeedFactor", self.rotation_speed_factor)?;

        if self.is_star {
            if self.orbital_speed_factor != 0.0 {
                return Err(ConfigError::StarOrbitalSpeed {
                    name: name(),
                    value: self.orbital_speed_factor,
                });
            }
            if self.orbital_radius_au.is_some() {
                return Err(ConfigError::StarOrbitalRadius { name: name() });
            }
        } else {
            let au = self
                .orbital_radius_au
                .ok_or_else(|| ConfigError::MissingOrbitalRadius { name: name() })?;
            positive(&self.name, "orbitalRadiusAU", au)?;
        }

        if let Some(ring) = &self.rings {
            positive(&self.name, "rings.innerRadius", ring.inner_radius as f64)?;
            positive(&self.name, "rings.outerRadius", ring.outer_radius as f64)?;
            finite(&self.name, "rings.tilt", ring.tilt as f64)?;
            if ring.outer_radius <= ring.inner_radius {
                return Err(ConfigError::NonPositive {
                    name: name(),
                    field: "rings.outerRadius - rings.innerRadius",
                    value: (ring.outer_radius - ring.inner_radius) as f64,
                });
            }
        }
        Ok(())
    }
}

fn positive(name: &str, field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name: name.to_owned(), field, value })
    }
}

fn finite(name: &str, field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name: name.to_owned(), field, value })
    }
}

/// Ordered, validated list of body definitions with exactly one star.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    bodies: Vec<BodyDefinition>,
}

impl Catalog {
    /// Validate and wrap a list of definitions.
    pub fn new(bodies: Vec<BodyDefinition>) -> ConfigResult<Self> {
        if bodies.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut star: Option<&str> = None;
        for body in &bodies {
            body.validate()?;
            if body.is_star {
                if let Some(first) = star {
                    return Err(ConfigError::MultipleStars {
                        first: first.to_owned(),
                        second: body.name.clone(),
                    });
                }
                star = Some(&body.name);
            }
        }
        if star.is_none() {
            return Err(ConfigError::MissingStar);
        }
        Ok(Self { bodies })
    }

    /// Parse a catalog from a JSON array of body definitions.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let bodies: Vec<BodyDefinition> = serde_json::from_str(json)?;
        Self::new(bodies)
    }

    /// The built-in solar-system catalog.
    pub fn solar_system() -> ConfigResult<Self> {
        Self::from_json(SOLAR_SYSTEM_JSON)
    }

    pub fn bodies(&self) -> &[BodyDefinition] {
        &self.bodies
    }

    pub fn star(&self) -> &BodyDefinition {
        // Construction guarantees exactly one star.
        self.bodies
            .iter()
            .find(|b| b.is_star)
            .unwrap_or(&self.bodies[0])
    }

    pub fn get(&self, name: &str) -> Option<&BodyDefinition> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
