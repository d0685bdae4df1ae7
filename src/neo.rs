//! Typed boundary for NASA NeoWs catalog objects.
//!
//! The NeoWs feed serves numbers as strings and omits fields freely, so
//! everything here deserializes into optional, string-tolerant structs
//! and is validated into an [`AsteroidParameters`] before any arithmetic
//! sees it. The potentially-hazardous flag is passed through unmodified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AsteroidParameters, Composition};

/// Errors raised while reading a NeoWs object.
#[derive(Error, Debug)]
pub enum NeoError {
    #[error("failed to parse NeoWs JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read NeoWs file: {0}")]
    Io(#[from] std::io::Error),
}

/// How to collapse the estimated diameter range into a single value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiameterMode {
    /// Midpoint of the estimated min/max range.
    #[default]
    Average,
    /// Upper bound of the estimated range (worst case).
    Maximum,
}

/// One NeoWs near-Earth object, reduced to the fields the simulator uses.
///
/// Unknown fields are ignored; missing fields default so a partial
/// object still produces a (possibly degenerate) parameter set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NeoObject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub nasa_jpl_url: Option<String>,
    pub is_potentially_hazardous_asteroid: bool,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub close_approach_data: Vec<CloseApproach>,
    pub orbital_data: Option<OrbitalData>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EstimatedDiameter {
    pub meters: Option<DiameterRange>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CloseApproach {
    pub relative_velocity: Option<RelativeVelocity>,
}

/// NeoWs serves velocities as decimal strings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

/// Orbital elements, all decimal strings in the feed.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OrbitalData {
    pub semi_major_axis: String,
    pub eccentricity: String,
    pub inclination: String,
    pub orbital_period: String,
}

/// Derived orbit geometry for the visualization ellipse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Semi-major axis (AU)
    pub a_au: f64,
    /// Eccentricity
    pub e: f64,
    /// Semi-minor axis (AU), derived: `a · sqrt(max(0, 1 - e²))`
    pub b_au: f64,
    /// Inclination (degrees)
    pub inc_deg: f64,
    /// Orbital period (days)
    pub period_days: f64,
}

/// Parse a NeoWs decimal string, returning 0.0 for anything malformed.
fn parse_feed_number(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}

impl NeoObject {
    /// Parse a single NeoWs object from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NeoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a single NeoWs object from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, NeoError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Display name, falling back through designation to id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.designation.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("Unknown object")
    }

    /// Collapse the estimated diameter range to meters. Returns 0 when
    /// the feed carries no diameter estimate at all.
    pub fn diameter_m(&self, mode: DiameterMode) -> f64 {
        let Some(range) = self
            .estimated_diameter
            .as_ref()
            .and_then(|d| d.meters.as_ref())
        else {
            return 0.0;
        };
        let (dmin, dmax) = (range.estimated_diameter_min, range.estimated_diameter_max);
        if dmin <= 0.0 && dmax <= 0.0 {
            return 0.0;
        }
        match mode {
            DiameterMode::Maximum => dmin.max(dmax),
            DiameterMode::Average => (dmin + dmax) / 2.0,
        }
    }

    /// Relative velocity of the first close approach (km/s), 0 if absent.
    pub fn velocity_km_s(&self) -> f64 {
        self.close_approach_data
            .first()
            .and_then(|ca| ca.relative_velocity.as_ref())
            .map(|rv| parse_feed_number(&rv.kilometers_per_second))
            .unwrap_or(0.0)
    }

    /// Derived orbit geometry for the display ellipse.
    pub fn orbit_config(&self) -> OrbitConfig {
        let Some(od) = self.orbital_data.as_ref() else {
            return OrbitConfig::default();
        };
        let a_au = parse_feed_number(&od.semi_major_axis);
        let e = parse_feed_number(&od.eccentricity);
        OrbitConfig {
            a_au,
            e,
            b_au: a_au * (1.0 - e * e).max(0.0).sqrt(),
            inc_deg: parse_feed_number(&od.inclination),
            period_days: parse_feed_number(&od.orbital_period),
        }
    }

    /// Build sanitized estimator input from this object.
    ///
    /// The impact angle is seeded from the orbital inclination, the same
    /// seed the slider UI starts from; callers may override it.
    pub fn to_parameters(&self, composition: Composition, mode: DiameterMode) -> AsteroidParameters {
        AsteroidParameters::new(
            self.diameter_m(mode),
            self.velocity_km_s(),
            self.orbit_config().inc_deg,
            composition,
        )
    }
}
