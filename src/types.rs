//! Core input types and physical constants for impact estimation.
//!
//! All quantities use SI units unless a suffix says otherwise
//! (`_km_s` for kilometers per second, `_deg` for degrees). The
//! estimator consumes a sanitized [`AsteroidParameters`] value; all
//! clamping and defaulting happens here, at the boundary, so the
//! arithmetic downstream never has to guard against NaN or
//! out-of-range angles.

use serde::{Deserialize, Serialize};

/// Physical constants (SI units)

/// Joules per megaton of TNT equivalent
pub const MEGATON_TNT_JOULES: f64 = 4.184e15;

/// Bulk density of the impacted terrain (kg/m³)
pub const TARGET_DENSITY: f64 = 2500.0;

/// Surface gravity used by the crater scaling law (m/s²)
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Empirical coefficient of the crater scaling law
pub const CRATER_COEFFICIENT: f64 = 1.2;

/// Floor applied to sin(angle) so grazing impacts still crater
pub const MIN_ANGLE_SINE: f64 = 0.05;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Bulk composition of an impactor.
///
/// Determines the density used for mass and for the impactor/target
/// density ratio in the scaled crater law. Free-form string input from
/// stored records goes through [`Composition::parse_lenient`], which
/// defaults anything unrecognized to stone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Rocky (chondritic) body
    #[default]
    Stone,
    /// Metallic (iron-nickel) body
    Iron,
    /// Icy (cometary) body
    Ice,
    /// Rubble pile of rock and metal
    Mixed,
}

impl Composition {
    /// Bulk density in kg/m³.
    ///
    /// One constant per composition, used consistently for both mass
    /// and crater scaling. Stone is 2500 kg/m³, matching the density
    /// baked into previously persisted simulation records.
    pub fn density(self) -> f64 {
        match self {
            Composition::Stone => 2500.0,
            Composition::Iron => 7800.0,
            Composition::Ice => 900.0,
            Composition::Mixed => 3000.0,
        }
    }

    /// Parse a composition name, defaulting to stone for anything
    /// unrecognized. Matches the lenient handling of the stored
    /// record format.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "iron" | "metallic" => Composition::Iron,
            "ice" | "icy" => Composition::Ice,
            "mixed" => Composition::Mixed,
            _ => Composition::Stone,
        }
    }

    /// Canonical lowercase name, as stored in simulation records.
    pub fn name(self) -> &'static str {
        match self {
            Composition::Stone => "stone",
            Composition::Iron => "iron",
            Composition::Ice => "ice",
            Composition::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical parameters of an incoming asteroid.
///
/// Immutable per calculation. Construct through [`AsteroidParameters::new`]
/// so the sanitization invariants hold:
/// - non-finite diameter/velocity collapse to 0.0 (degenerate input)
/// - impact angle is clamped to [0, 90] degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParameters {
    /// Impactor diameter in meters
    pub diameter_m: f64,
    /// Entry velocity in kilometers per second
    pub velocity_km_s: f64,
    /// Impact angle in degrees from horizontal: 90 = vertical, 0 = grazing
    pub angle_deg: f64,
    /// Bulk composition (selects density)
    pub composition: Composition,
}

impl AsteroidParameters {
    /// Build a sanitized parameter set.
    ///
    /// Negative or zero diameter/velocity are kept as-is and flagged by
    /// [`is_degenerate`](Self::is_degenerate); the estimator degrades to
    /// sentinel output for them rather than erroring. Non-finite values
    /// are zeroed so no NaN can reach the arithmetic.
    pub fn new(
        diameter_m: f64,
        velocity_km_s: f64,
        angle_deg: f64,
        composition: Composition,
    ) -> Self {
        let sane = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            diameter_m: sane(diameter_m),
            velocity_km_s: sane(velocity_km_s),
            angle_deg: sane(angle_deg).clamp(0.0, 90.0),
            composition,
        }
    }

    /// True when the input cannot produce a physical impact
    /// (zero or negative size or speed).
    pub fn is_degenerate(&self) -> bool {
        self.diameter_m <= 0.0 || self.velocity_km_s <= 0.0
    }

    /// Entry velocity in m/s.
    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_km_s * 1000.0
    }

    /// Impact angle in radians, already clamped to [0, π/2].
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg * DEG_TO_RAD
    }

    /// Impactor bulk density in kg/m³.
    pub fn density(&self) -> f64 {
        self.composition.density()
    }
}

impl Default for AsteroidParameters {
    /// The simulator's default scenario: a 100 m stony asteroid at
    /// 20 km/s coming in at 45°.
    fn default() -> Self {
        Self::new(100.0, 20.0, 45.0, Composition::Stone)
    }
}
