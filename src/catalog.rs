//! Preset asteroid catalog.
//!
//! A small built-in selection of well-known near-Earth objects plus
//! historical airburst-scale impactors, so the simulator works without
//! a live NeoWs feed. Physical values are rounded catalog figures, not
//! precise ephemeris data.

use crate::types::{AsteroidParameters, Composition};

/// A selectable catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    /// Unique identifier (NeoWs id where the object has one).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// NeoWs reference id, if this is a real cataloged object.
    pub neo_reference_id: Option<&'static str>,
    /// NASA JPL small-body database page, if any.
    pub nasa_url: Option<&'static str>,
    /// Brief description for pickers.
    pub description: &'static str,
    /// Impactor diameter (meters).
    pub diameter_m: f64,
    /// Entry velocity (km/s).
    pub velocity_km_s: f64,
    /// Impact angle (degrees from horizontal).
    pub angle_deg: f64,
    /// Bulk composition.
    pub composition: Composition,
    /// Visual asteroid type used by the renderer ("rocky"/"metallic"/"icy").
    pub asteroid_type: &'static str,
    /// Display distance used by the 3D scene (arbitrary units).
    pub distance: f64,
    /// NASA potentially-hazardous-asteroid flag, passed through as-is.
    pub hazardous: bool,
}

impl Preset {
    /// Sanitized estimator input for this preset.
    pub fn parameters(&self) -> AsteroidParameters {
        AsteroidParameters::new(
            self.diameter_m,
            self.velocity_km_s,
            self.angle_deg,
            self.composition,
        )
    }
}

/// Default selection: Bennu, the simulator's reference case.
pub const DEFAULT_PRESET_ID: &str = "2101955";

/// All built-in presets.
pub static PRESETS: &[Preset] = &[BENNU, APOPHIS, DIDYMOS, RYUGU, CHELYABINSK, TUNGUSKA];

/// 101955 Bennu, the OSIRIS-REx sample-return target.
///
/// The 490 m / 28 km/s configuration is the product's reference worked
/// example (baseline crater ≈ 11,364 m, Chicxulub-class energy).
pub static BENNU: Preset = Preset {
    id: "2101955",
    name: "101955 Bennu",
    neo_reference_id: Some("2101955"),
    nasa_url: Some("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2101955"),
    description: "OSIRIS-REx target. The simulator's reference impact case.",
    diameter_m: 490.0,
    velocity_km_s: 28.0,
    angle_deg: 45.0,
    composition: Composition::Stone,
    asteroid_type: "rocky",
    distance: 12.0,
    hazardous: true,
};

/// 99942 Apophis, famous for its 2029 close approach.
pub static APOPHIS: Preset = Preset {
    id: "2099942",
    name: "99942 Apophis",
    neo_reference_id: Some("2099942"),
    nasa_url: Some("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2099942"),
    description: "Close Earth approach in 2029.",
    diameter_m: 370.0,
    velocity_km_s: 7.4,
    angle_deg: 45.0,
    composition: Composition::Stone,
    asteroid_type: "rocky",
    distance: 10.0,
    hazardous: true,
};

/// 65803 Didymos, the DART mission target system primary.
pub static DIDYMOS: Preset = Preset {
    id: "2065803",
    name: "65803 Didymos",
    neo_reference_id: Some("2065803"),
    nasa_url: Some("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2065803"),
    description: "DART mission target system.",
    diameter_m: 780.0,
    velocity_km_s: 23.0,
    angle_deg: 45.0,
    composition: Composition::Mixed,
    asteroid_type: "rocky",
    distance: 10.0,
    hazardous: true,
};

/// 162173 Ryugu, the Hayabusa2 sample-return target.
pub static RYUGU: Preset = Preset {
    id: "2162173",
    name: "162173 Ryugu",
    neo_reference_id: Some("2162173"),
    nasa_url: Some("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2162173"),
    description: "Hayabusa2 target, a carbonaceous rubble pile.",
    diameter_m: 900.0,
    velocity_km_s: 20.0,
    angle_deg: 45.0,
    composition: Composition::Mixed,
    asteroid_type: "rocky",
    distance: 10.0,
    hazardous: false,
};

/// A Chelyabinsk-scale impactor (2013 airburst).
pub static CHELYABINSK: Preset = Preset {
    id: "chelyabinsk",
    name: "Chelyabinsk-scale impactor",
    neo_reference_id: None,
    nasa_url: None,
    description: "20 m stony body like the 2013 Chelyabinsk airburst.",
    diameter_m: 20.0,
    velocity_km_s: 19.0,
    angle_deg: 18.0,
    composition: Composition::Stone,
    asteroid_type: "rocky",
    distance: 8.0,
    hazardous: false,
};

/// A Tunguska-scale impactor (1908 event).
pub static TUNGUSKA: Preset = Preset {
    id: "tunguska",
    name: "Tunguska-scale impactor",
    neo_reference_id: None,
    nasa_url: None,
    description: "60 m body like the 1908 Tunguska event.",
    diameter_m: 60.0,
    velocity_km_s: 15.0,
    angle_deg: 30.0,
    composition: Composition::Ice,
    asteroid_type: "icy",
    distance: 8.0,
    hazardous: false,
};

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// The default preset (Bennu).
pub fn default_preset() -> &'static Preset {
    find_preset(DEFAULT_PRESET_ID).unwrap_or(&PRESETS[0])
}
