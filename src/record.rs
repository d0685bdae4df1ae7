//! Persisted simulation record schema.
//!
//! This is the exact JSON shape existing stored simulations use
//! (camelCase field names, energy in megatons, crater in meters), so
//! records written here interoperate with records produced by earlier
//! versions of the product. Serialization must stay lossless for f64
//! values; only the display layer rounds.

use serde::{Deserialize, Serialize};

use crate::catalog::Preset;
use crate::classify::ComparableEvent;
use crate::estimator::ImpactResult;
use crate::types::AsteroidParameters;

/// A complete persisted simulation: who ran it, which object, the
/// input parameters and the derived impact summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    /// Store document id.
    pub id: String,
    /// Name the user entered before running the simulation.
    pub user_name: String,
    /// Which catalog object (or custom configuration) was simulated.
    pub meteor: MeteorInfo,
    /// The input parameters as entered.
    pub simulation: SimulationInputs,
    /// Derived impact quantities.
    pub impact: ImpactSummary,
}

/// Metadata of the simulated object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteorInfo {
    pub id: String,
    pub name: String,
    pub is_custom: bool,
    pub neo_reference_id: Option<String>,
    pub nasa_url: Option<String>,
}

/// Input parameters in record form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    /// Diameter in meters.
    pub diameter: f64,
    /// Velocity in km/s.
    pub velocity: f64,
    /// Impact angle in degrees.
    pub angle: f64,
    /// Composition name ("stone", "iron", "ice", "mixed").
    pub composition: String,
    /// Renderer asteroid type ("rocky", "metallic", "icy").
    pub asteroid_type: String,
    /// Display distance used by the 3D scene.
    pub distance: f64,
}

/// Derived impact quantities in record form. Units are explicit fields
/// so readers never have to guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    /// Released energy in megatons TNT.
    pub energy: f64,
    /// Always "megatons".
    pub energy_unit: String,
    /// Crater diameter in meters.
    pub crater_diameter: f64,
    /// Always "meters".
    pub crater_unit: String,
    /// Comparable historical event.
    pub comparison: ComparableEvent,
}

impl ImpactSummary {
    /// Build the persisted summary from an estimator result.
    pub fn from_result(result: &ImpactResult) -> Self {
        Self {
            energy: result.energy_megatons,
            energy_unit: "megatons".to_string(),
            crater_diameter: result.crater_diameter_m,
            crater_unit: "meters".to_string(),
            comparison: result.comparable_event.clone(),
        }
    }
}

impl SimulationRecord {
    /// Assemble a record for a catalog preset run.
    pub fn from_preset(
        id: String,
        user_name: &str,
        preset: &Preset,
        params: &AsteroidParameters,
        result: &ImpactResult,
    ) -> Self {
        Self {
            id,
            user_name: user_name.trim().to_string(),
            meteor: MeteorInfo {
                id: preset.id.to_string(),
                name: preset.name.to_string(),
                is_custom: false,
                neo_reference_id: preset.neo_reference_id.map(str::to_string),
                nasa_url: preset.nasa_url.map(str::to_string),
            },
            simulation: Self::inputs(params, preset.asteroid_type, preset.distance),
            impact: ImpactSummary::from_result(result),
        }
    }

    /// Assemble a record for a custom (slider-configured) run.
    pub fn custom(
        id: String,
        user_name: &str,
        params: &AsteroidParameters,
        result: &ImpactResult,
    ) -> Self {
        Self {
            id,
            user_name: user_name.trim().to_string(),
            meteor: MeteorInfo {
                id: "custom".to_string(),
                name: "Custom Meteor".to_string(),
                is_custom: true,
                neo_reference_id: None,
                nasa_url: None,
            },
            simulation: Self::inputs(params, "rocky", 10.0),
            impact: ImpactSummary::from_result(result),
        }
    }

    fn inputs(params: &AsteroidParameters, asteroid_type: &str, distance: f64) -> SimulationInputs {
        SimulationInputs {
            diameter: params.diameter_m,
            velocity: params.velocity_km_s,
            angle: params.angle_deg,
            composition: params.composition.name().to_string(),
            asteroid_type: asteroid_type.to_string(),
            distance,
        }
    }

    /// Re-derive the sanitized estimator input from the stored fields.
    pub fn parameters(&self) -> AsteroidParameters {
        AsteroidParameters::new(
            self.simulation.diameter,
            self.simulation.velocity,
            self.simulation.angle,
            crate::types::Composition::parse_lenient(&self.simulation.composition),
        )
    }
}
