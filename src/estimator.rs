//! The impact estimator core.
//!
//! Pure, synchronous arithmetic converting [`AsteroidParameters`] into an
//! [`ImpactResult`]: mass from spherical volume and bulk density, kinetic
//! energy in joules and megatons TNT, crater diameter from an empirical
//! scaling law, affected area from a 10× crater-radius devastation
//! heuristic, and a comparable-event classification.
//!
//! No I/O, no randomness, no shared state; safe to call from any number
//! of threads. Degenerate input (zero or negative diameter/velocity)
//! degrades to an all-zero sentinel result instead of erroring, matching
//! the soft-failure policy of the stored-record consumers.

use serde::{Deserialize, Serialize};

use crate::classify::{ComparableEvent, classify_energy};
use crate::types::{
    AsteroidParameters, CRATER_COEFFICIENT, MEGATON_TNT_JOULES, MIN_ANGLE_SINE, SURFACE_GRAVITY,
    TARGET_DENSITY,
};

/// Which crater scaling law fills [`ImpactResult::crater_diameter_m`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraterModel {
    /// Simple power law `d · 20 · (v/20)^0.44`.
    ///
    /// This is the law previously persisted records were computed with,
    /// so it stays the default for interoperability.
    #[default]
    Baseline,
    /// Angle- and density-ratio-aware scaling law
    /// (see [`crater_diameter_scaled`]).
    Scaled,
}

/// Derived impact quantities. Never mutated after computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Impactor mass in kilograms
    pub mass_kg: f64,
    /// Kinetic energy at entry in joules
    pub kinetic_energy_j: f64,
    /// Kinetic energy in megatons of TNT equivalent
    pub energy_megatons: f64,
    /// Final crater diameter in meters
    pub crater_diameter_m: f64,
    /// Devastated area in km², modeled as a disc of 10× the crater radius
    pub affected_area_km2: f64,
    /// Comparable historical event for the released energy
    pub comparable_event: ComparableEvent,
}

impl ImpactResult {
    /// The all-zero sentinel returned for degenerate input.
    pub fn sentinel() -> Self {
        Self {
            mass_kg: 0.0,
            kinetic_energy_j: 0.0,
            energy_megatons: 0.0,
            crater_diameter_m: 0.0,
            affected_area_km2: 0.0,
            comparable_event: ComparableEvent::not_applicable(),
        }
    }

    /// True when this result is the degenerate-input sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.mass_kg == 0.0 && self.comparable_event.event == "N/A"
    }
}

/// Impactor mass in kg from spherical volume and composition density.
pub fn mass_kg(params: &AsteroidParameters) -> f64 {
    let radius = params.diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    volume * params.density()
}

/// Kinetic energy in joules: ½·m·v².
pub fn kinetic_energy_j(params: &AsteroidParameters) -> f64 {
    let v = params.velocity_m_s();
    0.5 * mass_kg(params) * v * v
}

/// Baseline crater diameter (meters): `d · 20 · (v/20)^0.44`.
///
/// Velocity in km/s. Angle and composition do not enter this law; it is
/// the display formula the product UI and stored records use.
pub fn crater_diameter_baseline(params: &AsteroidParameters) -> f64 {
    params.diameter_m * 20.0 * (params.velocity_km_s / 20.0).powf(0.44)
}

/// Angle- and density-ratio-aware crater diameter (meters).
///
/// `C · g^-0.17 · (ρᵢ/ρₜ)^0.33 · d^0.78 · v^0.44 · max(sin θ, 0.05)^(1/3)`
/// with velocity in m/s, terrain density 2500 kg/m³, C = 1.2 and
/// g = 9.81 m/s². Grazing impacts attenuate the crater; the sine floor
/// keeps a 0° angle from collapsing the crater to zero.
pub fn crater_diameter_scaled(params: &AsteroidParameters) -> f64 {
    let density_ratio = params.density() / TARGET_DENSITY;
    let angle_factor = params.angle_rad().sin().max(MIN_ANGLE_SINE).powf(1.0 / 3.0);

    CRATER_COEFFICIENT
        * SURFACE_GRAVITY.powf(-0.17)
        * density_ratio.powf(0.33)
        * params.diameter_m.powf(0.78)
        * params.velocity_m_s().powf(0.44)
        * angle_factor
}

/// Devastated area (km²) as a disc of 10× the crater radius.
pub fn affected_area_km2(crater_diameter_m: f64) -> f64 {
    let crater_km = crater_diameter_m / 1000.0;
    std::f64::consts::PI * (crater_km * 10.0).powi(2)
}

/// Compute the full impact result with the default (baseline) crater model.
pub fn estimate_impact(params: &AsteroidParameters) -> ImpactResult {
    estimate_impact_with(params, CraterModel::Baseline)
}

/// Compute the full impact result with an explicit crater model.
///
/// Degenerate input yields [`ImpactResult::sentinel`], never an error.
pub fn estimate_impact_with(params: &AsteroidParameters, model: CraterModel) -> ImpactResult {
    if params.is_degenerate() {
        return ImpactResult::sentinel();
    }

    let mass_kg = mass_kg(params);
    let kinetic_energy_j = kinetic_energy_j(params);
    let energy_megatons = kinetic_energy_j / MEGATON_TNT_JOULES;

    let crater_diameter_m = match model {
        CraterModel::Baseline => crater_diameter_baseline(params),
        CraterModel::Scaled => crater_diameter_scaled(params),
    };

    ImpactResult {
        mass_kg,
        kinetic_energy_j,
        energy_megatons,
        crater_diameter_m,
        affected_area_km2: affected_area_km2(crater_diameter_m),
        comparable_event: classify_energy(energy_megatons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Composition;
    use approx::assert_relative_eq;

    fn stone(diameter_m: f64, velocity_km_s: f64) -> AsteroidParameters {
        AsteroidParameters::new(diameter_m, velocity_km_s, 45.0, Composition::Stone)
    }

    #[test]
    fn test_worked_example_crater() {
        // 490 m stony asteroid at 28 km/s: the product's reference case
        let result = estimate_impact(&stone(490.0, 28.0));
        assert_relative_eq!(result.crater_diameter_m, 11_364.0, max_relative = 1e-3);
    }

    #[test]
    fn test_worked_example_energy() {
        let result = estimate_impact(&stone(490.0, 28.0));
        // mass = (4/3)π(245)³ · 2500 ≈ 1.54e11 kg
        assert_relative_eq!(result.mass_kg, 1.5399e11, max_relative = 1e-3);
        // ~1.4e4 megatons, Chicxulub class
        assert_relative_eq!(result.energy_megatons, 1.443e4, max_relative = 1e-2);
        assert_eq!(result.comparable_event.event, "Chicxulub impact");
    }

    #[test]
    fn test_affected_area_follows_crater() {
        let result = estimate_impact(&stone(490.0, 28.0));
        let crater_km = result.crater_diameter_m / 1000.0;
        let expected = std::f64::consts::PI * (crater_km * 10.0).powi(2);
        assert_relative_eq!(result.affected_area_km2, expected);
    }

    #[test]
    fn test_all_outputs_positive_and_finite() {
        let result = estimate_impact(&stone(100.0, 20.0));
        for v in [
            result.mass_kg,
            result.kinetic_energy_j,
            result.energy_megatons,
            result.crater_diameter_m,
            result.affected_area_km2,
        ] {
            assert!(v.is_finite() && v > 0.0, "expected positive finite, got {v}");
        }
    }

    #[test]
    fn test_monotonic_in_diameter() {
        let small = estimate_impact(&stone(100.0, 20.0));
        let large = estimate_impact(&stone(200.0, 20.0));
        assert!(large.mass_kg > small.mass_kg);
        assert!(large.kinetic_energy_j > small.kinetic_energy_j);
        assert!(large.crater_diameter_m > small.crater_diameter_m);
    }

    #[test]
    fn test_monotonic_in_velocity() {
        let slow = estimate_impact(&stone(100.0, 15.0));
        let fast = estimate_impact(&stone(100.0, 30.0));
        assert!(fast.kinetic_energy_j > slow.kinetic_energy_j);
        assert!(fast.crater_diameter_m > slow.crater_diameter_m);
    }

    #[test]
    fn test_iron_outweighs_ice() {
        let iron = AsteroidParameters::new(100.0, 20.0, 45.0, Composition::Iron);
        let ice = AsteroidParameters::new(100.0, 20.0, 45.0, Composition::Ice);
        let ratio = mass_kg(&iron) / mass_kg(&ice);
        // 7800 / 900 density ratio carries straight through
        assert_relative_eq!(ratio, 7800.0 / 900.0, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_yield_sentinel() {
        for params in [
            stone(0.0, 20.0),
            stone(100.0, 0.0),
            stone(-5.0, 20.0),
            stone(100.0, -1.0),
        ] {
            let result = estimate_impact(&params);
            assert!(result.is_sentinel());
            assert_eq!(result.energy_megatons, 0.0);
            assert_eq!(result.comparable_event.event, "N/A");
        }
    }

    #[test]
    fn test_scaled_law_attenuates_grazing_impacts() {
        let steep = AsteroidParameters::new(100.0, 20.0, 90.0, Composition::Stone);
        let shallow = AsteroidParameters::new(100.0, 20.0, 5.0, Composition::Stone);
        assert!(crater_diameter_scaled(&steep) > crater_diameter_scaled(&shallow));
    }

    #[test]
    fn test_scaled_law_sine_floor_at_zero_angle() {
        let grazing = AsteroidParameters::new(100.0, 20.0, 0.0, Composition::Stone);
        let crater = crater_diameter_scaled(&grazing);
        assert!(crater > 0.0, "sine floor must keep the crater non-zero");

        // Identical to an impact whose sine equals the floor value
        let floor_angle_deg = MIN_ANGLE_SINE.asin() * crate::types::RAD_TO_DEG;
        let at_floor = AsteroidParameters::new(100.0, 20.0, floor_angle_deg, Composition::Stone);
        assert_relative_eq!(crater, crater_diameter_scaled(&at_floor), max_relative = 1e-9);
    }

    #[test]
    fn test_scaled_law_density_ratio() {
        let iron = AsteroidParameters::new(100.0, 20.0, 45.0, Composition::Iron);
        let ice = AsteroidParameters::new(100.0, 20.0, 45.0, Composition::Ice);
        // Denser impactors dig bigger craters
        assert!(crater_diameter_scaled(&iron) > crater_diameter_scaled(&ice));
    }

    #[test]
    fn test_crater_model_selection() {
        let params = stone(490.0, 28.0);
        let baseline = estimate_impact_with(&params, CraterModel::Baseline);
        let scaled = estimate_impact_with(&params, CraterModel::Scaled);
        assert_relative_eq!(baseline.crater_diameter_m, crater_diameter_baseline(&params));
        assert_relative_eq!(scaled.crater_diameter_m, crater_diameter_scaled(&params));
        // Energy and mass do not depend on the crater model
        assert_eq!(baseline.mass_kg, scaled.mass_kg);
        assert_eq!(baseline.energy_megatons, scaled.energy_megatons);
    }
}
