//! Property-based tests for the impact estimator using proptest.
//!
//! These verify the estimator's invariants across the whole plausible
//! input range: positivity, monotonicity, density ordering, bucket
//! exhaustiveness and record round-trips.

use proptest::prelude::*;

use crate::classify::classify_energy;
use crate::estimator::{crater_diameter_scaled, estimate_impact};
use crate::record::SimulationRecord;
use crate::types::{AsteroidParameters, Composition};

fn any_composition() -> impl Strategy<Value = Composition> {
    prop_oneof![
        Just(Composition::Stone),
        Just(Composition::Iron),
        Just(Composition::Ice),
        Just(Composition::Mixed),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// All derived quantities are strictly positive and finite for
    /// positive finite input.
    #[test]
    fn prop_outputs_positive_finite(
        diameter_m in 0.1f64..100_000.0,
        velocity_km_s in 0.1f64..75.0,
        angle_deg in 0.0f64..90.0,
        composition in any_composition(),
    ) {
        let params = AsteroidParameters::new(diameter_m, velocity_km_s, angle_deg, composition);
        let result = estimate_impact(&params);

        prop_assert!(result.mass_kg > 0.0 && result.mass_kg.is_finite());
        prop_assert!(result.kinetic_energy_j > 0.0 && result.kinetic_energy_j.is_finite());
        prop_assert!(result.energy_megatons > 0.0 && result.energy_megatons.is_finite());
        prop_assert!(result.crater_diameter_m > 0.0 && result.crater_diameter_m.is_finite());
        prop_assert!(result.affected_area_km2 > 0.0 && result.affected_area_km2.is_finite());
        prop_assert_ne!(result.comparable_event.event.as_str(), "N/A");
    }

    /// Growing the impactor strictly grows mass, energy and crater.
    #[test]
    fn prop_monotonic_in_diameter(
        diameter_m in 1.0f64..10_000.0,
        growth in 1.01f64..10.0,
        velocity_km_s in 1.0f64..75.0,
    ) {
        let small = AsteroidParameters::new(diameter_m, velocity_km_s, 45.0, Composition::Stone);
        let large = AsteroidParameters::new(diameter_m * growth, velocity_km_s, 45.0, Composition::Stone);

        let a = estimate_impact(&small);
        let b = estimate_impact(&large);
        prop_assert!(b.mass_kg > a.mass_kg);
        prop_assert!(b.kinetic_energy_j > a.kinetic_energy_j);
        prop_assert!(b.crater_diameter_m > a.crater_diameter_m);
    }

    /// A faster impactor strictly increases energy and crater size.
    #[test]
    fn prop_monotonic_in_velocity(
        diameter_m in 1.0f64..10_000.0,
        velocity_km_s in 1.0f64..50.0,
        growth in 1.01f64..5.0,
    ) {
        let slow = AsteroidParameters::new(diameter_m, velocity_km_s, 45.0, Composition::Stone);
        let fast = AsteroidParameters::new(diameter_m, velocity_km_s * growth, 45.0, Composition::Stone);

        let a = estimate_impact(&slow);
        let b = estimate_impact(&fast);
        prop_assert!(b.kinetic_energy_j > a.kinetic_energy_j);
        prop_assert!(b.crater_diameter_m > a.crater_diameter_m);
    }

    /// Iron always outweighs ice at equal geometry.
    #[test]
    fn prop_iron_heavier_than_ice(
        diameter_m in 0.1f64..10_000.0,
        velocity_km_s in 0.1f64..75.0,
    ) {
        let iron = AsteroidParameters::new(diameter_m, velocity_km_s, 45.0, Composition::Iron);
        let ice = AsteroidParameters::new(diameter_m, velocity_km_s, 45.0, Composition::Ice);
        prop_assert!(estimate_impact(&iron).mass_kg > estimate_impact(&ice).mass_kg);
    }

    /// Every non-negative energy maps to exactly one non-sentinel bucket.
    #[test]
    fn prop_buckets_exhaustive(megatons in 0.0f64..1e12) {
        let event = classify_energy(megatons);
        prop_assert_ne!(event.event.as_str(), "N/A");
    }

    /// The scaled crater law is monotone in impact angle: steeper
    /// impacts never produce smaller craters.
    #[test]
    fn prop_scaled_crater_monotone_in_angle(
        diameter_m in 1.0f64..10_000.0,
        velocity_km_s in 1.0f64..75.0,
        angle_a in 0.0f64..90.0,
        angle_b in 0.0f64..90.0,
    ) {
        let (lo, hi) = if angle_a <= angle_b { (angle_a, angle_b) } else { (angle_b, angle_a) };
        let shallow = AsteroidParameters::new(diameter_m, velocity_km_s, lo, Composition::Stone);
        let steep = AsteroidParameters::new(diameter_m, velocity_km_s, hi, Composition::Stone);
        prop_assert!(crater_diameter_scaled(&steep) >= crater_diameter_scaled(&shallow));
    }

    /// Record JSON serialization round-trips bit-for-bit.
    #[test]
    fn prop_record_round_trip(
        diameter_m in 0.1f64..100_000.0,
        velocity_km_s in 0.1f64..75.0,
        angle_deg in 0.0f64..90.0,
        composition in any_composition(),
    ) {
        let params = AsteroidParameters::new(diameter_m, velocity_km_s, angle_deg, composition);
        let result = estimate_impact(&params);
        let record = SimulationRecord::custom("propTestId".to_string(), "prop", &params, &result);

        let json = serde_json::to_string(&record).unwrap();
        let back: SimulationRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(record, back);
    }
}
