//! Qualitative classification of impact outcomes.
//!
//! Maps released energy (megatons of TNT) onto a comparable historical
//! event, and impactor diameter onto a coarse size class. The energy
//! table is monotonic and exhaustive: every non-negative energy falls
//! into exactly one bucket.

use serde::{Deserialize, Serialize};

/// A historical event comparable to the simulated impact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparableEvent {
    /// Short label, e.g. "Tunguska event (1908)".
    pub event: String,
    /// One-line equivalence description shown next to the label.
    pub equivalent: String,
}

impl ComparableEvent {
    fn new(event: &str, equivalent: &str) -> Self {
        Self {
            event: event.to_string(),
            equivalent: equivalent.to_string(),
        }
    }

    /// Sentinel used when the input parameters were degenerate and no
    /// physical impact occurs.
    pub fn not_applicable() -> Self {
        Self::new("N/A", "N/A")
    }
}

/// Ascending energy thresholds (megatons TNT) with their bucket labels.
///
/// Energies above the last threshold classify as a mass extinction
/// event. Kept as a table so monotonicity is visible at a glance.
const ENERGY_BUCKETS: &[(f64, &str, &str)] = &[
    (0.01, "Small building explosion", "conventional demolition charge"),
    (0.1, "City block destruction", "Hiroshima bomb (~0.015 megatons)"),
    (1.0, "Small nuclear bomb", "Chelyabinsk airburst (~0.5 megatons)"),
    (15.0, "Tunguska event (1908)", "~15 megatons - devastated 2,000 km²"),
    (100.0, "Tsar Bomba", "~50 megatons - most powerful bomb detonated"),
    (10_000.0, "Regional catastrophe", "thousands of megatons - continental damage"),
    (1e8, "Chicxulub impact", "~100 million megatons - dinosaur extinction"),
];

/// Classify released energy into a comparable historical event.
///
/// Negative or non-finite energies (degenerate input upstream) return
/// the "N/A" sentinel rather than the smallest bucket.
pub fn classify_energy(megatons: f64) -> ComparableEvent {
    if !megatons.is_finite() || megatons < 0.0 {
        return ComparableEvent::not_applicable();
    }
    for &(threshold, event, equivalent) in ENERGY_BUCKETS {
        if megatons < threshold {
            return ComparableEvent::new(event, equivalent);
        }
    }
    ComparableEvent::new("Mass extinction event", "planetary catastrophe")
}

/// Coarse impactor size class, after the NASA NeoWs convention used by
/// the asteroid picker: below 50 m is small, below 140 m medium,
/// anything larger is a potentially-hazardous-scale object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Classify an impactor diameter (meters) into a [`SizeClass`].
pub fn classify_size(diameter_m: f64) -> SizeClass {
    if diameter_m < 50.0 {
        SizeClass::Small
    } else if diameter_m < 140.0 {
        SizeClass::Medium
    } else {
        SizeClass::Large
    }
}
