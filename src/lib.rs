//! AstroImpact - Asteroid Impact Estimator
//!
//! A library crate providing the impact-physics core of the AstroImpact
//! educational simulator: pure estimation functions plus the typed
//! boundary layers around them (NeoWs feed parsing, a preset catalog,
//! the persisted simulation-record schema and a file-backed store).

pub mod catalog;
pub mod classify;
pub mod estimator;
pub mod format;
pub mod neo;
pub mod record;
pub mod store;
pub mod types;

#[cfg(test)]
mod proptest_estimator;

pub use estimator::{CraterModel, ImpactResult, estimate_impact, estimate_impact_with};
pub use types::{AsteroidParameters, Composition};
