//! Display formatting for estimator output.
//!
//! Presentation-only: the precision rules here never feed back into the
//! computed values. Energy precision scales with magnitude so tiny
//! airbursts and extinction-level impacts both read naturally.

/// Format released energy (megatons TNT) with magnitude-scaled precision.
///
/// - below 0.001: exponential notation
/// - below 1: four decimals
/// - below 1000: two decimals
/// - above: exponential notation
///
/// Non-finite or negative values render as `"N/A"`.
pub fn format_energy_megatons(megatons: f64) -> String {
    if !megatons.is_finite() || megatons < 0.0 {
        return "N/A".to_string();
    }
    if megatons == 0.0 {
        return "0".to_string();
    }
    if megatons < 0.001 {
        format!("{megatons:.2e}")
    } else if megatons < 1.0 {
        format!("{megatons:.4}")
    } else if megatons < 1000.0 {
        format!("{megatons:.2}")
    } else {
        format!("{megatons:.2e}")
    }
}

/// Format a crater diameter in meters, two decimals.
pub fn format_crater_meters(crater_m: f64) -> String {
    if !crater_m.is_finite() {
        return "N/A".to_string();
    }
    format!("{crater_m:.2}")
}

/// Format an affected area in km², whole numbers.
pub fn format_area_km2(area_km2: f64) -> String {
    if !area_km2.is_finite() {
        return "N/A".to_string();
    }
    format!("{area_km2:.0}")
}

/// Format a mass in kilograms, exponential notation.
pub fn format_mass_kg(mass_kg: f64) -> String {
    if !mass_kg.is_finite() {
        return "N/A".to_string();
    }
    format!("{mass_kg:.3e}")
}
