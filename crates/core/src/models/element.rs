//! Element record types
//!
//! `ElementRecord` is the primary dataset entry; `MergedElement` is the
//! enriched projection the merge produces. `MergedElement` field order is
//! the per-record key order written to disk.

use serde::{Deserialize, Serialize};

/// Primary dataset entry keyed by atomic number
///
/// Absent and `null` categorical fields are equivalent; both project to
/// an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub atomic_number: u32,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    /// May contain literal `\uXXXX` escape sequences; decoded during the
    /// merge
    #[serde(default)]
    pub classification: Option<String>,
}

/// Merged output record combining both datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedElement {
    pub atomic_number: u32,
    pub symbol: String,
    pub image: String,
    pub group: String,
    pub period: String,
    pub block: String,
    pub classification: String,
    pub melting_point: f64,
    pub boiling_point: f64,
    pub name: String,
    /// Kept textual: source values carry uncertainty notation such as
    /// `1.008(1)`
    pub atomic_mass: String,
    pub electronic_configuration: String,
    pub electronegativity: f64,
    pub atomic_radius: f64,
    pub ion_radius: f64,
    /// Key spelling ("vanDelWaals") follows the source dataset
    pub van_del_waals_radius: f64,
    pub ionization_energy: f64,
    pub electron_affinity: f64,
    /// Always a list, never null
    pub oxidation_states: Vec<i32>,
    pub standard_state: String,
    pub bonding_type: String,
    pub density: f64,
    pub year_discovered: i64,
}

impl MergedElement {
    /// Image asset path derived from the atomic number
    ///
    /// Purely deterministic; no existence check is performed.
    pub fn image_path(atomic_number: u32) -> String {
        format!("images/{}.png", atomic_number)
    }
}
