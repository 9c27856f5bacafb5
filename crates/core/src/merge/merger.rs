//! Left-join projection of element and property records

use std::collections::HashMap;

use serde_json::Value;
use tracing::info;

use crate::models::{ElementRecord, MergedElement, PropertyRecord};

use super::error::MergeError;
use super::normalize::{decode_unicode_escapes, parse_oxidation_states};

/// Merge the two datasets on `atomicNumber`
///
/// Left-join semantics: one output record per element record, in input
/// order. Elements without a property match are filled with defaults,
/// which is not an error; property values that are present but malformed
/// abort the whole merge.
pub fn merge_datasets(
    elements: &[ElementRecord],
    properties: &[PropertyRecord],
) -> Result<Vec<MergedElement>, MergeError> {
    // Last write wins on duplicate keys; keys are expected unique.
    let mut index: HashMap<u32, &PropertyRecord> = HashMap::with_capacity(properties.len());
    for record in properties {
        index.insert(record.atomic_number(), record);
    }

    let mut merged = Vec::with_capacity(elements.len());
    let mut unmatched = 0usize;

    for element in elements {
        let props = index.get(&element.atomic_number).copied();
        if props.is_none() {
            unmatched += 1;
        }
        merged.push(project(element, props)?);
    }

    info!(
        "Merged {} elements ({} without property matches)",
        merged.len(),
        unmatched
    );
    Ok(merged)
}

/// Project one element and its (possibly absent) property record into the
/// output schema
fn project(
    element: &ElementRecord,
    props: Option<&PropertyRecord>,
) -> Result<MergedElement, MergeError> {
    let atomic_number = element.atomic_number;

    let text = |field: &'static str| -> Result<String, MergeError> {
        match props {
            Some(p) => p
                .text(field)
                .map(Option::unwrap_or_default)
                .map_err(|e| malformed(field, atomic_number, e.value)),
            None => Ok(String::new()),
        }
    };
    let float = |field: &'static str| -> Result<f64, MergeError> {
        match props {
            Some(p) => p
                .float(field)
                .map(|v| v.unwrap_or(0.0))
                .map_err(|e| malformed(field, atomic_number, e.value)),
            None => Ok(0.0),
        }
    };

    let oxidation_states = match props.and_then(|p| p.raw("oxidationStates")) {
        Some(Value::String(s)) => parse_oxidation_states(s).map_err(|source| {
            MergeError::OxidationStates {
                atomic_number,
                source,
            }
        })?,
        // Absent or non-string payloads flatten to an empty list; only
        // string payloads with bad tokens are parse failures.
        _ => Vec::new(),
    };

    let year_discovered = match props {
        Some(p) => p
            .integer("yearDiscovered")
            .map(|v| v.unwrap_or(0))
            .map_err(|e| malformed("yearDiscovered", atomic_number, e.value))?,
        None => 0,
    };

    Ok(MergedElement {
        atomic_number,
        symbol: text("symbol")?,
        image: MergedElement::image_path(atomic_number),
        group: element_text(&element.group),
        period: element_text(&element.period),
        block: element_text(&element.block),
        classification: decode_unicode_escapes(&element_text(&element.classification)),
        melting_point: float("meltingPoint")?,
        boiling_point: float("boilingPoint")?,
        name: text("name")?,
        atomic_mass: text("atomicMass")?,
        electronic_configuration: text("electronicConfiguration")?,
        electronegativity: float("electronegativity")?,
        atomic_radius: float("atomicRadius")?,
        ion_radius: float("ionRadius")?,
        van_del_waals_radius: float("vanDelWaalsRadius")?,
        ionization_energy: float("ionizationEnergy")?,
        electron_affinity: float("electronAffinity")?,
        oxidation_states,
        standard_state: text("standardState")?,
        bonding_type: text("bondingType")?,
        density: float("density")?,
        year_discovered,
    })
}

fn element_text(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn malformed(field: &'static str, atomic_number: u32, value: String) -> MergeError {
    MergeError::MalformedField {
        field,
        atomic_number,
        value,
    }
}
