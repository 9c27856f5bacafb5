//! Error types for the dataset merger

use thiserror::Error;

use super::normalize::ParseError;

/// Errors that can occur while merging the two datasets
///
/// Both variants are fatal for the whole run. Defaulting is reserved for
/// values that are missing, never for values that are present but
/// invalid.
#[derive(Debug, Clone, Error)]
pub enum MergeError {
    /// A property value is present but not coercible to its expected type
    #[error("element {atomic_number}: field `{field}` has malformed value {value}")]
    MalformedField {
        field: &'static str,
        atomic_number: u32,
        value: String,
    },

    /// The oxidation-state list contains a non-numeric token
    #[error("element {atomic_number}: {source}")]
    OxidationStates {
        atomic_number: u32,
        #[source]
        source: ParseError,
    },
}
