//! Dataset merger
//!
//! Left-joins the primary element dataset against the secondary property
//! dataset on `atomicNumber` and projects the result into the normalized
//! output schema. The merger is a pure function of its two input slices:
//! every primary record yields exactly one output record, in primary
//! order, whether or not a property match exists.

pub mod error;
pub mod merger;
pub mod normalize;

pub use error::MergeError;
pub use merger::merge_datasets;
pub use normalize::{ParseError, decode_unicode_escapes, parse_oxidation_states};
