//! Record types shared across the dataset utilities

pub mod element;
pub mod product;
pub mod property;

pub use element::{ElementRecord, MergedElement};
pub use product::Product;
pub use property::{CoercionError, InvalidProperty, PropertyRecord};
