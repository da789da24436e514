//! Shared types and wire format for the cleardef metadata client.
//!
//! The component coordinate identifier and its codecs live here: the
//! slash-delimited canonical string form of [`Coordinates`], the label
//! enumerations [`ComponentType`] and [`Provider`], and serde helpers for
//! paths and URIs embedded as strings in metadata documents. Everything is a
//! pure data transformation; transport and interpretation of the
//! coordinates belong to the consuming client.

pub mod coordinates;
pub mod error;
pub mod types;
pub mod wire;

// Re-exports
pub use coordinates::Coordinates;
pub use error::CoordinatesError;
pub use types::{ComponentType, Provider};
