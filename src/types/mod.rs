//! This module defines the core, strongly-typed data representations used
//! throughout the coltypes codec layer.
//!
//! It currently includes the canonical `ColumnValue` enum, which replaces
//! opaque driver-level JSON with a shape the codecs can validate, and its
//! `MapKey` companion carrying the source-language key semantics.

pub mod value;

// Re-export the main type(s) for easier access.
pub use value::{ColumnValue, MapKey};
