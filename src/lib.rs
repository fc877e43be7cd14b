//! This file is the root of the `coltypes` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`codecs`,
//!     `registry`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the public API surface: the value model, the codec
//!     trait and builtin codecs, the registry, and the schema structs.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codecs;
pub mod error;
pub mod registry;
pub mod schema;
pub mod types;

//==================================================================================
// 2. Public API Surface
//==================================================================================

// --- Value Model ---
pub use types::{ColumnValue, MapKey};

// --- Codec Contract & Builtins ---
pub use codecs::names;
pub use codecs::{
    ArrayCodec, BooleanCodec, ColumnCodec, DoubleCodec, FloatCodec, IntegerCodec, LongCodec,
    ObjectCodec, ShortCodec, StringCodec, TimestampCodec,
};

// --- Registry & Schema ---
pub use error::coltypesError;
pub use registry::TypeRegistry;
pub use schema::{ColumnSpec, DeclarationOptions, ObjectPolicy};
