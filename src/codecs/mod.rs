// In: src/codecs/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Layer
// ====================================================================================
//
// A codec is the capability object for one concrete column type. It owns the
// full application <-> storage contract for that type:
//
//   1. [name]             -> the stable string the registry dispatches on
//   2. [encode]           -> application value -> storage value
//   3. [decode]           -> storage value -> application value
//   4. [declaration_sql]  -> the SQL type fragment for schema generation
//
// Codecs are stateless. The only shared collaborator is the read-only
// `TypeRegistry`, which a declaration renderer may consult to render a nested
// element declaration (ARRAY does this; scalars ignore it).
//
// ====================================================================================

pub(crate) mod array;
pub(crate) mod object;
pub(crate) mod scalar;
pub(crate) mod timestamp;

pub use array::ArrayCodec;
pub use object::ObjectCodec;
pub use scalar::{
    BooleanCodec, DoubleCodec, FloatCodec, IntegerCodec, LongCodec, ShortCodec, StringCodec,
};
pub use timestamp::TimestampCodec;

use crate::error::coltypesError;
use crate::registry::TypeRegistry;
use crate::schema::ColumnSpec;
use crate::types::ColumnValue;

/// The registered names of the builtin codecs. These strings are the dispatch
/// keys of the registry and part of the public contract with schema authors.
pub mod names {
    pub const ARRAY: &str = "array";
    pub const OBJECT: &str = "object";
    pub const STRING: &str = "string";
    pub const BOOLEAN: &str = "boolean";
    pub const SHORT: &str = "short";
    pub const INTEGER: &str = "integer";
    pub const LONG: &str = "long";
    pub const FLOAT: &str = "float";
    pub const DOUBLE: &str = "double";
    pub const TIMESTAMP: &str = "timestamp";

    /// Every builtin name, in registration order.
    pub const ALL: &[&str] = &[
        ARRAY, OBJECT, STRING, BOOLEAN, SHORT, INTEGER, LONG, FLOAT, DOUBLE, TIMESTAMP,
    ];
}

/// A trait implemented by every column type, declaring its full conversion
/// and declaration contract.
pub trait ColumnCodec: std::fmt::Debug + Send + Sync {
    /// The stable name this codec is registered and dispatched under.
    fn name(&self) -> &'static str;

    /// Converts an application-level value into the value handed to the
    /// storage driver for serialization.
    ///
    /// The default is the identity pass-through; codecs with a real storage
    /// representation override it. Validation failures that the type can
    /// degrade gracefully (e.g. a shape the column cannot represent) must
    /// produce `Ok(ColumnValue::Null)`, not an error.
    fn encode(&self, value: ColumnValue) -> Result<ColumnValue, coltypesError> {
        Ok(value)
    }

    /// Converts a storage-returned value back into the application-level
    /// representation.
    ///
    /// The default is the identity pass-through. Decoders trust the driver:
    /// the value came out of a real column of this type, so no validation is
    /// performed on read.
    fn decode(&self, raw: ColumnValue) -> Result<ColumnValue, coltypesError> {
        Ok(raw)
    }

    /// Renders the SQL type declaration fragment for a column of this type.
    ///
    /// Pure function of the column spec and the read-only registry. Renderers
    /// that embed a nested element declaration resolve the element codec
    /// through `registry` and propagate its `UnknownType` failure unmodified.
    fn declaration_sql(
        &self,
        column: &ColumnSpec,
        registry: &TypeRegistry,
    ) -> Result<String, coltypesError>;
}

#[cfg(test)]
mod tests;
