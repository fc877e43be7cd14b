// In: src/registry.rs

//! The explicit name-to-codec registry that wires the codec layer together.
//!
//! The registry is created once at application startup (usually via
//! `TypeRegistry::with_defaults`), optionally extended with user codecs, and
//! then treated as read-only for the rest of the process lifetime. It is
//! passed by reference (or shared via `Arc`) through every call site; there
//! is no global singleton. Because all codecs are `Send + Sync` and the table
//! never mutates after startup, concurrent readers need no synchronization.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::codecs::{
    ArrayCodec, BooleanCodec, ColumnCodec, DoubleCodec, FloatCodec, IntegerCodec, LongCodec,
    ObjectCodec, ShortCodec, StringCodec, TimestampCodec,
};
use crate::error::coltypesError;
use crate::schema::ColumnSpec;
use crate::types::ColumnValue;

/// The lookup table dispatching column type names to their codecs.
#[derive(Default)]
pub struct TypeRegistry {
    codecs: HashMap<String, Arc<dyn ColumnCodec>>,
}

impl TypeRegistry {
    /// Creates an empty registry. Most callers want `with_defaults` instead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the whole builtin codec family.
    pub fn with_defaults() -> Result<Self, coltypesError> {
        let mut registry = Self::new();
        registry.register(Arc::new(ArrayCodec))?;
        registry.register(Arc::new(ObjectCodec))?;
        registry.register(Arc::new(StringCodec))?;
        registry.register(Arc::new(BooleanCodec))?;
        registry.register(Arc::new(ShortCodec))?;
        registry.register(Arc::new(IntegerCodec))?;
        registry.register(Arc::new(LongCodec))?;
        registry.register(Arc::new(FloatCodec))?;
        registry.register(Arc::new(DoubleCodec))?;
        registry.register(Arc::new(TimestampCodec))?;
        Ok(registry)
    }

    /// Registers a codec under its own name.
    ///
    /// Registration is configure-once: a second codec under the same name is
    /// a `DuplicateType` error rather than a silent replacement.
    pub fn register(&mut self, codec: Arc<dyn ColumnCodec>) -> Result<(), coltypesError> {
        let name = codec.name();
        if self.codecs.contains_key(name) {
            return Err(coltypesError::DuplicateType(name.to_string()));
        }
        log::debug!("registering column type codec '{}'", name);
        self.codecs.insert(name.to_string(), codec);
        Ok(())
    }

    /// Looks a codec up by name. An unregistered name is an `UnknownType`
    /// error, which nested declaration renderers propagate unmodified.
    pub fn get(&self, name: &str) -> Result<&dyn ColumnCodec, coltypesError> {
        self.codecs
            .get(name)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| coltypesError::UnknownType(name.to_string()))
    }

    /// Returns `true` if a codec is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Convenience dispatch: renders the SQL declaration of `column` for the
    /// named type.
    pub fn declaration_sql(
        &self,
        type_name: &str,
        column: &ColumnSpec,
    ) -> Result<String, coltypesError> {
        self.get(type_name)?.declaration_sql(column, self)
    }

    /// Convenience dispatch: encodes `value` for the named type.
    pub fn encode(&self, type_name: &str, value: ColumnValue) -> Result<ColumnValue, coltypesError> {
        self.get(type_name)?.encode(value)
    }

    /// Convenience dispatch: decodes `raw` for the named type.
    pub fn decode(&self, type_name: &str, raw: ColumnValue) -> Result<ColumnValue, coltypesError> {
        self.get(type_name)?.decode(raw)
    }
}
