// In: src/error.rs

//! This module defines the single, unified error type for the entire coltypes library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum coltypesError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A column type name was looked up in the registry but was never registered.
    /// This is a schema-authoring bug and is propagated unmodified to the caller.
    #[error("Unknown column type '{0}': no codec registered under this name")]
    UnknownType(String),

    /// A codec was registered under a name that is already taken. The registry
    /// is configure-once; silently replacing a codec would corrupt dispatch.
    #[error("Column type '{0}' is already registered")]
    DuplicateType(String),

    /// A value could not be converted into the storage representation of the
    /// named column type.
    #[error("Cannot convert value for column type '{type_name}': {reason}")]
    ConversionError { type_name: String, reason: String },

    /// A column declaration that cannot be rendered, e.g. an ARRAY column
    /// whose element type is itself `array` (the options bag carries a single
    /// element type name, so there is no inner element to render).
    #[error("Invalid declaration for column '{column}': {reason}")]
    InvalidDeclaration { column: String, reason: String },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically during value interchange
    /// with the driver layer.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl coltypesError {
    /// Shorthand for building a `ConversionError` without the struct-literal noise.
    pub fn conversion(type_name: &str, reason: impl Into<String>) -> Self {
        coltypesError::ConversionError {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }
}
