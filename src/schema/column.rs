// In: src/schema/column.rs

//! The single source of truth for per-column declaration configuration.
//!
//! This module defines the `ColumnSpec` struct, which is designed to be
//! created once at schema-definition time (e.g., from a user's migration
//! file or schema DSL) and then treated as immutable for the rest of its
//! life. Codecs receive it by shared reference and never mutate it.

use serde::{Deserialize, Serialize};

use crate::types::ColumnValue;

//==================================================================================
// I. Declaration Option Enums
//==================================================================================

/// The column policy of an OBJECT column, controlling how the database treats
/// keys that are not part of the declared schema.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObjectPolicy {
    /// **Default:** New keys are accepted and indexed on the fly.
    #[default]
    Dynamic,

    /// Only declared keys are accepted; unknown keys are rejected by the server.
    Strict,

    /// New keys are accepted but not indexed.
    Ignored,
}

impl ObjectPolicy {
    /// The keyword rendered inside an `OBJECT ( .. )` declaration.
    pub fn as_sql_keyword(&self) -> &'static str {
        match self {
            ObjectPolicy::Dynamic => "DYNAMIC",
            ObjectPolicy::Strict => "STRICT",
            ObjectPolicy::Ignored => "IGNORED",
        }
    }
}

//==================================================================================
// II. Platform Declaration Options
//==================================================================================

/// The platform-specific options of a column declaration.
///
/// This is the options bag the declaration renderers consult. Unrecognized
/// concerns belong to the surrounding framework, not here; the bag only
/// carries what the codecs themselves interpret.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct DeclarationOptions {
    /// The element type name of an ARRAY column. When absent, the element
    /// type defaults to the generic string type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    /// The column policy of an OBJECT column.
    #[serde(default)]
    pub object_policy: ObjectPolicy,
}

//==================================================================================
// III. The Column Spec
//==================================================================================

/// The declaration-time description of a single column.
///
/// Constructed once per column definition and immutable thereafter. The codec
/// layer only reads `options`; `name`, `not_null` and `default` are carried
/// through for the schema generator that assembles full DDL statements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ColumnSpec {
    /// The column name as it appears in DDL.
    pub name: String,

    /// Whether the column carries a NOT NULL constraint.
    #[serde(default)]
    pub not_null: bool,

    /// An optional literal default value for the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnValue>,

    /// Platform-specific declaration options interpreted by the codecs.
    #[serde(default)]
    pub options: DeclarationOptions,
}

impl ColumnSpec {
    /// Creates a spec with default options, the common case for scalar columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            not_null: false,
            default: None,
            options: DeclarationOptions::default(),
        }
    }

    /// Creates a spec whose ARRAY element type is `element_type`.
    pub fn with_element_type(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            not_null: false,
            default: None,
            options: DeclarationOptions {
                element_type: Some(element_type.into()),
                ..DeclarationOptions::default()
            },
        }
    }
}
