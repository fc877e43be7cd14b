// In: src/codecs/array.rs

//! The codec that maps an application-level sequential list to an ARRAY SQL
//! column type.
//!
//! Element order is significant and preserved end to end. A value that is not
//! a sequential list is not representable as an ARRAY; rather than corrupt
//! the column, encoding degrades it to the null sentinel. That degradation is
//! a successful "no value" result, never an error.

use crate::codecs::{names, ColumnCodec};
use crate::error::coltypesError;
use crate::registry::TypeRegistry;
use crate::schema::ColumnSpec;
use crate::types::ColumnValue;

/// The ARRAY column codec. Stateless; one instance serves any number of columns.
#[derive(Debug, Default)]
pub struct ArrayCodec;

impl ColumnCodec for ArrayCodec {
    fn name(&self) -> &'static str {
        names::ARRAY
    }

    /// Passes a sequential list through unchanged; degrades everything else
    /// to `Null`. The empty list is sequential by definition and encodes to
    /// itself. This function never fails.
    fn encode(&self, value: ColumnValue) -> Result<ColumnValue, coltypesError> {
        if value.is_sequential_list() {
            return Ok(value);
        }
        if !value.is_null() {
            log::debug!(
                "array column value is not a sequential list; degrading to NULL (got {})",
                value
                    .element_count()
                    .map(|n| format!("list-typed value with {} elements", n))
                    .unwrap_or_else(|| "non-list value".to_string())
            );
        }
        Ok(ColumnValue::Null)
    }

    // decode is the trait default: identity, no validation. The storage layer
    // produced the value from a real ARRAY column and is trusted on read.

    /// Renders `ARRAY ( <element declaration> )`.
    ///
    /// The element type comes from the column's `type` option and defaults to
    /// the generic string type. The element codec renders its own declaration
    /// for the same column; an unknown element type name propagates the
    /// registry's `UnknownType` error unmodified.
    fn declaration_sql(
        &self,
        column: &ColumnSpec,
        registry: &TypeRegistry,
    ) -> Result<String, coltypesError> {
        let element_type = column
            .options
            .element_type
            .as_deref()
            .unwrap_or(names::STRING);
        // A self-referential element type would recurse without a base case:
        // the options bag carries one element type name, so the inner array
        // would have no element of its own.
        if element_type == names::ARRAY {
            return Err(coltypesError::InvalidDeclaration {
                column: column.name.clone(),
                reason: "ARRAY element type cannot itself be 'array'".to_string(),
            });
        }
        let element_sql = registry.get(element_type)?.declaration_sql(column, registry)?;
        // The exact whitespace is part of the wire contract with the schema
        // generator: `ARRAY ( <elem> )`, single spaces inside the parentheses.
        Ok(format!("ARRAY ( {} )", element_sql))
    }
}
