// In: src/codecs/object.rs

//! The codec that maps an application-level keyed map to an OBJECT SQL
//! column type.
//!
//! This is the dual of the ARRAY codec's validation gate: a non-empty
//! *sequential* list has positional semantics and is not representable as an
//! OBJECT, so it degrades to the null sentinel. Keyed maps pass through, and
//! so does the empty value (an empty object). The degradation is a successful
//! "no value" result, never an error.

use crate::codecs::{names, ColumnCodec};
use crate::error::coltypesError;
use crate::registry::TypeRegistry;
use crate::schema::ColumnSpec;
use crate::types::ColumnValue;

/// The OBJECT column codec. Stateless; one instance serves any number of columns.
#[derive(Debug, Default)]
pub struct ObjectCodec;

impl ColumnCodec for ObjectCodec {
    fn name(&self) -> &'static str {
        names::OBJECT
    }

    /// Passes a list-typed value through unless it is a non-empty sequential
    /// list; degrades scalars, null, and sequential lists to `Null`. This
    /// function never fails.
    fn encode(&self, value: ColumnValue) -> Result<ColumnValue, coltypesError> {
        let non_empty_sequential =
            value.element_count().unwrap_or(0) > 0 && value.is_sequential_list();
        if value.is_list_typed() && !non_empty_sequential {
            return Ok(value);
        }
        if !value.is_null() {
            log::debug!("object column value is not a keyed map; degrading to NULL");
        }
        Ok(ColumnValue::Null)
    }

    // decode is the trait default: identity, no validation on read.

    /// Renders `OBJECT ( <POLICY> )`, same spacing convention as ARRAY.
    /// The policy comes from the column's `object_policy` option (DYNAMIC
    /// when unspecified).
    fn declaration_sql(
        &self,
        column: &ColumnSpec,
        _registry: &TypeRegistry,
    ) -> Result<String, coltypesError> {
        Ok(format!(
            "OBJECT ( {} )",
            column.options.object_policy.as_sql_keyword()
        ))
    }
}
