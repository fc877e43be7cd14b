// In: src/codecs/timestamp.rs

//! The codec that maps application-level timestamps to a TIMESTAMP SQL
//! column type.
//!
//! The storage representation is milliseconds since the Unix epoch, which is
//! what the database stores natively and returns on read. Encoding accepts
//! either millis that are already in storage form or a datetime string, which
//! is parsed with chrono (RFC 3339 first, then a naive `Y-m-d H:M:S` form
//! interpreted as UTC). Unlike the shape-gated ARRAY/OBJECT codecs, a value
//! this codec cannot interpret is a hard `ConversionError`: a malformed
//! timestamp is caller data corruption, not a representable "no value".

use chrono::{DateTime, NaiveDateTime};

use crate::codecs::{names, ColumnCodec};
use crate::error::coltypesError;
use crate::registry::TypeRegistry;
use crate::schema::ColumnSpec;
use crate::types::ColumnValue;

/// Accepted textual form besides RFC 3339, interpreted as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// The TIMESTAMP column codec. Stateless; one instance serves any number of columns.
#[derive(Debug, Default)]
pub struct TimestampCodec;

impl TimestampCodec {
    fn parse_datetime(&self, text: &str) -> Result<i64, coltypesError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.timestamp_millis());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, NAIVE_FORMAT) {
            return Ok(naive.and_utc().timestamp_millis());
        }
        Err(coltypesError::conversion(
            names::TIMESTAMP,
            format!("'{}' is not an RFC 3339 or '{}' datetime", text, NAIVE_FORMAT),
        ))
    }
}

impl ColumnCodec for TimestampCodec {
    fn name(&self) -> &'static str {
        names::TIMESTAMP
    }

    /// Converts to epoch millis. `Null` and `Int` millis pass through;
    /// strings are parsed. Anything else is a `ConversionError`.
    fn encode(&self, value: ColumnValue) -> Result<ColumnValue, coltypesError> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::Int(millis) => Ok(ColumnValue::Int(millis)),
            ColumnValue::Str(text) => Ok(ColumnValue::Int(self.parse_datetime(&text)?)),
            other => Err(coltypesError::conversion(
                names::TIMESTAMP,
                format!("expected epoch millis or a datetime string, got {:?}", other),
            )),
        }
    }

    // decode is the trait default: identity. The driver returns epoch millis
    // for a TIMESTAMP column; they are already in application form.

    fn declaration_sql(
        &self,
        _column: &ColumnSpec,
        _registry: &TypeRegistry,
    ) -> Result<String, coltypesError> {
        Ok("TIMESTAMP".to_string())
    }
}
