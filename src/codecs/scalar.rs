// In: src/codecs/scalar.rs

//! The primitive column type codecs.
//!
//! Each scalar type has an identity encode/decode (the driver's JSON wire
//! already carries scalars in their final representation) and a fixed SQL
//! declaration keyword. The keywords are part of the wire contract with the
//! schema generator.

use crate::codecs::{names, ColumnCodec};
use crate::error::coltypesError;
use crate::registry::TypeRegistry;
use crate::schema::ColumnSpec;

// Expand one unit-struct codec per (type, name constant, SQL keyword) triple.
macro_rules! impl_scalar_codec {
    ($(#[$doc:meta])* $codec:ident, $name:expr, $keyword:expr) => {
        $(#[$doc])*
        #[derive(Debug, Default)]
        pub struct $codec;

        impl ColumnCodec for $codec {
            fn name(&self) -> &'static str {
                $name
            }

            fn declaration_sql(
                &self,
                _column: &ColumnSpec,
                _registry: &TypeRegistry,
            ) -> Result<String, coltypesError> {
                Ok($keyword.to_string())
            }
        }
    };
}

impl_scalar_codec!(
    /// The generic string type; also the default ARRAY element type.
    StringCodec,
    names::STRING,
    "STRING"
);
impl_scalar_codec!(
    /// Boolean column type.
    BooleanCodec,
    names::BOOLEAN,
    "BOOLEAN"
);
impl_scalar_codec!(
    /// 16-bit integer column type.
    ShortCodec,
    names::SHORT,
    "SHORT"
);
impl_scalar_codec!(
    /// 32-bit integer column type.
    IntegerCodec,
    names::INTEGER,
    "INTEGER"
);
impl_scalar_codec!(
    /// 64-bit integer column type.
    LongCodec,
    names::LONG,
    "LONG"
);
impl_scalar_codec!(
    /// 32-bit floating-point column type.
    FloatCodec,
    names::FLOAT,
    "FLOAT"
);
impl_scalar_codec!(
    /// 64-bit floating-point column type.
    DoubleCodec,
    names::DOUBLE,
    "DOUBLE"
);

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnValue;

    #[test]
    fn test_declaration_keywords() {
        let registry = TypeRegistry::with_defaults().unwrap();
        let column = ColumnSpec::new("c");
        let cases: Vec<(Box<dyn ColumnCodec>, &str)> = vec![
            (Box::new(StringCodec), "STRING"),
            (Box::new(BooleanCodec), "BOOLEAN"),
            (Box::new(ShortCodec), "SHORT"),
            (Box::new(IntegerCodec), "INTEGER"),
            (Box::new(LongCodec), "LONG"),
            (Box::new(FloatCodec), "FLOAT"),
            (Box::new(DoubleCodec), "DOUBLE"),
        ];
        for (codec, expected) in cases {
            assert_eq!(
                codec.declaration_sql(&column, &registry).unwrap(),
                expected,
                "wrong keyword for codec '{}'",
                codec.name()
            );
        }
    }

    #[test]
    fn test_scalar_conversion_is_identity_both_ways() {
        let codec = IntegerCodec;
        let value = ColumnValue::Int(42);
        assert_eq!(codec.encode(value.clone()).unwrap(), value);
        assert_eq!(codec.decode(value.clone()).unwrap(), value);
    }
}
