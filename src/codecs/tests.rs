use std::sync::Arc;

use super::*;
use crate::registry::TypeRegistry;
use crate::schema::{ColumnSpec, DeclarationOptions, ObjectPolicy};
use crate::types::{ColumnValue, MapKey};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper to build the registry every scenario runs against.
fn default_registry() -> TypeRegistry {
    init_logging();
    TypeRegistry::with_defaults().unwrap()
}

#[test]
fn test_full_table_declaration_fragments() {
    let registry = default_registry();

    // A representative table: scalars, a timestamp, an array of longs, a
    // default-element array, and a strict object column.
    let cases = vec![
        (names::STRING, ColumnSpec::new("name"), "STRING"),
        (names::BOOLEAN, ColumnSpec::new("active"), "BOOLEAN"),
        (names::TIMESTAMP, ColumnSpec::new("created_at"), "TIMESTAMP"),
        (
            names::ARRAY,
            ColumnSpec::with_element_type("scores", "long"),
            "ARRAY ( LONG )",
        ),
        (names::ARRAY, ColumnSpec::new("tags"), "ARRAY ( STRING )"),
        (
            names::OBJECT,
            ColumnSpec {
                name: "settings".to_string(),
                not_null: false,
                default: None,
                options: DeclarationOptions {
                    element_type: None,
                    object_policy: ObjectPolicy::Strict,
                },
            },
            "OBJECT ( STRICT )",
        ),
    ];

    for (type_name, column, expected) in cases {
        assert_eq!(
            registry.declaration_sql(type_name, &column).unwrap(),
            expected,
            "wrong declaration for column '{}'",
            column.name
        );
    }
}

#[test]
fn test_array_column_through_the_json_wire() {
    let registry = default_registry();

    // 1. Application side: a sequential list arrives from user code as JSON.
    let value = ColumnValue::from_json(json!(["a", "b", "c"]));

    // 2. Encode for storage: passes through, then serializes for the driver.
    let stored = registry.encode(names::ARRAY, value.clone()).unwrap();
    assert_eq!(stored.clone().into_json(), json!(["a", "b", "c"]));

    // 3. Driver returns the column on read; decode is the identity.
    let read_back = registry.decode(names::ARRAY, stored).unwrap();
    assert_eq!(read_back, value);
}

#[test]
fn test_array_degradation_scenarios_from_the_wire() {
    let registry = default_registry();

    // A keyed map is not representable as an ARRAY: degrades to null.
    let assoc = ColumnValue::from_json(json!({"a": 1, "b": 2}));
    assert_eq!(
        registry.encode(names::ARRAY, assoc).unwrap(),
        ColumnValue::Null
    );

    // Integer keys with a gap at index 1: also null.
    let gapped = ColumnValue::from_json(json!({"0": "x", "2": "y"}));
    assert_eq!(
        registry.encode(names::ARRAY, gapped).unwrap(),
        ColumnValue::Null
    );

    // The same two values are exactly what the OBJECT column accepts.
    let assoc = ColumnValue::from_json(json!({"a": 1, "b": 2}));
    assert_eq!(
        registry.encode(names::OBJECT, assoc.clone()).unwrap(),
        assoc
    );
}

#[test]
fn test_nested_array_element_resolution_failure_is_fatal() {
    let registry = default_registry();
    let column = ColumnSpec::with_element_type("broken", "geo_shape");
    let err = registry.declaration_sql(names::ARRAY, &column).unwrap_err();
    // The registry's unknown-type failure reaches the caller unmodified.
    assert!(matches!(err, coltypesError::UnknownType(name) if name == "geo_shape"));
}

#[test]
fn test_user_codec_extends_the_builtin_family() {
    /// A user-defined IP column type: identity conversion, fixed keyword.
    #[derive(Debug)]
    struct IpCodec;

    impl ColumnCodec for IpCodec {
        fn name(&self) -> &'static str {
            "ip"
        }

        fn declaration_sql(
            &self,
            _column: &ColumnSpec,
            _registry: &TypeRegistry,
        ) -> Result<String, coltypesError> {
            Ok("IP".to_string())
        }
    }

    init_logging();
    let mut registry = TypeRegistry::with_defaults().unwrap();
    registry.register(Arc::new(IpCodec)).unwrap();

    // The new type is a first-class ARRAY element type.
    let column = ColumnSpec::with_element_type("addresses", "ip");
    assert_eq!(
        registry.declaration_sql(names::ARRAY, &column).unwrap(),
        "ARRAY ( IP )"
    );

    // Registering it twice trips the configure-once guard.
    let err = registry.register(Arc::new(IpCodec)).unwrap_err();
    assert!(matches!(err, coltypesError::DuplicateType(name) if name == "ip"));
}

#[test]
fn test_timestamp_column_end_to_end() {
    let registry = default_registry();

    // Writes may arrive as text; storage is always epoch millis.
    let encoded = registry
        .encode(
            names::TIMESTAMP,
            ColumnValue::Str("2023-11-14T22:13:20Z".to_string()),
        )
        .unwrap();
    assert_eq!(encoded, ColumnValue::Int(1_700_000_000_000));
    assert_eq!(encoded.clone().into_json(), json!(1_700_000_000_000i64));

    // Reads come back as millis and stay millis.
    let read_back = registry.decode(names::TIMESTAMP, encoded.clone()).unwrap();
    assert_eq!(read_back, encoded);
}

#[test]
fn test_sequentially_keyed_json_object_is_an_array_value() {
    let registry = default_registry();

    // {"0": .., "1": ..} carries contiguous zero-based integer keys, so the
    // key-coercion rule makes it a sequential list: the ARRAY column takes it.
    let value = ColumnValue::from_json(json!({"0": "a", "1": "b"}));
    let encoded = registry.encode(names::ARRAY, value.clone()).unwrap();
    assert_eq!(encoded, value);
    assert!(matches!(
        encoded,
        ColumnValue::Map(ref entries) if entries[0].0 == MapKey::Int(0)
    ));
}
