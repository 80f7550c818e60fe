use boilerplate::error::Error;
use boilerplate::variables::{parse_yaml_string, Value, Variable, VariableType};
use indexmap::IndexMap;
use serde_json::json;

#[test]
fn test_full_name() {
    let variable = Variable::new("Foo", VariableType::String);
    assert_eq!(variable.full_name(), "Foo");

    let variable = variable.with_namespace("docs");
    assert_eq!(variable.full_name(), "docs.Foo");
    assert_eq!(variable.name, "Foo");
}

#[test]
fn test_type_display_and_examples() {
    assert_eq!(VariableType::String.to_string(), "string");
    assert_eq!(VariableType::Map.to_string(), "map");
    assert_eq!(VariableType::Int.example(), "42");
    assert_eq!(VariableType::Bool.example(), "true");

    // Every example must be accepted by its own type.
    for variable_type in [
        VariableType::String,
        VariableType::Int,
        VariableType::Float,
        VariableType::Bool,
        VariableType::List,
        VariableType::Map,
    ] {
        let raw = json!(variable_type.example());
        assert!(variable_type.parse_raw(&raw).is_ok(), "example of {variable_type} rejected");
    }
}

#[test]
fn test_parse_string() {
    assert_eq!(VariableType::String.parse_raw(&json!("foo")).unwrap(), Value::String("foo".into()));
    assert_eq!(VariableType::String.parse_raw(&json!(42)).unwrap(), Value::String("42".into()));
    assert_eq!(VariableType::String.parse_raw(&json!(true)).unwrap(), Value::String("true".into()));

    let err = VariableType::String.parse_raw(&json!(["a", "b"])).unwrap_err();
    assert!(matches!(err, Error::UnparseableValueError { expected: VariableType::String, .. }));
}

#[test]
fn test_parse_numbers() {
    assert_eq!(VariableType::Int.parse_raw(&json!(7)).unwrap(), Value::Int(7));
    assert_eq!(VariableType::Int.parse_raw(&json!(" 12 ")).unwrap(), Value::Int(12));
    assert!(VariableType::Int.parse_raw(&json!("twelve")).is_err());
    assert!(VariableType::Int.parse_raw(&json!(1.5)).is_err());
    assert!(VariableType::Int.parse_raw(&json!("1.5")).is_err());
    // Blank text is not a missing value.
    assert!(VariableType::Int.parse_raw(&json!("")).is_err());

    assert_eq!(VariableType::Float.parse_raw(&json!(1.5)).unwrap(), Value::Float(1.5));
    assert_eq!(VariableType::Float.parse_raw(&json!(2)).unwrap(), Value::Float(2.0));
    assert_eq!(VariableType::Float.parse_raw(&json!("0.25")).unwrap(), Value::Float(0.25));
    assert!(VariableType::Float.parse_raw(&json!(false)).is_err());
}

#[test]
fn test_parse_bool() {
    assert_eq!(VariableType::Bool.parse_raw(&json!(true)).unwrap(), Value::Bool(true));
    assert_eq!(VariableType::Bool.parse_raw(&json!("false")).unwrap(), Value::Bool(false));
    assert_eq!(VariableType::Bool.parse_raw(&json!("True")).unwrap(), Value::Bool(true));
    assert_eq!(VariableType::Bool.parse_raw(&json!(" FALSE ")).unwrap(), Value::Bool(false));
    assert!(VariableType::Bool.parse_raw(&json!("yes please")).is_err());
    assert!(VariableType::Bool.parse_raw(&json!(1)).is_err());
}

#[test]
fn test_parse_list() {
    let expected = Value::List(vec!["foo".into(), "bar".into()]);
    assert_eq!(VariableType::List.parse_raw(&json!(["foo", "bar"])).unwrap(), expected);
    assert_eq!(VariableType::List.parse_raw(&json!("[foo, bar]")).unwrap(), expected);
    assert_eq!(
        VariableType::List.parse_raw(&json!([1, true])).unwrap(),
        Value::List(vec!["1".into(), "true".into()])
    );

    assert!(VariableType::List.parse_raw(&json!("foo")).is_err());
    assert!(VariableType::List.parse_raw(&json!([["nested"]])).is_err());
    assert!(VariableType::List.parse_raw(&json!({"key": "value"})).is_err());
}

#[test]
fn test_parse_map() {
    let mut expected = IndexMap::new();
    expected.insert("key1".to_string(), "value1".to_string());
    expected.insert("key2".to_string(), "2".to_string());

    assert_eq!(
        VariableType::Map.parse_raw(&json!({"key1": "value1", "key2": 2})).unwrap(),
        Value::Map(expected.clone())
    );
    assert_eq!(
        VariableType::Map.parse_raw(&json!(r#"{"key1": "value1", "key2": 2}"#)).unwrap(),
        Value::Map(expected)
    );

    let err = VariableType::Map.parse_raw(&json!("[a, b]")).unwrap_err();
    assert_eq!(err.to_string(), "Unable to parse '[a, b]' as a value of type map.");
}

#[test]
fn test_null_is_kept_for_every_type() {
    assert_eq!(VariableType::Int.parse_raw(&serde_json::Value::Null).unwrap(), Value::Null);
    assert_eq!(VariableType::Map.parse_raw(&serde_json::Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_infer_and_to_raw() {
    assert_eq!(Value::infer(&json!("x")), Value::String("x".into()));
    assert_eq!(Value::infer(&json!(3)), Value::Int(3));
    assert_eq!(Value::infer(&json!(0.5)), Value::Float(0.5));
    assert_eq!(Value::infer(&json!(["a", 1])), Value::List(vec!["a".into(), "1".into()]));

    let value = Value::List(vec!["a".into(), "b".into()]);
    assert_eq!(value.to_raw(), json!(["a", "b"]));
    assert_eq!(Value::Null.to_raw(), serde_json::Value::Null);
}

#[test]
fn test_parse_yaml_string() {
    assert_eq!(parse_yaml_string("hello world").unwrap(), json!("hello world"));
    assert_eq!(parse_yaml_string("42").unwrap(), json!(42));
    assert_eq!(parse_yaml_string("[a, b]").unwrap(), json!(["a", "b"]));
    assert_eq!(parse_yaml_string("{a: 1}").unwrap(), json!({"a": 1}));
    assert!(matches!(parse_yaml_string("[unclosed"), Err(Error::YamlError(_))));
}

#[test]
fn test_value_serializes_untagged() {
    assert_eq!(serde_json::to_value(Value::Int(1)).unwrap(), json!(1));
    assert_eq!(serde_json::to_value(Value::String("a".into())).unwrap(), json!("a"));
    assert_eq!(serde_json::to_value(Value::Null).unwrap(), serde_json::Value::Null);
}
