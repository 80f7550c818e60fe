//! Typed template variables.
//! Declares the closed set of variable types, the tagged value each of them
//! coerces into, and the variable declaration read from `boilerplate.yml`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Declared type of a variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    List,
    Map,
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariableType::String => "string",
            VariableType::Int => "int",
            VariableType::Float => "float",
            VariableType::Bool => "bool",
            VariableType::List => "list",
            VariableType::Map => "map",
        };
        f.write_str(name)
    }
}

impl VariableType {
    /// Illustrative literal shown next to prompts.
    pub fn example(&self) -> &'static str {
        match self {
            VariableType::String => "foo",
            VariableType::Int => "42",
            VariableType::Float => "3.14159",
            VariableType::Bool => "true",
            VariableType::List => r#"["foo", "bar", "baz"]"#,
            VariableType::Map => r#"{"key1": "value1", "key2": "value2"}"#,
        }
    }

    /// Coerces a raw value into this type's canonical representation.
    ///
    /// Raw values are either text (command line, prompt) or structures read
    /// from a config or var file. Text given for any type other than `string`
    /// is parsed as YAML first. A null raw value stays [`Value::Null`] whatever the type.
    ///
    /// # Errors
    /// * `Error::UnparseableValueError` if the raw value does not fit the type
    pub fn parse_raw(&self, raw: &serde_json::Value) -> Result<Value> {
        if raw.is_null() {
            return Ok(Value::Null);
        }

        let parsed = match (self, raw) {
            (VariableType::String, raw) => scalar_to_string(raw).map(Value::String),

            (VariableType::Int, serde_json::Value::Number(n)) => n.as_i64().map(Value::Int),

            (VariableType::Float, serde_json::Value::Number(n)) => n.as_f64().map(Value::Float),

            (VariableType::Bool, serde_json::Value::Bool(b)) => Some(Value::Bool(*b)),

            (VariableType::List, serde_json::Value::Array(items)) => items
                .iter()
                .map(scalar_to_string)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            (VariableType::Map, serde_json::Value::Object(entries)) => entries
                .iter()
                .map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
                .collect::<Option<IndexMap<_, _>>>()
                .map(Value::Map),
            // Text from the command line is read the same way as a prompt answer.
            (_, serde_json::Value::String(s)) => match parse_yaml_string(s) {
                Ok(serde_json::Value::String(_) | serde_json::Value::Null) | Err(_) => None,
                Ok(parsed) => return self.parse_raw(&parsed).map_err(|_| self.unparseable(raw)),
            },

            _ => None,
        };

        parsed.ok_or_else(|| self.unparseable(raw))
    }

    fn unparseable(&self, raw: &serde_json::Value) -> Error {
        Error::UnparseableValueError { value: describe_raw(raw), expected: *self }
    }
}

/// A variable value after coercion into its declared type.
///
/// Serialized untagged so templates see plain strings, numbers, sequences
/// and mappings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Map(IndexMap<String, String>),
    /// No value: an empty prompt answer for a variable without a default.
    Null,
}

impl Value {
    /// Converts an untyped raw value without any declared type to guide it.
    pub fn infer(raw: &serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(describe_raw).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries.iter().map(|(k, v)| (k.clone(), describe_raw(v))).collect(),
            ),
        }
    }

    /// Converts back into the raw representation.
    pub fn to_raw(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => serde_json::Value::from(items.clone()),
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            ),
            Value::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => write!(f, "{items:?}"),
            Value::Map(entries) => write!(f, "{entries:?}"),
            Value::Null => f.write_str("null"),
        }
    }
}

/// A variable declared by a config, or contributed by one of its dependencies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variable {
    pub name: String,

    /// Name of the dependency that contributed this variable
    #[serde(skip)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub variable_type: VariableType,

    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Sample value shown when prompting, in place of the type's own example
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

impl Variable {
    pub fn new<S: Into<String>>(name: S, variable_type: VariableType) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            description: String::new(),
            variable_type,
            default: None,
            example: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_example(mut self, example: serde_json::Value) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Name qualified by its namespace, for prompts and diagnostics only.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

/// Parses a single line of user input as a YAML scalar or structure.
pub fn parse_yaml_string(text: &str) -> Result<serde_json::Value> {
    Ok(serde_yaml::from_str(text)?)
}

/// Renders a raw value the way a user would have typed it.
pub fn describe_raw(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn scalar_to_string(raw: &serde_json::Value) -> Option<String> {
    match raw {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
