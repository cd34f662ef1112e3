// ============================================================
// Layer 3 — Hyperparameter Domain Types
// ============================================================
// Hyperparameters arrive as JSON, frequently with every value
// stringified by the job launcher ("5", "true", "[1, 2]").
// Once decoded, each value is carried as a tagged HyperValue
// so the model layer can match on the variant it needs.

use std::collections::BTreeMap;
use std::fmt;

/// One decoded hyperparameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum HyperValue {
    /// JSON `null`; for `max_leaf_nodes` this means "unbounded"
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    List(Vec<HyperValue>),
    Object(BTreeMap<String, HyperValue>),
}

impl HyperValue {
    /// Short variant name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            HyperValue::Null       => "null",
            HyperValue::Integer(_) => "integer",
            HyperValue::Float(_)   => "float",
            HyperValue::Boolean(_) => "boolean",
            HyperValue::String(_)  => "string",
            HyperValue::List(_)    => "list",
            HyperValue::Object(_)  => "object",
        }
    }
}

/// Numbers become `Integer` when they fit in an i64, `Float` otherwise.
impl From<serde_json::Value> for HyperValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null      => HyperValue::Null,
            Value::Bool(b)   => HyperValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => HyperValue::Integer(i),
                None    => HyperValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => HyperValue::String(s),
            Value::Array(items) => {
                HyperValue::List(items.into_iter().map(HyperValue::from).collect())
            }
            Value::Object(map) => HyperValue::Object(
                map.into_iter().map(|(k, v)| (k, HyperValue::from(v))).collect(),
            ),
        }
    }
}

impl fmt::Display for HyperValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HyperValue::Null       => write!(f, "null"),
            HyperValue::Integer(n) => write!(f, "{n}"),
            HyperValue::Float(x)   => write!(f, "{x}"),
            HyperValue::Boolean(b) => write!(f, "{b}"),
            HyperValue::String(s)  => write!(f, "{s:?}"),
            HyperValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            HyperValue::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Name → value mapping for one training run.
///
/// Backed by a BTreeMap so logging and iteration are in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyperparameterSet {
    values: BTreeMap<String, HyperValue>,
}

impl HyperparameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&HyperValue> {
        self.values.get(key)
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: HyperValue) -> Option<HyperValue> {
        self.values.insert(key.into(), value)
    }

    /// Merge `other` into `self`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: HyperparameterSet) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HyperValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, HyperValue)> for HyperparameterSet {
    fn from_iter<I: IntoIterator<Item = (String, HyperValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

/// A configuration value that could not be JSON-decoded.
/// Non-fatal: the raw string is kept as `HyperValue::String`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeWarning {
    pub key: String,
    pub raw: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hyperparameter value {} for {} could not be decoded.",
            self.raw, self.key
        )
    }
}
