use std::collections::BTreeMap;
use std::collections::HashMap;

use oauthsig_core::Error;
use oauthsig_core::Result;
use serde_json::Value;

use crate::encode::rfc3986_encode;

/// Value of a single request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// `key=value`
    Scalar(String),
    /// Multi-valued parameter, one `key=element` per element in order.
    List(Vec<String>),
    /// Nested parameter, one `key[subkey]=value` per entry.
    Nested(BTreeMap<String, String>),
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Scalar(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        ParameterValue::Scalar(value.clone())
    }
}

/// A missing value is signed as an empty string.
impl From<Option<String>> for ParameterValue {
    fn from(value: Option<String>) -> Self {
        ParameterValue::Scalar(value.unwrap_or_default())
    }
}

macro_rules! scalar_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParameterValue {
                fn from(value: $t) -> Self {
                    ParameterValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(bool, i32, i64, u32, u64, usize);

impl<T: Into<String>> From<Vec<T>> for ParameterValue {
    fn from(value: Vec<T>) -> Self {
        ParameterValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, String>> for ParameterValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        ParameterValue::Nested(value)
    }
}

impl From<HashMap<String, String>> for ParameterValue {
    fn from(value: HashMap<String, String>) -> Self {
        ParameterValue::Nested(value.into_iter().collect())
    }
}

/// Coerce a JSON leaf into the string that gets signed.
fn json_scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(v) => Some(v.to_string()),
        Value::Number(v) => Some(v.to_string()),
        Value::String(v) => Some(v),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Converts a JSON value into a parameter value.
///
/// - `null` becomes an empty scalar, booleans and numbers are signed as
///   their JSON text.
/// - Arrays become [`ParameterValue::List`] and objects become
///   [`ParameterValue::Nested`], both only one level deep.
impl TryFrom<Value> for ParameterValue {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(values) => values
                .into_iter()
                .map(|v| {
                    json_scalar(v).ok_or_else(|| {
                        Error::request_invalid("list parameter must only contain scalars")
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(ParameterValue::List),
            Value::Object(values) => values
                .into_iter()
                .map(|(k, v)| match json_scalar(v) {
                    Some(v) => Ok((k, v)),
                    None => Err(Error::request_invalid(format!(
                        "nested parameter {k} must be a scalar"
                    ))),
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(ParameterValue::Nested),
            v => Ok(ParameterValue::Scalar(json_scalar(v).unwrap_or_default())),
        }
    }
}

/// Request parameters to be signed, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, ParameterValue>);

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Set a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.0.get(key)
    }

    /// Number of top level parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top level parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into `(key, value)` entries.
    ///
    /// Every scalar, list element and nested entry appears exactly once.
    /// List elements keep their order, nested entries are keyed as
    /// `key[subkey]`.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut entries = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                ParameterValue::Scalar(v) => entries.push((key.clone(), v.clone())),
                ParameterValue::List(vs) => {
                    entries.extend(vs.iter().map(|v| (key.clone(), v.clone())))
                }
                ParameterValue::Nested(m) => {
                    entries.extend(m.iter().map(|(sub, v)| (format!("{key}[{sub}]"), v.clone())))
                }
            }
        }
        entries
    }
}

/// Collect decoded `(name, value)` pairs, repeated names become a list in
/// the order they were seen.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (k, v) in iter {
            grouped.entry(k.into()).or_default().push(v.into());
        }

        ParameterSet(
            grouped
                .into_iter()
                .map(|(k, vs)| match <[String; 1]>::try_from(vs) {
                    Ok([v]) => (k, ParameterValue::Scalar(v)),
                    Err(vs) => (k, ParameterValue::List(vs)),
                })
                .collect(),
        )
    }
}

impl TryFrom<Value> for ParameterSet {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(values) = value else {
            return Err(Error::request_invalid("parameters must be a JSON object"));
        };

        values
            .into_iter()
            .map(|(k, v)| ParameterValue::try_from(v).map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(ParameterSet)
    }
}

/// Normalize parameters as described in
/// [RFC 5849 section 3.4.1.3.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2).
///
/// Names and values are percent encoded, sorted by name and then by value
/// using ascending byte order, joined by `=` and then by `&`. An empty set
/// normalizes to an empty string.
pub fn normalize(params: &ParameterSet) -> String {
    let mut pairs: Vec<(String, String)> = params
        .flatten()
        .into_iter()
        .map(|(k, v)| (rfc3986_encode(&k), rfc3986_encode(&v)))
        .collect();
    // Encoded output is ASCII, so String ordering is byte ordering.
    pairs.sort();

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (i, (k, v)) in pairs.iter().enumerate() {
        if i > 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}
