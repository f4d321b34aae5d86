//! Feature schema and usage-record vectorization
//!
//! The schema is the ordered list of feature names the model was trained on.
//! Vector index `i` corresponds to `schema[i]` everywhere downstream, so the
//! order is fixed at load time and never changes.

use crate::{Error, Result, Vector};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single recognized derived feature
pub const TOTAL_USAGE: &str = "Total_Usage";

/// Fields summed to produce [`TOTAL_USAGE`]
pub const TOTAL_USAGE_COMPONENTS: [&str; 4] = ["Day Mins", "Eve Mins", "Night Mins", "Intl Mins"];

/// Ordered feature names, fixed at artifact-load time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    #[inline]
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Build the dense feature vector for a usage record, in schema order
    ///
    /// `Total_Usage` is computed as the sum of the four usage-minute fields;
    /// every other name is read verbatim from the record. Absent fields
    /// default to 0.
    pub fn vectorize(&self, record: &UsageRecord) -> Result<Vector> {
        let mut data = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let value = if name == TOTAL_USAGE {
                let mut total = 0.0;
                for component in TOTAL_USAGE_COMPONENTS {
                    total += record.numeric_field(component)?;
                }
                total
            } else {
                record.numeric_field(name)?
            };
            data.push(value);
        }
        Ok(Vector::new(data))
    }
}

impl FromIterator<String> for FeatureSchema {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A per-request usage record: field name to loosely-typed value
///
/// Records arrive as JSON objects from the caller boundary and may be sparse;
/// missing fields are treated as zero during vectorization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UsageRecord(serde_json::Map<String, Value>);

impl UsageRecord {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Read a field as a float, defaulting to 0.0 when absent
    ///
    /// Accepts JSON numbers, numeric strings, and booleans (1/0). Anything
    /// else is a caller error, not a value to guess at.
    pub fn numeric_field(&self, name: &str) -> Result<f64> {
        match self.0.get(name) {
            None => Ok(0.0),
            Some(value) => coerce_numeric(name, value),
        }
    }
}

impl From<serde_json::Map<String, Value>> for UsageRecord {
    fn from(fields: serde_json::Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn coerce_numeric(name: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidInput(format!("field '{name}' is not a finite number"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidInput(format!("field '{name}' is not numeric: {s:?}"))),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(Error::InvalidInput(format!(
            "field '{name}' is not numeric: {other}"
        ))),
    }
}
