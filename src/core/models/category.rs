//! Grading-category weighting model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const WEIGHT: &str = "weight";
const MANUAL_PERCENT: &str = "manual_percent";

/// How one grading category contributes to a course's final grade
///
/// Stored entries are read leniently: numeric strings are accepted for
/// `weight` and `manual_percent`, a bare number is taken as the weight, and
/// anything unreadable stays in `extra` so it is written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CategoryConfig {
    /// Relative weight of the category, if one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Percent entered by hand in place of the computed category percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_percent: Option<f64>,

    /// Any other stored fields, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CategoryConfig {
    /// A category with the given weight and nothing else
    #[must_use]
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Self::default()
        }
    }

    /// Set the weight, replacing any unreadable stored weight
    pub fn set_weight(&mut self, weight: f64) {
        self.extra.remove(WEIGHT);
        self.weight = Some(weight);
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Take `key` out of `map` when it reads as a number; leave it otherwise.
fn take_number(map: &mut Map<String, Value>, key: &str) -> Option<f64> {
    let parsed = map.get(key).and_then(number)?;
    map.remove(key);
    Some(parsed)
}

impl From<Value> for CategoryConfig {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut extra) => Self {
                weight: take_number(&mut extra, WEIGHT),
                manual_percent: take_number(&mut extra, MANUAL_PERCENT),
                extra,
            },
            other => Self {
                weight: number(&other),
                ..Self::default()
            },
        }
    }
}

/// Category name to weighting configuration for one course
pub type CategoryWeighting = BTreeMap<String, CategoryConfig>;
