//! Metric snapshot rows.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::table::{TableRow, value_at_path};

/// Pod counts of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodCounts {
    /// Pods with a proxy injected.
    #[serde(deserialize_with = "count")]
    pub meshed_pods: u64,
    /// All pods.
    #[serde(deserialize_with = "count")]
    pub total_pods: u64,
}

/// Counts arrive as numbers or as decimal strings.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// TCP level stats.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpStats {
    pub open_connections: Option<f64>,
    /// Bytes read per second.
    pub read_rate: Option<f64>,
    /// Bytes written per second.
    pub write_rate: Option<f64>,
}

/// Weight of a traffic split leaf, as reported (number or string like `"500m"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(f64),
    Text(String),
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Number(n) => write!(f, "{}", n),
            Weight::Text(s) => f.write_str(s),
        }
    }
}

/// Traffic split leaf stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSplitStats {
    pub apex: String,
    pub leaf: String,
    pub weight: Weight,
}

/// One row of a metrics table.
///
/// Unknown fields are kept in [`extra`](MetricRow::extra); that is also where
/// [`preprocess_rows`](crate::schema::preprocess_rows) flattens latency
/// quantiles (`P50`, `P95`, `P99`) so columns can address them directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    /// Stable key. Derived from namespace, type and name when absent.
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Resource type of the row (`deployment`, `pod`, ...).
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Whether the resource is part of the mesh.
    #[serde(default)]
    pub added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pods: Option<PodCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpStats>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub request_rate: Option<f64>,
    /// Latency quantiles in milliseconds, keyed by quantile name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<BTreeMap<String, Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_stats: Option<TrafficSplitStats>,
    /// Error entries reported for the resource, in whatever shape the API used.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub errors: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Remaining top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetricRow {
    /// Creates a row with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a metrics snapshot: a JSON array of rows.
    pub fn parse_snapshot(json: &str) -> Result<Vec<MetricRow>, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A top-level numeric field, such as a flattened latency quantile.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.extra.get(field).and_then(Value::as_f64)
    }

    /// Number of error entries.
    pub fn error_count(&self) -> usize {
        match &self.errors {
            Value::Null => 0,
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            Value::String(s) if s.is_empty() => 0,
            _ => 1,
        }
    }

    /// Returns `true` if the row carries any error entries.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Total pod count, if pod data is present.
    pub fn total_pods(&self) -> Option<u64> {
        self.pods.map(|p| p.total_pods)
    }
}

impl TableRow for MetricRow {
    fn key(&self) -> String {
        if self.key.is_empty() {
            format!("{}-{}-{}", self.namespace, self.resource_type, self.name)
        } else {
            self.key.clone()
        }
    }

    fn field(&self, path: &str) -> Option<Value> {
        let value = serde_json::to_value(self).ok()?;
        value_at_path(&value, path).cloned()
    }

    fn tooltip(&self) -> Option<String> {
        self.tooltip.clone()
    }
}
