//! Row preparation before display.

use log::trace;
use serde_json::Value;

use crate::model::MetricRow;

/// Copy `metrics` and lift each latency quantile to a top-level field.
///
/// A row with `latency.P99 = 12` gets a `P99` field holding `12`, which is
/// where the latency columns read it from. The input is left untouched.
pub fn preprocess_rows(metrics: &[MetricRow]) -> Vec<MetricRow> {
    metrics
        .iter()
        .map(|metric| {
            let mut row = metric.clone();
            if let Some(latency) = &row.latency {
                for (quantile, value) in latency {
                    row.extra
                        .insert(quantile.clone(), value.map_or(Value::Null, Value::from));
                }
            }
            trace!("Prepared row {:?}", row.name);
            row
        })
        .collect()
}
