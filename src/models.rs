use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded activity as returned by the Nike+ API.
///
/// Fields mirror the wire schema; optional fields are omitted from the
/// serialized form when absent so a decoded activity re-serializes to an
/// equivalent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: String,
    /// Activity kind, e.g. `RUN` or `ALL_DAY`
    pub activity_type: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    pub metric_summary: MetricSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Per-interval metric series, present on the detail endpoint only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricSeries>>,
}

/// Summary metrics for one activity. The service reports every figure as a
/// string, including the numeric ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub calories: String,
    pub fuel: String,
    pub distance: String,
    pub steps: String,
    /// `H:MM:SS.mmm` formatted duration
    pub duration: String,
}

/// Label attached to an activity, e.g. weather or terrain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_type: String,
    pub tag_value: String,
}

/// Sampled metric values at a fixed interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub interval_metric: u32,
    pub interval_unit: String,
    pub metric_type: String,
    pub values: Vec<String>,
}

/// One page of activities from a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activities {
    #[serde(default)]
    pub data: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Relative links to the adjacent pages, as given by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}
