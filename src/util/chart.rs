//! Statistics chart data and Chart.js configuration.
//!
//! Chart containers carry their series as two `", "`-separated attributes,
//! `data-labels` and `data-data`. Values are passed through to the library
//! untouched; the library is the one that decides what a malformed number
//! means.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde::Serialize;

pub const LABELS_ATTR: &str = "data-labels";
pub const DATA_ATTR: &str = "data-data";
pub const ATTR_SEPARATOR: &str = ", ";

const BORDER_COLOR: &str = "rgb(75, 192, 192)";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart container #{0} not found")]
    MissingElement(String),
    #[error("no chart is drawn into #{0}")]
    UnknownContainer(String),
    #[error("chart container #{id} has no {attr} attribute")]
    MissingAttribute { id: String, attr: &'static str },
    #[error("failed to encode chart config: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("chart library rejected config: {0}")]
    Library(String),
}

/// The two charts on the monitor page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Monthly count of submitted membership forms.
    Submissions,
    /// Monthly count of first-time visits.
    FirstVisits,
}

impl ChartKind {
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Submissions => "member-forms-chart",
            Self::FirstVisits => "first-visit-chart",
        }
    }

    /// Chart.js `type`.
    pub fn chart_type(self) -> &'static str {
        match self {
            Self::Submissions => "polarArea",
            Self::FirstVisits => "line",
        }
    }

    pub fn dataset_label(self) -> &'static str {
        match self {
            Self::Submissions => "عدد النماذج المقدمة",
            Self::FirstVisits => "عدد الزيارات لأول مرة",
        }
    }

    pub fn from_container_id(id: &str) -> Option<Self> {
        [Self::Submissions, Self::FirstVisits]
            .into_iter()
            .find(|kind| kind.container_id() == id)
    }
}

/// Split a `", "`-separated attribute value. An empty attribute is an empty list.
pub fn split_attr_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(ATTR_SEPARATOR).map(str::to_owned).collect()
}

/// Inverse of `split_attr_list`, used when rendering container attributes.
pub fn join_attr_list(items: &[String]) -> String {
    items.join(ATTR_SEPARATOR)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<String>,
}

impl ChartSeries {
    pub fn from_attributes(labels: &str, data: &str) -> Self {
        Self { labels: split_attr_list(labels), data: split_attr_list(data) }
    }
}

/// Declarative Chart.js configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub fill: bool,
    pub border_color: &'static str,
    pub tension: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: Vec<String>,
    pub border_width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: ChartScales,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartScales {
    pub y: ChartAxis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAxis {
    pub begin_at_zero: bool,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, series: ChartSeries) -> Self {
        Self {
            chart_type: kind.chart_type(),
            data: ChartData {
                labels: series.labels,
                datasets: vec![ChartDataset { label: kind.dataset_label(), data: series.data, border_width: 1 }],
                fill: false,
                border_color: BORDER_COLOR,
                tension: 0.1,
            },
            options: ChartOptions { scales: ChartScales { y: ChartAxis { begin_at_zero: true } } },
        }
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }
}
