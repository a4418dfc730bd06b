use serde::Serialize;

use crate::model::CONSTRUCTS;
use crate::pipeline::CohortResult;
use crate::report::{CHART_TITLE, CHART_TITLE_EMPTY, CHART_Y_RANGE};

#[derive(Debug, Serialize)]
pub struct EngineResponse {
    pub constructs: Vec<ConstructZ>,
    pub cohort_size: usize,
    pub filtered_age_range: Option<[f64; 2]>,
    pub filtered_iq_range: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct ConstructZ {
    pub name: &'static str,
    pub z: f64,
}

impl From<&CohortResult> for EngineResponse {
    fn from(result: &CohortResult) -> Self {
        Self {
            constructs: result
                .scores
                .iter()
                .map(|s| ConstructZ {
                    name: s.construct.name(),
                    z: s.z,
                })
                .collect(),
            cohort_size: result.cohort_size,
            filtered_age_range: result.age_range.map(|(lo, hi)| [lo, hi]),
            filtered_iq_range: result.iq_range.map(|(lo, hi)| [lo, hi]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub plot_data: Vec<PlotTrace>,
    pub layout: ChartLayout,
}

#[derive(Debug, Serialize)]
pub struct PlotTrace {
    pub x: Vec<&'static str>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChartLayout {
    pub title: &'static str,
    pub xaxis: ChartAxis,
    pub yaxis: ChartAxis,
}

#[derive(Debug, Serialize)]
pub struct ChartAxis {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl From<&CohortResult> for ChartResponse {
    fn from(result: &CohortResult) -> Self {
        let title = if result.is_empty_cohort() {
            CHART_TITLE_EMPTY
        } else {
            CHART_TITLE
        };
        Self {
            plot_data: vec![PlotTrace {
                x: CONSTRUCTS.iter().map(|c| c.name()).collect(),
                y: result.scores.iter().map(|s| s.z).collect(),
                kind: "bar",
            }],
            layout: ChartLayout {
                title,
                xaxis: ChartAxis {
                    title: "Cognitive Constructs",
                    range: None,
                },
                yaxis: ChartAxis {
                    title: "Z-Scores",
                    range: Some(CHART_Y_RANGE),
                },
            },
        }
    }
}

/// The single failure shape used by every command.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub fn render_engine_json(result: &CohortResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&EngineResponse::from(result))
}

pub fn render_chart_json(result: &CohortResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ChartResponse::from(result))
}

pub fn render_error_json(
    kind: &'static str,
    message: String,
    field: Option<String>,
) -> serde_json::Result<String> {
    serde_json::to_string(&ErrorResponse {
        error: ErrorBody {
            kind,
            message,
            field,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
