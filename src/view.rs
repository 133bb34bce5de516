//! Projection of stored readings into display-ready chart series.
//!
//! Timestamps are rendered in a fixed IANA zone (the deployment's display
//! zone, not the server's), so the same readings always format to the same
//! labels regardless of where the service runs.

use chrono_tz::Tz;
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::readings;

/// Label format matching the dashboard's tick rendering, e.g. "30 Aug 07:15:02".
const LABEL_FORMAT: &str = "%d %b %H:%M:%S";

/// The numeric fields a reading can be charted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Tds,
    Ph,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Tds, Self::Ph];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Tds => "TDS",
            Self::Ph => "pH",
        }
    }

    #[must_use]
    pub fn project(self, reading: &readings::Model) -> f64 {
        match self {
            Self::Temperature => reading.temperature,
            Self::Tds => reading.tds,
            Self::Ph => reading.ph,
        }
    }
}

/// One chart point: a localized timestamp label and the metric value.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DisplayPoint {
    /// Capture time formatted in the configured display zone
    pub t: String,
    pub value: f64,
}

/// A chart-ready series for one metric, in capture order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DisplaySeries {
    pub label: String,
    pub points: Vec<DisplayPoint>,
}

/// Project readings into a chart series for one metric.
///
/// Pure function of its inputs: the same readings, metric, and zone always
/// yield identical output. Empty input yields an empty series.
#[must_use]
pub fn to_display_series(readings: &[readings::Model], metric: Metric, tz: Tz) -> DisplaySeries {
    let points = readings
        .iter()
        .map(|r| DisplayPoint {
            t: r.captured_at.with_timezone(&tz).format(LABEL_FORMAT).to_string(),
            value: metric.project(r),
        })
        .collect();

    DisplaySeries {
        label: metric.label().to_string(),
        points,
    }
}
