//! Discrete dashboard time windows.
//!
//! A window mode is one of the four fixed ranges the dashboard offers and maps
//! to a half-open interval `[start, end)` anchored at the caller-supplied
//! "now". The current time is always injected so window resolution stays a
//! pure function.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// The four fixed query ranges offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    Hours24,
    Days2,
    Days3,
    Week1,
}

impl WindowMode {
    /// Exact duration covered by this mode.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::Hours24 => Duration::hours(24),
            Self::Days2 => Duration::hours(48),
            Self::Days3 => Duration::hours(72),
            Self::Week1 => Duration::hours(168),
        }
    }

    /// Resolve this mode into a concrete window ending at `now`.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> TimeWindow {
        TimeWindow {
            start: now - self.duration(),
            end: now,
        }
    }

    /// Path segment used by the dashboard routes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hours24 => "24hours",
            Self::Days2 => "2days",
            Self::Days3 => "3days",
            Self::Week1 => "1week",
        }
    }
}

impl FromStr for WindowMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24hours" => Ok(Self::Hours24),
            "2days" => Ok(Self::Days2),
            "3days" => Ok(Self::Days3),
            "1week" => Ok(Self::Week1),
            other => Err(AppError::BadRequest(format!(
                "unknown window mode '{other}' (expected 24hours, 2days, 3days, or 1week)"
            ))),
        }
    }
}

/// Half-open query interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting empty or inverted intervals.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::BadRequest(format!(
                "window start ({start}) must be before end ({end})"
            )));
        }
        Ok(Self { start, end })
    }
}
