//! Live device status tracking.
//!
//! A single background listener consumes the device's MQTT status topic and
//! keeps one process-wide snapshot current. Request handlers read the snapshot
//! synchronously and never block on the listener.

pub mod listener;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use utoipa::ToSchema;

/// Last-known device state, updated only by the listener's consumer task.
///
/// The default is the unknown/OFF state the process starts in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeviceStatusSnapshot {
    pub connected: bool,
    /// When the last status message arrived; `None` until the first message.
    pub last_updated: Option<DateTime<Utc>>,
    pub wifi_status: Option<String>,
    pub uplink_status: Option<String>,
}

/// Three-valued connectivity outcome exposed to readers.
///
/// `Stale` distinguishes "we have not heard from the device recently" from a
/// confirmed OFF message, so the dashboard can show them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LiveStatus {
    Connected,
    Disconnected,
    Stale { last_updated: DateTime<Utc> },
}

/// Shared handle to the device status snapshot.
///
/// Single writer (the listener), any number of readers. The two-field
/// connected/last_updated transition is applied under one write lock so
/// readers never observe a torn update.
#[derive(Clone)]
pub struct StatusTracker {
    inner: Arc<RwLock<DeviceStatusSnapshot>>,
    stale_after: Duration,
}

impl StatusTracker {
    #[must_use]
    pub fn new(stale_after: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DeviceStatusSnapshot::default())),
            stale_after,
        }
    }

    /// Apply one raw status payload at time `now`.
    ///
    /// The device publishes either a bare JSON string (`"ON"` / `"OFF"`) or an
    /// object like `{"status":"ON","wifi_status":"...","aws_status":"..."}`.
    /// Anything that is not a recognizable `"ON"` marks the device
    /// disconnected; malformed payloads are logged and treated the same way,
    /// and never escape the tracker.
    pub fn apply_payload(&self, payload: &[u8], now: DateTime<Utc>) {
        let (connected, wifi_status, uplink_status) = match serde_json::from_slice(payload) {
            Ok(serde_json::Value::String(s)) => (s == "ON", None, None),
            Ok(serde_json::Value::Object(obj)) => {
                let field = |key: &str| {
                    obj.get(key)
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                };
                let connected = obj
                    .get("status")
                    .and_then(serde_json::Value::as_str)
                    .is_some_and(|s| s == "ON");
                (connected, field("wifi_status"), field("aws_status"))
            }
            Ok(other) => {
                tracing::warn!(payload = %other, "Unexpected status payload shape, treating as OFF");
                (false, None, None)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    payload = %String::from_utf8_lossy(payload),
                    "Malformed status payload, treating as OFF"
                );
                (false, None, None)
            }
        };

        let mut snapshot = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        snapshot.connected = connected;
        snapshot.last_updated = Some(now);
        if wifi_status.is_some() {
            snapshot.wifi_status = wifi_status;
        }
        if uplink_status.is_some() {
            snapshot.uplink_status = uplink_status;
        }
    }

    /// Current snapshot value. Never blocks on the writer beyond the lock.
    #[must_use]
    pub fn snapshot(&self) -> DeviceStatusSnapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Derive the three-valued status as of `now`.
    ///
    /// A connected snapshot older than the staleness threshold reads as
    /// `Stale`; a confirmed OFF stays `Disconnected` regardless of age.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> LiveStatus {
        let snapshot = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        match snapshot.last_updated {
            Some(_) if !snapshot.connected => LiveStatus::Disconnected,
            Some(at) if now - at > self.stale_after => LiveStatus::Stale { last_updated: at },
            Some(_) => LiveStatus::Connected,
            None => LiveStatus::Disconnected,
        }
    }
}
