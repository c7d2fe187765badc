//! Report event types for NDJSON output

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ports::Notification;

/// One line of `--json` output
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent<'a> {
    Success {
        command: &'a str,
        message: &'a str,
        notification: &'a Notification,
        at: DateTime<Utc>,
    },
    Error {
        command: &'a str,
        message: &'a str,
        notification: &'a Notification,
        at: DateTime<Utc>,
    },
    Info {
        command: &'a str,
        message: &'a str,
        at: DateTime<Utc>,
    },
    ConfigWarning {
        command: &'a str,
        message: String,
    },
    Owners {
        command: &'a str,
        partials: &'a [PathBuf],
        owners: &'a [PathBuf],
    },
    Complete {
        command: &'a str,
        outputs: &'a [PathBuf],
        success: bool,
    },
}

impl ReportEvent<'_> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
