//! Reporter port
//!
//! Every compiled or failed file produces exactly one event here. The
//! formatter in the presentation layer renders them for humans or CI.

use serde::Serialize;

/// Title attached to every notification
pub const NOTIFICATION_TITLE: &str = "sass-guard";

/// Which image a notification should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyImage {
    Success,
    Failed,
}

/// A short user-visible notification accompanying a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub image: NotifyImage,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            message: message.into(),
            image: NotifyImage::Success,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            message: message.into(),
            image: NotifyImage::Failed,
        }
    }
}

/// Trait for receiving per-file results
///
/// Implementations:
/// - `Formatter`: console or NDJSON output
/// - `NoopReporter`: silent operation
pub trait Reporter: Send + Sync {
    /// A file compiled (or was verified)
    fn success(&self, message: &str, notification: Notification);

    /// A file failed; never suppressed
    fn error(&self, message: &str, notification: Notification);

    /// Informational line that is not tied to a compile result
    fn info(&self, _message: &str) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn success(&self, message: &str, notification: Notification) {
        (**self).success(message, notification)
    }

    fn error(&self, message: &str, notification: Notification) {
        (**self).error(message, notification)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

/// No-op reporter for silent operation
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn success(&self, _message: &str, _notification: Notification) {}

    fn error(&self, _message: &str, _notification: Notification) {}
}
