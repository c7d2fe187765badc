//! Formatter: the `Reporter` used by the CLI
//!
//! Renders per-file results as timestamped console lines or NDJSON events.
//! Successes go to stdout and may be hidden; errors go to stderr and never
//! are.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, FixedOffset, Local, Utc};

use super::event::ReportEvent;
use super::theme::{ConsoleStyle, Icon};
use crate::domain::entities::RunReport;
use crate::domain::ports::{Notification, Reporter};
use crate::domain::value_objects::ConfigWarning;

type Sink = Mutex<Box<dyn Write + Send>>;

/// How reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Console(ConsoleStyle),
    Json,
}

/// Reporter writing to a pair of output streams
pub struct Formatter {
    command: &'static str,
    mode: OutputMode,
    hide_success: bool,
    out: Sink,
    err: Sink,
    errors: AtomicUsize,
    clock: fn() -> DateTime<FixedOffset>,
}

impl Formatter {
    /// Formatter writing to stdout and stderr
    pub fn new(command: &'static str, mode: OutputMode, hide_success: bool) -> Self {
        Self::with_writers(
            command,
            mode,
            hide_success,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    pub fn with_writers(
        command: &'static str,
        mode: OutputMode,
        hide_success: bool,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            command,
            mode,
            hide_success,
            out: Mutex::new(out),
            err: Mutex::new(err),
            errors: AtomicUsize::new(0),
            clock: local_now,
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: fn() -> DateTime<FixedOffset>) -> Self {
        self.clock = clock;
        self
    }

    /// Number of errors reported so far
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    /// Report a configuration warning
    pub fn config_warning(&self, warning: &ConfigWarning) {
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::ConfigWarning {
                    command: self.command,
                    message: warning.to_string(),
                }
                .to_json(),
            ),
            OutputMode::Console(style) => self.write_err(&format!(
                "{} {}",
                style.icon(Icon::Warning),
                warning
            )),
        }
    }

    /// Report the owners found for a set of partials
    pub fn owners(&self, partials: &[PathBuf], owners: &[PathBuf]) {
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::Owners {
                    command: self.command,
                    partials,
                    owners,
                }
                .to_json(),
            ),
            OutputMode::Console(_) => {
                for owner in owners {
                    self.write_out(&owner.display().to_string());
                }
            }
        }
    }

    /// Summarize a finished batch
    ///
    /// A fully successful batch is not summarized on the console when
    /// successes are hidden.
    pub fn complete(&self, report: &RunReport) {
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::Complete {
                    command: self.command,
                    outputs: report.outputs(),
                    success: report.all_succeeded(),
                }
                .to_json(),
            ),
            OutputMode::Console(style) => {
                let count = report.outputs().len();
                let noun = if count == 1 { "file" } else { "files" };
                if report.all_succeeded() {
                    if !self.hide_success {
                        self.write_out(&format!(
                            "{} {} {} {}",
                            style.icon(Icon::Success),
                            verb(self.command),
                            count,
                            noun
                        ));
                    }
                } else {
                    self.write_err(&format!(
                        "{} {} {} {}, some files failed",
                        style.icon(Icon::Error),
                        verb(self.command),
                        count,
                        noun
                    ));
                }
            }
        }
    }

    fn line(&self, style: ConsoleStyle, icon: Icon, message: &str) -> String {
        let time = (self.clock)().format("%H:%M:%S").to_string();
        format!("{} {} {}", style.dim(&time), style.icon(icon), message)
    }

    fn utc_now(&self) -> DateTime<Utc> {
        (self.clock)().with_timezone(&Utc)
    }

    fn write_out(&self, line: &str) {
        write_line(&self.out, line);
    }

    fn write_err(&self, line: &str) {
        write_line(&self.err, line);
    }
}

impl Reporter for Formatter {
    fn success(&self, message: &str, notification: Notification) {
        if self.hide_success {
            return;
        }
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::Success {
                    command: self.command,
                    message,
                    notification: &notification,
                    at: self.utc_now(),
                }
                .to_json(),
            ),
            OutputMode::Console(style) => {
                self.write_out(&self.line(style, Icon::Success, message))
            }
        }
    }

    fn error(&self, message: &str, notification: Notification) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::Error {
                    command: self.command,
                    message,
                    notification: &notification,
                    at: self.utc_now(),
                }
                .to_json(),
            ),
            OutputMode::Console(style) => self.write_err(&self.line(style, Icon::Error, message)),
        }
    }

    fn info(&self, message: &str) {
        match self.mode {
            OutputMode::Json => self.write_out(
                &ReportEvent::Info {
                    command: self.command,
                    message,
                    at: self.utc_now(),
                }
                .to_json(),
            ),
            OutputMode::Console(style) => self.write_out(&self.line(style, Icon::Info, message)),
        }
    }
}

fn local_now() -> DateTime<FixedOffset> {
    Local::now().into()
}

fn verb(command: &str) -> &'static str {
    match command {
        "check" => "Checked",
        "clean" => "Removed",
        _ => "Compiled",
    }
}

// Output failures (closed pipe) are not worth aborting a batch over.
fn write_line(sink: &Sink, line: &str) {
    if let Ok(mut w) = sink.lock() {
        let _ = writeln!(w, "{}", line);
        let _ = w.flush();
    }
}
