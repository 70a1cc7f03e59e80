//! Captured execution failures and their comparison strategy.
//!
//! When an example body panics or returns an error, the runner records a
//! [`Failure`]: the failure kind, the message, and the captured trace frames.
//! Failures are plain values, so expected and actual failures can be diffed
//! like any other data: the message and kind compare as text, the trace as
//! an ordered sequence of frames.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ComparisonResult;
use crate::strategy::collection::diff_positional;
use crate::strategy::primitive::primitive_result;
use crate::strategy::Diffable;

/// A single captured stack-trace frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl TraceFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

/// A captured execution failure: the framework's throwable analogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct Failure {
    /// Failure classification, usually the short type name of the source
    /// error, or `panic`.
    pub kind: String,
    pub message: String,
    pub trace: Vec<TraceFrame>,
}

impl Failure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Append a captured frame, outermost first.
    pub fn with_frame(
        mut self,
        function: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        self.trace.push(TraceFrame::new(function, file, line));
        self
    }

    /// Capture a failure from a source error, classified by the error's
    /// short type name.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let full = std::any::type_name::<E>();
        let kind = full.rsplit("::").next().unwrap_or(full);
        Self::new(kind, err.to_string())
    }

    /// Capture a failure from a panic payload, as handed to the runner by
    /// `catch_unwind`.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::new("panic", message)
    }
}

impl Diffable for TraceFrame {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        if actual == expected {
            ComparisonResult::FrameIdentical {
                frame: Self::show(actual),
            }
        } else {
            ComparisonResult::FrameDifference {
                actual: Self::show(actual),
                expected: Self::show(expected),
            }
        }
    }

    fn show(value: &Self) -> String {
        format!("{} ({}:{})", value.function, value.file, value.line)
    }
}

impl Diffable for Failure {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        let kind = primitive_result(
            actual.kind == expected.kind,
            actual.kind.clone(),
            expected.kind.clone(),
        );
        let message = str::diff(&actual.message, &expected.message);
        let trace = diff_positional("Trace", &actual.trace, &expected.trace);

        if kind.is_identical() && message.is_identical() && trace.is_identical() {
            ComparisonResult::FailureIdentical {
                summary: Self::show(actual),
            }
        } else {
            ComparisonResult::FailureDifference {
                kind: Box::new(kind),
                message: Box::new(message),
                trace: Box::new(trace),
            }
        }
    }

    fn show(value: &Self) -> String {
        format!("{}: {}", value.kind, value.message)
    }
}
