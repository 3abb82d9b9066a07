/*! Error types for window host and bridge operations. */

use std::time::Duration;

use super::{Size, WindowId};

/// Rejected window configuration. Raised at creation time, never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
  #[error("Window title must not be empty")]
  EmptyTitle,

  #[error("Content source must not be empty")]
  EmptySource,

  #[error("Invalid content URL: {0}")]
  InvalidSource(String),

  #[error("Invalid color: {0:?}")]
  InvalidColor(String),

  #[error("Invalid window size {width}x{height} (must be finite, positive and at most {max})")]
  InvalidSize { width: f64, height: f64, max: f64 },
}

/// Errors raised by the window host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
  #[error("Invalid window configuration: {0}")]
  InvalidConfig(#[from] ConfigError),

  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),

  #[error("Window {0} has been closed")]
  WindowClosed(WindowId),

  #[error("Cannot resize to {0} (sides must be finite and positive)")]
  InvalidSize(Size),

  #[error("Native host error: {0}")]
  Backend(String),
}

/// Result type for window host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors from evaluating script in a window's document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
  #[error("Script threw: {0}")]
  Threw(String),

  #[error("Script returned undefined")]
  Undefined,

  #[error("No reply from page within {0:?}")]
  Timeout(Duration),

  #[error("Failed to dispatch script: {0}")]
  Dispatch(String),

  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),
}

/// Result type for script evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Failure of a single auto-resize run. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
  #[error("Measurement failed: {0}")]
  Eval(#[from] EvalError),

  #[error("Malformed measurement: {0}")]
  MalformedMeasurement(String),

  #[error("Root element has no size yet ({0})")]
  EmptyMeasurement(Size),

  #[error("Resize failed: {0}")]
  Host(#[from] HostError),
}
