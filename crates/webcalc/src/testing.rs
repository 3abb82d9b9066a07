//! In-memory backends for unit tests.

use parking_lot::Mutex;
use serde_json::Value as JsonValue;

use crate::host::{ScriptEvaluator, WindowBackend};
use crate::options::WindowSpec;
use crate::types::{EvalResult, HostError, HostResult, Size, WindowId};

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
  fail_open: bool,
  opened: Mutex<Vec<WindowId>>,
  resizes: Mutex<Vec<(WindowId, Size)>>,
}

impl RecordingBackend {
  pub(crate) fn failing_open() -> Self {
    Self {
      fail_open: true,
      ..Self::default()
    }
  }

  pub(crate) fn opened(&self) -> Vec<WindowId> {
    self.opened.lock().clone()
  }

  pub(crate) fn resizes(&self) -> Vec<(WindowId, Size)> {
    self.resizes.lock().clone()
  }
}

impl WindowBackend for RecordingBackend {
  fn open(&self, id: WindowId, _spec: &WindowSpec) -> HostResult<()> {
    if self.fail_open {
      return Err(HostError::Backend("renderer unavailable".into()));
    }
    self.opened.lock().push(id);
    Ok(())
  }

  fn resize(&self, id: WindowId, size: Size) -> HostResult<()> {
    self.resizes.lock().push((id, size));
    Ok(())
  }
}

/// Answers every evaluation with a fixed result and records what was asked.
#[derive(Debug)]
pub(crate) struct ScriptedEvaluator {
  answer: EvalResult<JsonValue>,
  calls: Mutex<Vec<(WindowId, String)>>,
}

impl ScriptedEvaluator {
  pub(crate) fn new(answer: EvalResult<JsonValue>) -> Self {
    Self {
      answer,
      calls: Mutex::new(Vec::new()),
    }
  }

  pub(crate) fn calls(&self) -> Vec<(WindowId, String)> {
    self.calls.lock().clone()
  }
}

impl ScriptEvaluator for ScriptedEvaluator {
  fn evaluate(&self, window: WindowId, script: &str) -> EvalResult<JsonValue> {
    self.calls.lock().push((window, script.to_string()));
    self.answer.clone()
  }
}
