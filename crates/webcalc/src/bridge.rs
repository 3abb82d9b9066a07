/*!
Auto-resize bridge.

Runs once, as the ready hook of its target window: measure the root element
through the script-evaluation channel, then resize the native window to the
measured box. One request, one response, no retries.
*/

use serde_json::Value as JsonValue;

use crate::host::{AppContext, ScriptEvaluator, WindowBackend};
use crate::page;
use crate::types::{BridgeError, Size, WindowId};

/// Sizes one window to its rendered root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoResize {
  target: WindowId,
  selector: String,
}

impl AutoResize {
  /// Measure the element matching `selector` in `target`.
  pub fn new(target: WindowId, selector: impl Into<String>) -> Self {
    Self {
      target,
      selector: selector.into(),
    }
  }

  /// Measure the default root (`#app`) of `target`.
  pub fn for_window(target: WindowId) -> Self {
    Self::new(target, crate::Config::default().root_selector)
  }

  /// Window this bridge resizes.
  pub const fn target(&self) -> WindowId {
    self.target
  }

  /// CSS selector of the measured element.
  pub fn selector(&self) -> &str {
    &self.selector
  }

  /// Measure and resize. Returns the size applied.
  ///
  /// A missing root (`undefined`), a throwing script, a malformed result or a
  /// zero-size box all fail without touching the window.
  pub fn run<B, E>(&self, ctx: &AppContext<B>, evaluator: &E) -> Result<Size, BridgeError>
  where
    B: WindowBackend,
    E: ScriptEvaluator + ?Sized,
  {
    let value = evaluator.evaluate(self.target, &page::measure_script(&self.selector))?;
    let size = parse_measurement(&value)?;
    if size.is_empty() {
      return Err(BridgeError::EmptyMeasurement(size));
    }

    ctx.resize(self.target, size.width, size.height)?;
    log::info!("[bridge] sized window {} to {} ({})", self.target, size, self.selector);
    Ok(size)
  }
}

/// Parse a `[width, height]` measurement.
pub fn parse_measurement(value: &JsonValue) -> Result<Size, BridgeError> {
  let malformed = || BridgeError::MalformedMeasurement(value.to_string());
  match value.as_array().map(Vec::as_slice) {
    Some([w, h]) => match (w.as_f64(), h.as_f64()) {
      (Some(width), Some(height)) => Ok(Size::new(width, height)),
      _ => Err(malformed()),
    },
    _ => Err(malformed()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::options::WindowOptions;
  use crate::testing::{RecordingBackend, ScriptedEvaluator};
  use crate::types::EvalError;
  use serde_json::json;

  fn ctx_with_window() -> (AppContext<RecordingBackend>, WindowId) {
    let ctx = AppContext::new(RecordingBackend::default());
    let id = ctx
      .create_window("Calculator", "index.html", &WindowOptions::default().frameless(true))
      .unwrap()
      .id;
    (ctx, id)
  }

  mod run {
    use super::*;

    #[test]
    fn applies_measurement_unmodified() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Ok(json!([412.5, 633])));

      let size = AutoResize::for_window(id).run(&ctx, &evaluator).unwrap();

      assert_eq!(size, Size::new(412.5, 633.0));
      assert_eq!(ctx.backend().resizes(), vec![(id, Size::new(412.5, 633.0))]);
      assert_eq!(ctx.window(id).map(|w| w.size), Some(size));
    }

    #[test]
    fn oversized_measurement_is_applied_as_is() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Ok(json!([20000, 620])));

      let size = AutoResize::for_window(id).run(&ctx, &evaluator).unwrap();

      assert_eq!(size, Size::new(20_000.0, 620.0));
      assert_eq!(ctx.window(id).map(|w| w.size), Some(size));
    }

    #[test]
    fn evaluates_against_target_with_selector() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Ok(json!([1, 1])));
      AutoResize::new(id, "#calc").run(&ctx, &evaluator).unwrap();

      let calls = evaluator.calls();
      assert_eq!(calls.len(), 1);
      assert!(calls
        .first()
        .is_some_and(|(window, script)| *window == id && script.contains("\"#calc\"")));
    }

    #[test]
    fn missing_root_fails_without_resize() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Err(EvalError::Undefined));

      let err = AutoResize::for_window(id).run(&ctx, &evaluator);

      assert!(matches!(err, Err(BridgeError::Eval(EvalError::Undefined))));
      assert!(ctx.backend().resizes().is_empty());
    }

    #[test]
    fn script_error_fails_without_resize() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Err(EvalError::Threw("TypeError".into())));
      let err = AutoResize::for_window(id).run(&ctx, &evaluator);
      assert!(matches!(err, Err(BridgeError::Eval(EvalError::Threw(_)))));
      assert!(ctx.backend().resizes().is_empty());
    }

    #[test]
    fn zero_size_root_is_rejected() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Ok(json!([0, 620])));
      let err = AutoResize::for_window(id).run(&ctx, &evaluator);
      assert!(matches!(err, Err(BridgeError::EmptyMeasurement(_))));
      assert!(ctx.backend().resizes().is_empty());
    }

    #[test]
    fn unknown_target_surfaces_host_error() {
      let ctx = AppContext::new(RecordingBackend::default());
      let evaluator = ScriptedEvaluator::new(Ok(json!([400, 620])));
      let err = AutoResize::for_window(WindowId(3)).run(&ctx, &evaluator);
      assert!(matches!(err, Err(BridgeError::Host(_))));
    }

    #[test]
    fn running_twice_reapplies_same_size() {
      let (ctx, id) = ctx_with_window();
      let evaluator = ScriptedEvaluator::new(Ok(json!([400, 620])));
      let bridge = AutoResize::for_window(id);
      bridge.run(&ctx, &evaluator).unwrap();
      bridge.run(&ctx, &evaluator).unwrap();
      assert_eq!(ctx.window(id).map(|w| w.size), Some(Size::new(400.0, 620.0)));
      assert_eq!(ctx.backend().resizes().len(), 2);
    }
  }

  mod parse {
    use super::*;

    #[test]
    fn accepts_two_numbers() {
      assert_eq!(parse_measurement(&json!([400, 620])).ok(), Some(Size::new(400.0, 620.0)));
    }

    #[test]
    fn rejects_other_shapes() {
      for value in [json!(null), json!([400]), json!([1, 2, 3]), json!(["400", 620]), json!({ "w": 1 })] {
        assert!(
          matches!(parse_measurement(&value), Err(BridgeError::MalformedMeasurement(_))),
          "{value} should be rejected"
        );
      }
    }
  }
}
