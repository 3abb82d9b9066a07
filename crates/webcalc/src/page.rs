/*!
Scripts installed into, and evaluated against, the hosted page.

Everything here produces plain JavaScript source. Values are embedded through
`serde_json` so selectors and names are always valid string literals.
*/

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

/// Page-side entry point for native commands.
pub const INVOKE_FN: &str = "window.__TAURI_INTERNALS__.invoke";

/// Command the page calls to begin a native window drag.
pub const START_DRAG_COMMAND: &str = "start_drag";

/// Elements that keep their own mouse behaviour when easy drag is on.
const NO_DRAG_SELECTOR: &str =
  "input, textarea, select, button, a, [contenteditable], [data-no-drag]";

/// Object exposed to page script so it can tell it runs inside the native host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BridgeObject {
  /// Global name the object is installed under.
  #[serde(default = "default_global", skip_serializing)]
  #[ts(skip)]
  pub global: String,
  /// Presence marker read by the page.
  pub in_native_host: bool,
}

fn default_global() -> String {
  crate::Config::default().bridge_global
}

impl BridgeObject {
  /// Marker object announcing the native host under `global`.
  pub fn native(global: impl Into<String>) -> Self {
    Self {
      global: global.into(),
      in_native_host: true,
    }
  }

  /// Defines `window.<global>` as a frozen, non-writable object.
  pub fn init_script(&self) -> String {
    let name = json!(self.global);
    let value = json!({ "inNativeHost": self.in_native_host });
    format!(
      "Object.defineProperty(window, {name}, {{ value: Object.freeze({value}), writable: false, configurable: false }});"
    )
  }
}

/// Starts a native drag on primary-button mousedown over non-interactive content.
pub fn easy_drag_script() -> String {
  let skip = json!(NO_DRAG_SELECTOR);
  let command = json!(START_DRAG_COMMAND);
  format!(
    r"(() => {{
  window.addEventListener('mousedown', (event) => {{
    if (event.button !== 0 || event.detail > 1) return;
    if (event.target instanceof Element && event.target.closest({skip})) return;
    {INVOKE_FN}({command});
  }});
}})();"
  )
}

/// Expression measuring `selector`'s rendered box as `[offsetWidth, offsetHeight]`.
///
/// Evaluates to `undefined` when no element matches.
pub fn measure_script(selector: &str) -> String {
  let selector = json!(selector);
  format!(
    "(() => {{ const el = document.querySelector({selector}); return el ? [el.offsetWidth, el.offsetHeight] : undefined; }})()"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bridge_object_script_defines_frozen_marker() {
    let script = BridgeObject::native("webcalc").init_script();
    assert!(script.starts_with("Object.defineProperty(window, \"webcalc\""));
    assert!(script.contains(r#"Object.freeze({"inNativeHost":true})"#));
  }

  #[test]
  fn bridge_object_serializes_marker_only() {
    let value = serde_json::to_value(BridgeObject::native("custom")).unwrap();
    assert_eq!(value, json!({ "inNativeHost": true }));
  }

  #[test]
  fn bridge_object_deserializes_with_default_global() {
    let object: BridgeObject = serde_json::from_str(r#"{ "inNativeHost": true }"#).unwrap();
    assert_eq!(object.global, "webcalc");
  }

  #[test]
  fn measure_script_escapes_selector() {
    let script = measure_script(r#"div[data-x="1"]"#);
    assert!(script.contains(r#"document.querySelector("div[data-x=\"1\"]")"#));
    assert!(script.contains("[el.offsetWidth, el.offsetHeight]"));
  }

  #[test]
  fn easy_drag_script_invokes_start_drag() {
    let script = easy_drag_script();
    assert!(script.contains(r#"window.__TAURI_INTERNALS__.invoke("start_drag")"#));
    assert!(script.contains("[data-no-drag]"));
  }
}
