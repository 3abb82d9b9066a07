/*!
Configuration for the webcalc host.

All values have sensible defaults. Create a custom config to override:

```
use webcalc::Config;

let config = Config {
    root_selector: "#calculator".into(),
    ..Default::default()
};
assert_eq!(config.eval_timeout_ms, 5000);
```
*/

use std::time::Duration;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// CSS selector of the element whose rendered box sizes the window.
  /// Default: `#app`.
  pub root_selector: String,

  /// How long a script evaluation waits for the page to reply.
  /// Default: 5000ms.
  pub eval_timeout_ms: u64,

  /// Name of the global the bridge object is installed under.
  /// Default: `webcalc` (page reads `window.webcalc.inNativeHost`).
  pub bridge_global: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      root_selector: "#app".to_string(),
      eval_timeout_ms: 5000,
      bridge_global: "webcalc".to_string(),
    }
  }
}

impl Config {
  /// Evaluation timeout as a [`Duration`].
  pub const fn eval_timeout(&self) -> Duration {
    Duration::from_millis(self.eval_timeout_ms)
  }
}
