/*!
Native host abstraction traits.

These traits define the contract between the window host and the renderer
that actually puts pixels on screen. The desktop app implements them over
Tauri; tests implement them in memory.
*/

use serde_json::Value as JsonValue;

use crate::options::WindowSpec;
use crate::types::{EvalResult, HostResult, Size, WindowId};

/// Creates and resizes native windows.
pub trait WindowBackend: Send + Sync + 'static {
  /// Create the native window + renderer pair for `id`.
  fn open(&self, id: WindowId, spec: &WindowSpec) -> HostResult<()>;

  /// Set the window's size in logical pixels.
  fn resize(&self, id: WindowId, size: Size) -> HostResult<()>;
}

/// Runs script in a window's document and returns its value.
///
/// Blocks the caller until the page answers. Must not be called from the
/// thread that services the renderer.
pub trait ScriptEvaluator: Send + Sync {
  fn evaluate(&self, window: WindowId, script: &str) -> EvalResult<JsonValue>;
}
