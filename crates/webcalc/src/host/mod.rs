/*!
Window host - owns the window registry and forwards native work to a backend.

# Module Structure

- `mod.rs` - `AppContext`: create, resize, lookup, lifecycle
- `registry.rs` - append-only `WindowRegistry` and the public `WindowHandle`
- `traits.rs` - `WindowBackend` and `ScriptEvaluator`, implemented per renderer

# Example

```
use webcalc::{AppContext, HostResult, Size, WindowBackend, WindowId, WindowOptions, WindowSpec};

struct Headless;

impl WindowBackend for Headless {
    fn open(&self, _id: WindowId, _spec: &WindowSpec) -> HostResult<()> { Ok(()) }
    fn resize(&self, _id: WindowId, _size: Size) -> HostResult<()> { Ok(()) }
}

let ctx = AppContext::new(Headless);
let window = ctx.create_window("Calculator", "index.html", &WindowOptions::default())?;
ctx.resize(window.id, 400.0, 620.0)?;
assert_eq!(ctx.window(window.id).map(|w| w.size), Some(Size::new(400.0, 620.0)));
# Ok::<(), webcalc::HostError>(())
```
*/

mod registry;
mod traits;

pub use registry::WindowHandle;
pub use traits::{ScriptEvaluator, WindowBackend};

use parking_lot::RwLock;

use crate::options::WindowOptions;
use crate::types::{HostError, HostResult, Size, WindowId};
use registry::WindowRegistry;

/// Application context: the backend plus every window created through it.
///
/// Shared by reference; all methods take `&self`.
pub struct AppContext<B> {
  backend: B,
  registry: RwLock<WindowRegistry>,
}

impl<B> std::fmt::Debug for AppContext<B> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppContext")
      .field("windows", &self.registry.read().len())
      .finish_non_exhaustive()
  }
}

impl<B: WindowBackend> AppContext<B> {
  /// Empty context over `backend`.
  pub fn new(backend: B) -> Self {
    Self {
      backend,
      registry: RwLock::new(WindowRegistry::new()),
    }
  }

  /// The native host.
  pub const fn backend(&self) -> &B {
    &self.backend
  }

  /// Create a window and append it to the registry.
  ///
  /// Options are validated first; nothing is registered if validation or the
  /// backend fails.
  pub fn create_window(
    &self,
    title: &str,
    source: &str,
    options: &WindowOptions,
  ) -> HostResult<WindowHandle> {
    let spec = options.resolve(title, source)?;
    let id = self.registry.write().reserve_id();

    self.backend.open(id, &spec)?;

    let handle = WindowHandle::from_spec(id, spec);
    log::info!(
      "[host] created window {id} {:?} ({}, frameless: {}, source: {})",
      handle.title,
      handle.size,
      handle.frameless,
      handle.source.as_str()
    );
    self.registry.write().push(handle.clone());
    Ok(handle)
  }

  /// Set a window's size immediately.
  ///
  /// Any finite positive size is passed through unchanged; clamping to the
  /// screen is left to the platform.
  pub fn resize(&self, id: WindowId, width: f64, height: f64) -> HostResult<()> {
    let size = Size::new(width, height);
    if !size.is_finite() || size.is_empty() {
      return Err(HostError::InvalidSize(size));
    }

    match self.registry.read().get(id) {
      None => return Err(HostError::WindowNotFound(id)),
      Some(window) if !window.open => return Err(HostError::WindowClosed(id)),
      Some(_) => {}
    }

    self.backend.resize(id, size)?;

    if let Some(window) = self.registry.write().get_mut(id) {
      window.size = size;
    }
    log::info!("[host] resized window {id} to {size}");
    Ok(())
  }

  /// Record that the native window is gone. Returns false if it was unknown or already closed.
  pub fn mark_closed(&self, id: WindowId) -> bool {
    match self.registry.write().get_mut(id) {
      Some(window) if window.open => {
        window.open = false;
        log::debug!("[host] window {id} closed");
        true
      }
      _ => false,
    }
  }

  /// Snapshot of one window, open or closed.
  pub fn window(&self, id: WindowId) -> Option<WindowHandle> {
    self.registry.read().get(id).cloned()
  }

  /// First window ever created, if any.
  pub fn first_window(&self) -> Option<WindowHandle> {
    self.registry.read().first().cloned()
  }

  /// All windows in creation order.
  pub fn windows(&self) -> Vec<WindowHandle> {
    self.registry.read().iter().cloned().collect()
  }

  /// Number of windows ever created.
  pub fn len(&self) -> usize {
    self.registry.read().len()
  }

  /// True before the first window is created.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
