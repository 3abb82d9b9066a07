/*!
One-shot ready hook.

Armed before the run loop starts, keyed to one window. The first
content-loaded notification for that window takes the callback out and runs
it; every later notification (reloads, other windows) is a no-op.
*/

use parking_lot::Mutex;

use crate::types::WindowId;

/// Boxed ready callback.
pub type ReadyCallback = Box<dyn FnOnce() + Send + 'static>;

/// Callback guaranteed to run at most once, after its window finished loading.
pub struct ReadyHook {
  target: WindowId,
  callback: Mutex<Option<ReadyCallback>>,
}

impl std::fmt::Debug for ReadyHook {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReadyHook")
      .field("target", &self.target)
      .field("armed", &self.is_armed())
      .finish()
  }
}

impl ReadyHook {
  /// Arm `callback` for the first load of `target`.
  pub fn new<F>(target: WindowId, callback: F) -> Self
  where
    F: FnOnce() + Send + 'static,
  {
    Self {
      target,
      callback: Mutex::new(Some(Box::new(callback))),
    }
  }

  /// Window whose first load fires the hook.
  pub const fn target(&self) -> WindowId {
    self.target
  }

  /// True until the callback has been taken.
  pub fn is_armed(&self) -> bool {
    self.callback.lock().is_some()
  }

  /// Take the callback if `window` is the target and it has not fired yet.
  ///
  /// The caller decides where to run it (the host runs it off the UI thread).
  pub fn take_for(&self, window: WindowId) -> Option<ReadyCallback> {
    if window != self.target {
      return None;
    }
    let callback = self.callback.lock().take();
    if callback.is_some() {
      log::debug!("[ready] window {window} loaded, firing ready hook");
    }
    callback
  }

  /// Run the callback inline if `window` is the target. Returns whether it ran.
  pub fn notify_loaded(&self, window: WindowId) -> bool {
    match self.take_for(window) {
      Some(callback) => {
        callback();
        true
      }
      None => false,
    }
  }
}
