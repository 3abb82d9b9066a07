/*!
Window registry - append-only list of every window the host created.

Handles are never removed. A window destroyed by the OS stays registered with
`open == false` so stale ids fail loudly instead of resolving to a new window.
*/

use crate::options::{ContentSource, WindowSpec};
use crate::page::BridgeObject;
use crate::types::{Rgb, Size, WindowId};

/// Snapshot of one native window + renderer pair.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowHandle {
  /// Registry id, also the native window label via [`WindowId::label`].
  pub id: WindowId,
  /// Title given at creation.
  pub title: String,
  /// Document the window was opened with.
  pub source: ContentSource,
  /// Created without OS chrome.
  pub frameless: bool,
  /// Drag-anywhere requested at creation.
  pub draggable: bool,
  /// Background color applied at creation.
  pub background_color: Rgb,
  /// Object installed for page script, if any.
  pub bound_object: Option<BridgeObject>,
  /// Last size requested through the host.
  pub size: Size,
  /// False once the OS destroyed the window.
  pub open: bool,
}

impl WindowHandle {
  pub(crate) fn from_spec(id: WindowId, spec: WindowSpec) -> Self {
    Self {
      id,
      title: spec.title,
      source: spec.source,
      frameless: spec.frameless,
      draggable: spec.draggable,
      background_color: spec.background_color,
      bound_object: spec.bound_object,
      size: spec.size,
      open: true,
    }
  }
}

#[derive(Debug)]
pub(crate) struct WindowRegistry {
  windows: Vec<WindowHandle>,
  next_id: u32,
}

impl WindowRegistry {
  pub(crate) const fn new() -> Self {
    Self {
      windows: Vec::new(),
      next_id: 1,
    }
  }

  /// Hand out the next id. Ids are never reused, even if creation fails.
  pub(crate) fn reserve_id(&mut self) -> WindowId {
    let id = WindowId(self.next_id);
    self.next_id += 1;
    id
  }

  pub(crate) fn push(&mut self, handle: WindowHandle) {
    self.windows.push(handle);
  }

  pub(crate) fn get(&self, id: WindowId) -> Option<&WindowHandle> {
    self.windows.iter().find(|w| w.id == id)
  }

  pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowHandle> {
    self.windows.iter_mut().find(|w| w.id == id)
  }

  pub(crate) fn first(&self) -> Option<&WindowHandle> {
    self.windows.first()
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = &WindowHandle> {
    self.windows.iter()
  }

  pub(crate) fn len(&self) -> usize {
    self.windows.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::options::WindowOptions;

  fn handle(registry: &mut WindowRegistry, title: &str) -> WindowHandle {
    let id = registry.reserve_id();
    let spec = WindowOptions::default().resolve(title, "index.html").unwrap();
    WindowHandle::from_spec(id, spec)
  }

  #[test]
  fn ids_start_at_one_and_increase() {
    let mut registry = WindowRegistry::new();
    assert_eq!(registry.reserve_id(), WindowId(1));
    assert_eq!(registry.reserve_id(), WindowId(2));
  }

  #[test]
  fn preserves_insertion_order() {
    let mut registry = WindowRegistry::new();
    let a = handle(&mut registry, "a");
    let b = handle(&mut registry, "b");
    registry.push(a);
    registry.push(b);

    let titles: Vec<_> = registry.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles, ["a", "b"]);
    assert_eq!(registry.first().map(|w| w.id), Some(WindowId(1)));
    assert_eq!(registry.len(), 2);
  }

  #[test]
  fn lookup_by_id() {
    let mut registry = WindowRegistry::new();
    let a = handle(&mut registry, "a");
    registry.push(a);
    assert!(registry.get(WindowId(1)).is_some());
    assert!(registry.get(WindowId(2)).is_none());

    if let Some(w) = registry.get_mut(WindowId(1)) {
      w.open = false;
    }
    assert_eq!(registry.get(WindowId(1)).map(|w| w.open), Some(false));
  }
}
