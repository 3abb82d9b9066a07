/*! Branded ID types for type-safe window references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Prefix of every native window label created by the host.
const LABEL_PREFIX: &str = "window-";

/// Window identifier. Assigned by the registry, starting at 1.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct WindowId(pub u32);

impl WindowId {
  /// Native label used by the renderer host for this window (`window-<id>`).
  pub fn label(self) -> String {
    format!("{LABEL_PREFIX}{}", self.0)
  }

  /// Recover a window id from a native label produced by [`WindowId::label`].
  pub fn from_label(label: &str) -> Option<Self> {
    label
      .strip_prefix(LABEL_PREFIX)
      .and_then(|rest| rest.parse::<u32>().ok())
      .map(Self)
  }
}
