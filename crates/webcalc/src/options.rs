/*!
Window options and their resolution into a concrete [`WindowSpec`].

Omitted sizes fall back to the calculator's base layout. The default height
leaves room for OS chrome unless the window is frameless:

```
use webcalc::{WindowOptions, BASE_HEIGHT, CHROME_ALLOWANCE};

let chromed = WindowOptions::default();
assert_eq!(chromed.initial_size().height, BASE_HEIGHT + CHROME_ALLOWANCE);

let frameless = WindowOptions::default().frameless(true);
assert_eq!(frameless.initial_size().height, BASE_HEIGHT);
```
*/

use serde::Deserialize;

use crate::page::{self, BridgeObject};
use crate::types::{ConfigError, Rgb, Size};

/// Default content width in logical pixels.
pub const BASE_WIDTH: f64 = 400.0;

/// Default content height in logical pixels.
pub const BASE_HEIGHT: f64 = 620.0;

/// Extra height added for the OS title bar when the window has chrome.
pub const CHROME_ALLOWANCE: f64 = 40.0;

/// Largest dimension accepted at window creation.
pub const MAX_DIMENSION: f64 = 16_384.0;

/// Options recognised by [`crate::AppContext::create_window`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[must_use = "Options do nothing until passed to create_window"]
pub struct WindowOptions {
  /// Remove OS chrome. Default: false.
  pub frameless: bool,
  /// Click-drag anywhere to move a frameless window. Default: true.
  #[serde(alias = "easyDrag")]
  pub draggable: bool,
  /// Paint color shown before content loads. Default: `#ffffff`.
  pub background_color: Rgb,
  /// Initial width. Default: [`BASE_WIDTH`].
  pub width: Option<f64>,
  /// Initial height. Default: [`BASE_HEIGHT`], plus [`CHROME_ALLOWANCE`] when not frameless.
  pub height: Option<f64>,
  /// Object exposed to page script.
  pub bound_object: Option<BridgeObject>,
  /// Enable renderer developer tooling. Default: false.
  pub devtools: bool,
}

impl Default for WindowOptions {
  fn default() -> Self {
    Self {
      frameless: false,
      draggable: true,
      background_color: Rgb::WHITE,
      width: None,
      height: None,
      bound_object: None,
      devtools: false,
    }
  }
}

impl WindowOptions {
  /// Set [`Self::frameless`].
  pub const fn frameless(mut self, frameless: bool) -> Self {
    self.frameless = frameless;
    self
  }

  /// Set [`Self::draggable`].
  pub const fn draggable(mut self, draggable: bool) -> Self {
    self.draggable = draggable;
    self
  }

  /// Set [`Self::background_color`].
  pub const fn background_color(mut self, color: Rgb) -> Self {
    self.background_color = color;
    self
  }

  /// Set an explicit initial width.
  pub const fn width(mut self, width: f64) -> Self {
    self.width = Some(width);
    self
  }

  /// Set an explicit initial height, used verbatim regardless of chrome.
  pub const fn height(mut self, height: f64) -> Self {
    self.height = Some(height);
    self
  }

  /// Expose `object` to page script before any page script runs.
  pub fn bound_object(mut self, object: BridgeObject) -> Self {
    self.bound_object = Some(object);
    self
  }

  /// Set [`Self::devtools`].
  pub const fn devtools(mut self, devtools: bool) -> Self {
    self.devtools = devtools;
    self
  }

  /// Size the window opens at: explicit values win, otherwise the base layout.
  pub fn initial_size(&self) -> Size {
    let width = self.width.unwrap_or(BASE_WIDTH);
    let height = self.height.unwrap_or_else(|| default_height(self.frameless));
    Size::new(width, height)
  }

  /// Validate and resolve into a [`WindowSpec`].
  pub fn resolve(&self, title: &str, source: &str) -> Result<WindowSpec, ConfigError> {
    if title.trim().is_empty() {
      return Err(ConfigError::EmptyTitle);
    }
    let source = ContentSource::parse(source)?;

    let size = self.initial_size();
    if !is_valid_dimension(size.width) || !is_valid_dimension(size.height) {
      return Err(ConfigError::InvalidSize {
        width: size.width,
        height: size.height,
        max: MAX_DIMENSION,
      });
    }

    Ok(WindowSpec {
      title: title.to_string(),
      source,
      frameless: self.frameless,
      draggable: self.draggable,
      background_color: self.background_color,
      size,
      bound_object: self.bound_object.clone(),
      devtools: self.devtools,
    })
  }
}

/// Default height for a window with or without OS chrome.
pub fn default_height(frameless: bool) -> f64 {
  if frameless {
    BASE_HEIGHT
  } else {
    BASE_HEIGHT + CHROME_ALLOWANCE
  }
}

fn is_valid_dimension(value: f64) -> bool {
  value.is_finite() && value > 0.0 && value <= MAX_DIMENSION
}

/// Where a window's initial document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
  /// Path relative to the bundled frontend directory.
  Asset(String),
  /// Remote `http(s)` URL.
  External(String),
}

impl ContentSource {
  /// Classify a source string. `http://`/`https://` are external; anything else is a bundled asset.
  ///
  /// Asset paths are relative to the frontend directory. Absolute paths, drive
  /// letters, `file://` URLs and `..` segments cannot be served from there and
  /// are rejected.
  pub fn parse(source: &str) -> Result<Self, ConfigError> {
    let source = source.trim();
    if source.is_empty() {
      return Err(ConfigError::EmptySource);
    }

    let lower = source.to_ascii_lowercase();
    for scheme in ["http://", "https://"] {
      if lower.starts_with(scheme) {
        let host = source.get(scheme.len()..).unwrap_or_default();
        if host.is_empty() || host.starts_with('/') || host.contains(char::is_whitespace) {
          return Err(ConfigError::InvalidSource(source.to_string()));
        }
        return Ok(Self::External(source.to_string()));
      }
    }
    if source.contains("://") {
      return Err(ConfigError::InvalidSource(source.to_string()));
    }

    let escapes = source.split(['/', '\\']).any(|segment| segment == "..");
    if source.starts_with(['/', '\\']) || has_drive_letter(source) || escapes {
      return Err(ConfigError::InvalidSource(source.to_string()));
    }

    Ok(Self::Asset(source.to_string()))
  }

  /// The path or URL as given.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Asset(path) | Self::External(path) => path,
    }
  }
}

fn has_drive_letter(path: &str) -> bool {
  let mut chars = path.chars();
  matches!((chars.next(), chars.next()), (Some(letter), Some(':')) if letter.is_ascii_alphabetic())
}

/// Fully resolved, validated window description handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
  /// Non-empty window title.
  pub title: String,
  /// Initial document.
  pub source: ContentSource,
  /// No OS chrome.
  pub frameless: bool,
  /// Drag-anywhere requested. Only takes effect when frameless.
  pub draggable: bool,
  /// Paint color before content loads.
  pub background_color: Rgb,
  /// Size to open at.
  pub size: Size,
  /// Object installed on `window` for page script.
  pub bound_object: Option<BridgeObject>,
  /// Renderer developer tooling enabled.
  pub devtools: bool,
}

impl WindowSpec {
  /// Whether the page should start a native drag on mousedown.
  pub const fn easy_drag(&self) -> bool {
    self.frameless && self.draggable
  }

  /// Scripts to install before any page script runs.
  pub fn init_scripts(&self) -> Vec<String> {
    let mut scripts = Vec::new();
    if let Some(object) = &self.bound_object {
      scripts.push(object.init_script());
    }
    if self.easy_drag() {
      scripts.push(page::easy_drag_script());
    }
    scripts
  }
}
