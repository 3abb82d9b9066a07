/*! Geometry and color types for native windows. */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use super::ConfigError;

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }

  /// True if either side is zero or negative (nothing was laid out).
  pub fn is_empty(&self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }

  /// True if both sides are finite numbers.
  pub fn is_finite(&self) -> bool {
    self.width.is_finite() && self.height.is_finite()
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

/// An opaque RGB color.
///
/// Parses `#rgb`, `#rrggbb` and `rgb(r, g, b)`. Serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

impl Default for Rgb {
  fn default() -> Self {
    Self::WHITE
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

impl FromStr for Rgb {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let trimmed = s.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
      if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
      }
      return match hex.len() {
        3 => {
          let digit = |i: usize| {
            hex
              .get(i..=i)
              .and_then(|d| u8::from_str_radix(d, 16).ok())
              .map(|v| v * 17)
          };
          match (digit(0), digit(1), digit(2)) {
            (Some(r), Some(g), Some(b)) => Ok(Rgb::new(r, g, b)),
            _ => Err(invalid()),
          }
        }
        6 => {
          let pair = |i: usize| {
            hex
              .get(i..i + 2)
              .and_then(|p| u8::from_str_radix(p, 16).ok())
          };
          match (pair(0), pair(2), pair(4)) {
            (Some(r), Some(g), Some(b)) => Ok(Rgb::new(r, g, b)),
            _ => Err(invalid()),
          }
        }
        _ => Err(invalid()),
      };
    }

    let inner = trimmed
      .strip_prefix("rgb(")
      .and_then(|rest| rest.strip_suffix(')'))
      .ok_or_else(invalid)?;
    let channels = inner
      .split(',')
      .map(|c| c.trim().parse::<u8>())
      .collect::<Result<Vec<_>, _>>()
      .map_err(|_| invalid())?;
    match channels.as_slice() {
      [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
      _ => Err(invalid()),
    }
  }
}

impl TryFrom<String> for Rgb {
  type Error = ConfigError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Rgb> for String {
  fn from(color: Rgb) -> Self {
    color.to_string()
  }
}
