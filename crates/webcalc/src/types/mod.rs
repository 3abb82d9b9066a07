/*! Core types for webcalc.

Regenerate TypeScript types: `cargo test -p webcalc export_bindings`
*/

#![allow(missing_docs)]

mod error;
mod geometry;
mod ids;

pub use error::{BridgeError, ConfigError, EvalError, EvalResult, HostError, HostResult};
pub use geometry::{Rgb, Size};
pub use ids::WindowId;
