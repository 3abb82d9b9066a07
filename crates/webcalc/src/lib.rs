/*!
webcalc - window host and auto-resize bridge for a web-view calculator

```ignore
use webcalc::{AppContext, AutoResize, ReadyHook, WindowOptions};

// Create the window (backend is the renderer host, e.g. Tauri)
let ctx = AppContext::new(backend);
let window = ctx.create_window("Calculator", "index.html", &WindowOptions::default().frameless(true))?;

// Arm the one-shot ready hook before entering the run loop
let bridge = AutoResize::for_window(window.id);
let hook = ReadyHook::new(window.id, move || {
    if let Err(e) = bridge.run(&ctx, &evaluator) {
        log::error!("auto-resize failed: {e}");
    }
});

// The backend calls this once the page finished loading
hook.notify_loaded(window.id);
```
*/

mod bridge;
mod config;
mod eval;
mod host;
mod options;
mod page;
mod ready;

#[cfg(test)]
mod testing;

mod types;
pub use types::*;

pub use crate::bridge::{parse_measurement, AutoResize};
pub use crate::config::Config;
pub use crate::eval::{wrap_script, EvalChannel, EvalOutcome, EvalReply, EVAL_REPLY_COMMAND};
pub use crate::host::{AppContext, ScriptEvaluator, WindowBackend, WindowHandle};
pub use crate::options::{
  default_height, ContentSource, WindowOptions, WindowSpec, BASE_HEIGHT, BASE_WIDTH,
  CHROME_ALLOWANCE, MAX_DIMENSION,
};
pub use crate::page::{
  easy_drag_script, measure_script, BridgeObject, INVOKE_FN, START_DRAG_COMMAND,
};
pub use crate::ready::{ReadyCallback, ReadyHook};
