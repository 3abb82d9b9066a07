/*!
Synchronous script evaluation over a fire-and-forget renderer.

The renderer can run script but not hand a value back. [`EvalChannel`] turns
that into request/response: each evaluation gets an id, the script is wrapped
so the page posts a tagged [`EvalReply`] back through the
[`EVAL_REPLY_COMMAND`] command, and the caller blocks until that reply
arrives or the timeout elapses.

```
use std::time::Duration;
use webcalc::{EvalChannel, EvalOutcome, EvalReply};

let channel = EvalChannel::new();
let value = channel.evaluate("1 + 1", Duration::from_secs(1), |_wrapped| {
    // A real backend hands `_wrapped` to the renderer; the page then replies.
    channel.resolve(EvalReply { id: 1, outcome: EvalOutcome::Value { value: 2.into() } });
    Ok(())
});
assert_eq!(value, Ok(2.into()));
```
*/

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender};
use std::time::Duration;
use ts_rs::TS;

use crate::page::INVOKE_FN;
use crate::types::{EvalError, EvalResult};

/// Command the page calls with the result of a wrapped evaluation.
pub const EVAL_REPLY_COMMAND: &str = "eval_reply";

/// Page-to-native reply for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvalReply {
  /// Request id from the wrapped script.
  #[ts(type = "number")]
  pub id: u64,
  /// Tagged result of the expression.
  pub outcome: EvalOutcome,
}

/// What the evaluated expression produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum EvalOutcome {
  /// Any JSON-serializable value.
  Value { value: JsonValue },
  /// The expression evaluated to `undefined`.
  Undefined,
  /// The expression threw or its promise rejected.
  Threw { message: String },
}

impl EvalOutcome {
  /// Map `undefined` and thrown errors to [`EvalError`].
  pub fn into_result(self) -> EvalResult<JsonValue> {
    match self {
      EvalOutcome::Value { value } => Ok(value),
      EvalOutcome::Undefined => Err(EvalError::Undefined),
      EvalOutcome::Threw { message } => Err(EvalError::Threw(message)),
    }
  }
}

/// Pending-evaluation table shared between the evaluating thread and the reply handler.
#[derive(Debug)]
pub struct EvalChannel {
  pending: Mutex<HashMap<u64, SyncSender<EvalOutcome>>>,
  next_id: AtomicU64,
}

impl Default for EvalChannel {
  fn default() -> Self {
    Self::new()
  }
}

impl EvalChannel {
  /// Ids start at 1.
  pub fn new() -> Self {
    Self {
      pending: Mutex::new(HashMap::new()),
      next_id: AtomicU64::new(1),
    }
  }

  /// Evaluate `expression` and block for its value.
  ///
  /// `dispatch` receives the wrapped script and must hand it to the renderer.
  /// The pending entry is always removed before returning.
  pub fn evaluate<F>(&self, expression: &str, timeout: Duration, dispatch: F) -> EvalResult<JsonValue>
  where
    F: FnOnce(&str) -> EvalResult<()>,
  {
    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    let (tx, rx) = mpsc::sync_channel(1);
    self.pending.lock().insert(id, tx);

    if let Err(e) = dispatch(&wrap_script(id, expression)) {
      self.pending.lock().remove(&id);
      return Err(e);
    }

    let received = rx.recv_timeout(timeout);
    self.pending.lock().remove(&id);

    match received {
      Ok(outcome) => outcome.into_result(),
      Err(RecvTimeoutError::Timeout) => {
        log::warn!("[eval] #{id} timed out after {timeout:?}");
        Err(EvalError::Timeout(timeout))
      }
      Err(RecvTimeoutError::Disconnected) => {
        Err(EvalError::Dispatch(format!("reply channel for #{id} closed")))
      }
    }
  }

  /// Deliver a reply from the page. Returns false for unknown or late ids.
  pub fn resolve(&self, reply: EvalReply) -> bool {
    let Some(tx) = self.pending.lock().remove(&reply.id) else {
      log::debug!("[eval] ignoring reply for unknown or expired #{}", reply.id);
      return false;
    };
    tx.try_send(reply.outcome).is_ok()
  }

  /// Number of evaluations still waiting for a reply.
  pub fn pending(&self) -> usize {
    self.pending.lock().len()
  }
}

/// Wrap `expression` so the page replies with a tagged outcome for `id`.
///
/// `expression` must be a single JavaScript expression. Promises are awaited.
pub fn wrap_script(id: u64, expression: &str) -> String {
  let command = json!(EVAL_REPLY_COMMAND);
  format!(
    r#"(() => {{
  const reply = (outcome) => {INVOKE_FN}({command}, {{ reply: {{ id: {id}, outcome }} }});
  const threw = (error) => reply({{ kind: "threw", message: String(error) }});
  let value;
  try {{
    value = ({expression});
  }} catch (error) {{
    threw(error);
    return;
  }}
  Promise.resolve(value).then(
    (v) => reply(v === undefined ? {{ kind: "undefined" }} : {{ kind: "value", value: v }}),
    threw,
  );
}})();"#
  )
}
