use std::sync::Arc;
use tauri::{State, WebviewWindow};
use webcalc::{EvalChannel, EvalReply};

// Page -> native invoke commands. Names must match the scripts the webcalc
// crate injects (EVAL_REPLY_COMMAND, START_DRAG_COMMAND).

/// Reply to a wrapped evaluation. Async so it is serviced off the UI thread
/// while the evaluating thread is blocked.
#[tauri::command]
pub(crate) async fn eval_reply(
    evals: State<'_, Arc<EvalChannel>>,
    reply: EvalReply,
) -> Result<(), String> {
    evals.resolve(reply);
    Ok(())
}

/// Begin a native window drag (easy drag for frameless windows).
#[tauri::command]
pub(crate) fn start_drag(window: WebviewWindow) -> Result<(), String> {
    window.start_dragging().map_err(|e| e.to_string())
}
