use std::sync::Arc;
use tauri::{AppHandle, Manager, WindowEvent};
use webcalc::{AppContext, AutoResize, Config, EvalChannel, ReadyHook, WindowBackend, WindowId};

use crate::backend::TauriBackend;
use crate::cli::Cli;
use crate::commands;

const TITLE: &str = "Calculator";
const ENTRY: &str = "index.html";

/// Managed app state: the window host and the armed ready hook.
pub(crate) struct Shell {
    pub(crate) ctx: AppContext<TauriBackend>,
    pub(crate) ready: ReadyHook,
}

/// Create the calculator window, arm auto-resize, and enter the run loop.
///
/// Blocks until the last window closes.
pub(crate) fn run(cli: Cli) -> tauri::Result<()> {
    let config = Config::default();
    let options = cli.window_options(&config);
    let evals = Arc::new(EvalChannel::new());

    tauri::Builder::default()
        .manage(Arc::clone(&evals))
        .invoke_handler(tauri::generate_handler![
            commands::eval_reply,
            commands::start_drag
        ])
        .setup(move |app| {
            let backend =
                TauriBackend::new(app.handle().clone(), evals, config.eval_timeout());
            let ctx = AppContext::new(backend);
            let window = ctx.create_window(TITLE, ENTRY, &options)?;

            let ready = auto_resize_hook(
                app.handle().clone(),
                window.id,
                config.root_selector,
                cli.debug,
            );
            app.manage(Shell { ctx, ready });
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                if let Some(shell) = window.try_state::<Shell>() {
                    window_destroyed(&shell.ctx, window.label());
                }
            }
        })
        .run(tauri::generate_context!())
}

/// Mark the registry entry behind a native window label as closed.
///
/// Labels outside the registry are ignored.
fn window_destroyed<B: WindowBackend>(ctx: &AppContext<B>, label: &str) -> bool {
    WindowId::from_label(label).is_some_and(|id| ctx.mark_closed(id))
}

// Fires once, on a blocking worker, after the calculator page has loaded.
fn auto_resize_hook(app: AppHandle, id: WindowId, selector: String, debug: bool) -> ReadyHook {
    ReadyHook::new(id, move || {
        let shell = app.state::<Shell>();
        let bridge = AutoResize::new(id, selector);
        if let Err(e) = bridge.run(&shell.ctx, shell.ctx.backend()) {
            log::error!("[ready] auto-resize of window {id} failed: {e}");
        }

        if debug {
            if let Some(window) = app.get_webview_window(&id.label()) {
                window.open_devtools();
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use webcalc::{HostError, HostResult, Size, WindowOptions, WindowSpec};

    struct Headless;

    impl WindowBackend for Headless {
        fn open(&self, _id: WindowId, _spec: &WindowSpec) -> HostResult<()> {
            Ok(())
        }

        fn resize(&self, _id: WindowId, _size: Size) -> HostResult<()> {
            Ok(())
        }
    }

    fn ctx_with_window() -> (AppContext<Headless>, WindowId) {
        let ctx = AppContext::new(Headless);
        let id = ctx
            .create_window(TITLE, ENTRY, &WindowOptions::default())
            .unwrap()
            .id;
        (ctx, id)
    }

    #[test]
    fn destroyed_window_is_marked_closed() {
        let (ctx, id) = ctx_with_window();
        assert!(window_destroyed(&ctx, &id.label()));
        assert_eq!(ctx.window(id).map(|w| w.open), Some(false));
        assert!(matches!(
            ctx.resize(id, 400.0, 620.0),
            Err(HostError::WindowClosed(_))
        ));
    }

    #[test]
    fn repeated_or_foreign_labels_are_ignored() {
        let (ctx, id) = ctx_with_window();
        assert!(!window_destroyed(&ctx, "main"));
        assert!(!window_destroyed(&ctx, &WindowId(7).label()));
        assert!(window_destroyed(&ctx, &id.label()));
        assert!(!window_destroyed(&ctx, &id.label()), "second destroy is a no-op");
        assert_eq!(ctx.len(), 1);
    }
}
