use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;
use tauri::webview::PageLoadEvent;
use tauri::window::Color;
use tauri::{AppHandle, LogicalSize, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use webcalc::{
    ContentSource, EvalChannel, EvalError, EvalResult, HostError, HostResult, ReadyCallback,
    ReadyHook, Rgb, ScriptEvaluator, Size, WindowBackend, WindowId, WindowSpec,
};

use crate::shell::Shell;

/// Window host backed by Tauri webview windows.
///
/// Windows are labelled `window-<id>` so native events map back to registry ids.
pub(crate) struct TauriBackend {
    app: AppHandle,
    evals: Arc<EvalChannel>,
    eval_timeout: Duration,
}

impl TauriBackend {
    pub(crate) fn new(app: AppHandle, evals: Arc<EvalChannel>, eval_timeout: Duration) -> Self {
        Self {
            app,
            evals,
            eval_timeout,
        }
    }

    fn webview_window(&self, id: WindowId) -> Option<WebviewWindow> {
        self.app.get_webview_window(&id.label())
    }
}

impl WindowBackend for TauriBackend {
    fn open(&self, id: WindowId, spec: &WindowSpec) -> HostResult<()> {
        let url = match &spec.source {
            ContentSource::Asset(path) => WebviewUrl::App(path.into()),
            ContentSource::External(url) => WebviewUrl::External(
                url.parse()
                    .map_err(|e| HostError::Backend(format!("invalid url {url}: {e}")))?,
            ),
        };
        let Rgb { r, g, b } = spec.background_color;

        let mut builder = WebviewWindowBuilder::new(&self.app, id.label(), url)
            .title(&spec.title)
            .inner_size(spec.size.width, spec.size.height)
            .decorations(!spec.frameless)
            .background_color(Color(r, g, b, 255))
            .devtools(spec.devtools)
            .on_page_load(move |window, payload| {
                if payload.event() == PageLoadEvent::Finished {
                    on_page_loaded(window.app_handle(), id);
                }
            });
        for script in spec.init_scripts() {
            builder = builder.initialization_script(&script);
        }

        builder
            .build()
            .map_err(|e| HostError::Backend(e.to_string()))?;
        Ok(())
    }

    fn resize(&self, id: WindowId, size: Size) -> HostResult<()> {
        let window = self
            .webview_window(id)
            .ok_or(HostError::WindowNotFound(id))?;
        window
            .set_size(LogicalSize::new(size.width, size.height))
            .map_err(|e| HostError::Backend(e.to_string()))
    }
}

impl ScriptEvaluator for TauriBackend {
    fn evaluate(&self, window: WindowId, script: &str) -> EvalResult<JsonValue> {
        let webview = self
            .webview_window(window)
            .ok_or(EvalError::WindowNotFound(window))?;
        self.evals.evaluate(script, self.eval_timeout, |wrapped| {
            webview
                .eval(wrapped)
                .map_err(|e| EvalError::Dispatch(e.to_string()))
        })
    }
}

// Runs on the UI thread. The ready hook blocks on a page round trip, so it
// must be moved off before it runs.
fn on_page_loaded(app: &AppHandle, id: WindowId) {
    let Some(shell) = app.try_state::<Shell>() else {
        log::warn!("[host] window {id} loaded before the shell was ready");
        return;
    };
    dispatch_ready(&shell.ready, id, |callback| {
        drop(tauri::async_runtime::spawn_blocking(callback));
    });
}

/// Hand the ready callback to `spawn` if `id` is the hook's window and it has
/// not fired yet. Returns whether anything was spawned.
fn dispatch_ready<S>(hook: &ReadyHook, id: WindowId, spawn: S) -> bool
where
    S: FnOnce(ReadyCallback),
{
    match hook.take_for(id) {
        Some(callback) => {
            spawn(callback);
            true
        }
        None => false,
    }
}
