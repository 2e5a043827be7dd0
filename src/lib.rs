// simulated hacker-os session core for the portfolio frontend
// virtual filesystem + terminal + window manager, compiled to wasm
pub mod boot;
pub mod command;
pub mod commands;
pub mod context;
pub mod error;
pub mod events;
pub mod path;
pub mod seed;
pub mod session;
pub mod sysinfo;
pub mod vfs;
pub mod windows;

use chrono::Utc;
use gloo_timers::callback::Interval;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

use boot::BootSequence;
use command::Intent;
use context::TerminalContext;
use session::{SessionError, SessionFsm, View};
use windows::{AppKind, AppSpec, WindowManager};

// better errors in browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Response wrapper for terminal commands crossing to JS.
#[derive(Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_action: Option<String>,
}

/// The whole simulated OS, owned by the frontend as a single object.
/// Every method is synchronous; the frontend re-renders from the state
/// getters after each call.
#[wasm_bindgen]
pub struct HyprOs {
    fsm: SessionFsm,
    terminal: TerminalContext,
    windows: WindowManager,
    boot: BootSequence,
    uptime_ticker: Option<Interval>,
}

#[wasm_bindgen]
impl HyprOs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HyprOs {
        HyprOs {
            fsm: SessionFsm::new(),
            terminal: TerminalContext::new(),
            windows: WindowManager::new(),
            boot: BootSequence::new(),
            uptime_ticker: None,
        }
    }

    // ---- boot & session state ----

    /// Next boot line plus its display delay, or null once the script is
    /// exhausted. The frontend owns the timing.
    pub fn next_boot_line(&mut self) -> JsValue {
        match self.boot.next_line() {
            Some(line) => to_js(&json!({ "text": line.text, "delayMs": line.delay_ms })),
            None => JsValue::NULL,
        }
    }

    pub fn boot_complete(&mut self) -> JsValue {
        status(self.fsm.boot_complete())
    }

    pub fn state(&self) -> JsValue {
        to_js(&serde_json::to_value(self.fsm.state()).unwrap_or_default())
    }

    pub fn navigate(&mut self, view: &str) -> JsValue {
        match View::parse(view) {
            Some(view) => status(self.fsm.navigate(view)),
            None => to_js(&json!({ "success": false, "error": format!("unknown view: {}", view) })),
        }
    }

    pub fn transition_complete(&mut self) -> JsValue {
        status(self.fsm.transition_complete())
    }

    pub fn hire(&mut self) -> JsValue {
        status(self.fsm.hire())
    }

    pub fn hire_complete(&mut self) -> JsValue {
        status(self.fsm.hire_complete())
    }

    pub fn enter_desktop(&mut self) -> JsValue {
        status(self.fsm.enter_desktop())
    }

    pub fn exit_desktop(&mut self) -> JsValue {
        status(self.fsm.exit_desktop())
    }

    // ---- terminal ----

    /// Run one terminal line. The returned lines are this command's
    /// output only; `history()` has the full scrollback.
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let result = self.terminal.execute(input);
        if let Some(intent) = &result.intent {
            self.apply_intent(intent);
        }

        let special_action = if result.cleared {
            Some("clear_screen".to_string())
        } else {
            result.intent.as_ref().map(intent_slug)
        };
        to_js(
            &serde_json::to_value(&CommandResponse {
                success: result.ok,
                lines: result.lines,
                special_action,
            })
            .unwrap_or_default(),
        )
    }

    pub fn history(&self) -> JsValue {
        to_js(&serde_json::to_value(&self.terminal.history).unwrap_or_default())
    }

    pub fn prompt(&self) -> String {
        self.terminal.prompt()
    }

    pub fn current_path(&self) -> String {
        self.terminal.cwd.clone()
    }

    // ---- filesystem (file explorer + editor surface) ----

    /// List a directory for the file explorer; defaults to the terminal
    /// cursor.
    pub fn list_dir(&self, path: Option<String>) -> JsValue {
        let target = match &path {
            Some(p) => path::strip_root(&path::resolve(&self.terminal.cwd, p)).to_string(),
            None => path::strip_root(&self.terminal.cwd).to_string(),
        };
        match self
            .terminal
            .vfs
            .find_node(&target)
            .filter(|id| self.terminal.vfs.node(*id).kind.is_folder())
        {
            Some(id) => {
                let entries: Vec<serde_json::Value> = self
                    .terminal
                    .vfs
                    .children(id)
                    .map(|child| json!({ "name": child.name, "kind": child.kind.label() }))
                    .collect();
                to_js(&json!({ "success": true, "entries": entries }))
            }
            None => to_js(&json!({
                "success": false,
                "error": format!("directory not found: {}", if target.is_empty() { "/" } else { target.as_str() }),
            })),
        }
    }

    /// Editor read path. Never fails; missing content comes back as the
    /// placeholder text.
    pub fn read_file(&self, path: &str) -> String {
        self.terminal.vfs.get_file_content(path)
    }

    /// Editor save path: wholesale replacement of the stored content.
    pub fn write_file(&mut self, path: &str, content: &str) {
        self.terminal.vfs.update_file_content(path, content);
    }

    // ---- window manager ----

    pub fn workspaces(&self) -> Vec<u32> {
        windows::WORKSPACES.collect()
    }

    pub fn active_workspace(&self) -> u32 {
        self.windows.active_workspace()
    }

    pub fn set_active_workspace(&mut self, workspace: u32) {
        self.windows.set_active_workspace(workspace);
    }

    pub fn open_app(&mut self, kind: &str, file_path: Option<String>) -> JsValue {
        let spec = match AppKind::parse(kind) {
            Some(AppKind::Editor) => match file_path {
                Some(p) => AppSpec::editor(p),
                None => AppSpec::new(AppKind::Editor),
            },
            Some(kind) => AppSpec::new(kind),
            None => {
                return to_js(&json!({
                    "success": false,
                    "error": format!("unknown app type: {}", kind),
                }))
            }
        };
        let id = self.windows.open_app(spec);
        to_js(&json!({ "success": true, "id": id }))
    }

    pub fn close_app(&mut self, id: &str) {
        self.windows.close_app(id);
    }

    pub fn focus_app(&mut self, id: &str) {
        self.windows.bring_to_front(id);
    }

    /// Instances on the active workspace in focus order, each annotated
    /// with its render layer.
    pub fn workspace_apps(&self) -> JsValue {
        let apps: Vec<serde_json::Value> = self
            .windows
            .workspace_apps()
            .map(|app| {
                let mut value = serde_json::to_value(app).unwrap_or_default();
                if let (Some(obj), Some(z)) = (value.as_object_mut(), self.windows.z_index(&app.id)) {
                    obj.insert("zIndex".to_string(), z.into());
                }
                value
            })
            .collect();
        to_js(&serde_json::Value::Array(apps))
    }

    pub fn all_apps(&self) -> JsValue {
        to_js(&serde_json::to_value(self.windows.all_apps()).unwrap_or_default())
    }

    // ---- decorative uptime ticker ----

    /// Start the once-a-second uptime callback for the HUD. The handle
    /// cancels on stop or when the session object is dropped.
    pub fn start_uptime_ticker(&mut self, callback: js_sys::Function) {
        let started_at = self.terminal.started_at;
        self.uptime_ticker = Some(Interval::new(1_000, move || {
            let uptime = sysinfo::format_uptime(Utc::now() - started_at);
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&uptime));
        }));
    }

    pub fn stop_uptime_ticker(&mut self) {
        self.uptime_ticker = None;
    }

    // ---- internal ----

    fn apply_intent(&mut self, intent: &Intent) {
        match intent {
            Intent::OpenFile { path } => {
                self.windows.open_app(AppSpec::editor(path.clone()));
            }
            Intent::Navigate { view } => {
                let _ = self.fsm.navigate(*view);
            }
            Intent::Hire => {
                let _ = self.fsm.hire();
            }
            Intent::Exit => {
                let _ = self.fsm.exit_desktop();
            }
        }
        events::emit_os_event("os-intent", &serde_json::to_value(intent).unwrap_or_default());
    }
}

impl Default for HyprOs {
    fn default() -> Self {
        Self::new()
    }
}

fn intent_slug(intent: &Intent) -> String {
    match intent {
        Intent::Navigate { .. } => "navigate",
        Intent::Hire => "hire",
        Intent::OpenFile { .. } => "open_file",
        Intent::Exit => "exit",
    }
    .to_string()
}

fn status(result: Result<(), SessionError>) -> JsValue {
    match result {
        Ok(()) => to_js(&json!({ "success": true })),
        Err(e) => to_js(&json!({ "success": false, "error": e.to_string() })),
    }
}

fn to_js(value: &serde_json::Value) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
