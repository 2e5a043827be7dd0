//! Window bookkeeping for the simulated desktop: a flat list of running
//! app instances partitioned into numbered workspaces. Ordering within
//! the list doubles as focus order - last is topmost.

use std::ops::RangeInclusive;

use log::debug;
use serde::Serialize;

pub const WORKSPACES: RangeInclusive<u32> = 1..=5;

// the focused window always renders on this layer
const Z_FOCUSED: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Files,
    Terminal,
    Editor,
}

impl AppKind {
    pub fn slug(&self) -> &'static str {
        match self {
            AppKind::Files => "files",
            AppKind::Terminal => "terminal",
            AppKind::Editor => "editor",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            AppKind::Files => "Files",
            AppKind::Terminal => "Terminal",
            AppKind::Editor => "Editor",
        }
    }

    pub fn parse(s: &str) -> Option<AppKind> {
        match s {
            "files" => Some(AppKind::Files),
            "terminal" => Some(AppKind::Terminal),
            "editor" => Some(AppKind::Editor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppProps {
    #[serde(rename = "filePath", skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AppKind,
    pub title: String,
    pub props: AppProps,
    /// Fixed at creation; windows never migrate between workspaces.
    pub workspace: u32,
}

/// What to open. The title falls back to the capitalized kind name.
#[derive(Debug, Clone)]
pub struct AppSpec {
    pub kind: AppKind,
    pub title: Option<String>,
    pub props: AppProps,
}

impl AppSpec {
    pub fn new(kind: AppKind) -> Self {
        Self { kind, title: None, props: AppProps::default() }
    }

    pub fn editor(file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        Self {
            kind: AppKind::Editor,
            title: Some(file_path.clone()),
            props: AppProps { file_path: Some(file_path) },
        }
    }
}

pub struct WindowManager {
    apps: Vec<AppInstance>,
    /// Session-wide id counter; never reset, never reused, and burned
    /// even when editor de-duplication suppresses the open.
    counter: u64,
    active_workspace: u32,
}

impl WindowManager {
    pub fn new() -> Self {
        Self { apps: Vec::new(), counter: 0, active_workspace: *WORKSPACES.start() }
    }

    pub fn active_workspace(&self) -> u32 {
        self.active_workspace
    }

    pub fn set_active_workspace(&mut self, workspace: u32) {
        if WORKSPACES.contains(&workspace) {
            self.active_workspace = workspace;
        } else {
            debug!("ignoring switch to unknown workspace {}", workspace);
        }
    }

    /// Open an app on the active workspace and return its id. Opening an
    /// editor for a file that already has an editor in this workspace
    /// refocuses the existing instance instead.
    pub fn open_app(&mut self, spec: AppSpec) -> String {
        let id = format!("{}-{}", spec.kind.slug(), self.counter);
        self.counter += 1;

        if spec.kind == AppKind::Editor {
            let existing = self
                .apps
                .iter()
                .find(|a| {
                    a.kind == AppKind::Editor
                        && a.props.file_path == spec.props.file_path
                        && a.workspace == self.active_workspace
                })
                .map(|a| a.id.clone());
            if let Some(existing) = existing {
                self.bring_to_front(&existing);
                return existing;
            }
        }

        debug!("open {} on workspace {}", id, self.active_workspace);
        self.apps.push(AppInstance {
            id: id.clone(),
            kind: spec.kind,
            title: spec.title.unwrap_or_else(|| spec.kind.default_title().to_string()),
            props: spec.props,
            workspace: self.active_workspace,
        });
        id
    }

    pub fn close_app(&mut self, id: &str) {
        self.apps.retain(|a| a.id != id);
    }

    /// Move an instance to the end of the global order; unknown ids are
    /// ignored.
    pub fn bring_to_front(&mut self, id: &str) {
        if let Some(pos) = self.apps.iter().position(|a| a.id == id) {
            let app = self.apps.remove(pos);
            self.apps.push(app);
        }
    }

    pub fn get_app(&self, id: &str) -> Option<&AppInstance> {
        self.apps.iter().find(|a| a.id == id)
    }

    pub fn all_apps(&self) -> &[AppInstance] {
        &self.apps
    }

    /// Instances visible on the active workspace, in focus order.
    pub fn workspace_apps(&self) -> impl Iterator<Item = &AppInstance> + '_ {
        self.apps.iter().filter(move |a| a.workspace == self.active_workspace)
    }

    /// Render layer for a visible instance: its position in the
    /// workspace list, except the most recently focused one which always
    /// sits on the fixed top layer.
    pub fn z_index(&self, id: &str) -> Option<usize> {
        let visible: Vec<&AppInstance> = self.workspace_apps().collect();
        let pos = visible.iter().position(|a| a.id == id)?;
        Some(if pos + 1 == visible.len() { Z_FOCUSED } else { pos + 1 })
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
