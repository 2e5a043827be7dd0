use chrono::{DateTime, Utc};
use log::debug;

use crate::command::{self, Intent, TermCommand};
use crate::seed;
use crate::vfs::Vfs;

pub const WELCOME: [&str; 2] = [
    "Welcome to Hypr-Terminal.",
    "Type `help` for a list of commands.",
];

/// What one executed line produced. `lines` is the dispatch output only;
/// the prompt echo goes straight into history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub lines: Vec<String>,
    pub intent: Option<Intent>,
    pub ok: bool,
    pub cleared: bool,
}

impl ExecResult {
    fn quiet() -> Self {
        Self { lines: Vec::new(), intent: None, ok: true, cleared: false }
    }
}

/// The terminal session: filesystem, cursor, and output history.
///
/// History is append-only and insertion-ordered - the one exception is
/// `clear`, which drops everything including the line that invoked it.
pub struct TerminalContext {
    pub vfs: Vfs,
    /// Empty at root, otherwise `/`-prefixed ("/data/blueprints").
    pub cwd: String,
    pub history: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl TerminalContext {
    pub fn new() -> Self {
        Self::with_vfs(seed::seeded())
    }

    pub fn with_vfs(vfs: Vfs) -> Self {
        Self {
            vfs,
            cwd: String::new(),
            history: WELCOME.iter().map(|s| s.to_string()).collect(),
            started_at: Utc::now(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("ds@hypr:~{}$ ", self.cwd)
    }

    /// Run one input line: echo it, dispatch it, fold the outcome into
    /// history. Failures become `Error: ...` lines; nothing here panics
    /// or leaves state half-updated.
    pub fn execute(&mut self, raw: &str) -> ExecResult {
        let echoed = format!("{}{}", self.prompt(), raw);

        let Some(cmd) = command::parse(raw.trim()) else {
            // blank line: just the echoed prompt
            self.history.push(echoed);
            return ExecResult::quiet();
        };

        if matches!(cmd, TermCommand::Clear) {
            self.history.clear();
            return ExecResult { cleared: true, ..ExecResult::quiet() };
        }

        self.history.push(echoed);
        debug!("execute {:?}", cmd);
        match command::dispatch(cmd, self) {
            Ok(output) => {
                self.history.extend(output.lines.iter().cloned());
                ExecResult { lines: output.lines, intent: output.intent, ok: true, cleared: false }
            }
            Err(e) => {
                let line = format!("Error: {}", e);
                self.history.push(line.clone());
                ExecResult { lines: vec![line], intent: None, ok: false, cleared: false }
            }
        }
    }
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_opens_with_the_welcome_banner() {
        let ctx = TerminalContext::new();
        assert_eq!(ctx.history, WELCOME.map(String::from).to_vec());
        assert_eq!(ctx.prompt(), "ds@hypr:~$ ");
    }

    #[test]
    fn edit_readme_emits_an_open_file_intent() {
        let mut ctx = TerminalContext::new();
        let result = ctx.execute("edit README.md");
        assert_eq!(result.intent, Some(Intent::OpenFile { path: "README.md".to_string() }));
        assert_eq!(result.lines, vec!["Opening README.md in editor...".to_string()]);
        assert!(ctx.vfs.get_file_content("README.md").starts_with("# Digital Shadow's Lair"));
    }

    #[test]
    fn mkdir_collision_reports_and_preserves_children() {
        let mut ctx = TerminalContext::new();
        let result = ctx.execute("mkdir logs");
        assert!(!result.ok);
        assert_eq!(result.lines, vec!["Error: Directory 'logs' already exists.".to_string()]);

        let logs = ctx.vfs.find_node("logs").unwrap();
        let names: Vec<&str> = ctx.vfs.children(logs).map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["access.log", "firewall.log"]);
    }

    #[test]
    fn ls_failure_leaves_the_filesystem_untouched() {
        let mut ctx = TerminalContext::new();
        let before = ctx.vfs.clone();
        let result = ctx.execute("ls nonexistent");
        assert_eq!(result.lines, vec!["Error: directory not found: nonexistent".to_string()]);
        assert_eq!(ctx.vfs, before);
    }

    #[test]
    fn clear_discards_the_whole_history() {
        let mut ctx = TerminalContext::new();
        ctx.execute("ls");
        ctx.execute("help");
        assert!(ctx.history.len() > 2);
        let result = ctx.execute("clear");
        assert!(result.cleared);
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn blank_input_echoes_the_prompt_only() {
        let mut ctx = TerminalContext::new();
        let before = ctx.history.len();
        let expected = format!("{}   ", ctx.prompt());
        let result = ctx.execute("   ");
        assert_eq!(result, ExecResult::quiet());
        assert_eq!(ctx.history.len(), before + 1);
        assert_eq!(ctx.history.last().unwrap(), &expected);
    }

    #[test]
    fn unknown_commands_are_reported_by_name() {
        let mut ctx = TerminalContext::new();
        let result = ctx.execute("decrypt vault");
        assert_eq!(result.lines, vec!["Error: command not found: decrypt".to_string()]);
    }

    #[test]
    fn cd_moves_the_prompt() {
        let mut ctx = TerminalContext::new();
        ctx.execute("cd data");
        assert_eq!(ctx.prompt(), "ds@hypr:~/data$ ");
        ctx.execute("cd /");
        assert_eq!(ctx.prompt(), "ds@hypr:~$ ");
    }

    #[test]
    fn cd_argument_case_matters_even_though_command_case_does_not() {
        let mut ctx = TerminalContext::new();
        let result = ctx.execute("CD Data");
        assert!(!result.ok);
        assert_eq!(result.lines, vec!["Error: directory not found: Data".to_string()]);
        assert!(ctx.execute("cd data").ok);
    }

    #[test]
    fn history_interleaves_echo_and_output_in_order() {
        let mut ctx = TerminalContext::new();
        ctx.execute("mkfile notes.txt");
        let tail: Vec<&str> = ctx.history.iter().rev().take(2).map(|s| s.as_str()).collect();
        assert_eq!(tail, vec!["File created: notes.txt", "ds@hypr:~$ mkfile notes.txt"]);
    }

    #[test]
    fn navigation_and_shutdown_emit_their_intents() {
        let mut ctx = TerminalContext::new();
        assert_eq!(
            ctx.execute("projects").intent,
            Some(Intent::Navigate { view: crate::session::View::Projects })
        );
        assert_eq!(ctx.execute("hire").intent, Some(Intent::Hire));
        assert_eq!(ctx.execute("shutdown").intent, Some(Intent::Exit));
        assert_eq!(ctx.execute("exit").intent, Some(Intent::Exit));
    }

    #[test]
    fn mkfile_then_edit_round_trip() {
        let mut ctx = TerminalContext::new();
        ctx.execute("cd secure_vault");
        assert!(ctx.execute("mkfile plan.md").ok);
        let result = ctx.execute("edit plan.md");
        assert_eq!(
            result.intent,
            Some(Intent::OpenFile { path: "secure_vault/plan.md".to_string() })
        );
        assert_eq!(ctx.vfs.get_file_content("secure_vault/plan.md"), "");
    }
}
