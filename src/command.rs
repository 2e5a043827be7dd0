use serde::Serialize;

use crate::commands;
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::session::View;

/// One-shot notification handed to the presentation shell. A single
/// command execution produces at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Navigate { view: View },
    Hire,
    OpenFile { path: String },
    Exit,
}

/// A parsed command line. Keeping this a closed enum means the dispatch
/// match below is checked for exhaustiveness at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermCommand {
    Ls { path: Option<String> },
    Cd { path: Option<String> },
    Edit { path: Option<String> },
    MkFile { name: Option<String> },
    MkDir { name: Option<String> },
    Goto { view: View },
    Hire,
    System,
    Shutdown,
    Help,
    Clear,
    Unknown { name: String },
}

/// What a handler returns: lines for the history plus an optional intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub intent: Option<Intent>,
}

impl CommandOutput {
    pub fn none() -> Self {
        Self { lines: Vec::new(), intent: None }
    }

    pub fn text(lines: Vec<String>) -> Self {
        Self { lines, intent: None }
    }

    pub fn with_intent(lines: Vec<String>, intent: Intent) -> Self {
        Self { lines, intent: Some(intent) }
    }
}

/// Split a trimmed input line on whitespace. The command name is matched
/// case-insensitively; argument case is preserved. Returns `None` for an
/// empty line.
pub fn parse(input: &str) -> Option<TermCommand> {
    let mut parts = input.split_whitespace();
    let name = parts.next()?.to_lowercase();
    // every command takes at most one operand; extras are ignored
    let first = parts.next().map(str::to_string);

    Some(match name.as_str() {
        "ls" => TermCommand::Ls { path: first },
        "cd" => TermCommand::Cd { path: first },
        "edit" => TermCommand::Edit { path: first },
        "mkfile" => TermCommand::MkFile { name: first },
        "mkdir" => TermCommand::MkDir { name: first },
        "home" => TermCommand::Goto { view: View::Home },
        "skills" => TermCommand::Goto { view: View::Skills },
        "projects" => TermCommand::Goto { view: View::Projects },
        "contact" => TermCommand::Goto { view: View::Contact },
        "hire" => TermCommand::Hire,
        "system" => TermCommand::System,
        "shutdown" | "exit" => TermCommand::Shutdown,
        "help" => TermCommand::Help,
        "clear" => TermCommand::Clear,
        _ => TermCommand::Unknown { name },
    })
}

pub fn dispatch(cmd: TermCommand, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    match cmd {
        TermCommand::Ls { path } => commands::ls::run(path.as_deref(), ctx),
        TermCommand::Cd { path } => commands::cd::run(path.as_deref(), ctx),
        TermCommand::Edit { path } => commands::edit::run(path.as_deref(), ctx),
        TermCommand::MkFile { name } => commands::mkfile::run(name.as_deref(), ctx),
        TermCommand::MkDir { name } => commands::mkdir::run(name.as_deref(), ctx),
        TermCommand::Goto { view } => Ok(commands::nav::goto(view)),
        TermCommand::Hire => Ok(commands::nav::hire()),
        TermCommand::System => Ok(commands::system::run(ctx)),
        TermCommand::Shutdown => Ok(commands::nav::shutdown()),
        TermCommand::Help => Ok(commands::help::run()),
        // the shell resets its own history before dispatching, so there
        // is nothing left to do here
        TermCommand::Clear => Ok(CommandOutput::none()),
        TermCommand::Unknown { name } => Err(OsError::UnknownCommand(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_parses_to_nothing() {
        assert_eq!(parse(""), None);
    }

    #[test]
    fn command_name_is_case_insensitive_but_args_keep_case() {
        assert_eq!(parse("LS Data"), Some(TermCommand::Ls { path: Some("Data".to_string()) }));
        assert_eq!(parse("ShUtDoWn"), Some(TermCommand::Shutdown));
    }

    #[test]
    fn exit_is_an_alias_for_shutdown() {
        assert_eq!(parse("exit"), Some(TermCommand::Shutdown));
        assert_eq!(parse("shutdown"), Some(TermCommand::Shutdown));
    }

    #[test]
    fn extra_operands_are_ignored() {
        assert_eq!(
            parse("cd data  logs"),
            Some(TermCommand::Cd { path: Some("data".to_string()) })
        );
    }

    #[test]
    fn unknown_names_are_kept_lowercased_for_the_error() {
        assert_eq!(
            parse("Frobnicate now"),
            Some(TermCommand::Unknown { name: "frobnicate".to_string() })
        );
    }

    #[test]
    fn navigation_words_map_to_views() {
        assert_eq!(parse("skills"), Some(TermCommand::Goto { view: View::Skills }));
        assert_eq!(parse("contact"), Some(TermCommand::Goto { view: View::Contact }));
    }
}
