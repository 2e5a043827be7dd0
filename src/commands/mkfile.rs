use crate::command::CommandOutput;
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::path;

/// `mkfile <name>` - create an empty file in the cursor directory.
pub fn run(name: Option<&str>, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    let Some(name) = name else {
        return Err(OsError::MissingArgument { noun: "file name", usage: "mkfile <file_name>" });
    };

    let parent = path::strip_root(&ctx.cwd).to_string();
    ctx.vfs.create_file(&parent, name)?;
    Ok(CommandOutput::text(vec![format!("File created: {}", name)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_in_the_cursor_directory() {
        let mut ctx = TerminalContext::new();
        ctx.cwd = "/secure_vault".to_string();
        let out = run(Some("keys.txt"), &mut ctx).unwrap();
        assert_eq!(out.lines, vec!["File created: keys.txt".to_string()]);
        assert!(ctx.vfs.find_node("secure_vault/keys.txt").is_some());
        assert_eq!(ctx.vfs.get_file_content("secure_vault/keys.txt"), "");
    }

    #[test]
    fn collisions_are_reported() {
        let mut ctx = TerminalContext::new();
        let err = run(Some("README.md"), &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "File 'README.md' already exists.");
    }

    #[test]
    fn requires_an_argument() {
        let mut ctx = TerminalContext::new();
        let err = run(None, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "a file name is required. Usage: mkfile <file_name>");
    }
}
