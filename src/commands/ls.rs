use crate::command::CommandOutput;
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::path;

/// `ls [path]` - list the resolved directory, defaulting to the cursor.
pub fn run(arg: Option<&str>, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    let target = match arg {
        Some(p) => path::strip_root(&path::resolve(&ctx.cwd, p)).to_string(),
        None => path::strip_root(&ctx.cwd).to_string(),
    };

    let dir = ctx
        .vfs
        .find_node(&target)
        .filter(|id| ctx.vfs.node(*id).kind.is_folder())
        .ok_or_else(|| {
            OsError::DirectoryNotFound(if target.is_empty() { "/".to_string() } else { target.clone() })
        })?;

    let lines = ctx
        .vfs
        .children(dir)
        .map(|child| format!("{:<6} {}", child.kind.label(), child.name))
        .collect();
    Ok(CommandOutput::text(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_cursor_directory_by_default() {
        let mut ctx = TerminalContext::new();
        let out = run(None, &mut ctx).unwrap();
        assert!(out.lines.iter().any(|l| l.ends_with(" bin")));
        assert!(out.lines.iter().any(|l| l.starts_with("file") && l.ends_with("README.md")));
    }

    #[test]
    fn lists_a_resolved_argument() {
        let mut ctx = TerminalContext::new();
        ctx.cwd = "/data".to_string();
        let out = run(Some("../logs"), &mut ctx).unwrap();
        assert_eq!(out.lines.len(), 2);
        assert!(out.lines[0].ends_with("access.log"));
    }

    #[test]
    fn servers_are_listed_with_their_kind() {
        let mut ctx = TerminalContext::new();
        let out = run(Some("remote_nodes"), &mut ctx).unwrap();
        assert!(out.lines.iter().all(|l| l.starts_with("server")));
    }

    #[test]
    fn a_file_target_is_not_a_directory() {
        let mut ctx = TerminalContext::new();
        assert_eq!(
            run(Some("README.md"), &mut ctx),
            Err(OsError::DirectoryNotFound("README.md".to_string()))
        );
    }
}
