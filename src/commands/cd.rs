use crate::command::CommandOutput;
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::path;

/// `cd [path]` - move the cursor. No argument or `/` resets to root; the
/// error message quotes the raw argument, not the resolved path.
pub fn run(arg: Option<&str>, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    let Some(raw) = arg else {
        ctx.cwd.clear();
        return Ok(CommandOutput::none());
    };

    let resolved = path::resolve(&ctx.cwd, raw);
    if resolved == "/" {
        ctx.cwd.clear();
        return Ok(CommandOutput::none());
    }

    match ctx.vfs.find_node(path::strip_root(&resolved)) {
        Some(id) if ctx.vfs.node(id).kind.is_folder() => {
            ctx.cwd = resolved;
            Ok(CommandOutput::none())
        }
        _ => Err(OsError::DirectoryNotFound(raw.to_string())),
    }
}
