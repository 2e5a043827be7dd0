use crate::command::{CommandOutput, Intent};
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::path;
use crate::vfs::NodeKind;

/// `edit <path>` - emit an open-file intent for an existing file node.
/// Folders and servers are not editable.
pub fn run(arg: Option<&str>, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    let Some(raw) = arg else {
        return Err(OsError::MissingArgument { noun: "file path", usage: "edit <file_path>" });
    };

    let full = path::strip_root(&path::resolve(&ctx.cwd, raw)).to_string();
    match ctx.vfs.find_node(&full) {
        Some(id) if ctx.vfs.node(id).kind == NodeKind::File => {
            let line = format!("Opening {} in editor...", full);
            Ok(CommandOutput::with_intent(vec![line], Intent::OpenFile { path: full }))
        }
        _ => Err(OsError::FileNotFound(raw.to_string())),
    }
}
