use crate::command::CommandOutput;
use crate::context::TerminalContext;
use crate::error::OsError;
use crate::path;

/// `mkdir <name>` - create an empty directory in the cursor directory.
pub fn run(name: Option<&str>, ctx: &mut TerminalContext) -> Result<CommandOutput, OsError> {
    let Some(name) = name else {
        return Err(OsError::MissingArgument {
            noun: "directory name",
            usage: "mkdir <dir_name>",
        });
    };

    let parent = path::strip_root(&ctx.cwd).to_string();
    ctx.vfs.create_directory(&parent, name)?;
    Ok(CommandOutput::text(vec![format!("Directory created: {}", name)]))
}
