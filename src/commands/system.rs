use chrono::Utc;

use crate::command::CommandOutput;
use crate::context::TerminalContext;
use crate::sysinfo;

/// `system` - print the system report with uptime measured from session
/// start.
pub fn run(ctx: &TerminalContext) -> CommandOutput {
    let uptime = Utc::now() - ctx.started_at;
    CommandOutput::text(sysinfo::report_lines(uptime))
}
