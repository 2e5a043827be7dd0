//! Commands whose whole job is emitting an intent for the shell.

use crate::command::{CommandOutput, Intent};
use crate::session::View;

pub fn goto(view: View) -> CommandOutput {
    CommandOutput::with_intent(
        vec![format!("Navigating to {}_NODE...", view.name().to_uppercase())],
        Intent::Navigate { view },
    )
}

pub fn hire() -> CommandOutput {
    CommandOutput::with_intent(
        vec!["Executing special command: hire...".to_string()],
        Intent::Hire,
    )
}

pub fn shutdown() -> CommandOutput {
    CommandOutput::with_intent(vec!["Shutting down...".to_string()], Intent::Exit)
}
