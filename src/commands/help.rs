use crate::command::CommandOutput;

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  ls [path]      - List directory contents",
    "  cd <path>      - Change directory",
    "  edit <path>    - Open a file in the editor",
    "  mkfile <name>  - Create a new file",
    "  mkdir <name>   - Create a new directory",
    "  home           - Navigate to Home Node",
    "  skills         - Navigate to Skills Database",
    "  projects       - Navigate to Project Network",
    "  contact        - Navigate to Secure Comms",
    "  system         - Display system information",
    "  hire           - Run special command",
    "  shutdown       - Exit the OS",
    "  help           - Show this help message",
    "  clear          - Clear the terminal screen",
];

pub fn run() -> CommandOutput {
    CommandOutput::text(HELP_LINES.iter().map(|s| s.to_string()).collect())
}
