//! The neofetch-style block printed by the `system` command.

use chrono::Duration;

pub const HOST: &str = "digital_shadow@dedsec_network";

const BANNER: &str = r#" ██████╗ ███████╗██████╗ ███████╗███████╗ ██████╗
 ██╔══██╗██╔════╝██╔══██╗██╔════╝██╔════╝██╔════╝
 ██║  ██║█████╗  ██║  ██║███████╗█████╗  ██║
 ██║  ██║██╔══╝  ██║  ██║╚════██║██╔══╝  ██║
 ██████╔╝███████╗██████╔╝███████║███████╗╚██████╗
 ╚═════╝ ╚══════╝╚═════╝ ╚══════╝╚══════╝ ╚═════╝"#;

/// `{d}d {h}h {m}m {s}s`, clamped at zero for clocks that run backwards.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.num_seconds().max(0);
    format!(
        "{}d {}h {}m {}s",
        secs / 86_400,
        (secs / 3_600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Render the full report as plain lines; the shell appends them to
/// history verbatim.
pub fn report_lines(uptime: Duration) -> Vec<String> {
    let up = format_uptime(uptime);
    let stats: [(&str, &str); 10] = [
        ("OS", "ctOS v2.1"),
        ("Host", HOST),
        ("Kernel", "5.4.0-ctos-generic"),
        ("Uptime", up.as_str()),
        ("Shell", "zsh (dedsec_edition)"),
        ("Resolution", "Dynamic"),
        ("Terminal", "ctOS_Terminal"),
        ("CPU", "Quantum Entanglement Processor @ 4.20GHz"),
        ("GPU", "Neuro-Link Visual Synthesizer"),
        ("Memory", "42.0GiB / 133.7GiB"),
    ];

    let mut lines: Vec<String> = BANNER.lines().map(str::to_string).collect();
    lines.push(String::new());
    lines.push(HOST.to_string());
    lines.push("-".repeat(HOST.len()));
    for (label, value) in stats {
        lines.push(format!("{:<12}{}", label, value));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_breaks_down_into_units() {
        // 1 day, 1 hour, 1 minute, 1 second
        assert_eq!(format_uptime(Duration::seconds(90_061)), "1d 1h 1m 1s");
        assert_eq!(format_uptime(Duration::seconds(0)), "0d 0h 0m 0s");
        assert_eq!(format_uptime(Duration::seconds(-5)), "0d 0h 0m 0s");
    }

    #[test]
    fn report_carries_host_and_uptime() {
        let lines = report_lines(Duration::seconds(61));
        assert!(lines.iter().any(|l| l == HOST));
        assert!(lines.iter().any(|l| l.starts_with("Uptime") && l.ends_with("0d 0h 1m 1s")));
        assert!(lines.iter().any(|l| l.starts_with("OS") && l.contains("ctOS v2.1")));
    }
}
