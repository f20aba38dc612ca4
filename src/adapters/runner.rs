//! CI runner workflow commands
//!
//! Runners read `::name key=value::message` lines from stdout. Message data
//! and property values are percent-escaped so a value can't end the command
//! early or smuggle a second one onto a new line.

use std::fmt::Write as _;

/// Whether the process runs inside a GitHub Actions job
pub fn is_actions_runner() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escapes workflow command message data
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Formats a workflow command line
///
/// # Examples
///
/// ```
/// use envport::adapters::runner::format_command;
///
/// let line = format_command("set-env", &[("name", "KEY")], "a\nb");
/// assert_eq!(line, "::set-env name=KEY::a%0Ab");
/// ```
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        line.push(' ');
        for (i, (key, value)) in properties.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            let _ = write!(line, "{key}={}", escape_property(value));
        }
    }
    let _ = write!(line, "::{}", escape_data(message));
    line
}

/// Reports the terminal failure of a run to the host
///
/// Inside a runner this is an `::error::` command, which marks the step as
/// failed in the job log; elsewhere the message goes to stderr.
pub fn report_failure(message: &str) {
    if is_actions_runner() {
        println!("{}", format_command("error", &[], message));
    } else {
        eprintln!("Error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("100%\r\ndone"), "100%25%0D%0Adone");
        assert_eq!(escape_data("a:b,c"), "a:b,c");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn test_format_command_without_properties() {
        assert_eq!(
            format_command("error", &[], "Cannot parse JSON secrets. \nMake sure"),
            "::error::Cannot parse JSON secrets. %0AMake sure"
        );
    }

    #[test]
    fn test_format_command_with_properties() {
        assert_eq!(
            format_command("set-env", &[("name", "A:B")], "value"),
            "::set-env name=A%3AB::value"
        );
    }
}
