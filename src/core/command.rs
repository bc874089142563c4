//! Parsing for the `:` command line

use crate::domain::ViewId;

/// A command typed after `:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    View(String),
    Next,
    Prev,

    // Session
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse the text after the leading `:`
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_string());

    match cmd.to_lowercase().as_str() {
        "view" | "goto" | "v" => {
            if let Some(key) = args.filter(|a| !a.is_empty()) {
                Command::View(key)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Prev,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        // A bare view key jumps straight to it
        other if args.is_none() && other.parse::<ViewId>().is_ok() => {
            Command::View(other.to_string())
        }

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_commands() {
        assert_eq!(
            parse_command("view workforce"),
            Command::View("workforce".to_string())
        );
        assert_eq!(
            parse_command("goto  Diversity "),
            Command::View("Diversity".to_string())
        );
        assert_eq!(parse_command("v payroll"), Command::View("payroll".to_string()));
        assert_eq!(
            parse_command("recruitment"),
            Command::View("recruitment".to_string())
        );
    }

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("prev"), Command::Prev);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_unrecognised_input_is_unknown() {
        assert_eq!(parse_command("view"), Command::Unknown("view".to_string()));
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
        assert_eq!(
            parse_command("workforce extra"),
            Command::Unknown("workforce extra".to_string())
        );
    }
}
