//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a
//! clean interface for the main dispatch. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the watch loop with these settings
    Run { debug_enabled: bool },

    /// One-shot: print the current window and countdowns
    StatusCommand { debug_enabled: bool, json: bool },

    /// One-shot: print today's schedule table
    ListCommand { debug_enabled: bool },

    /// One-shot: print only the badge text (for status bars, quiet output)
    BadgeCommand,

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from
    ///   std::env::args(), with the program name already skipped)
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut json = false;
        let mut subcommand: Option<String> = None;
        let mut unknown_seen = false;

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return ParsedArgs::with(CliAction::ShowHelp),
                "--version" | "-V" => return ParsedArgs::with(CliAction::ShowVersion),
                "--debug" | "-d" => debug_enabled = true,
                "--json" => json = true,
                "status" | "list" | "badge" if subcommand.is_none() => {
                    subcommand = Some(arg.as_ref().to_string());
                }
                other => {
                    log_warning!("Unknown argument: {}", other);
                    unknown_seen = true;
                }
            }
        }

        if unknown_seen {
            return ParsedArgs::with(CliAction::ShowHelpDueToError);
        }

        let action = match subcommand.as_deref() {
            Some("status") => CliAction::StatusCommand {
                debug_enabled,
                json,
            },
            Some("list") => CliAction::ListCommand { debug_enabled },
            Some("badge") => CliAction::BadgeCommand,
            _ => CliAction::Run { debug_enabled },
        };
        ParsedArgs::with(action)
    }

    fn with(action: CliAction) -> Self {
        Self { action }
    }
}

/// Print usage information.
pub fn display_help() {
    println!("vakitler v{}", env!("CARGO_PKG_VERSION"));
    println!("Prayer time tracker with countdown badge for the terminal");
    println!();
    println!("Usage: vakitler [OPTIONS] [COMMAND]");
    println!();
    println!("Commands:");
    println!("  status      Print the current window and countdowns, then exit");
    println!("  list        Print today's schedule table, then exit");
    println!("  badge       Print only the badge text (for status bars)");
    println!();
    println!("Options:");
    println!("  -d, --debug    Show detailed engine state on each tick");
    println!("      --json     With 'status', print the snapshot as JSON");
    println!("  -h, --help     Print help");
    println!("  -V, --version  Print version");
    println!();
    println!("Without a command, vakitler runs the once-per-second watch loop.");
}

/// Print the version line.
pub fn display_version() {
    println!("vakitler v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_watch_loop() {
        let parsed = ParsedArgs::parse(Vec::<String>::new());
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false
            }
        );
    }

    #[test]
    fn debug_flag_is_recognized() {
        let parsed = ParsedArgs::parse(["--debug"]);
        assert_eq!(parsed.action, CliAction::Run { debug_enabled: true });

        let parsed = ParsedArgs::parse(["-d", "status"]);
        assert_eq!(
            parsed.action,
            CliAction::StatusCommand {
                debug_enabled: true,
                json: false
            }
        );
    }

    #[test]
    fn subcommands_are_recognized() {
        assert_eq!(
            ParsedArgs::parse(["status"]).action,
            CliAction::StatusCommand {
                debug_enabled: false,
                json: false
            }
        );
        assert_eq!(
            ParsedArgs::parse(["status", "--json"]).action,
            CliAction::StatusCommand {
                debug_enabled: false,
                json: true
            }
        );
        assert_eq!(
            ParsedArgs::parse(["list"]).action,
            CliAction::ListCommand {
                debug_enabled: false
            }
        );
        assert_eq!(ParsedArgs::parse(["badge"]).action, CliAction::BadgeCommand);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(ParsedArgs::parse(["--help"]).action, CliAction::ShowHelp);
        assert_eq!(ParsedArgs::parse(["-h", "status"]).action, CliAction::ShowHelp);
        assert_eq!(ParsedArgs::parse(["-V"]).action, CliAction::ShowVersion);
    }

    #[test]
    fn unknown_arguments_fall_back_to_help() {
        crate::logger::Log::set_enabled(false);
        let parsed = ParsedArgs::parse(["--frobnicate"]);
        crate::logger::Log::set_enabled(true);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }
}
