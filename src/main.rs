//! Binary entry point: argument dispatch and one-shot command setup.

use std::sync::Arc;

use anyhow::Result;
use vakitler::args::{self, CliAction, ParsedArgs};
use vakitler::config::Config;
use vakitler::time_source::{self, RealTimeSource, ShiftedTimeSource};
use vakitler::{Vakitler, commands, log_end, log_error_exit, log_pipe, log_version};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args().skip(1));

    let result = match parsed.action {
        CliAction::Run { debug_enabled } => Vakitler::new(debug_enabled).run(),
        CliAction::StatusCommand {
            debug_enabled,
            json,
        } => {
            // JSON output must stay machine-readable, so suppress headers
            if json {
                run_quiet(|config| commands::status::handle_status_command(config, true))
            } else {
                run_one_shot(debug_enabled, |config| {
                    commands::status::handle_status_command(config, false)
                })
            }
        }
        CliAction::ListCommand { debug_enabled } => {
            run_one_shot(debug_enabled, commands::list::handle_list_command)
        }
        CliAction::BadgeCommand => run_quiet(commands::badge::handle_badge_command),
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowVersion => {
            args::display_version();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        log_pipe!();
        log_error_exit!("{:#}", err);
        std::process::exit(1);
    }
}

/// Shared setup for one-shot commands: config, time source, framed output.
fn run_one_shot(debug_enabled: bool, handler: impl FnOnce(&Config) -> Result<()>) -> Result<()> {
    log_version!();
    let config = load_and_install()?;
    if debug_enabled {
        config.log_config();
    }
    handler(&config)?;
    log_end!();
    Ok(())
}

/// One-shot setup without any log framing, for machine-readable output.
fn run_quiet(handler: impl FnOnce(&Config) -> Result<()>) -> Result<()> {
    vakitler::logger::Log::set_enabled(false);
    let config = load_and_install()?;
    let result = handler(&config);
    vakitler::logger::Log::set_enabled(true);
    result
}

/// Load configuration and install the matching global time source.
fn load_and_install() -> Result<Config> {
    let config = Config::load()?;
    if config.is_time_shifted() {
        let (h, m, s) = config.time_travel_offset();
        time_source::init_time_source(Arc::new(ShiftedTimeSource::new(h, m, s)));
    } else {
        time_source::init_time_source(Arc::new(RealTimeSource));
    }
    Ok(config)
}
