//! Badge command - print only the badge text.
//!
//! Meant for status bar integrations: logging is disabled so stdout
//! carries nothing but the badge string (possibly empty when no data is
//! available, which bars render as a hidden module).

use anyhow::Result;

use crate::config::Config;
use crate::logger::Log;
use crate::{badge, time_source};

/// Handle the badge command with quiet output.
pub fn handle_badge_command(config: &Config) -> Result<()> {
    Log::set_enabled(false);
    let engine = super::load_engine(config)?;
    Log::set_enabled(true);

    let text = match engine {
        Some(engine) => {
            let snapshot = engine.snapshot(time_source::now().naive_local());
            badge::badge_text(snapshot.next_in.total_seconds(), config.language())
        }
        None => String::new(),
    };

    println!("{text}");
    Ok(())
}
