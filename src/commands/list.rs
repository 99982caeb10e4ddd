//! List command - print today's schedule table.
//!
//! Shows the six adjusted period times for the current date with the
//! active period marked, plus the passthrough Hijri date line.

use anyhow::Result;

use crate::config::Config;
use crate::time_source;
use crate::time_state::resolve_window;
use crate::times::period::ALL_PERIODS;

/// Handle the list command.
pub fn handle_list_command(config: &Config) -> Result<()> {
    let Some(engine) = super::load_engine(config)? else {
        return Ok(());
    };

    let now = time_source::now().naive_local();
    let Some(today) = engine.adjusted().day_for(now.date()) else {
        log_block_start!("No schedule entry for {}", now.date());
        return Ok(());
    };

    let language = config.language();
    let window = resolve_window(Some(today), now);

    log_block_start!("{} · {}", today.date_key(), today.hijri_date);
    for period in ALL_PERIODS {
        let marker = if period == window.active { "▸" } else { " " };
        log_indented!(
            "{} {:<10} {}",
            marker,
            period.label(language),
            today.time_of(period).format("%H:%M")
        );
    }
    Ok(())
}
