//! Status command - display the current window and countdowns.
//!
//! One-shot equivalent of a single watch-loop tick: resolves the active
//! window, both countdowns, and the moon icon key for the current
//! reference instant, then exits. Supports JSON output for scripting.

use anyhow::Result;

use crate::config::Config;
use crate::timer::Snapshot;
use crate::vakitler::iftar_visible;
use crate::{badge, time_source};

/// Handle the status command.
pub fn handle_status_command(config: &Config, json: bool) -> Result<()> {
    let Some(engine) = super::load_engine(config)? else {
        return Ok(());
    };

    let now = time_source::now().naive_local();
    let snapshot = engine.snapshot(now);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    display_human_readable(config, &snapshot);
    Ok(())
}

fn display_human_readable(config: &Config, snapshot: &Snapshot) {
    let language = config.language();

    if snapshot.is_placeholder() {
        log_block_start!("No schedule entry covers the current date");
        log_indented!("Refresh the cached data to resume countdowns");
        return;
    }

    log_block_start!("Active period: {}", snapshot.window.active.label(language));
    log_indented!(
        "Next: {} (in {})",
        snapshot.window.next.label(language),
        snapshot.next_in
    );
    log_indented!(
        "Badge: {}",
        badge::badge_text(snapshot.next_in.total_seconds(), language)
    );

    if config.ramadan_timer() && iftar_visible(snapshot.window.active) {
        log_indented!("Iftar in: {}", snapshot.iftar_in);
    }
    log_indented!("Moon: {}", snapshot.moon_key);
}
