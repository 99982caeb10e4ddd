//! Application coordinator that manages the complete lifecycle of vakitler.
//!
//! This module handles configuration loading, time source selection,
//! engine construction, and the once-per-second watch loop. The loop is a
//! thin driver: on every tick it feeds the current reference instant into
//! the engine and renders the derived snapshot; all decisions live in the
//! engine, which is why the one-shot commands can never drift from it.
//!
//! The `Vakitler` struct uses a small builder to support different startup
//! contexts:
//! - Normal startup: `Vakitler::new(debug_enabled).run()`
//! - Embedded/scripted runs: `Vakitler::new(false).without_headers().run()`

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::badge;
use crate::config::Config;
use crate::constants::TICK_INTERVAL_MS;
use crate::time_source::{self, RealTimeSource, ShiftedTimeSource};
use crate::times::period::Period;

/// Presentation policy for the iftar countdown: only the fasting-hours
/// periods show it. During Imsak the meal just ended, during Aksam/Yatsi
/// the boundary already passed (the computed value targets the next fast).
pub(crate) fn iftar_visible(active: Period) -> bool {
    matches!(active, Period::Gunes | Period::Ogle | Period::Ikindi)
}

/// Builder for configuring and running the vakitler watch loop.
pub struct Vakitler {
    debug_enabled: bool,
    show_headers: bool,
}

impl Vakitler {
    /// Create a new runner with defaults matching a normal run.
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            show_headers: true,
        }
    }

    /// Skip header display (for embedded or scripted runs).
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    /// Execute the watch loop with the configured settings.
    ///
    /// Loads configuration, installs the appropriate time source (shifted
    /// when a time travel offset is configured), builds the engine from
    /// cached data, and ticks once per second until SIGINT/SIGTERM.
    pub fn run(self) -> Result<()> {
        if self.show_headers {
            log_version!();
            if self.debug_enabled {
                log_pipe!();
                log_debug!("Debug mode enabled - showing snapshot details on period changes");
            }
        }

        let config = Config::load()?;
        config.log_config();

        if config.is_time_shifted() {
            let (h, m, s) = config.time_travel_offset();
            time_source::init_time_source(Arc::new(ShiftedTimeSource::new(h, m, s)));
        } else {
            time_source::init_time_source(Arc::new(RealTimeSource));
        }

        let Some(engine) = crate::commands::load_engine(&config)? else {
            log_end!();
            return Ok(());
        };

        let shutdown = setup_signal_handler()?;
        let language = config.language();
        let mut previous_active: Option<Period> = None;

        log_block_start!("Watching prayer times (Ctrl+C to exit)");

        while !shutdown.load(Ordering::SeqCst) {
            let now = time_source::now().naive_local();
            let snapshot = engine.snapshot(now);

            if snapshot.is_placeholder() {
                render_line("no schedule data for today");
            } else {
                if previous_active != Some(snapshot.window.active) {
                    if previous_active.is_some() {
                        // Clear the in-place line before the announcement
                        print!("\r\x1b[2K");
                    }
                    log_block_start!(
                        "Entered {} ({})",
                        snapshot.window.active.label(language),
                        snapshot.window.active.name()
                    );
                    if self.debug_enabled {
                        log_indented!("color {}", badge::badge_color(Some(snapshot.window.active)));
                        log_indented!("moon {}", snapshot.moon_key);
                    }
                    previous_active = Some(snapshot.window.active);
                }

                let mut line = format!(
                    "{} → {}  {}  [{}]",
                    snapshot.window.active.label(language),
                    snapshot.window.next.label(language),
                    snapshot.next_in,
                    badge::badge_text(snapshot.next_in.total_seconds(), language),
                );
                if config.ramadan_timer() && iftar_visible(snapshot.window.active) {
                    line.push_str(&format!("  iftar {}", snapshot.iftar_in));
                }
                render_line(&line);
            }

            std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }

        println!();
        log_block_start!("Shutting down");
        log_end!();
        Ok(())
    }
}

/// Redraw the single status line in place.
fn render_line(line: &str) {
    print!("\r\x1b[2K┃ {line}");
    let _ = std::io::stdout().flush();
}

/// Install SIGINT/SIGTERM handlers flipping a shared shutdown flag.
fn setup_signal_handler() -> Result<Arc<AtomicBool>> {
    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .context("Failed to install signal handler")?;
    }
    Ok(shutdown)
}
