//! One-shot CLI command handlers.
//!
//! Each command builds the exact same engine the watch loop uses - same
//! config, same cache, same adjustment application - so a one-shot query
//! and a running watch loop can never disagree about the current window.

pub mod badge;
pub mod list;
pub mod status;

use anyhow::Result;

use crate::cache::ScheduleCache;
use crate::config::Config;
use crate::time_source;
use crate::timer::TimerEngine;
use crate::times::schedule::Schedule;

/// Build the engine from configuration and the on-disk cache.
///
/// Returns `Ok(None)` when no usable data exists yet (no city configured
/// or no cache on disk), after logging what is missing. Stale data still
/// yields an engine - an old schedule beats an empty screen - but gets a
/// warning.
pub(crate) fn load_engine(config: &Config) -> Result<Option<TimerEngine>> {
    let Some(city_id) = config.city_id.as_deref() else {
        log_pipe!();
        log_warning!("No city configured");
        if let Ok(path) = Config::get_config_path() {
            log_indented!("Set 'city_id' in {}", path.display());
        }
        return Ok(None);
    };

    let cache = ScheduleCache::default_location()?;
    let Some(cached) = cache.load()? else {
        log_pipe!();
        log_warning!("No schedule data cached yet for city {}", city_id);
        log_indented!("Expected cache at {}", cache.path().display());
        return Ok(None);
    };

    if cached.is_stale(city_id, time_source::now().timestamp()) {
        log_pipe!();
        log_warning!("Cached schedule data is stale; displayed times may be outdated");
    }

    let schedule = Schedule::from_raw(&cached.days)?;
    Ok(Some(TimerEngine::new(
        schedule,
        config.adjustment_vector(),
    )))
}
