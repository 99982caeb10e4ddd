//! Configuration system for vakitler with validation and default generation.
//!
//! Settings load from `vakitler.toml` under the XDG config directory
//! (`$XDG_CONFIG_HOME/vakitler/vakitler.toml`). All fields are optional in
//! the file and fall back to defaults; the engine itself receives plain
//! values, never this struct, so it stays testable in isolation.
//!
//! ```toml
//! #[Location]
//! city_id = "9541"        # Upstream city identifier (Diyanet IlceID)
//!
//! #[Display]
//! language = "tr"         # Period labels and badge units: "tr" or "en"
//! ramadan_timer = false   # Show the iftar countdown during fasting hours
//!
//! #[Engine]
//! adjustments = [0, 0, 0, 0, 0, 0]  # Signed minutes per period, catalog order
//! time_travel = [0, 0, 0]           # Debug clock offset: [hours, minutes, seconds]
//! ```
//!
//! ## Validation
//!
//! Adjustments are limited to ±60 minutes per period and the time travel
//! offset to ±48 hours; out-of-range values produce errors naming the
//! offending field rather than silently clamping.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_RAMADAN_TIMER, MAXIMUM_ADJUSTMENT, MAXIMUM_TRAVEL_HOURS, MAXIMUM_TRAVEL_MINUTES,
    MAXIMUM_TRAVEL_SECONDS, MINIMUM_ADJUSTMENT, PERIOD_COUNT,
};
use crate::times::schedule::{Adjustments, ZERO_ADJUSTMENTS};

/// Display language for period labels and badge units.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
        }
    }
}

/// Configuration structure for vakitler application settings.
///
/// Loaded from `vakitler.toml`; every field is optional and falls back to
/// a default when not specified.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Upstream city identifier whose schedule should be fetched.
    pub city_id: Option<String>,

    /// Display language ("tr" or "en").
    pub language: Option<Language>,

    /// Whether the iftar countdown is rendered during fasting hours.
    pub ramadan_timer: Option<bool>,

    /// Signed minute offsets per period, in catalog order.
    pub adjustments: Option<Vec<i32>>,

    /// Debug clock offset as [hours, minutes, seconds].
    pub time_travel: Option<Vec<i64>>,
}

impl Config {
    /// Load configuration, creating a default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            create_default_config(&path)?;
        }
        Self::load_from_path(&path)
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Path of the configuration file under the XDG config directory.
    pub fn get_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("vakitler").join("vakitler.toml"))
    }

    /// The adjustment vector, defaulting to all-zero.
    pub fn adjustment_vector(&self) -> Adjustments {
        let mut vector = ZERO_ADJUSTMENTS;
        if let Some(values) = &self.adjustments {
            for (slot, value) in vector.iter_mut().zip(values) {
                *slot = *value;
            }
        }
        vector
    }

    /// The debug clock offset as (hours, minutes, seconds).
    pub fn time_travel_offset(&self) -> (i64, i64, i64) {
        match self.time_travel.as_deref() {
            Some([h, m, s, ..]) => (*h, *m, *s),
            _ => (0, 0, 0),
        }
    }

    /// True when a non-zero time travel offset is configured.
    pub fn is_time_shifted(&self) -> bool {
        self.time_travel_offset() != (0, 0, 0)
    }

    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    pub fn ramadan_timer(&self) -> bool {
        self.ramadan_timer.unwrap_or(DEFAULT_RAMADAN_TIMER)
    }

    /// Log the loaded configuration in the standard block format.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        match &self.city_id {
            Some(city_id) => log_indented!("City: {}", city_id),
            None => log_indented!("City: not configured"),
        }
        log_indented!("Language: {}", self.language().as_str());
        log_indented!(
            "Ramadan timer: {}",
            if self.ramadan_timer() { "on" } else { "off" }
        );

        let adjustments = self.adjustment_vector();
        if adjustments != ZERO_ADJUSTMENTS {
            log_indented!("Adjustments: {:?} minutes", adjustments);
        }
        if self.is_time_shifted() {
            let (h, m, s) = self.time_travel_offset();
            log_indented!("Time travel: {:+}h {:+}m {:+}s", h, m, s);
        }
    }
}

/// Validate ranges and shapes of all configured values.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(adjustments) = &config.adjustments {
        if adjustments.len() != PERIOD_COUNT {
            return Err(anyhow!(
                "'adjustments' must have exactly {} entries (one per period), got {}",
                PERIOD_COUNT,
                adjustments.len()
            ));
        }
        for (index, minutes) in adjustments.iter().enumerate() {
            if !(MINIMUM_ADJUSTMENT..=MAXIMUM_ADJUSTMENT).contains(minutes) {
                return Err(anyhow!(
                    "'adjustments[{index}]' is {minutes}, allowed range is {MINIMUM_ADJUSTMENT}..={MAXIMUM_ADJUSTMENT} minutes"
                ));
            }
        }
    }

    if let Some(travel) = &config.time_travel {
        if travel.len() != 3 {
            return Err(anyhow!(
                "'time_travel' must be [hours, minutes, seconds], got {} entries",
                travel.len()
            ));
        }
        let (h, m, s) = (travel[0], travel[1], travel[2]);
        if h.abs() > MAXIMUM_TRAVEL_HOURS {
            return Err(anyhow!(
                "'time_travel' hours is {h}, allowed range is ±{MAXIMUM_TRAVEL_HOURS}"
            ));
        }
        if m.abs() > MAXIMUM_TRAVEL_MINUTES || s.abs() > MAXIMUM_TRAVEL_SECONDS {
            return Err(anyhow!(
                "'time_travel' minutes/seconds must be within ±59, got [{h}, {m}, {s}]"
            ));
        }
    }

    if let Some(city_id) = &config.city_id
        && (city_id.is_empty() || !city_id.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(anyhow!(
            "'city_id' must be a numeric upstream identifier, got '{city_id}'"
        ));
    }

    Ok(())
}

/// Write a commented default configuration file, creating parent
/// directories as needed.
pub fn create_default_config(path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let contents = r#"#[Location]
# Upstream city identifier (Diyanet IlceID). Find yours at vakitler.app.
# city_id = "9541"

#[Display]
language = "tr"         # Period labels and badge units: "tr" or "en"
ramadan_timer = false   # Show the iftar countdown during fasting hours

#[Engine]
# Signed minute offsets per period, in catalog order:
# [Imsak, Gunes, Ogle, Ikindi, Aksam, Yatsi]
adjustments = [0, 0, 0, 0, 0, 0]

# Debug clock offset: [hours, minutes, seconds]
time_travel = [0, 0, 0]
"#;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;
    log_block_start!("Created default configuration at {}", path.display());
    Ok(())
}
