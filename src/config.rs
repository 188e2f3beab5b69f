//! Page bootstrap configuration.
//!
//! The hosting page embeds a JSON object in
//! `<script id="member-form-config" type="application/json">`. Every key is
//! optional; missing keys take the defaults below.
//!
//! - `child_limit` / `partner_limit`: 10 / 4
//! - `initial_children` / `initial_partners`: 1 / 1
//! - `small_width_threshold`: 720
//! - `min_age`: 18
//! - `shake`: `{ "amplitude_px": 3, "oscillations": 3, "duration_ms": 500 }`
//! - `one_shot_fields`: photograph, passport_photo, residency_photo
//! - `submit_action`: empty (post back to the current URL)
//! - `cities`: a short list of Indonesian cities
//! - `stats`: `{ "labels": [], "submissions": [], "first_visits": [] }`
//! - `log_level`: `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::groups::{
    DEFAULT_CHILD_LIMIT, DEFAULT_INITIAL_COUNT, DEFAULT_PARTNER_LIMIT, GroupKind, RepeatingGroupState,
    RepeatingGroups,
};
use crate::state::layout::{DEFAULT_SMALL_WIDTH_THRESHOLD, LayoutState};
use crate::state::validation::{DEFAULT_ONE_SHOT_FIELDS, FieldValidator};
use crate::util::chart::{ChartKind, ChartSeries};
use crate::util::dom;
use crate::util::fields::FieldId;
use crate::util::rules::DEFAULT_MIN_AGE;
use crate::util::shake::{MAX_SHAKE_DURATION_MS, MAX_SHAKE_OSCILLATIONS, ShakeSettings};

pub const CONFIG_ELEMENT_ID: &str = "member-form-config";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_CITIES: [&str; 13] = [
    "Jakarta",
    "Surabaya",
    "Bekasi",
    "Bandung",
    "Medan",
    "Depok",
    "Tangerang",
    "Palembang",
    "Semarang",
    "Makassar",
    "Batam",
    "Bogor",
    "Malang",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{kind} limit must be at least 1")]
    ZeroLimit { kind: &'static str },
    #[error("initial {kind} count {initial} exceeds limit {max}")]
    InitialAboveLimit { kind: &'static str, initial: usize, max: usize },
    #[error("small_width_threshold must be positive, got {0}")]
    Threshold(f64),
    #[error("unknown log_level: {0}")]
    LogLevel(String),
    #[error(
        "shake settings out of range (oscillations <= {max_osc}, duration_ms <= {max_dur}, amplitude finite and >= 0): {0:?}",
        max_osc = MAX_SHAKE_OSCILLATIONS,
        max_dur = MAX_SHAKE_DURATION_MS
    )]
    Shake(ShakeSettings),
}

/// Monthly series for the monitor page charts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub labels: Vec<String>,
    pub submissions: Vec<String>,
    pub first_visits: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub child_limit: usize,
    pub partner_limit: usize,
    pub initial_children: usize,
    pub initial_partners: usize,
    pub small_width_threshold: f64,
    pub min_age: u32,
    pub shake: ShakeSettings,
    pub one_shot_fields: Vec<FieldId>,
    pub submit_action: String,
    pub cities: Vec<String>,
    pub stats: StatsConfig,
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            child_limit: DEFAULT_CHILD_LIMIT,
            partner_limit: DEFAULT_PARTNER_LIMIT,
            initial_children: DEFAULT_INITIAL_COUNT,
            initial_partners: DEFAULT_INITIAL_COUNT,
            small_width_threshold: DEFAULT_SMALL_WIDTH_THRESHOLD,
            min_age: DEFAULT_MIN_AGE,
            shake: ShakeSettings::default(),
            one_shot_fields: DEFAULT_ONE_SHOT_FIELDS.to_vec(),
            submit_action: String::new(),
            cities: DEFAULT_CITIES.iter().map(|c| (*c).to_owned()).collect(),
            stats: StatsConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config embedded in the page, falling back to defaults when
    /// it is absent or invalid.
    pub fn load() -> Self {
        let Some(raw) = dom::element_text(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limit("child", self.initial_children, self.child_limit)?;
        check_limit("partner", self.initial_partners, self.partner_limit)?;
        if self.small_width_threshold.is_nan() || self.small_width_threshold <= 0.0 {
            return Err(ConfigError::Threshold(self.small_width_threshold));
        }
        if !self.shake.in_range() {
            return Err(ConfigError::Shake(self.shake));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn groups(&self) -> RepeatingGroups {
        RepeatingGroups {
            children: RepeatingGroupState::new(GroupKind::Child, self.initial_children, self.child_limit),
            partners: RepeatingGroupState::new(GroupKind::Partner, self.initial_partners, self.partner_limit),
        }
    }

    pub fn validator(&self) -> FieldValidator {
        FieldValidator::new(self.one_shot_fields.iter().copied(), self.min_age)
    }

    pub fn layout(&self) -> LayoutState {
        LayoutState::new(self.small_width_threshold)
    }

    pub fn series(&self, kind: ChartKind) -> ChartSeries {
        let data = match kind {
            ChartKind::Submissions => &self.stats.submissions,
            ChartKind::FirstVisits => &self.stats.first_visits,
        };
        ChartSeries { labels: self.stats.labels.clone(), data: data.clone() }
    }
}

fn check_limit(kind: &'static str, initial: usize, max: usize) -> Result<(), ConfigError> {
    if max == 0 {
        return Err(ConfigError::ZeroLimit { kind });
    }
    if initial > max {
        return Err(ConfigError::InitialAboveLimit { kind, initial, max });
    }
    Ok(())
}
