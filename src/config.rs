use serde::Deserialize;
use std::fmt;

const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_LINK_DISTANCE: f64 = 100.0;
const DEFAULT_LINK_ALPHA: f64 = 0.1;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const DEFAULT_ENTRANCE_DURATION_MS: u32 = 600;
const DEFAULT_NAV_SCROLLED_OFFSET: f64 = 100.0;
const DEFAULT_BACK_TO_TOP_OFFSET: f64 = 300.0;
const DEFAULT_BACK_TO_TOP_HIDE_DELAY_MS: u32 = 300;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
const DEFAULT_MOUSE_THROTTLE_MS: u32 = 16;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_TYPING_START_DELAY_MS: u32 = 1_000;
const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
const DEFAULT_LOADING_TICK_MS: u32 = 100;
const DEFAULT_LOADING_MAX_INCREMENT: f64 = 15.0;
const DEFAULT_LOADING_FADE_DELAY_MS: u32 = 500;
const DEFAULT_LOADING_FADE_DURATION_MS: u32 = 500;
const DEFAULT_PROGRESS_BAR_DELAY_MS: u32 = 500;
const DEFAULT_RIPPLE_DURATION_MS: u32 = 600;
const DEFAULT_TRAIL_DURATION_MS: u32 = 500;
const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
const DEFAULT_SERVICE_WORKER_URL: &str = "/sw.js";
const DEFAULT_PRELOAD_STYLESHEET: &str = "styles.css";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);
const LINK_DISTANCE_BOUNDS: (f64, f64) = (10.0, 400.0);
const UNIT_INTERVAL_BOUNDS: (f64, f64) = (0.0, 1.0);
const OFFSET_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const LONG_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const SHORT_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const THROTTLE_MS_BOUNDS: (u32, u32) = (1, 1_000);
const DEBOUNCE_MS_BOUNDS: (u32, u32) = (1, 5_000);
const TICK_MS_BOUNDS: (u32, u32) = (10, 2_000);
const LOADING_MAX_INCREMENT_BOUNDS: (f64, f64) = (1.0, 100.0);
const PARALLAX_SPEED_BOUNDS: (f64, f64) = (-10.0, 10.0);

/// Declaration order is severity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Every tunable of the page effects, built once at startup and handed to
/// each feature initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub link_distance: f64,
    pub link_alpha: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub entrance_duration_ms: u32,
    pub nav_scrolled_offset: f64,
    pub back_to_top_offset: f64,
    pub back_to_top_hide_delay_ms: u32,
    pub scroll_throttle_ms: u32,
    pub mouse_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_interval_ms: u32,
    pub loading_tick_ms: u32,
    pub loading_max_increment: f64,
    pub loading_fade_delay_ms: u32,
    pub loading_fade_duration_ms: u32,
    pub progress_bar_delay_ms: u32,
    pub ripple_duration_ms: u32,
    pub trail_duration_ms: u32,
    pub default_parallax_speed: f64,
    pub service_worker_url: Option<String>,
    pub preload_stylesheet: Option<String>,
    pub log_level: LogLevel,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            link_distance: DEFAULT_LINK_DISTANCE,
            link_alpha: DEFAULT_LINK_ALPHA,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            entrance_duration_ms: DEFAULT_ENTRANCE_DURATION_MS,
            nav_scrolled_offset: DEFAULT_NAV_SCROLLED_OFFSET,
            back_to_top_offset: DEFAULT_BACK_TO_TOP_OFFSET,
            back_to_top_hide_delay_ms: DEFAULT_BACK_TO_TOP_HIDE_DELAY_MS,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            mouse_throttle_ms: DEFAULT_MOUSE_THROTTLE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            loading_tick_ms: DEFAULT_LOADING_TICK_MS,
            loading_max_increment: DEFAULT_LOADING_MAX_INCREMENT,
            loading_fade_delay_ms: DEFAULT_LOADING_FADE_DELAY_MS,
            loading_fade_duration_ms: DEFAULT_LOADING_FADE_DURATION_MS,
            progress_bar_delay_ms: DEFAULT_PROGRESS_BAR_DELAY_MS,
            ripple_duration_ms: DEFAULT_RIPPLE_DURATION_MS,
            trail_duration_ms: DEFAULT_TRAIL_DURATION_MS,
            default_parallax_speed: DEFAULT_PARALLAX_SPEED,
            service_worker_url: Some(DEFAULT_SERVICE_WORKER_URL.to_string()),
            preload_stylesheet: Some(DEFAULT_PRELOAD_STYLESHEET.to_string()),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid effects config: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    particle_count: Option<usize>,
    link_distance: Option<f64>,
    link_alpha: Option<f64>,
    reveal_threshold: Option<f64>,
    reveal_root_margin: Option<String>,
    entrance_duration_ms: Option<u32>,
    nav_scrolled_offset: Option<f64>,
    back_to_top_offset: Option<f64>,
    back_to_top_hide_delay_ms: Option<u32>,
    scroll_throttle_ms: Option<u32>,
    mouse_throttle_ms: Option<u32>,
    resize_debounce_ms: Option<u32>,
    typing_start_delay_ms: Option<u32>,
    typing_interval_ms: Option<u32>,
    loading_tick_ms: Option<u32>,
    loading_max_increment: Option<f64>,
    loading_fade_delay_ms: Option<u32>,
    loading_fade_duration_ms: Option<u32>,
    progress_bar_delay_ms: Option<u32>,
    ripple_duration_ms: Option<u32>,
    trail_duration_ms: Option<u32>,
    default_parallax_speed: Option<f64>,
    service_worker_url: Option<String>,
    preload_stylesheet: Option<String>,
    log_level: Option<String>,
}

impl EffectsConfig {
    /// Applies a JSON object of overrides on top of the defaults. Values
    /// outside their bounds fall back to the default for that field only.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides =
            serde_json::from_str(raw).map_err(|error| ConfigError(error.to_string()))?;
        let defaults = Self::default();

        Ok(Self {
            particle_count: within_bounds(
                overrides.particle_count,
                defaults.particle_count,
                PARTICLE_COUNT_BOUNDS,
            ),
            link_distance: within_bounds(
                overrides.link_distance,
                defaults.link_distance,
                LINK_DISTANCE_BOUNDS,
            ),
            link_alpha: within_bounds(overrides.link_alpha, defaults.link_alpha, UNIT_INTERVAL_BOUNDS),
            reveal_threshold: within_bounds(
                overrides.reveal_threshold,
                defaults.reveal_threshold,
                UNIT_INTERVAL_BOUNDS,
            ),
            reveal_root_margin: non_empty(overrides.reveal_root_margin)
                .unwrap_or(defaults.reveal_root_margin),
            entrance_duration_ms: within_bounds(
                overrides.entrance_duration_ms,
                defaults.entrance_duration_ms,
                LONG_DELAY_MS_BOUNDS,
            ),
            nav_scrolled_offset: within_bounds(
                overrides.nav_scrolled_offset,
                defaults.nav_scrolled_offset,
                OFFSET_BOUNDS,
            ),
            back_to_top_offset: within_bounds(
                overrides.back_to_top_offset,
                defaults.back_to_top_offset,
                OFFSET_BOUNDS,
            ),
            back_to_top_hide_delay_ms: within_bounds(
                overrides.back_to_top_hide_delay_ms,
                defaults.back_to_top_hide_delay_ms,
                SHORT_DELAY_MS_BOUNDS,
            ),
            scroll_throttle_ms: within_bounds(
                overrides.scroll_throttle_ms,
                defaults.scroll_throttle_ms,
                THROTTLE_MS_BOUNDS,
            ),
            mouse_throttle_ms: within_bounds(
                overrides.mouse_throttle_ms,
                defaults.mouse_throttle_ms,
                THROTTLE_MS_BOUNDS,
            ),
            resize_debounce_ms: within_bounds(
                overrides.resize_debounce_ms,
                defaults.resize_debounce_ms,
                DEBOUNCE_MS_BOUNDS,
            ),
            typing_start_delay_ms: within_bounds(
                overrides.typing_start_delay_ms,
                defaults.typing_start_delay_ms,
                LONG_DELAY_MS_BOUNDS,
            ),
            typing_interval_ms: within_bounds(
                overrides.typing_interval_ms,
                defaults.typing_interval_ms,
                TICK_MS_BOUNDS,
            ),
            loading_tick_ms: within_bounds(
                overrides.loading_tick_ms,
                defaults.loading_tick_ms,
                TICK_MS_BOUNDS,
            ),
            loading_max_increment: within_bounds(
                overrides.loading_max_increment,
                defaults.loading_max_increment,
                LOADING_MAX_INCREMENT_BOUNDS,
            ),
            loading_fade_delay_ms: within_bounds(
                overrides.loading_fade_delay_ms,
                defaults.loading_fade_delay_ms,
                LONG_DELAY_MS_BOUNDS,
            ),
            loading_fade_duration_ms: within_bounds(
                overrides.loading_fade_duration_ms,
                defaults.loading_fade_duration_ms,
                LONG_DELAY_MS_BOUNDS,
            ),
            progress_bar_delay_ms: within_bounds(
                overrides.progress_bar_delay_ms,
                defaults.progress_bar_delay_ms,
                LONG_DELAY_MS_BOUNDS,
            ),
            ripple_duration_ms: within_bounds(
                overrides.ripple_duration_ms,
                defaults.ripple_duration_ms,
                SHORT_DELAY_MS_BOUNDS,
            ),
            trail_duration_ms: within_bounds(
                overrides.trail_duration_ms,
                defaults.trail_duration_ms,
                SHORT_DELAY_MS_BOUNDS,
            ),
            default_parallax_speed: within_bounds(
                overrides.default_parallax_speed,
                defaults.default_parallax_speed,
                PARALLAX_SPEED_BOUNDS,
            ),
            service_worker_url: optional_path(overrides.service_worker_url, defaults.service_worker_url),
            preload_stylesheet: optional_path(overrides.preload_stylesheet, defaults.preload_stylesheet),
            log_level: overrides
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(defaults.log_level),
        })
    }
}

fn within_bounds<T: PartialOrd + Copy>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// Absent keeps the default; an explicit empty string switches the feature off.
fn optional_path(value: Option<String>, default: Option<String>) -> Option<String> {
    match value {
        Some(value) => non_empty(Some(value)),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = EffectsConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn in_bounds_overrides_are_applied() {
        let config = EffectsConfig::from_json(
            r#"{"particle_count": 80, "link_distance": 120.5, "log_level": "DEBUG", "resize_debounce_ms": 400}"#,
        )
        .expect("valid overrides");

        assert_eq!(config.particle_count, 80);
        assert_eq!(config.link_distance, 120.5);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.resize_debounce_ms, 400);
        assert_eq!(config.back_to_top_offset, DEFAULT_BACK_TO_TOP_OFFSET);
    }

    #[test]
    fn out_of_bounds_values_keep_field_default() {
        let config = EffectsConfig::from_json(
            r#"{"particle_count": 100000, "link_alpha": 3.0, "typing_interval_ms": 1, "log_level": "trace"}"#,
        )
        .expect("well-typed overrides");

        assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.link_alpha, DEFAULT_LINK_ALPHA);
        assert_eq!(config.typing_interval_ms, DEFAULT_TYPING_INTERVAL_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn empty_strings_disable_optional_resources() {
        let config = EffectsConfig::from_json(r#"{"service_worker_url": " ", "preload_stylesheet": ""}"#)
            .expect("valid overrides");

        assert_eq!(config.service_worker_url, None);
        assert_eq!(config.preload_stylesheet, None);
        assert_eq!(config.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = EffectsConfig::from_json(r#"{"sparkles": true}"#).expect("unknown keys tolerated");
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn malformed_or_mistyped_documents_are_rejected() {
        assert!(EffectsConfig::from_json("{not json").is_err());
        assert!(EffectsConfig::from_json(r#"{"particle_count": "many"}"#).is_err());
        assert!(EffectsConfig::from_json(r#"{"entrance_duration_ms": -5}"#).is_err());
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.as_str(), "info");
    }
}
