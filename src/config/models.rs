use portfolio_core::PastEndBehavior;
use portfolio_core::egg::EggPattern;
use serde::Deserialize;

/// Flattened runtime configuration. On disk it is split into tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub window_pos_x: Option<f32>,
    pub window_pos_y: Option<f32>,
    pub probe_fraction: f32,
    pub past_end: PastEndBehavior,
    pub sample_per_frame: bool,
    pub nav_solid_after_px: f32,
    pub splash_duration_ms: u64,
    pub matrix_rain: bool,
    pub rain_frame_interval_ms: u64,
    pub egg_pattern: EggPattern,
    pub egg_interval_ms: u64,
    pub copy_feedback_ms: u64,
    pub form_reset_ms: u64,
    pub log_level: LogLevel,
    pub key_toggle_egg: String,
    pub key_toggle_theme: String,
    pub key_next_section: String,
    pub key_prev_section: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        use super::defaults;
        AppConfig {
            theme: ThemeMode::Night,
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            probe_fraction: defaults::default_probe_fraction(),
            past_end: PastEndBehavior::default(),
            sample_per_frame: defaults::default_sample_per_frame(),
            nav_solid_after_px: defaults::default_nav_solid_after_px(),
            splash_duration_ms: defaults::default_splash_duration_ms(),
            matrix_rain: defaults::default_matrix_rain(),
            rain_frame_interval_ms: defaults::default_rain_frame_interval_ms(),
            egg_pattern: EggPattern::default(),
            egg_interval_ms: defaults::default_egg_interval_ms(),
            copy_feedback_ms: defaults::default_copy_feedback_ms(),
            form_reset_ms: defaults::default_form_reset_ms(),
            log_level: defaults::default_log_level(),
            key_toggle_egg: defaults::default_key_toggle_egg(),
            key_toggle_theme: defaults::default_key_toggle_theme(),
            key_next_section: defaults::default_key_next_section(),
            key_prev_section: defaults::default_key_prev_section(),
            key_safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
