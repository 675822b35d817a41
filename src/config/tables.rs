use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use portfolio_core::PastEndBehavior;
use portfolio_core::egg::EggPattern;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    tracking: TrackingConfig,
    #[serde(default)]
    effects: EffectsConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            probe_fraction: tables.tracking.probe_fraction,
            past_end: tables.tracking.past_end,
            sample_per_frame: tables.tracking.sample_per_frame,
            nav_solid_after_px: tables.tracking.nav_solid_after_px,
            splash_duration_ms: tables.effects.splash_duration_ms,
            matrix_rain: tables.effects.matrix_rain,
            rain_frame_interval_ms: tables.effects.rain_frame_interval_ms,
            egg_pattern: tables.effects.egg_pattern,
            egg_interval_ms: tables.effects.egg_interval_ms,
            copy_feedback_ms: tables.effects.copy_feedback_ms,
            form_reset_ms: tables.effects.form_reset_ms,
            log_level: tables.logging.log_level,
            key_toggle_egg: tables.keys.toggle_egg,
            key_toggle_theme: tables.keys.toggle_theme,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TrackingConfig {
    #[serde(default = "defaults::default_probe_fraction")]
    probe_fraction: f32,
    #[serde(default)]
    past_end: PastEndBehavior,
    #[serde(default = "defaults::default_sample_per_frame")]
    sample_per_frame: bool,
    #[serde(default = "defaults::default_nav_solid_after_px")]
    nav_solid_after_px: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            probe_fraction: defaults::default_probe_fraction(),
            past_end: PastEndBehavior::default(),
            sample_per_frame: defaults::default_sample_per_frame(),
            nav_solid_after_px: defaults::default_nav_solid_after_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EffectsConfig {
    #[serde(default = "defaults::default_splash_duration_ms")]
    splash_duration_ms: u64,
    #[serde(default = "defaults::default_matrix_rain")]
    matrix_rain: bool,
    #[serde(default = "defaults::default_rain_frame_interval_ms")]
    rain_frame_interval_ms: u64,
    #[serde(default)]
    egg_pattern: EggPattern,
    #[serde(default = "defaults::default_egg_interval_ms")]
    egg_interval_ms: u64,
    #[serde(default = "defaults::default_copy_feedback_ms")]
    copy_feedback_ms: u64,
    #[serde(default = "defaults::default_form_reset_ms")]
    form_reset_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            splash_duration_ms: defaults::default_splash_duration_ms(),
            matrix_rain: defaults::default_matrix_rain(),
            rain_frame_interval_ms: defaults::default_rain_frame_interval_ms(),
            egg_pattern: EggPattern::default(),
            egg_interval_ms: defaults::default_egg_interval_ms(),
            copy_feedback_ms: defaults::default_copy_feedback_ms(),
            form_reset_ms: defaults::default_form_reset_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_egg")]
    toggle_egg: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_egg: defaults::default_key_toggle_egg(),
            toggle_theme: defaults::default_key_toggle_theme(),
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
