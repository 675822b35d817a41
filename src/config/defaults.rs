pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_probe_fraction() -> f32 {
    portfolio_core::tracker::DEFAULT_PROBE_FRACTION
}

pub(crate) fn default_sample_per_frame() -> bool {
    true
}

pub(crate) fn default_nav_solid_after_px() -> f32 {
    100.0
}

pub(crate) fn default_splash_duration_ms() -> u64 {
    2000
}

pub(crate) fn default_matrix_rain() -> bool {
    true
}

pub(crate) fn default_rain_frame_interval_ms() -> u64 {
    50
}

pub(crate) fn default_egg_interval_ms() -> u64 {
    portfolio_core::egg::DEFAULT_EGG_INTERVAL.as_millis() as u64
}

pub(crate) fn default_copy_feedback_ms() -> u64 {
    2000
}

pub(crate) fn default_form_reset_ms() -> u64 {
    3000
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_toggle_egg() -> String {
    "ctrl+e".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
