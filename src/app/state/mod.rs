mod constants;
mod contact;
mod page;
mod ui;

use crate::config::AppConfig;
use anyhow::Result;
use iced::Task;
use portfolio_core::content::hero;
use portfolio_core::egg::{EggHandle, LocationHash};
use portfolio_core::rain::MatrixRain;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use contact::ContactState;
pub(in crate::app) use page::PageState;
pub(in crate::app) use ui::PanelState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) splash_started: Option<Instant>,
    pub(super) page: PageState,
    pub(super) panels: PanelState,
    pub(super) contact: ContactState,
    pub(super) rain: Option<MatrixRain>,
    pub(super) egg: Option<EggHandle>,
    pub(super) location_hash: LocationHash,
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig) -> Result<(App, Task<Message>)> {
        clamp_config(&mut config);
        let page = PageState::new(&config)?;
        let rain = config
            .matrix_rain
            .then(|| MatrixRain::new(config.window_width, config.window_height, rain_seed()));

        let mut app = App {
            splash_started: Some(Instant::now()),
            page,
            panels: PanelState::default(),
            contact: ContactState::default(),
            rain,
            egg: None,
            location_hash: LocationHash::new(),
            config,
        };
        if app.config.splash_duration_ms == 0 {
            app.finish_splash();
        }

        info!(
            sections = app.page.tracker.sections().len(),
            page_height = app.page.layout.total_height(),
            matrix_rain = app.rain.is_some(),
            "Bootstrapped portfolio page"
        );
        Ok((app, Task::none()))
    }

    pub fn title(&self) -> String {
        let hash = self.location_hash.get();
        if hash.is_empty() {
            format!("{} | {}", hero::HANDLE, hero::BADGE)
        } else {
            format!("{} | {} #{hash}", hero::HANDLE, hero::BADGE)
        }
    }

    pub(super) fn in_splash(&self) -> bool {
        self.splash_started.is_some()
    }

    /// Leave the splash screen and start tracking the page.
    pub(super) fn finish_splash(&mut self) {
        self.splash_started = None;
        if !self.page.tracker.is_attached() {
            self.page.tracker.attach();
            info!(active = %self.page.tracker.active_id(), "Page mounted");
        }
    }

    pub(super) fn splash_fraction(&self, now: Instant) -> f32 {
        match self.splash_started {
            Some(start) if self.config.splash_duration_ms > 0 => {
                let elapsed = now.saturating_duration_since(start).as_millis() as f32;
                (elapsed / self.config.splash_duration_ms as f32).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }
}

fn rain_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized;
        }
    }

    config.window_width = config.window_width.clamp(MIN_WINDOW_WIDTH, 7680.0);
    config.window_height = config.window_height.clamp(MIN_WINDOW_HEIGHT, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.probe_fraction = if config.probe_fraction.is_finite() {
        config.probe_fraction.clamp(0.0, 1.0)
    } else {
        portfolio_core::tracker::DEFAULT_PROBE_FRACTION
    };
    config.nav_solid_after_px = if config.nav_solid_after_px.is_finite() {
        config.nav_solid_after_px.max(0.0)
    } else {
        100.0
    };
    config.splash_duration_ms = config.splash_duration_ms.min(30_000);
    config.rain_frame_interval_ms = config.rain_frame_interval_ms.clamp(16, 1000);
    config.egg_interval_ms = config.egg_interval_ms.clamp(16, 5000);
    config.copy_feedback_ms = config.copy_feedback_ms.clamp(100, 60_000);
    config.form_reset_ms = config.form_reset_ms.clamp(100, 60_000);
    normalize_key_binding(&mut config.key_toggle_egg, "ctrl+e");
    normalize_key_binding(&mut config.key_toggle_theme, "ctrl+t");
    normalize_key_binding(&mut config.key_next_section, "j");
    normalize_key_binding(&mut config.key_prev_section, "k");
    normalize_key_binding(&mut config.key_safe_quit, "q");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_repairs_out_of_range_values() {
        let mut config = AppConfig {
            window_width: 10.0,
            probe_fraction: f32::NAN,
            nav_solid_after_px: -5.0,
            key_safe_quit: "  ".to_string(),
            key_toggle_theme: "CTRL+T".to_string(),
            ..AppConfig::default()
        };
        clamp_config(&mut config);
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(
            config.probe_fraction,
            portfolio_core::tracker::DEFAULT_PROBE_FRACTION
        );
        assert_eq!(config.nav_solid_after_px, 0.0);
        assert_eq!(config.key_safe_quit, "q");
        assert_eq!(config.key_toggle_theme, "ctrl+t");
    }

    #[test]
    fn zero_splash_mounts_immediately() {
        let config = AppConfig {
            splash_duration_ms: 0,
            matrix_rain: false,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config).expect("bootstrap");
        assert!(!app.in_splash());
        assert!(app.page.tracker.is_attached());
        assert!(app.title().starts_with("M3THY1"));
    }

    #[test]
    fn splash_holds_tracker_detached() {
        let (app, _task) = App::bootstrap(AppConfig::default()).expect("bootstrap");
        assert!(app.in_splash());
        assert!(!app.page.tracker.is_attached());
        assert!(app.rain.is_some());
    }
}
