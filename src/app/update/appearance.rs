use super::super::state::App;
use super::Effect;
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Theme toggled");
    }

    pub(super) fn handle_toggle_egg(&mut self, effects: &mut Vec<Effect>) {
        if self.egg.is_some() {
            effects.push(Effect::StopEgg);
        } else {
            effects.push(Effect::StartEgg);
        }
    }

    pub(super) fn handle_rain_tick(&mut self) {
        if let Some(rain) = self.rain.as_mut() {
            rain.step();
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        if self.in_splash() && self.splash_fraction(now) >= 1.0 {
            self.finish_splash();
        }
        let reset = self.contact.expire(
            now,
            Duration::from_millis(self.config.copy_feedback_ms),
            Duration::from_millis(self.config.form_reset_ms),
        );
        if reset {
            debug!("Contact form reset");
        }
    }
}
