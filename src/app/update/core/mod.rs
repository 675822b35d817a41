mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, TICK_INTERVAL};
use iced::event;
use iced::time;
use iced::window;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.in_splash() || app.contact.has_timers() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
        }
        if app.rain.is_some() {
            let interval = Duration::from_millis(app.config.rain_frame_interval_ms);
            subscriptions.push(time::every(interval).map(|_| Message::RainTick));
        }
        if app.egg.is_some() {
            let interval = Duration::from_millis(app.config.egg_interval_ms);
            subscriptions.push(time::every(interval).map(|_| Message::RefreshTitle));
        }
        if app.page.sampler.has_pending() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
