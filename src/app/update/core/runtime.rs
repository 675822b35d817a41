use super::super::super::messages::Message;
use super::super::super::state::{ARTICLE_SCROLL_ID, App, PAGE_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use portfolio_core::egg::start_egg;
use std::time::Duration;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(y) => scrollable::scroll_to(
                PAGE_SCROLL_ID.clone(),
                AbsoluteOffset {
                    x: 0.0,
                    y: y.max(0.0),
                },
            ),
            Effect::ResetArticleScroll => {
                scrollable::snap_to(ARTICLE_SCROLL_ID.clone(), scrollable::RelativeOffset::START)
            }
            Effect::CopyToClipboard(contents) => iced::clipboard::write(contents),
            Effect::StartEgg => {
                if self.egg.is_none() {
                    let interval = Duration::from_millis(self.config.egg_interval_ms);
                    match start_egg(
                        self.config.egg_pattern,
                        interval,
                        self.location_hash.clone(),
                    ) {
                        Ok(handle) => self.egg = Some(handle),
                        Err(err) => warn!("Could not start url egg: {err:#}"),
                    }
                }
                Task::none()
            }
            Effect::StopEgg => {
                if let Some(handle) = self.egg.take() {
                    handle.stop();
                }
                Task::none()
            }
            Effect::QuitSafely => {
                self.shutdown();
                info!("Safe quit requested");
                iced::exit()
            }
        }
    }

    /// Release everything that outlives a single update.
    pub(in crate::app) fn shutdown(&mut self) {
        if let Some(handle) = self.egg.take() {
            handle.stop();
        }
        self.page.tracker.detach();
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. })
        | Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status != event::Status::Captured =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use iced::{Point, Size};

    fn mounted_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig {
            splash_duration_ms: 0,
            matrix_rain: false,
            egg_interval_ms: 2,
            ..AppConfig::default()
        })
        .expect("bootstrap");
        app
    }

    #[test]
    fn window_events_map_to_messages() {
        let id = window::Id::unique();
        let resized = runtime_event_to_message(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Ignored,
            id,
        );
        assert!(matches!(
            resized,
            Some(Message::WindowResized { width, height }) if width == 800.0 && height == 600.0
        ));

        let moved = runtime_event_to_message(
            Event::Window(window::Event::Moved(Point::new(10.0, 20.0))),
            event::Status::Ignored,
            id,
        );
        assert!(moved.is_none());
    }

    #[test]
    fn title_follows_running_egg() {
        let mut app = mounted_app();
        let _ = app.run_effect(Effect::StartEgg);
        assert!(app.egg.is_some());

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while app.location_hash.is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(app.reduce(Message::RefreshTitle).is_empty());
        assert!(app.title().contains('#'));

        app.shutdown();
        assert!(app.egg.is_none());
        assert!(!app.title().contains('#'));
    }
}
