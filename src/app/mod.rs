mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use anyhow::Result;
use iced::{Point, Size, window};

/// Build the initial state and hand it to the iced runtime.
pub fn run_app(config: AppConfig) -> Result<()> {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        min_size: Some(Size::new(640.0, 480.0)),
        ..window::Settings::default()
    };

    let (app, boot) = App::bootstrap(config)?;
    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::iced_theme(app.config.theme))
        .run_with(move || (app, boot))?;
    Ok(())
}
