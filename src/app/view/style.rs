//! Widget style closures shared by the section views.

use crate::config::ThemeMode;
use crate::theme;
use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Shadow, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

pub(super) fn card(mode: ThemeMode, accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(theme::panel_color(mode))),
        border: Border {
            color: with_alpha(accent, 0.35),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

pub(super) fn chip(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(accent, 0.12))),
        text_color: Some(accent),
        border: Border {
            color: with_alpha(accent, 0.5),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

pub(super) fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

pub(super) fn nav_bar(mode: ThemeMode, solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let panel = theme::panel_color(mode);
        container::Style {
            background: Some(Background::Color(if solid {
                panel
            } else {
                with_alpha(panel, 0.25)
            })),
            border: Border {
                color: if solid {
                    with_alpha(theme::NEON, 0.25)
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Flat button that lights up in `accent` when active or hovered.
pub(super) fn accent_button(
    accent: Color,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let background = if active {
            Some(Background::Color(with_alpha(accent, 0.15)))
        } else if hovered {
            Some(Background::Color(with_alpha(accent, 0.08)))
        } else {
            None
        };
        button::Style {
            background,
            text_color: if active || hovered {
                accent
            } else {
                theme.palette().text
            },
            border: Border {
                color: if active {
                    with_alpha(accent, 0.7)
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Solid call-to-action button.
pub(super) fn cta_button(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 1.0,
            button::Status::Disabled => 0.4,
            button::Status::Active => 0.85,
        };
        button::Style {
            background: Some(Background::Color(with_alpha(accent, alpha))),
            text_color: Color::BLACK,
            border: Border {
                color: accent,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Card-shaped button used for clickable list entries.
pub(super) fn card_button(
    mode: ThemeMode,
    accent: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(Background::Color(theme::panel_color(mode))),
            text_color: theme.palette().text,
            border: Border {
                color: with_alpha(accent, if hovered { 0.9 } else { 0.3 }),
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

pub(super) fn meter(accent: Color) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: Background::Color(with_alpha(accent, 0.12)),
        bar: Background::Color(accent),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 2.0.into(),
        },
    }
}
