//! Cyber night palette, a plain day palette, and the accent colours.

use crate::config::ThemeMode;
use iced::theme::Palette;
use iced::{Color, Theme};
use portfolio_core::content::Accent;
use portfolio_core::rain::RainTone;

pub const NEON: Color = rgb(0.0, 1.0, 0.255);
pub const CYAN: Color = rgb(0.0, 0.831, 1.0);
pub const PURPLE: Color = rgb(0.722, 0.161, 0.867);
pub const PINK: Color = rgb(1.0, 0.0, 0.502);

const NIGHT_BACKGROUND: Color = rgb(0.039, 0.039, 0.059);
const NIGHT_TEXT: Color = rgb(0.878, 0.878, 0.878);
const DAY_BACKGROUND: Color = rgb(0.965, 0.969, 0.976);
const DAY_TEXT: Color = rgb(0.102, 0.110, 0.137);

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub fn iced_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Night => Theme::custom(
            "Cyber Night".to_string(),
            Palette {
                background: NIGHT_BACKGROUND,
                text: NIGHT_TEXT,
                primary: NEON,
                success: NEON,
                danger: PINK,
            },
        ),
        ThemeMode::Day => Theme::custom(
            "Cyber Day".to_string(),
            Palette {
                background: DAY_BACKGROUND,
                text: DAY_TEXT,
                primary: Color::from_rgb(0.0, 0.55, 0.2),
                success: Color::from_rgb(0.0, 0.55, 0.2),
                danger: Color::from_rgb(0.75, 0.0, 0.35),
            },
        ),
    }
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Neon => NEON,
        Accent::Cyan => CYAN,
        Accent::Purple => PURPLE,
        Accent::Pink => PINK,
    }
}

/// Surface colour for cards and the solid nav bar.
pub fn panel_color(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Night => Color::from_rgba(0.078, 0.078, 0.118, 0.92),
        ThemeMode::Day => Color::from_rgba(1.0, 1.0, 1.0, 0.95),
    }
}

pub fn muted_text(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Night => Color::from_rgb(0.55, 0.55, 0.6),
        ThemeMode::Day => Color::from_rgb(0.4, 0.42, 0.47),
    }
}

pub fn rain_color(tone: RainTone, fade: f32) -> Color {
    let base = match tone {
        RainTone::Flash => Color::WHITE,
        RainTone::Bright => NEON,
        RainTone::Cyan => CYAN,
        RainTone::Dim => Color::from_rgb(0.0, 0.45, 0.12),
    };
    Color {
        a: fade.clamp(0.0, 1.0),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_are_distinct() {
        let colors = [Accent::Neon, Accent::Cyan, Accent::Purple, Accent::Pink].map(accent_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rain_fade_is_clamped() {
        assert_eq!(rain_color(RainTone::Flash, 2.0).a, 1.0);
        assert_eq!(rain_color(RainTone::Dim, -1.0).a, 0.0);
    }
}
