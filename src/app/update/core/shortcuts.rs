use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

/// A parsed `mod+mod+key` binding from the `[keys]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Binding {
    key: String,
    modifiers: Modifiers,
}

impl Binding {
    /// Parse `raw`, falling back to `fallback` when it is blank or names no key.
    pub(super) fn parse(raw: &str, fallback: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        let mut modifiers = Modifiers::empty();
        let mut key = None;

        for part in lowered.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part {
                "ctrl" | "control" => modifiers |= Modifiers::CTRL,
                "alt" | "option" => modifiers |= Modifiers::ALT,
                "shift" => modifiers |= Modifiers::SHIFT,
                "logo" | "meta" | "super" | "cmd" => modifiers |= Modifiers::LOGO,
                "esc" => key = Some("escape".to_string()),
                other => key = Some(other.to_string()),
            }
        }

        match key {
            Some(key) => Self { key, modifiers },
            None if lowered.is_empty() && !fallback.trim().is_empty() => Self::parse(fallback, fallback),
            None => Self {
                key: fallback.to_string(),
                modifiers,
            },
        }
    }

    /// Exact match: extra held modifiers reject the binding.
    pub(super) fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        self.key == pressed && self.modifiers == modifiers
    }
}

fn pressed_name(key: &Key) -> Option<String> {
    match key.as_ref() {
        Key::Named(key::Named::Escape) => Some("escape".to_string()),
        Key::Named(key::Named::Space) => Some("space".to_string()),
        Key::Character(ch) => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = pressed_name(&key)?;

        let always = [
            (&self.config.key_toggle_egg, "ctrl+e", Message::ToggleEgg),
            (&self.config.key_toggle_theme, "ctrl+t", Message::ToggleTheme),
        ];
        if let Some(message) = first_match(&always, &pressed, modifiers) {
            return Some(message);
        }
        if self.in_splash() {
            return None;
        }
        if pressed == "escape" && self.panels.open_article.is_some() {
            return Some(Message::CloseArticle);
        }

        let page = [
            (&self.config.key_safe_quit, "q", Message::SafeQuit),
            (&self.config.key_next_section, "j", Message::NextSection),
            (&self.config.key_prev_section, "k", Message::PreviousSection),
        ];
        first_match(&page, &pressed, modifiers)
    }
}

fn first_match(
    table: &[(&String, &str, Message)],
    pressed: &str,
    modifiers: Modifiers,
) -> Option<Message> {
    table
        .iter()
        .find(|(raw, fallback, _)| Binding::parse(raw, fallback).matches(pressed, modifiers))
        .map(|(_, _, message)| message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn mounted_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig {
            splash_duration_ms: 0,
            matrix_rain: false,
            ..AppConfig::default()
        })
        .expect("bootstrap");
        app
    }

    fn press(app: &App, ch: &str, modifiers: Modifiers) -> Option<Message> {
        app.shortcut_message_for_key(Key::Character(ch.into()), modifiers)
    }

    #[test]
    fn parses_modifiers_and_key() {
        let binding = Binding::parse(" Ctrl+Shift+E ", "x");
        assert!(binding.matches("e", Modifiers::CTRL | Modifiers::SHIFT));
        assert!(!binding.matches("e", Modifiers::CTRL));
    }

    #[test]
    fn blank_binding_uses_fallback() {
        assert_eq!(Binding::parse("  ", "ctrl+t"), Binding::parse("ctrl+t", "x"));
        assert!(Binding::parse("ctrl+", "e").matches("e", Modifiers::CTRL));
        assert!(Binding::parse("esc", "x").matches("escape", Modifiers::empty()));
    }

    #[test]
    fn default_bindings_map_to_messages() {
        let app = mounted_app();
        assert!(matches!(press(&app, "j", Modifiers::empty()), Some(Message::NextSection)));
        assert!(matches!(press(&app, "K", Modifiers::empty()), Some(Message::PreviousSection)));
        assert!(matches!(press(&app, "q", Modifiers::empty()), Some(Message::SafeQuit)));
        assert!(matches!(press(&app, "t", Modifiers::CTRL), Some(Message::ToggleTheme)));
        assert!(matches!(press(&app, "e", Modifiers::CTRL), Some(Message::ToggleEgg)));
        assert!(press(&app, "e", Modifiers::CTRL | Modifiers::ALT).is_none());
        assert!(press(&app, "x", Modifiers::empty()).is_none());
    }

    #[test]
    fn page_shortcuts_wait_for_splash() {
        let (app, _task) = App::bootstrap(AppConfig {
            matrix_rain: false,
            ..AppConfig::default()
        })
        .expect("bootstrap");
        assert!(press(&app, "j", Modifiers::empty()).is_none());
        assert!(matches!(press(&app, "t", Modifiers::CTRL), Some(Message::ToggleTheme)));
    }
}
