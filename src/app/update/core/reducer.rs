use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Tick(now) => self.handle_tick(now),
            Message::RainTick => self.handle_rain_tick(),
            // Nothing to update; iced re-reads `title()` after every message.
            Message::RefreshTitle => {}
            Message::Frame(_) => self.handle_frame(),
            Message::Scrolled(metrics) => self.handle_scrolled(metrics),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::NavigateTo(section) => self.handle_navigate_to(section, &mut effects),
            Message::NextSection => self.handle_next_section(&mut effects),
            Message::PreviousSection => self.handle_previous_section(&mut effects),
            Message::SelectSkillCategory(category) => self.handle_select_skill_category(category),
            Message::SelectCtfCategory(category) => self.handle_select_ctf_category(category),
            Message::SelectProject(idx) => self.handle_select_project(idx),
            Message::OpenArticle(id) => self.handle_open_article(id, &mut effects),
            Message::CloseArticle => self.handle_close_article(&mut effects),
            Message::CopyContact(idx) => self.handle_copy_contact(idx, Instant::now(), &mut effects),
            Message::ContactFieldChanged(field, value) => self.contact.set_field(field, value),
            Message::InquirySelected(inquiry) => self.contact.inquiry = inquiry,
            Message::SubmitContact => self.handle_submit_contact(Instant::now()),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ToggleEgg => self.handle_toggle_egg(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(msg) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(msg));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::ContactField;
    use crate::config::{AppConfig, ThemeMode};
    use portfolio_core::content::PageSection;
    use portfolio_core::content::contact;
    use portfolio_core::{PastEndBehavior, ViewportMetrics};
    use std::time::Duration;

    fn build_test_app(config: AppConfig) -> App {
        let config = AppConfig {
            splash_duration_ms: 0,
            matrix_rain: false,
            window_height: 900.0,
            ..config
        };
        let (app, _task) = App::bootstrap(config).expect("bootstrap");
        app
    }

    fn scroll_to(app: &mut App, offset: f32) -> Vec<Effect> {
        let metrics = ViewportMetrics::new(offset, 900.0, app.page.layout.total_height());
        let mut effects = app.reduce(Message::Scrolled(metrics));
        effects.extend(app.reduce(Message::Frame(Instant::now())));
        effects
    }

    #[test]
    fn scrolling_moves_nav_highlight() {
        let mut app = build_test_app(AppConfig::default());
        assert_eq!(app.page.active_section(), PageSection::Hero);

        let about_top = app.page.section_top(PageSection::About);
        scroll_to(&mut app, about_top);
        assert_eq!(app.page.active_section(), PageSection::About);

        let ctf_top = app.page.section_top(PageSection::Ctf);
        scroll_to(&mut app, ctf_top + 10.0);
        assert_eq!(app.page.active_section(), PageSection::Ctf);
        assert!(app.page.nav_solid);
        assert!(app.page.progress.value() > 0.0);
    }

    #[test]
    fn per_frame_sampling_defers_resolution() {
        let mut app = build_test_app(AppConfig::default());
        let about_top = app.page.section_top(PageSection::About);
        let metrics = ViewportMetrics::new(about_top, 900.0, app.page.layout.total_height());
        app.reduce(Message::Scrolled(metrics));
        assert_eq!(app.page.active_section(), PageSection::Hero);
        assert!(app.page.sampler.has_pending());

        app.reduce(Message::Frame(Instant::now()));
        assert_eq!(app.page.active_section(), PageSection::About);
        assert!(!app.page.sampler.has_pending());
    }

    #[test]
    fn eager_sampling_resolves_on_scroll() {
        let mut app = build_test_app(AppConfig {
            sample_per_frame: false,
            ..AppConfig::default()
        });
        let about_top = app.page.section_top(PageSection::About);
        let metrics = ViewportMetrics::new(about_top, 900.0, app.page.layout.total_height());
        app.reduce(Message::Scrolled(metrics));
        assert_eq!(app.page.active_section(), PageSection::About);
    }

    #[test]
    fn footer_retains_or_snaps_by_policy() {
        let mut retain = build_test_app(AppConfig {
            probe_fraction: 1.0,
            ..AppConfig::default()
        });
        let bottom = retain.page.layout.total_height() - 900.0;
        scroll_to(&mut retain, bottom);
        assert_eq!(retain.page.active_section(), PageSection::Hero);

        let mut snap = build_test_app(AppConfig {
            past_end: PastEndBehavior::SnapToLast,
            probe_fraction: 1.0,
            ..AppConfig::default()
        });
        let bottom = snap.page.layout.total_height() - 900.0;
        scroll_to(&mut snap, bottom);
        assert_eq!(snap.page.active_section(), PageSection::Contact);
    }

    #[test]
    fn frame_burst_ending_in_footer_matches_eager_resolution() {
        for sample_per_frame in [true, false] {
            let mut app = build_test_app(AppConfig {
                probe_fraction: 1.0,
                sample_per_frame,
                ..AppConfig::default()
            });
            let total = app.page.layout.total_height();
            let into_contact = app.page.section_top(PageSection::Contact) - 900.0 + 10.0;
            for offset in [into_contact, total - 900.0] {
                app.reduce(Message::Scrolled(ViewportMetrics::new(offset, 900.0, total)));
            }
            app.reduce(Message::Frame(Instant::now()));
            assert_eq!(app.page.active_section(), PageSection::Contact);
        }
    }

    #[test]
    fn nav_click_scrolls_to_section_top() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::NavigateTo(PageSection::Research));
        let top = app.page.section_top(PageSection::Research);
        assert_eq!(effects, vec![Effect::ScrollTo(top)]);
    }

    #[test]
    fn next_section_shortcut_follows_active() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::NextSection);
        let top = app.page.section_top(PageSection::About);
        assert_eq!(effects, vec![Effect::ScrollTo(top)]);
        assert!(app.reduce(Message::PreviousSection).is_empty());
    }

    #[test]
    fn scroll_events_ignored_during_splash() {
        let (mut app, _task) = App::bootstrap(AppConfig {
            matrix_rain: false,
            ..AppConfig::default()
        })
        .expect("bootstrap");
        let about_top = app.page.section_top(PageSection::About);
        let metrics = ViewportMetrics::new(about_top, 900.0, app.page.layout.total_height());
        app.reduce(Message::Scrolled(metrics));
        app.reduce(Message::Frame(Instant::now()));
        assert_eq!(app.page.active_section(), PageSection::Hero);

        app.reduce(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(!app.in_splash());
        app.reduce(Message::Scrolled(metrics));
        app.reduce(Message::Frame(Instant::now()));
        assert_eq!(app.page.active_section(), PageSection::About);
    }

    #[test]
    fn safe_quit_detaches_tracker() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::SafeQuit);
        assert_eq!(effects, vec![Effect::QuitSafely]);
        app.shutdown();
        assert!(!app.page.tracker.is_attached());
        let about_top = app.page.section_top(PageSection::About);
        scroll_to(&mut app, about_top);
        assert_eq!(app.page.active_section(), PageSection::Hero);
    }

    #[test]
    fn toggles_theme_and_egg() {
        let mut app = build_test_app(AppConfig::default());
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Day);
        assert_eq!(app.reduce(Message::ToggleEgg), vec![Effect::StartEgg]);
    }

    #[test]
    fn copy_contact_emits_clipboard_effect() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::CopyContact(0));
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboard(contact::METHODS[0].url.to_string())]
        );
        assert_eq!(app.contact.copied_index(), Some(0));
        assert!(app.reduce(Message::CopyContact(99)).is_empty());
    }

    #[test]
    fn submit_validates_then_resets() {
        let mut app = build_test_app(AppConfig::default());
        app.reduce(Message::SubmitContact);
        assert!(app.contact.error.is_some());
        assert!(!app.contact.is_submitted());

        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello there"),
        ] {
            app.reduce(Message::ContactFieldChanged(field, value.to_string()));
        }
        app.reduce(Message::SubmitContact);
        assert!(app.contact.is_submitted());

        app.reduce(Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert!(!app.contact.is_submitted());
        assert!(app.contact.name.is_empty());
    }

    #[test]
    fn article_open_and_close() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::OpenArticle(2));
        assert_eq!(app.panels.open_article, Some(2));
        assert_eq!(effects, vec![Effect::ResetArticleScroll]);
        app.reduce(Message::OpenArticle(404));
        assert_eq!(app.panels.open_article, Some(2));
        app.reduce(Message::CloseArticle);
        assert_eq!(app.panels.open_article, None);
    }
}
