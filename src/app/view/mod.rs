mod nav;
mod rain;
mod sections;
mod style;

use super::messages::Message;
use super::state::{App, CONTENT_MAX_WIDTH_PX, FOOTER_HEIGHT_PX, NAV_HEIGHT_PX, PAGE_SCROLL_ID};
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Space, Stack, canvas, column, container, progress_bar, scrollable, text};
use iced::{Element, Font, Length};
use portfolio_core::ViewportMetrics;
use portfolio_core::content::{PageSection, hero};
use chrono::{DateTime, Datelike, Local, TimeZone};
use std::time::Instant;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let foreground = if self.in_splash() {
            self.splash_view()
        } else {
            self.page_view()
        };

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        if let Some(rain) = self.rain.as_ref() {
            layers = layers.push(
                canvas(rain::RainCanvas { rain })
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }
        layers.push(foreground).into()
    }

    fn splash_view(&self) -> Element<'_, Message> {
        let fraction = self.splash_fraction(Instant::now());
        let content = column![
            text(hero::HANDLE)
                .size(56)
                .font(Font::MONOSPACE)
                .color(theme::NEON),
            text("Initializing secure connection...")
                .font(Font::MONOSPACE)
                .color(theme::muted_text(self.config.theme)),
            progress_bar(0.0..=1.0, fraction)
                .width(Length::Fixed(280.0))
                .height(Length::Fixed(4.0))
                .style(style::meter(theme::NEON)),
        ]
        .spacing(16)
        .align_x(Horizontal::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn page_view(&self) -> Element<'_, Message> {
        let mut sections = Column::new().width(Length::Fill);
        for section in PageSection::ALL {
            let body = container(self.section_body(section))
                .max_width(CONTENT_MAX_WIDTH_PX)
                .padding([NAV_HEIGHT_PX as u16 + 16, 24]);
            sections = sections.push(
                container(body)
                    .width(Length::Fill)
                    .height(Length::Fixed(self.page.section_height(section)))
                    .align_x(Horizontal::Center)
                    .clip(true),
            );
        }
        sections = sections.push(self.footer());

        let page = scrollable(sections)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| {
                Message::Scrolled(ViewportMetrics::new(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                ))
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay = column![self.progress_view(), self.nav_bar()];

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(overlay)
            .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        let muted = theme::muted_text(self.config.theme);
        container(
            column![
                text(format!("<{}/> © {}", hero::HANDLE, copyright_year(Local::now())))
                    .font(Font::MONOSPACE)
                    .color(theme::NEON),
                text(hero::MOTTO).size(14).color(muted),
                Space::with_height(Length::Fixed(8.0)),
            ]
            .spacing(8)
            .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT_PX))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }
}

fn copyright_year<Tz: TimeZone>(now: DateTime<Tz>) -> i32 {
    now.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn copyright_year_flips_at_midnight() {
        let eve = Utc
            .with_ymd_and_hms(2025, 12, 31, 23, 59, 59)
            .single()
            .expect("valid timestamp");
        let new_year = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 1)
            .single()
            .expect("valid timestamp");
        assert_eq!(copyright_year(eve), 2025);
        assert_eq!(copyright_year(new_year), 2026);
    }
}
