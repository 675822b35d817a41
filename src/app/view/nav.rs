use super::super::messages::Message;
use super::super::state::{App, NAV_HEIGHT_PX};
use super::style;
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{Row, button, column, container, horizontal_space, progress_bar, row, text};
use iced::{Color, Element, Font, Length};
use portfolio_core::content::{PageSection, hero};

impl App {
    pub(super) fn progress_view(&self) -> Element<'_, Message> {
        progress_bar(0.0..=1.0, self.page.progress.value())
            .height(Length::Fixed(3.0))
            .style(style::meter(theme::NEON))
            .into()
    }

    pub(super) fn nav_bar(&self) -> Element<'_, Message> {
        let active = self.page.active_section();
        let mode = self.config.theme;

        let brand = button(
            row![
                text("<").color(theme::NEON).font(Font::MONOSPACE),
                text(hero::HANDLE).font(Font::MONOSPACE).size(18),
                text("/>").color(theme::NEON).font(Font::MONOSPACE),
            ]
            .spacing(2),
        )
        .on_press(Message::NavigateTo(PageSection::Hero))
        .style(style::accent_button(theme::NEON, false));

        let mut links = Row::new().spacing(4).align_y(Vertical::Center);
        for section in PageSection::ALL {
            let accent = theme::accent_color(section.accent());
            let is_active = section == active;
            let underline = container(text(""))
                .width(Length::Fill)
                .height(Length::Fixed(2.0))
                .style(style::fill(if is_active {
                    accent
                } else {
                    Color::TRANSPARENT
                }));
            links = links.push(
                column![
                    button(text(section.label()).size(14))
                        .on_press(Message::NavigateTo(section))
                        .style(style::accent_button(accent, is_active)),
                    underline,
                ]
                .width(Length::Shrink)
                .spacing(2),
            );
        }

        let egg_label = if self.egg.is_some() { "~ egg on" } else { "~" };
        let toggles = row![
            button(text(egg_label).font(Font::MONOSPACE).size(14))
                .on_press(Message::ToggleEgg)
                .style(style::accent_button(theme::PINK, self.egg.is_some())),
            button(text(format!("{}", self.config.theme.toggled())).size(14))
                .on_press(Message::ToggleTheme)
                .style(style::accent_button(theme::CYAN, false)),
        ]
        .spacing(4);

        container(
            row![brand, horizontal_space(), links, toggles]
                .spacing(16)
                .align_y(Vertical::Center),
        )
        .padding([0, 24])
        .height(Length::Fixed(NAV_HEIGHT_PX))
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .style(style::nav_bar(mode, self.page.nav_solid))
        .into()
    }
}
