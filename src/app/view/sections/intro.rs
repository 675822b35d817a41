use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::style;
use super::grid;
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Color, Element, Font, Length};
use portfolio_core::content::PageSection;
use portfolio_core::content::about;
use portfolio_core::content::hero::{self, CodeToken, TokenKind};

impl App {
    pub(super) fn hero_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let intro = column![
            text("> whoami").font(Font::MONOSPACE).color(theme::NEON),
            text(hero::HANDLE).size(72).font(Font::MONOSPACE),
            text(hero::BADGE).size(24).color(theme::CYAN),
            text(hero::TAGLINE).size(18).color(muted),
            text(format!("\"{}\"", hero::MOTTO))
                .size(14)
                .font(Font::MONOSPACE)
                .color(theme::PURPLE),
            row![
                button(text("View Projects"))
                    .padding([10, 20])
                    .on_press(Message::NavigateTo(PageSection::Projects))
                    .style(style::cta_button(theme::NEON)),
                button(text("Get in Touch"))
                    .padding([10, 20])
                    .on_press(Message::NavigateTo(PageSection::Contact))
                    .style(style::accent_button(theme::CYAN, true)),
            ]
            .spacing(12),
        ]
        .spacing(14)
        .width(Length::FillPortion(3));

        let code = hero::CODE_CARD
            .iter()
            .fold(Column::new().spacing(4), |lines, line| {
                lines.push(code_line(line, self.muted()))
            });
        let card = self.card(
            theme::NEON,
            column![
                text("researcher.py")
                    .size(12)
                    .font(Font::MONOSPACE)
                    .color(muted),
                code
            ]
            .spacing(10),
        );

        container(
            row![intro, container(card).width(Length::FillPortion(2))]
                .spacing(32)
                .align_y(Vertical::Center),
        )
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
    }

    pub(super) fn about_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let timeline = about::TIMELINE
            .iter()
            .fold(Column::new().spacing(16), |col, milestone| {
                col.push(
                    row![
                        container(
                            text(milestone.year)
                                .font(Font::MONOSPACE)
                                .color(theme::NEON)
                        )
                        .width(Length::Fixed(72.0))
                        .align_x(Horizontal::Left),
                        column![
                            text(milestone.title).size(18),
                            text(milestone.description).size(14).color(muted),
                        ]
                        .spacing(4),
                    ]
                    .spacing(16),
                )
            });

        let accents = [theme::PINK, theme::CYAN, theme::PURPLE];
        let philosophies = about::PHILOSOPHIES
            .iter()
            .zip(accents.iter().cycle())
            .map(|(philosophy, accent)| {
                self.card(
                    *accent,
                    column![
                        text(philosophy.title).size(16).color(*accent),
                        text(philosophy.description).size(14).color(muted),
                    ]
                    .spacing(8),
                )
            })
            .collect();

        self.section_shell(
            PageSection::About,
            "About Me",
            about::SUMMARY,
            column![
                self.card(theme::NEON, timeline),
                text("Philosophy").size(22),
                grid(philosophies, 3),
            ]
            .spacing(20)
            .into(),
        )
    }
}

fn code_line<'a>(tokens: &'a [CodeToken], plain: Color) -> Element<'a, Message> {
    tokens
        .iter()
        .fold(Row::new(), |row, token| {
            let color = match token.kind {
                TokenKind::Keyword => theme::PINK,
                TokenKind::Type => theme::CYAN,
                TokenKind::Function => theme::NEON,
                TokenKind::Literal => Color::from_rgb(0.95, 0.85, 0.4),
                TokenKind::Plain => plain,
            };
            row.push(text(token.text).font(Font::MONOSPACE).size(14).color(color))
        })
        .into()
}
