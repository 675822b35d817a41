use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::style;
use super::{grid, tag, tag_row};
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{Column, Row, button, column, horizontal_space, row, text};
use iced::{Element, Font, Length};
use portfolio_core::content::PageSection;
use portfolio_core::content::ctf::{self, CtfCategory, Difficulty};
use portfolio_core::content::research::{self, PaperStatus, Severity};

impl App {
    pub(super) fn research_view(&self) -> Element<'_, Message> {
        let muted = self.muted();

        let areas = research::AREAS
            .iter()
            .map(|area| {
                let accent = theme::accent_color(area.accent);
                self.card(
                    accent,
                    column![
                        text(area.title).size(18).color(accent),
                        text(area.description).size(13).color(muted),
                        tag_row(area.techniques, accent),
                    ]
                    .spacing(8),
                )
            })
            .collect();

        let papers = research::PAPERS
            .iter()
            .fold(Column::new().spacing(10), |col, paper| {
                let accent = match paper.status {
                    PaperStatus::Published => theme::NEON,
                    PaperStatus::Draft => theme::CYAN,
                    PaperStatus::Research => theme::PURPLE,
                    PaperStatus::Planning => theme::PINK,
                };
                col.push(
                    row![
                        column![
                            text(paper.title).size(15),
                            text(paper.summary).size(12).color(muted),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        text(paper.year).font(Font::MONOSPACE).size(12).color(muted),
                        tag(paper.status.label(), accent),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
            });

        let disclosures = research::DISCLOSURES
            .iter()
            .fold(Column::new().spacing(10), |col, disclosure| {
                let accent = match disclosure.severity {
                    Severity::High => theme::PINK,
                    Severity::Medium => theme::PURPLE,
                };
                col.push(
                    row![
                        tag(disclosure.severity.label(), accent),
                        text(disclosure.title).size(14).width(Length::Fill),
                        text(disclosure.status).size(12).color(muted),
                        text(disclosure.identifier)
                            .size(12)
                            .font(Font::MONOSPACE)
                            .color(theme::CYAN),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
            });

        let methodologies = research::METHODOLOGIES
            .iter()
            .map(|method| {
                let steps = method.steps.iter().enumerate().fold(
                    Column::new().spacing(4),
                    |col, (idx, step)| {
                        col.push(
                            row![
                                text(format!("{:02}", idx + 1))
                                    .font(Font::MONOSPACE)
                                    .size(12)
                                    .color(theme::NEON),
                                text(*step).size(13),
                            ]
                            .spacing(8),
                        )
                    },
                );
                self.card(
                    theme::NEON,
                    column![text(method.title).size(16), steps].spacing(8),
                )
            })
            .collect();

        self.section_shell(
            PageSection::Research,
            "Security Research",
            "Where the current effort goes",
            column![
                grid(areas, 2),
                row![
                    self.card(
                        theme::CYAN,
                        column![text("Papers").size(18), papers].spacing(10)
                    ),
                    self.card(
                        theme::PINK,
                        column![text("Disclosures").size(18), disclosures].spacing(10)
                    ),
                ]
                .spacing(12),
                grid(methodologies, 3),
            ]
            .spacing(16)
            .into(),
        )
    }

    pub(super) fn ctf_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let active = self.panels.ctf_category;
        let meta = active.meta();
        let accent = theme::accent_color(meta.accent);

        let stats = ctf::ACHIEVEMENTS
            .iter()
            .map(|achievement| {
                self.card(
                    theme::NEON,
                    column![
                        text(achievement.value)
                            .size(28)
                            .font(Font::MONOSPACE)
                            .color(theme::NEON),
                        text(achievement.label).size(13).color(muted),
                    ]
                    .spacing(4),
                )
            })
            .collect();

        let tabs = CtfCategory::ALL
            .iter()
            .fold(Row::new().spacing(8), |row, category| {
                let tab_accent = theme::accent_color(category.meta().accent);
                row.push(
                    button(
                        text(format!(
                            "{} {}/{}",
                            category.meta().title,
                            category.solved_count(),
                            category.challenges().len()
                        ))
                        .size(14),
                    )
                    .on_press(Message::SelectCtfCategory(*category))
                    .style(style::accent_button(tab_accent, *category == active)),
                )
            });

        let challenges = active
            .challenges()
            .iter()
            .fold(Column::new().spacing(10), |col, challenge| {
                let difficulty = match challenge.difficulty {
                    Difficulty::Easy => theme::NEON,
                    Difficulty::Medium => theme::CYAN,
                    Difficulty::Hard => theme::PINK,
                };
                let solved = if challenge.solved {
                    text("[solved]").color(theme::NEON)
                } else {
                    text("[in progress]").color(muted)
                };
                col.push(
                    row![
                        column![
                            text(challenge.name).size(16),
                            text(challenge.description).size(12).color(muted),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        tag(challenge.difficulty.label(), difficulty),
                        text(format!("{} pts", challenge.points)).font(Font::MONOSPACE),
                        solved.font(Font::MONOSPACE).size(12),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
            });

        let platforms = ctf::PLATFORMS
            .iter()
            .fold(Row::new().spacing(8), |row, platform| {
                row.push(tag(
                    format!("{} @{}", platform.name, platform.handle),
                    theme::CYAN,
                ))
            });

        let writeups = ctf::WRITEUPS
            .iter()
            .fold(Column::new().spacing(6), |col, writeup| {
                let writeup_accent = theme::accent_color(writeup.category.meta().accent);
                col.push(
                    row![
                        text(writeup.date).font(Font::MONOSPACE).size(12).color(muted),
                        text(writeup.title).size(14),
                        horizontal_space(),
                        tag(writeup.category.meta().title, writeup_accent),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
            });

        self.section_shell(
            PageSection::Ctf,
            "Capture The Flag",
            meta.description,
            column![
                grid(stats, 4),
                tabs,
                self.card(accent, challenges),
                row![text("Platforms").size(16), platforms]
                    .spacing(12)
                    .align_y(Vertical::Center),
                self.card(
                    theme::PURPLE,
                    column![text("Recent Writeups").size(18), writeups].spacing(10)
                ),
            ]
            .spacing(16)
            .into(),
        )
    }
}
