use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::style;
use super::{grid, tag, tag_row};
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{Column, Row, button, column, horizontal_space, progress_bar, row, text};
use iced::{Element, Font, Length};
use portfolio_core::content::PageSection;
use portfolio_core::content::projects;
use portfolio_core::content::skills::{self, CertStatus, SkillCategory};

impl App {
    pub(super) fn projects_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let selected = self.panels.selected_project.min(projects::FEATURED.len() - 1);

        let selector = projects::FEATURED.iter().enumerate().fold(
            Row::new().spacing(8),
            |row, (idx, project)| {
                row.push(
                    button(text(project.title).size(14))
                        .on_press(Message::SelectProject(idx))
                        .style(style::accent_button(theme::CYAN, idx == selected)),
                )
            },
        );

        let project = &projects::FEATURED[selected];
        let features: Vec<Element<'_, Message>> = project
            .features
            .iter()
            .map(|feature| {
                row![
                    text(">").font(Font::MONOSPACE).color(theme::NEON),
                    text(*feature).size(14)
                ]
                .spacing(8)
                .into()
            })
            .collect();

        let detail = self.card(
            theme::CYAN,
            column![
                row![
                    text(project.title).size(26),
                    horizontal_space(),
                    tag(project.status.label(), theme::NEON),
                ]
                .align_y(Vertical::Center),
                text(project.tagline).color(theme::CYAN),
                text(project.description).size(14).color(muted),
                tag_row(project.tech, theme::PURPLE),
                grid(features, 2),
                row![
                    text(format!("★ {}", project.stars)).font(Font::MONOSPACE),
                    text(format!("⑂ {}", project.forks)).font(Font::MONOSPACE),
                    horizontal_space(),
                    text(project.url).size(13).font(Font::MONOSPACE).color(muted),
                ]
                .spacing(16),
            ]
            .spacing(12),
        );

        let upcoming = projects::UPCOMING
            .iter()
            .map(|next| {
                self.card(
                    theme::PURPLE,
                    column![
                        text(next.title).size(16),
                        text(next.description).size(13).color(muted),
                        tag(next.status.label(), theme::PURPLE),
                    ]
                    .spacing(8),
                )
            })
            .collect();

        self.section_shell(
            PageSection::Projects,
            "Featured Projects",
            "Tools built for offensive research and debugging",
            column![selector, detail, text("In the Pipeline").size(22), grid(upcoming, 3)]
                .spacing(16)
                .into(),
        )
    }

    pub(super) fn skills_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let active = self.panels.skill_category;
        let meta = active.meta();
        let accent = theme::accent_color(meta.accent);

        let tabs = SkillCategory::ALL
            .iter()
            .fold(Row::new().spacing(8), |row, category| {
                let tab_accent = theme::accent_color(category.meta().accent);
                row.push(
                    button(text(category.meta().title).size(14))
                        .on_press(Message::SelectSkillCategory(*category))
                        .style(style::accent_button(tab_accent, *category == active)),
                )
            });

        let bars = active
            .skills()
            .iter()
            .fold(Column::new().spacing(14), |col, skill| {
                col.push(
                    column![
                        row![
                            text(skill.name).size(15),
                            horizontal_space(),
                            text(format!("{}%", skill.level))
                                .font(Font::MONOSPACE)
                                .color(accent),
                        ],
                        progress_bar(0.0..=100.0, f32::from(skill.level))
                            .height(Length::Fixed(6.0))
                            .style(style::meter(accent)),
                        text(skill.details).size(12).color(muted),
                    ]
                    .spacing(4),
                )
            });

        let certifications = skills::CERTIFICATIONS
            .iter()
            .map(|cert| {
                let cert_accent = match cert.status {
                    CertStatus::Earned => theme::NEON,
                    CertStatus::InProgress => theme::CYAN,
                    CertStatus::Planned => theme::PURPLE,
                };
                self.card(
                    cert_accent,
                    column![
                        text(cert.name).size(16),
                        tag(cert.status.label(), cert_accent),
                        text(cert.note).size(12).color(muted),
                    ]
                    .spacing(6),
                )
            })
            .collect();

        let stack = skills::TECH_STACK
            .chunks(6)
            .fold(Column::new().spacing(6), |col, chunk| {
                col.push(tag_row(chunk, theme::NEON))
            });

        self.section_shell(
            PageSection::Skills,
            "Skills & Expertise",
            meta.description,
            column![
                tabs,
                self.card(accent, column![text(meta.title).size(20).color(accent), bars].spacing(12)),
                grid(certifications, 3),
                stack,
            ]
            .spacing(16)
            .into(),
        )
    }
}
