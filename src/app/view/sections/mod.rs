mod intro;
mod outreach;
mod portfolio;
mod research;

use super::super::messages::Message;
use super::super::state::App;
use super::style;
use crate::theme;
use iced::widget::{Column, Row, column, container, text};
use iced::{Color, Element, Font, Length};
use portfolio_core::content::PageSection;

impl App {
    pub(super) fn section_body(&self, section: PageSection) -> Element<'_, Message> {
        match section {
            PageSection::Hero => self.hero_view(),
            PageSection::About => self.about_view(),
            PageSection::Projects => self.projects_view(),
            PageSection::Skills => self.skills_view(),
            PageSection::Research => self.research_view(),
            PageSection::Ctf => self.ctf_view(),
            PageSection::Blog => self.blog_view(),
            PageSection::Contact => self.contact_view(),
        }
    }

    fn muted(&self) -> Color {
        theme::muted_text(self.config.theme)
    }

    /// `// id`, title and subtitle above a section body.
    fn section_shell<'a>(
        &self,
        section: PageSection,
        title: &'a str,
        subtitle: &'a str,
        body: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let accent = theme::accent_color(section.accent());
        column![
            text(format!("// {}", section.id()))
                .font(Font::MONOSPACE)
                .size(14)
                .color(accent),
            text(title).size(36),
            text(subtitle).size(16).color(self.muted()),
            body,
        ]
        .spacing(12)
        .width(Length::Fill)
        .into()
    }

    fn card<'a>(&self, accent: Color, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        container(content)
            .padding(16)
            .width(Length::Fill)
            .style(style::card(self.config.theme, accent))
            .into()
    }
}

fn tag<'a>(label: impl text::IntoFragment<'a>, accent: Color) -> Element<'a, Message> {
    container(text(label).size(12).font(Font::MONOSPACE))
        .padding([2, 8])
        .style(style::chip(accent))
        .into()
}

fn tag_row<'a>(labels: &[&'a str], accent: Color) -> Element<'a, Message> {
    labels
        .iter()
        .fold(Row::new().spacing(6), |row, label| row.push(tag(*label, accent)))
        .into()
}

/// Lay `items` out in rows of `per_row` equally wide cells.
fn grid<'a>(items: Vec<Element<'a, Message>>, per_row: usize) -> Element<'a, Message> {
    let per_row = per_row.max(1);
    let mut rows = Column::new().spacing(12);
    let mut current = Row::new().spacing(12);
    let mut in_row = 0;
    for item in items {
        current = current.push(container(item).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == per_row {
            rows = rows.push(current);
            current = Row::new().spacing(12);
            in_row = 0;
        }
    }
    if in_row > 0 {
        for _ in in_row..per_row {
            current = current.push(container(text("")).width(Length::FillPortion(1)));
        }
        rows = rows.push(current);
    }
    rows.into()
}
