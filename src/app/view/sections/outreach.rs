use super::super::super::messages::{ContactField, Message};
use super::super::super::state::{ARTICLE_SCROLL_ID, App};
use super::super::style;
use super::tag_row;
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{
    Column, button, column, container, horizontal_space, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Element, Font, Length};
use portfolio_core::content::PageSection;
use portfolio_core::content::blog::{self, Article};
use portfolio_core::content::contact::{self, InquiryType};

impl App {
    pub(super) fn blog_view(&self) -> Element<'_, Message> {
        let body = match self.panels.open_article.and_then(blog::find) {
            Some(article) => self.article_view(article),
            None => self.article_list(),
        };
        self.section_shell(
            PageSection::Blog,
            "Security Blog",
            "Notes from the lab",
            body,
        )
    }

    fn article_list(&self) -> Element<'_, Message> {
        let muted = self.muted();
        blog::ARTICLES
            .iter()
            .fold(Column::new().spacing(12), |col, article| {
                col.push(
                    button(
                        column![
                            text(article.title).size(18),
                            text(article.excerpt).size(13).color(muted),
                            row![
                                text(meta_line(article))
                                    .font(Font::MONOSPACE)
                                    .size(12)
                                    .color(muted),
                                horizontal_space(),
                                tag_row(article.tags, theme::CYAN),
                            ]
                            .align_y(Vertical::Center),
                        ]
                        .spacing(6),
                    )
                    .width(Length::Fill)
                    .padding(14)
                    .on_press(Message::OpenArticle(article.id))
                    .style(style::card_button(self.config.theme, theme::CYAN)),
                )
            })
            .into()
    }

    fn article_view(&self, article: &'static Article) -> Element<'_, Message> {
        let muted = self.muted();
        let paragraphs = article
            .paragraphs()
            .fold(Column::new().spacing(14), |col, paragraph| {
                col.push(text(paragraph).size(16))
            });

        column![
            button(text("< Back to articles").font(Font::MONOSPACE).size(14))
                .on_press(Message::CloseArticle)
                .style(style::accent_button(theme::CYAN, false)),
            text(article.title).size(28),
            row![
                text(meta_line(article))
                    .font(Font::MONOSPACE)
                    .size(12)
                    .color(muted),
                horizontal_space(),
                tag_row(article.tags, theme::CYAN),
            ]
            .align_y(Vertical::Center),
            self.card(
                theme::CYAN,
                scrollable(paragraphs)
                    .id(ARTICLE_SCROLL_ID.clone())
                    .height(Length::Fill),
            ),
        ]
        .spacing(12)
        .height(Length::Fill)
        .into()
    }

    pub(super) fn contact_view(&self) -> Element<'_, Message> {
        let muted = self.muted();
        let copied = self.contact.copied_index();

        let methods = contact::METHODS.iter().enumerate().fold(
            Column::new().spacing(12),
            |col, (idx, method)| {
                let is_copied = copied == Some(idx);
                col.push(self.card(
                    theme::PURPLE,
                    row![
                        column![
                            text(method.name).size(16).color(theme::PURPLE),
                            text(method.handle).font(Font::MONOSPACE).size(14),
                            text(method.description).size(12).color(muted),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        button(text(if is_copied { "Copied!" } else { "Copy link" }).size(13))
                            .on_press(Message::CopyContact(idx))
                            .style(style::accent_button(theme::NEON, is_copied)),
                    ]
                    .align_y(Vertical::Center),
                ))
            },
        );
        let methods = methods.push(
            text(format!("Typical response time: {}", contact::RESPONSE_TIME))
                .size(13)
                .color(muted),
        );

        let submitted = self.contact.is_submitted();
        let field = |field: ContactField, placeholder: &'static str| {
            let input = text_input(placeholder, self.contact.field(field)).padding(10);
            if submitted {
                input
            } else {
                input.on_input(move |value| Message::ContactFieldChanged(field, value))
            }
        };

        let status: Element<'_, Message> = if submitted {
            text("Message received. The form will reset shortly.")
                .color(theme::NEON)
                .into()
        } else if let Some(reason) = self.contact.error {
            text(reason).color(theme::PINK).into()
        } else {
            text("Nothing leaves this machine; the form is a local preview.")
                .size(12)
                .color(muted)
                .into()
        };

        let submit = button(text(if submitted { "Message Sent!" } else { "Send Message" }))
            .padding([10, 20])
            .style(style::cta_button(theme::NEON));
        let submit = if submitted {
            submit
        } else {
            submit.on_press(Message::SubmitContact)
        };

        let form = self.card(
            theme::NEON,
            column![
                text("Send a Message").size(20),
                pick_list(
                    InquiryType::ALL,
                    Some(self.contact.inquiry),
                    Message::InquirySelected
                )
                .width(Length::Fill),
                row![
                    field(ContactField::Name, contact::NAME_PLACEHOLDER),
                    field(ContactField::Email, contact::EMAIL_PLACEHOLDER),
                ]
                .spacing(12),
                field(ContactField::Subject, contact::SUBJECT_PLACEHOLDER),
                field(ContactField::Message, contact::MESSAGE_PLACEHOLDER),
                status,
                submit,
            ]
            .spacing(12),
        );

        self.section_shell(
            PageSection::Contact,
            "Get In Touch",
            "Research collaboration, disclosures, speaking or consulting",
            row![
                container(methods).width(Length::FillPortion(2)),
                container(form).width(Length::FillPortion(3)),
            ]
            .spacing(20)
            .into(),
        )
    }
}

fn meta_line(article: &Article) -> String {
    format!(
        "{} · {} · {} views",
        article.date, article.read_time, article.views
    )
}
