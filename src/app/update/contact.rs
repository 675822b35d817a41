use super::super::state::App;
use super::Effect;
use portfolio_core::content::contact;
use std::time::Instant;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_copy_contact(
        &mut self,
        idx: usize,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let Some(method) = contact::METHODS.get(idx) else {
            warn!(idx, "Copy requested for unknown contact method");
            return;
        };
        self.contact.copied = Some((idx, now));
        effects.push(Effect::CopyToClipboard(method.url.to_string()));
    }

    pub(super) fn handle_submit_contact(&mut self, now: Instant) {
        if self.contact.is_submitted() {
            return;
        }
        match self.contact.validate() {
            Ok(()) => {
                info!(
                    inquiry = self.contact.inquiry.id(),
                    subject = %self.contact.subject.trim(),
                    "Contact form submitted locally"
                );
                self.contact.error = None;
                self.contact.submitted_at = Some(now);
            }
            Err(reason) => self.contact.error = Some(reason),
        }
    }
}
