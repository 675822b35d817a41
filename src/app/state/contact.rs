use super::super::messages::ContactField;
use portfolio_core::content::contact::InquiryType;
use std::time::{Duration, Instant};

/// Local-only contact form. Nothing is sent anywhere.
#[derive(Debug, Default)]
pub struct ContactState {
    pub(in crate::app) name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) subject: String,
    pub(in crate::app) message: String,
    pub(in crate::app) inquiry: InquiryType,
    pub(in crate::app) error: Option<&'static str>,
    pub(in crate::app) submitted_at: Option<Instant>,
    pub(in crate::app) copied: Option<(usize, Instant)>,
}

impl ContactState {
    pub(in crate::app) fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub(in crate::app) fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
        self.error = None;
    }

    pub(in crate::app) fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email is required");
        }
        if self.subject.trim().is_empty() {
            return Err("Subject is required");
        }
        if self.message.trim().is_empty() {
            return Err("Message is required");
        }
        Ok(())
    }

    pub(in crate::app) fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub(in crate::app) fn copied_index(&self) -> Option<usize> {
        self.copied.map(|(idx, _)| idx)
    }

    /// Clear timed state whose window has passed. Returns true when the form
    /// was reset.
    pub(in crate::app) fn expire(
        &mut self,
        now: Instant,
        copy_feedback: Duration,
        form_reset: Duration,
    ) -> bool {
        if let Some((_, at)) = self.copied {
            if now.saturating_duration_since(at) >= copy_feedback {
                self.copied = None;
            }
        }
        match self.submitted_at {
            Some(at) if now.saturating_duration_since(at) >= form_reset => {
                *self = ContactState {
                    copied: self.copied,
                    ..ContactState::default()
                };
                true
            }
            _ => false,
        }
    }

    pub(in crate::app) fn has_timers(&self) -> bool {
        self.copied.is_some() || self.submitted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.set_field(ContactField::Name, "Ada".into());
        state.set_field(ContactField::Email, "ada@example.com".into());
        state.set_field(ContactField::Subject, "Heap research".into());
        state.set_field(ContactField::Message, "Hello".into());
        state
    }

    #[test]
    fn validation_requires_every_field() {
        assert!(filled().validate().is_ok());
        let mut state = filled();
        state.set_field(ContactField::Email, "not-an-email".into());
        assert!(state.validate().is_err());
        let mut state = filled();
        state.set_field(ContactField::Message, "   ".into());
        assert_eq!(state.validate(), Err("Message is required"));
    }

    #[test]
    fn submitted_form_resets_after_window() {
        let mut state = filled();
        state.inquiry = InquiryType::Speaking;
        let start = Instant::now();
        state.submitted_at = Some(start);
        let reset = Duration::from_millis(3000);
        let copy = Duration::from_millis(2000);

        assert!(!state.expire(start + Duration::from_millis(2999), copy, reset));
        assert_eq!(state.name, "Ada");
        assert!(state.expire(start + reset, copy, reset));
        assert!(state.name.is_empty());
        assert_eq!(state.inquiry, InquiryType::General);
        assert!(!state.is_submitted());
    }

    #[test]
    fn copy_feedback_expires() {
        let mut state = ContactState::default();
        let start = Instant::now();
        state.copied = Some((1, start));
        let window = Duration::from_millis(2000);
        state.expire(start + Duration::from_millis(10), window, window);
        assert_eq!(state.copied_index(), Some(1));
        state.expire(start + window, window, window);
        assert_eq!(state.copied_index(), None);
        assert!(!state.has_timers());
    }
}
