// SPDX-License-Identifier: MPL-2.0
//! Contact form model.
//!
//! Sending is simulated: the owner waits a fixed delay after
//! [`SubmitOutcome::Send`] and then calls [`ContactForm::complete_send`].

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Message key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-field-name",
            Field::Email => "contact-field-email",
            Field::Message => "contact-field-message",
        }
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields are filled; the simulated send has started.
    Send,
    /// A required field is empty. Nothing was started.
    Rejected(Field),
    /// A send is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    sending: bool,
}

impl ContactForm {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// First empty field in display order.
    #[must_use]
    pub fn first_missing(&self) -> Option<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.sending {
            return SubmitOutcome::Ignored;
        }
        if let Some(field) = self.first_missing() {
            return SubmitOutcome::Rejected(field);
        }
        self.sending = true;
        SubmitOutcome::Send
    }

    /// Finishes a simulated send: clears every field.
    pub fn complete_send(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "A".into());
        form.set(Field::Email, "a@a.com".into());
        form.set(Field::Message, "hi".into());
        form
    }

    #[test]
    fn complete_form_starts_sending() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Send);
        assert!(form.is_sending());
    }

    #[test]
    fn empty_email_is_rejected_without_sending() {
        let mut form = filled();
        form.set(Field::Email, String::new());
        assert_eq!(form.submit(), SubmitOutcome::Rejected(Field::Email));
        assert!(!form.is_sending());
        assert_eq!(form.name, "A");
    }

    #[test]
    fn first_missing_follows_display_order() {
        let form = ContactForm::default();
        assert_eq!(form.first_missing(), Some(Field::Name));
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut form = filled();
        form.submit();
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn complete_send_clears_fields() {
        let mut form = filled();
        form.submit();
        form.complete_send();
        assert_eq!(form, ContactForm::default());
        assert!(!form.is_sending());
    }
}
