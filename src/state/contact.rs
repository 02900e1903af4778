use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn all() -> [FormField; 3] {
        [FormField::Name, FormField::Email, FormField::Message]
    }

    /// The input's `name`/`id` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::all()
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out the {0} field")]
    MissingField(FormField),
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
}

/// Where a submitted message goes. Nothing in this site talks to a mail
/// service; a real backend would plug in here.
pub trait MessageSink {
    fn deliver(&self, message: &FormData);
}

/// Writes submissions to the log (the browser console under hydration).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn deliver(&self, message: &FormData) {
        match serde_json::to_string(message) {
            Ok(json) => log::info!("Form submitted: {json}"),
            Err(e) => log::warn!("Form submitted but could not be serialized: {e}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
}

impl ContactForm {
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    /// First field that would fail the browser's `required` check.
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::all()
            .into_iter()
            .find(|f| self.data.get(*f).is_empty())
    }

    /// Hands the current values to `sink`. Fields keep their values afterwards.
    pub fn submit(&self, sink: &impl MessageSink) -> Result<FormData, ContactError> {
        if let Some(field) = self.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        let message = self.data.clone();
        sink.deliver(&message);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<FormData>>,
    }

    impl MessageSink for RecordingSink {
        fn deliver(&self, message: &FormData) {
            self.delivered.borrow_mut().push(message.clone());
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(FormField::Name, "A");
        form.update_field(FormField::Email, "a@b.com");
        form.update_field(FormField::Message, "hi");
        form
    }

    #[test]
    fn test_fields_update_independently() {
        let mut form = ContactForm::default();
        assert_eq!(form.data(), &FormData::default());

        form.update_field(FormField::Email, "x@y.z");
        assert_eq!(form.value(FormField::Email), "x@y.z");
        assert_eq!(form.value(FormField::Name), "");
        assert_eq!(form.value(FormField::Message), "");

        form.update_field(FormField::Email, "");
        assert_eq!(form.value(FormField::Email), "");
    }

    #[test]
    fn test_submit_complete_form() {
        let form = filled();
        let sink = RecordingSink::default();

        let sent = form.submit(&sink).expect("complete form should submit");
        assert_eq!(sent.name, "A");
        assert_eq!(sent.email, "a@b.com");
        assert_eq!(sent.message, "hi");
        assert_eq!(*sink.delivered.borrow(), vec![sent]);

        // not reset after submission
        assert_eq!(form.value(FormField::Name), "A");
    }

    #[test]
    fn test_submit_with_empty_field_never_reaches_sink() {
        let sink = RecordingSink::default();
        for field in FormField::all() {
            let mut form = filled();
            form.update_field(field, "");
            assert_eq!(form.submit(&sink), Err(ContactError::MissingField(field)));
        }
        assert!(sink.delivered.borrow().is_empty());

        let empty = ContactForm::default();
        assert_eq!(
            empty.submit(&sink),
            Err(ContactError::MissingField(FormField::Name))
        );
    }

    #[test]
    fn test_no_email_format_validation() {
        let mut form = filled();
        form.update_field(FormField::Email, "not an email");
        let sink = RecordingSink::default();
        assert!(form.submit(&sink).is_ok());
    }

    #[test]
    fn test_missing_field_reports_first_empty() {
        let mut form = ContactForm::default();
        form.update_field(FormField::Name, "A");
        assert_eq!(form.missing_field(), Some(FormField::Email));
        assert_eq!(
            ContactError::MissingField(FormField::Email).to_string(),
            "Please fill out the email field"
        );
    }

    #[test]
    fn test_field_parses_from_input_name() {
        for field in FormField::all() {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
        // names are matched exactly, as written in the markup
        assert_eq!(
            "Email".parse::<FormField>(),
            Err(ContactError::UnknownField("Email".to_string()))
        );
        assert_eq!(
            "".parse::<FormField>(),
            Err(ContactError::UnknownField(String::new()))
        );
    }

    #[test]
    fn test_console_sink_accepts_payload() {
        // only observable through the log; must not panic
        ConsoleSink.deliver(filled().data());
    }
}
