//! The contact form posts straight to an external form service; nothing here
//! intercepts the submission. These types describe what the browser sends.

use crate::profile::ContactSettings;

pub const METHOD: &str = "POST";
pub const ACCESS_KEY_FIELD: &str = "access_key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>` kinds.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::TextArea { .. } => None,
        }
    }
}

/// A user-facing field. All of them are `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub static FIELDS: [Field; 3] = [
    Field {
        name: "name",
        label: "Full Name",
        placeholder: "Enter name",
        kind: FieldKind::Text,
    },
    Field {
        name: "email",
        label: "Email",
        placeholder: "Enter email",
        kind: FieldKind::Email,
    },
    Field {
        name: "message",
        label: "Message",
        placeholder: "Your message...",
        kind: FieldKind::TextArea { rows: 4 },
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm<'a> {
    pub action: &'a str,
    pub access_key: &'a str,
}

impl<'a> From<&'a ContactSettings> for ContactForm<'a> {
    fn from(settings: &'a ContactSettings) -> Self {
        Self {
            action: &settings.endpoint,
            access_key: &settings.access_key,
        }
    }
}

impl ContactForm<'_> {
    pub fn fields(&self) -> &'static [Field] {
        &FIELDS
    }

    /// The form-encoded pairs a browser submits, in document order.
    pub fn submission(&self, name: &str, email: &str, message: &str) -> Vec<(&'static str, String)> {
        vec![
            (ACCESS_KEY_FIELD, self.access_key.to_string()),
            (FIELDS[0].name, name.to_string()),
            (FIELDS[1].name, email.to_string()),
            (FIELDS[2].name, message.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile;

    #[test]
    fn test_form_targets_endpoint() {
        let form = ContactForm::from(&profile().contact);
        assert_eq!(form.action, "https://api.web3forms.com/submit");
        assert_eq!(METHOD, "POST");
        assert!(!form.access_key.is_empty());
    }

    #[test]
    fn test_submission_has_exactly_four_fields() {
        let form = ContactForm::from(&profile().contact);
        let message = "Hi Rohith,\n  saw your weather app & liked it!";
        let sent = form.submission("Ada Lovelace", "ada@example.com", message);

        assert_eq!(sent.len(), 4);
        assert_eq!(
            sent,
            vec![
                ("access_key", profile().contact.access_key.clone()),
                ("name", "Ada Lovelace".to_string()),
                ("email", "ada@example.com".to_string()),
                ("message", message.to_string()),
            ]
        );
    }

    #[test]
    fn test_user_fields() {
        let form = ContactForm {
            action: "https://forms.invalid/submit",
            access_key: "key",
        };
        let names = form.fields().iter().map(|f| f.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert_eq!(form.fields()[0].kind.input_type(), Some("text"));
        assert_eq!(form.fields()[1].kind.input_type(), Some("email"));
        assert_eq!(form.fields()[2].kind, FieldKind::TextArea { rows: 4 });
        assert_eq!(form.fields()[2].kind.input_type(), None);
    }
}
