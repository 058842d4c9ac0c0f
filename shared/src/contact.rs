use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topics offered in the contact form's subject picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    /// Anything else.
    General,
    /// Request for a new article or topic.
    ContentSuggestion,
    /// Factual error in published content.
    Correction,
    /// Business enquiries.
    Partnership,
    /// Problems using the site.
    Technical,
}

impl ContactSubject {
    /// Every subject in picker order.
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::General,
        ContactSubject::ContentSuggestion,
        ContactSubject::Correction,
        ContactSubject::Partnership,
        ContactSubject::Technical,
    ];

    /// Form value.
    pub fn value(self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::ContentSuggestion => "content-suggestion",
            ContactSubject::Correction => "correction",
            ContactSubject::Partnership => "partnership",
            ContactSubject::Technical => "technical",
        }
    }

    /// Picker label.
    pub fn label(self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::ContentSuggestion => "Content Suggestion",
            ContactSubject::Correction => "Report an Error",
            ContactSubject::Partnership => "Partnership",
            ContactSubject::Technical => "Technical Issue",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactSubject {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.value() == s.trim())
            .ok_or(ContactFieldError::UnknownSubject)
    }
}

/// One problem with a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    /// Name left blank.
    #[error("Please enter your name.")]
    MissingName,
    /// Email left blank.
    #[error("Please enter your email address.")]
    MissingEmail,
    /// Email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// Subject not picked from the list.
    #[error("Please choose a subject.")]
    UnknownSubject,
    /// Message left blank.
    #[error("Please enter a message.")]
    MissingMessage,
}

/// Raw contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// [`ContactSubject::value`] of the chosen subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Every problem with the current field values, in field order.
    pub fn validate(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactFieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactFieldError::MissingEmail);
        } else if !is_plausible_email(email) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.subject.parse::<ContactSubject>().is_err() {
            errors.push(ContactFieldError::UnknownSubject);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactFieldError::MissingMessage);
        }
        errors
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Alex".into(),
            email: "alex@example.com.au".into(),
            subject: "correction".into(),
            message: "The RTP figure looks off.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn blank_form_reports_every_field() {
        assert_eq!(
            ContactForm::default().validate(),
            vec![
                ContactFieldError::MissingName,
                ContactFieldError::MissingEmail,
                ContactFieldError::UnknownSubject,
                ContactFieldError::MissingMessage,
            ]
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["alex", "alex@", "@example.com", "a@b@c.com", "alex@example", "a b@c.com"] {
            let form = ContactForm {
                email: email.into(),
                ..filled()
            };
            assert_eq!(form.validate(), vec![ContactFieldError::InvalidEmail], "{email}");
        }
    }

    #[test]
    fn subjects_round_trip_through_form_values() {
        for subject in ContactSubject::ALL {
            assert_eq!(subject.value().parse::<ContactSubject>(), Ok(subject));
        }
        assert!("sales".parse::<ContactSubject>().is_err());
    }
}
