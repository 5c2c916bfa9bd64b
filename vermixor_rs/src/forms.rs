//! Contact and review forms: field state and client-side validation.
//!
//! Validation collects every failure at once so the view can mark all bad
//! fields, but the toast only names the first.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Rating;

/// Default minimum length of a review text, in characters.
pub const MIN_REVIEW_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Role,
    Message,
    Review,
    Rating,
    Consent,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Role => "Role",
            Field::Message => "Project Details",
            Field::Review => "Review",
            Field::Rating => "Rating",
            Field::Consent => "Consent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: Field },
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("{field} must be at least {min} characters (currently {actual})")]
    TooShort { field: Field, min: usize, actual: usize },
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Please consent to publishing your review")]
    ConsentRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing { field } | FieldError::TooShort { field, .. } => *field,
            FieldError::InvalidEmail => Field::Email,
            FieldError::RatingOutOfRange => Field::Rating,
            FieldError::ConsentRequired => Field::Consent,
        }
    }
}

/// All failures found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.first().map(ToString::to_string).unwrap_or_default())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn is_consent_only(&self) -> bool {
        self.0.iter().all(|e| *e == FieldError::ConsentRequired)
    }
}

/// Tunables for validation, filled from [`crate::config::FormsConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormRules {
    pub min_review_len: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_review_len: MIN_REVIEW_LEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Review,
}

/// Payload handed to a transport once a form validates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Submission {
    Contact(ContactForm),
    Review(ReviewForm),
}

impl Submission {
    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Contact(_) => FormKind::Contact,
            Submission::Review(_) => FormKind::Review,
        }
    }
}

/// Common surface of the site's forms.
pub trait Form {
    fn kind(&self) -> FormKind;
    fn validate(&self, rules: &FormRules) -> Result<(), ValidationErrors>;
    fn to_submission(&self) -> Submission;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl Form for ContactForm {
    fn kind(&self) -> FormKind {
        FormKind::Contact
    }

    fn validate(&self, _rules: &FormRules) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require(&mut errors, Field::Name, &self.name);
        require_email(&mut errors, &self.email);
        require(&mut errors, Field::Message, &self.message);
        finish(errors)
    }

    fn to_submission(&self) -> Submission {
        Submission::Contact(self.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub service: String,
    /// Raw star value picked in the form, checked against `1..=5` on validation
    pub rating: u8,
    pub review: String,
    pub consent: bool,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            role: String::new(),
            service: String::new(),
            rating: Rating::MAX,
            review: String::new(),
            consent: false,
        }
    }
}

impl Form for ReviewForm {
    fn kind(&self) -> FormKind {
        FormKind::Review
    }

    fn validate(&self, rules: &FormRules) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require(&mut errors, Field::Name, &self.name);
        require_email(&mut errors, &self.email);
        require(&mut errors, Field::Company, &self.company);
        require(&mut errors, Field::Role, &self.role);
        if Rating::new(self.rating).is_none() {
            errors.push(FieldError::RatingOutOfRange);
        }
        let len = self.review.trim().chars().count();
        if len == 0 {
            errors.push(FieldError::Missing {
                field: Field::Review,
            });
        } else if len < rules.min_review_len {
            errors.push(FieldError::TooShort {
                field: Field::Review,
                min: rules.min_review_len,
                actual: len,
            });
        }
        if !self.consent {
            errors.push(FieldError::ConsentRequired);
        }
        finish(errors)
    }

    fn to_submission(&self) -> Submission {
        Submission::Review(self.clone())
    }
}

fn require(errors: &mut Vec<FieldError>, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::Missing { field });
    }
}

fn require_email(errors: &mut Vec<FieldError>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::Missing {
            field: Field::Email,
        });
    } else if !looks_like_email(value) {
        errors.push(FieldError::InvalidEmail);
    }
}

/// Same bar as a browser `type="email"` input: one `@` with text on both sides
/// and no whitespace.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Aisha Khan".into(),
            email: "aisha@brightretail.pk".into(),
            message: "We need a storefront rebuild before the holiday season.".into(),
            ..Default::default()
        }
    }

    fn valid_review() -> ReviewForm {
        ReviewForm {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            company: "Northwind".into(),
            role: "CTO".into(),
            service: "apps".into(),
            rating: 4,
            review: "Solid delivery, clear weekly updates throughout.".into(),
            consent: true,
        }
    }

    #[test]
    fn valid_contact_passes() {
        assert_eq!(valid_contact().validate(&FormRules::default()), Ok(()));
    }

    #[test]
    fn contact_optional_fields_may_be_empty() {
        let form = valid_contact();
        assert!(form.company.is_empty() && form.budget.is_empty() && form.timeline.is_empty());
        assert!(form.validate(&FormRules::default()).is_ok());
    }

    #[test]
    fn contact_collects_every_missing_field() {
        let form = ContactForm {
            email: "not-an-email".into(),
            message: "   ".into(),
            ..Default::default()
        };
        let errors = form.validate(&FormRules::default()).expect_err("invalid form");
        assert_eq!(
            errors.errors(),
            &[
                FieldError::Missing { field: Field::Name },
                FieldError::InvalidEmail,
                FieldError::Missing { field: Field::Message },
            ]
        );
        assert_eq!(errors.to_string(), "Name is required");
        assert!(errors.has(Field::Email));
    }

    #[test]
    fn review_requires_minimum_length() {
        let form = ReviewForm {
            review: "Too short".into(),
            ..valid_review()
        };
        let errors = form.validate(&FormRules::default()).expect_err("short review");
        assert_eq!(
            errors.first(),
            Some(&FieldError::TooShort {
                field: Field::Review,
                min: 20,
                actual: 9
            })
        );
    }

    #[test]
    fn review_length_rule_is_configurable() {
        let form = ReviewForm {
            review: "Too short".into(),
            ..valid_review()
        };
        assert!(form.validate(&FormRules { min_review_len: 5 }).is_ok());
    }

    #[test]
    fn review_requires_consent() {
        let form = ReviewForm {
            consent: false,
            ..valid_review()
        };
        let errors = form.validate(&FormRules::default()).expect_err("no consent");
        assert!(errors.is_consent_only());
        assert_eq!(errors.to_string(), "Please consent to publishing your review");
    }

    #[test]
    fn review_rating_must_be_in_range() {
        let form = ReviewForm {
            rating: 0,
            ..valid_review()
        };
        let errors = form.validate(&FormRules::default()).expect_err("bad rating");
        assert!(errors.has(Field::Rating));
    }

    #[test]
    fn review_defaults_to_five_stars() {
        assert_eq!(ReviewForm::default().rating, 5);
        assert!(!ReviewForm::default().consent);
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("hello@vermixor.com"));
        assert!(!looks_like_email("@vermixor.com"));
        assert!(!looks_like_email("hello@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("a b@c.com"));
    }

    #[test]
    fn submission_is_tagged_by_kind() {
        let json = serde_json::to_value(valid_contact().to_submission()).expect("serializes");
        assert_eq!(json["kind"], "contact");
        assert_eq!(json["name"], "Aisha Khan");
        assert_eq!(valid_review().to_submission().kind(), FormKind::Review);
    }
}
