use crate::domain::model::{Field, FieldValidationError};
use regex::Regex;
use std::sync::LazyLock;

pub type FieldResult = std::result::Result<(), FieldValidationError>;

// No whitespace, exactly one '@', at least one '.' after it.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Runs the rule for one field against its raw (untrimmed) value.
pub fn check(field: Field, raw: &str) -> FieldResult {
    match field {
        Field::Name => check_name(raw),
        Field::Email => check_email(raw),
        Field::Subject => check_subject(raw),
        Field::Message => check_message(raw),
    }
}

pub fn check_name(raw: &str) -> FieldResult {
    let name = raw.trim();

    if name.is_empty() {
        fail(Field::Name, "Name is required")
    } else if name.chars().count() < 2 {
        fail(Field::Name, "Name must be at least 2 characters")
    } else {
        Ok(())
    }
}

pub fn check_email(raw: &str) -> FieldResult {
    let email = raw.trim();

    if email.is_empty() {
        fail(Field::Email, "Email is required")
    } else if !EMAIL_RE.is_match(email) {
        fail(Field::Email, "Please enter a valid email")
    } else {
        Ok(())
    }
}

pub fn check_subject(raw: &str) -> FieldResult {
    let subject = raw.trim();

    if subject.is_empty() {
        fail(Field::Subject, "Subject is required")
    } else if subject.chars().count() < 3 {
        fail(Field::Subject, "Subject must be at least 3 characters")
    } else {
        Ok(())
    }
}

pub fn check_message(raw: &str) -> FieldResult {
    let message = raw.trim();

    if message.is_empty() {
        fail(Field::Message, "Message is required")
    } else if message.chars().count() < 10 {
        fail(Field::Message, "Message must be at least 10 characters")
    } else {
        Ok(())
    }
}

fn fail(field: Field, message: &'static str) -> FieldResult {
    Err(FieldValidationError { field, message })
}
