//! Input validation for new employee records.
//!
//! # Design
//! Rules run in a fixed order — name, then age, then email — and the first
//! failure is the only one reported; later rules are not evaluated. The
//! ordering determines which single message a user sees, so it is part of
//! the contract. Valid input is normalized (trimmed name and email, parsed
//! age) into a [`NewEmployee`]; an invalid record never reaches the network.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::NewEmployee;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").expect("valid email regex"));

/// Why a submitted record was rejected. Exactly one rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming.
    EmptyName,
    /// Name contains something other than letters and spaces.
    InvalidNameChars,
    /// Age is empty or not an integer.
    InvalidAge,
    /// Age parsed but is zero or negative.
    AgeNotPositive,
    /// Email is empty or not a well-formed gmail.com address.
    InvalidEmail,
}

impl ValidationError {
    /// The message shown to the user for this rule.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Please enter a name.",
            ValidationError::InvalidNameChars => {
                "Name should only contain alphabets and spaces."
            }
            ValidationError::InvalidAge => "Please enter a valid age.",
            ValidationError::AgeNotPositive => "Please enter a valid age greater than 0.",
            ValidationError::InvalidEmail => "Please enter a valid Gmail address.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate the name field. Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidNameChars);
    }
    Ok(trimmed.to_string())
}

/// Validate the age field. Returns the parsed age.
pub fn validate_age(age: &str) -> Result<u32, ValidationError> {
    let trimmed = age.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidAge);
    }
    let parsed: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidAge)?;
    if parsed <= 0 {
        return Err(ValidationError::AgeNotPositive);
    }
    u32::try_from(parsed).map_err(|_| ValidationError::InvalidAge)
}

/// Validate the email field. Returns the trimmed email.
///
/// The pattern is matched against the raw input, so surrounding whitespace
/// rejects rather than being silently forgiven.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.trim().is_empty() || !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.trim().to_string())
}

/// Run all three rules in order, short-circuiting on the first failure.
pub fn validate_employee_input(
    name: &str,
    age: &str,
    email: &str,
) -> Result<NewEmployee, ValidationError> {
    let name = validate_name(name)?;
    let age = validate_age(age)?;
    let email = validate_email(email)?;
    Ok(NewEmployee { name, age, email })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert_eq!(validate_name("Bob Lee").unwrap(), "Bob Lee");
        assert_eq!(validate_name("  Ann  ").unwrap(), "Ann");
        assert_eq!(validate_name("Mary Jane Watson").unwrap(), "Mary Jane Watson");
    }

    #[test]
    fn name_rejects_empty_and_whitespace_only() {
        assert_eq!(validate_name("").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(validate_name("   ").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn name_rejects_digits_and_punctuation() {
        for name in ["Bob3", "Ann-Marie", "O'Brien", "a.b", "x!"] {
            assert_eq!(
                validate_name(name).unwrap_err(),
                ValidationError::InvalidNameChars,
                "{name}"
            );
        }
    }

    #[test]
    fn age_accepts_positive_integers() {
        assert_eq!(validate_age("1").unwrap(), 1);
        assert_eq!(validate_age(" 25 ").unwrap(), 25);
        assert_eq!(validate_age("120").unwrap(), 120);
    }

    #[test]
    fn age_rejects_non_numeric() {
        for age in ["", "  ", "abc", "25.5", "2five"] {
            assert_eq!(
                validate_age(age).unwrap_err(),
                ValidationError::InvalidAge,
                "{age:?}"
            );
        }
    }

    #[test]
    fn age_rejects_zero_and_negative() {
        assert_eq!(validate_age("0").unwrap_err(), ValidationError::AgeNotPositive);
        assert_eq!(validate_age("-5").unwrap_err(), ValidationError::AgeNotPositive);
    }

    #[test]
    fn email_accepts_restricted_local_part_at_gmail() {
        assert_eq!(
            validate_email("a.b-c_d@gmail.com").unwrap(),
            "a.b-c_d@gmail.com"
        );
        assert_eq!(validate_email("bob+tag@gmail.com").unwrap(), "bob+tag@gmail.com");
    }

    #[test]
    fn email_rejects_wrong_domain_and_empty_local_part() {
        assert_eq!(
            validate_email("a@b.com").unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert_eq!(
            validate_email("@gmail.com").unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert_eq!(validate_email("").unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn email_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_email(" bob@gmail.com").unwrap_err(),
            ValidationError::InvalidEmail
        );
    }

    #[test]
    fn rules_short_circuit_in_order() {
        // Both name and age invalid: name wins.
        assert_eq!(
            validate_employee_input("", "abc", "x").unwrap_err(),
            ValidationError::EmptyName
        );
        // Name valid, both age and email invalid: age wins.
        assert_eq!(
            validate_employee_input("Ann", "-1", "x").unwrap_err(),
            ValidationError::AgeNotPositive
        );
    }

    #[test]
    fn valid_input_is_normalized() {
        let record = validate_employee_input(" Bob Lee ", " 25 ", "bob@gmail.com").unwrap();
        assert_eq!(record.name, "Bob Lee");
        assert_eq!(record.age, 25);
        assert_eq!(record.email, "bob@gmail.com");
    }
}
