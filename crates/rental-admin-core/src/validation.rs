//! Field Validators
//!
//! Each validator takes the field label and the raw input and returns the
//! first failing rule's message, if any. Inputs are trimmed first.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("letters pattern is valid"));
static TEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("contact pattern is valid"));

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

pub type FieldResult = Option<FieldError>;

pub fn required(label: &str, value: &str) -> FieldResult {
    if value.trim().is_empty() {
        Some(FieldError::new(format!("{} is required", label)))
    } else {
        None
    }
}

pub fn letters_only(label: &str, value: &str) -> FieldResult {
    required(label, value).or_else(|| {
        (!LETTERS_ONLY.is_match(value.trim()))
            .then(|| FieldError::new(format!("{} must contain only letters", label)))
    })
}

pub fn ten_digits(label: &str, value: &str) -> FieldResult {
    required(label, value).or_else(|| {
        (!TEN_DIGITS.is_match(value.trim()))
            .then(|| FieldError::new(format!("{} must be a 10-digit number", label)))
    })
}

pub fn positive_number(label: &str, value: &str) -> FieldResult {
    required(label, value).or_else(|| match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => None,
        _ => Some(FieldError::new(format!("{} must be a positive number", label))),
    })
}

/// Whole number within `min..=max`
pub fn whole_number_in(label: &str, value: &str, min: u32, max: u32) -> FieldResult {
    required(label, value).or_else(|| match value.trim().parse::<u32>() {
        Ok(n) if (min..=max).contains(&n) => None,
        Ok(_) => Some(FieldError::new(format!("{} must be between {} and {}", label, min, max))),
        Err(_) => Some(FieldError::new(format!("{} must be a whole number", label))),
    })
}

/// Gate for numeric-only inputs: the empty string stays editable
pub fn is_numeric_input(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().map_or(false, |n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("Name", "Jane"), None);
        assert_eq!(letters_only("Name", "  Jane "), None);
        assert_eq!(
            letters_only("Name", "Jane Doe").unwrap().message,
            "Name must contain only letters"
        );
        assert!(letters_only("Name", "J4ne").is_some());
        assert!(letters_only("Name", "O'Neil").is_some());
        assert_eq!(letters_only("Name", "").unwrap().message, "Name is required");
        assert_eq!(letters_only("Name", "   ").unwrap().message, "Name is required");
    }

    #[test]
    fn test_ten_digits() {
        assert_eq!(ten_digits("Contact", "0712345678"), None);
        assert_eq!(
            ten_digits("Contact", "071234567").unwrap().message,
            "Contact must be a 10-digit number"
        );
        assert!(ten_digits("Contact", "071234567a").is_some());
        assert!(ten_digits("Contact", "07123456789").is_some());
        assert_eq!(ten_digits("Contact", "").unwrap().message, "Contact is required");
    }

    #[test]
    fn test_ten_digits_rejects_non_ascii_digits() {
        assert!(ten_digits("Contact", "٠٧١٢٣٤٥٦٧٨").is_some());
    }

    #[test]
    fn test_positive_number() {
        assert_eq!(positive_number("Price", "150"), None);
        assert_eq!(positive_number("Price", "0.5"), None);
        assert_eq!(
            positive_number("Price", "0").unwrap().message,
            "Price must be a positive number"
        );
        assert!(positive_number("Price", "-5").is_some());
        assert!(positive_number("Price", "abc").is_some());
        assert!(positive_number("Price", "inf").is_some());
        assert_eq!(positive_number("Price", " ").unwrap().message, "Price is required");
    }

    #[test]
    fn test_whole_number_in() {
        assert_eq!(whole_number_in("Age", "35", 18, 100), None);
        assert_eq!(
            whole_number_in("Age", "12", 18, 100).unwrap().message,
            "Age must be between 18 and 100"
        );
        assert_eq!(
            whole_number_in("Age", "30.5", 18, 100).unwrap().message,
            "Age must be a whole number"
        );
        assert_eq!(whole_number_in("Age", "", 18, 100).unwrap().message, "Age is required");
    }

    #[test]
    fn test_is_numeric_input() {
        assert!(is_numeric_input("123"));
        assert!(is_numeric_input(""));
        assert!(is_numeric_input("1.5"));
        assert!(!is_numeric_input("12a"));
        assert!(!is_numeric_input("NaN"));
    }

    #[test]
    fn test_required() {
        assert_eq!(required("Type", "van"), None);
        assert_eq!(required("Type", "").unwrap().message, "Type is required");
    }
}
