//! Input-format validation shared by the DB and API layers.
//!
//! Every function returns `Err(CoreError::Validation)` with a message fit for
//! direct inclusion in an error response. Validation always runs before any
//! mutation, so a failure here means nothing was written.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());
// Contact phone on the application form: at least 10 digits, optional +country.
static CONTACT_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());
static GSTIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[A-Z]{5}\d{4}[A-Z][A-Z\d]Z[A-Z\d]$").unwrap());
static PAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
static IFSC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static ACCOUNT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9,18}$").unwrap());

/// Address contact phone: exactly 10 digits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Phone must be exactly 10 digits".into(),
        ))
    }
}

/// Application-form contact phone: 10-15 digits with an optional leading `+`.
pub fn validate_contact_phone(phone: &str) -> Result<(), CoreError> {
    if CONTACT_PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid phone number".into()))
    }
}

/// Indian postal code: exactly 6 digits.
pub fn validate_pincode(pincode: &str) -> Result<(), CoreError> {
    if PINCODE_RE.is_match(pincode) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Pincode must be exactly 6 digits".into(),
        ))
    }
}

pub fn validate_gstin(gstin: &str) -> Result<(), CoreError> {
    if GSTIN_RE.is_match(gstin) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid GSTIN format".into()))
    }
}

pub fn validate_pan(pan: &str) -> Result<(), CoreError> {
    if PAN_RE.is_match(pan) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid PAN format".into()))
    }
}

pub fn validate_ifsc(ifsc: &str) -> Result<(), CoreError> {
    if IFSC_RE.is_match(ifsc) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid IFSC code".into()))
    }
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email address".into()))
    }
}

/// Bank account number: 9-18 digits.
pub fn validate_account_number(account: &str) -> Result<(), CoreError> {
    if ACCOUNT_NUMBER_RE.is_match(account) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid account number".into()))
    }
}

/// Require a non-empty value for a named field.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// Require a minimum (trimmed) length for a named field.
pub fn require_min_len(value: &str, min: usize, field: &str) -> Result<(), CoreError> {
    if value.trim().len() < min {
        Err(CoreError::Validation(format!(
            "{field} must be at least {min} characters"
        )))
    } else {
        Ok(())
    }
}

/// Selling price must not exceed the MRP.
pub fn validate_price_within_mrp(price: f64, mrp: f64) -> Result<(), CoreError> {
    if price < 0.0 || mrp < 0.0 {
        return Err(CoreError::Validation("Price must be positive".into()));
    }
    if price > mrp {
        return Err(CoreError::Validation(
            "MRP must be greater than or equal to price".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("987654321").is_err());
        assert!(validate_phone("98765432100").is_err());
        assert!(validate_phone("98765abc10").is_err());
        assert!(validate_phone("+919876543210").is_err());
    }

    #[test]
    fn contact_phone_accepts_country_prefix() {
        assert!(validate_contact_phone("9876543210").is_ok());
        assert!(validate_contact_phone("+919876543210").is_ok());
        assert!(validate_contact_phone("12345").is_err());
    }

    #[test]
    fn pincode_requires_exactly_six_digits() {
        assert!(validate_pincode("400050").is_ok());
        assert!(validate_pincode("4000").is_err());
        assert!(validate_pincode("4000501").is_err());
        assert!(validate_pincode("40005x").is_err());
    }

    #[test]
    fn gstin_and_pan_formats() {
        assert!(validate_gstin("27AABCU9603R1ZM").is_ok());
        assert!(validate_gstin("27AABCU9603R1XM").is_err());
        assert!(validate_pan("AABCU9603R").is_ok());
        assert!(validate_pan("AABC09603R").is_err());
    }

    #[test]
    fn ifsc_format() {
        assert!(validate_ifsc("HDFC0001234").is_ok());
        assert!(validate_ifsc("HDFC1001234").is_err());
        assert!(validate_ifsc("HD0001234").is_err());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn account_number_is_nine_to_eighteen_digits() {
        assert!(validate_account_number("123456789").is_ok());
        assert!(validate_account_number("12345678").is_err());
        assert!(validate_account_number("1234567890123456789").is_err());
    }

    #[test]
    fn price_must_not_exceed_mrp() {
        assert!(validate_price_within_mrp(499.0, 999.0).is_ok());
        assert!(validate_price_within_mrp(999.0, 999.0).is_ok());
        assert!(validate_price_within_mrp(1000.0, 999.0).is_err());
        assert!(validate_price_within_mrp(-1.0, 999.0).is_err());
    }
}
