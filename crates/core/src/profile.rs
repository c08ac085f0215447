//! Seller profile form vocabulary and validation.

use crate::error::CoreError;

/// Product categories a seller can apply under.
pub const CATEGORIES: &[&str] = &[
    "Fashion",
    "Footwear",
    "Beauty",
    "Home & Kitchen",
    "Electronics",
    "Grocery",
    "Specialty",
];

/// How long the seller's brand has been selling.
pub const AVAILABILITY_STAGES: &[&str] = &[
    "Launching now",
    "<3 months",
    "3-12 months",
    "1-3 years",
    "3+ years",
];

/// Maximum length of the free-text additional-info field.
pub const MAX_ADDITIONAL_INFO_LEN: usize = 500;

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown category '{category}'"
        )))
    }
}

pub fn validate_availability_stage(stage: &str) -> Result<(), CoreError> {
    if AVAILABILITY_STAGES.contains(&stage) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown availability stage '{stage}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_pass() {
        assert!(validate_category("Fashion").is_ok());
        assert!(validate_availability_stage("1-3 years").is_ok());
    }

    #[test]
    fn unknown_values_fail() {
        assert!(validate_category("Automotive").is_err());
        assert!(validate_availability_stage("forever").is_err());
    }
}
