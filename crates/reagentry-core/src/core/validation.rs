use thiserror::Error;

/// Separator used between the base version and contributor identifiers in a compatibility
/// string. Identifiers may not contain it.
pub const FINGERPRINT_SEPARATOR: char = '+';

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Substance name cannot be empty")]
    EmptyName,

    #[error("Contributor identifier cannot be empty")]
    EmptyIdentifier,

    #[error("Identifier '{identifier}' contains the reserved character '{character}'")]
    IllegalCharacter { identifier: String, character: char },

    #[error("Invalid quantity {quantity} for substance '{substance}' (must be finite and positive)")]
    InvalidQuantity { substance: String, quantity: f64 },

    #[error("Invalid value {value} for substance '{substance}' (must be finite)")]
    InvalidValue { substance: String, value: f64 },

    #[error("Invalid half-life {value} for substance '{substance}' (must be finite and positive)")]
    InvalidHalfLife { substance: String, value: f64 },

    #[error("Reaction must consume at least one reactant")]
    NoReactants,

    #[error("Reactant '{0}' is listed more than once in the same reaction")]
    DuplicateReactant(String),

    #[error("Language tag cannot be empty")]
    EmptyLanguageTag,

    #[error("No localization entry exists for key '{0}'")]
    UnknownLocalizationKey(String),

    #[error("No consumption handler named '{0}' has been registered")]
    UnknownConsumptionHandler(String),
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_identifier(identifier: &str) -> Result<(), ValidationError> {
    if identifier.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    if identifier.contains(FINGERPRINT_SEPARATOR) {
        return Err(ValidationError::IllegalCharacter {
            identifier: identifier.to_string(),
            character: FINGERPRINT_SEPARATOR,
        });
    }
    Ok(())
}

pub fn validate_quantity(substance: &str, quantity: f64) -> Result<(), ValidationError> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(ValidationError::InvalidQuantity {
            substance: substance.to_string(),
            quantity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_empty_and_blank_names() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert!(validate_name("Water").is_ok());
    }

    #[test]
    fn validate_identifier_rejects_separator() {
        let result = validate_identifier("com.example+extra");
        assert_eq!(
            result,
            Err(ValidationError::IllegalCharacter {
                identifier: "com.example+extra".to_string(),
                character: '+',
            })
        );
    }

    #[test]
    fn validate_identifier_rejects_empty() {
        assert_eq!(validate_identifier(""), Err(ValidationError::EmptyIdentifier));
    }

    #[test]
    fn validate_identifier_accepts_reverse_domain_ids() {
        assert!(validate_identifier("com.example.sweat").is_ok());
    }

    #[test]
    fn validate_quantity_rejects_zero_negative_and_non_finite() {
        assert!(validate_quantity("Water", 0.0).is_err());
        assert!(validate_quantity("Water", -1.0).is_err());
        assert!(validate_quantity("Water", f64::NAN).is_err());
        assert!(validate_quantity("Water", f64::INFINITY).is_err());
        assert!(validate_quantity("Water", 0.1).is_ok());
    }
}
