//! Error types for the Shift Summary Calculator.
//!
//! The calculation itself cannot fail: malformed input is coerced to zero
//! before it reaches any formula. These errors cover the edges around it,
//! namely configuration loading, form validation, the API boundary and the
//! logo fetch.

use thiserror::Error;

/// The main error type for the Shift Summary Calculator.
///
/// # Example
///
/// ```
/// use shift_summary::error::CalculatorError;
///
/// let error = CalculatorError::UnknownField {
///     name: "mileage".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown field: mileage");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A field registry was structurally invalid.
    #[error("Invalid field registry: {message}")]
    InvalidRegistry {
        /// What was wrong with the registry.
        message: String,
    },

    /// A field name did not match any of the form fields.
    #[error("Unknown field: {name}")]
    UnknownField {
        /// The unrecognised field name.
        name: String,
    },

    /// A value entered into the form was rejected.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidFieldValue {
        /// The field the value was entered into.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// The logo could not be fetched within the retry policy.
    #[error("Couldn't load image from '{url}' after {attempts} attempts: {message}")]
    LogoUnavailable {
        /// The logo URL.
        url: String,
        /// How many attempts were made.
        attempts: u32,
        /// The error from the final attempt.
        message: String,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalculatorError::ConfigNotFound {
            path: "/missing/fields.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/fields.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalculatorError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_field_value_displays_field_and_message() {
        let error = CalculatorError::InvalidFieldValue {
            field: "tolls".to_string(),
            message: "Please enter a valid number between 0 and 10000".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for field 'tolls': Please enter a valid number between 0 and 10000"
        );
    }

    #[test]
    fn test_logo_unavailable_displays_attempts() {
        let error = CalculatorError::LogoUnavailable {
            url: "http://localhost/logo.jpg".to_string(),
            attempts: 3,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Couldn't load image from 'http://localhost/logo.jpg' after 3 attempts: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalculatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_field() -> CalculatorResult<()> {
            Err(CalculatorError::UnknownField {
                name: "mileage".to_string(),
            })
        }

        fn propagates_error() -> CalculatorResult<()> {
            returns_unknown_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
