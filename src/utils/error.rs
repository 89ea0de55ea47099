use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdapterError {
    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::SerializationError(_) => {
                "A datasource carries JSON data that could not be encoded".to_string()
            }
            AdapterError::IoError(e) => format!("Could not read input: {}", e),
            AdapterError::ConfigError { message } => message.clone(),
            AdapterError::ConfigValidationError { field, message } => {
                format!("Invalid configuration at {}: {}", field, message)
            }
            AdapterError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdapterError::SerializationError(_) => {
                "Check the datasource json_data table for values that cannot be represented as JSON"
            }
            AdapterError::IoError(_) => "Check that the provisioning file exists and is readable",
            AdapterError::ConfigError { .. } | AdapterError::ConfigValidationError { .. } => {
                "Check the provisioning file syntax"
            }
            AdapterError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the provisioning file"
            }
        }
    }

    /// Whether the error came from loading configuration rather than from a conversion.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, AdapterError::SerializationError(_))
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_from_serde() {
        let err: AdapterError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(matches!(err, AdapterError::SerializationError(_)));
        assert!(!err.is_config_error());
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = AdapterError::InvalidConfigValueError {
            field: "datasources[0].name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };

        assert!(err.is_config_error());
        assert_eq!(
            err.user_friendly_message(),
            "datasources[0].name: Value cannot be empty or whitespace-only"
        );
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the reported value in the provisioning file"
        );
    }

    #[test]
    fn test_parse_error_messages() {
        let err = AdapterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "TOML parsing error: expected `=`".to_string(),
        };

        assert!(err.is_config_error());
        assert_eq!(
            err.user_friendly_message(),
            "Invalid configuration at toml_parsing: TOML parsing error: expected `=`"
        );
        assert_eq!(err.recovery_suggestion(), "Check the provisioning file syntax");
    }
}
