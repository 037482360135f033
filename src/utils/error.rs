use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::IoError(_) => ErrorSeverity::High,
            DemoError::ConfigParseError { .. } => ErrorSeverity::High,
            DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DemoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error; never zero. Clap usage errors own `2`.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            DemoError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML with a [circle] table".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            DemoError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read the config file: {}", e),
            DemoError::ConfigParseError { message } => {
                format!("The config file could not be parsed: {}", message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            DemoError::SerializationError(e) => format!("Could not render the report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let invalid = DemoError::InvalidConfigValueError {
            field: "greeting.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(invalid.severity(), ErrorSeverity::High);
        assert_eq!(invalid.exit_code(), 1);

        let io = DemoError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(io.exit_code(), 1);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let serialization = DemoError::from(json_err);
        assert_eq!(serialization.severity(), ErrorSeverity::Critical);
        assert_eq!(serialization.exit_code(), 3);
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = DemoError::InvalidConfigValueError {
            field: "config".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value '' for config: Path cannot be empty");
        assert!(err.recovery_suggestion().contains("'config'"));
        assert_eq!(err.user_friendly_message(), "Invalid config: Path cannot be empty");
    }
}
