use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No students found")]
    NoData,

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GradeError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 底層 I/O 錯誤種類，非 I/O 錯誤時為 None
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::Io,
            Self::NoData => ErrorCategory::Data,
            Self::Toml(_) | Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoData => ErrorSeverity::Low,
            Self::Toml(_) | Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                ErrorSeverity::Medium
            }
            Self::Io { .. } => ErrorSeverity::High,
            Self::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Student file '{}' was not found", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied while reading '{}'", path)
                }
                _ => format!("Could not read '{}': {}", path, source),
            },
            Self::NoData => "No students found".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Io { .. } => "Check that the file exists and is readable",
            Self::NoData => "Add at least one valid NAME;GRADE line to the file",
            Self::Toml(_) => "Fix the syntax of the TOML configuration file",
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Review the configuration values and command line flags"
            }
            Self::Serialization(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
