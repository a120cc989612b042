use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Resume configuration not found or unreadable: {}", .path.display())]
    ConfigNotFoundError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resume configuration {}: {}", .path.display(), .source)]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Resume configuration has no [[default]] profile")]
    MissingProfileError,

    #[error("Profile has no [[default.experience]] entries")]
    MissingExperienceError,

    #[error("Experience entry {index} is missing field '{field}'")]
    MissingFieldError { index: usize, field: String },

    #[error("Experience entry {index} has a non-string value for field '{field}'")]
    InvalidFieldTypeError { index: usize, field: String },

    #[error("Unknown resume field: {0}")]
    UnknownFieldError(String),

    #[error("Cannot reformat date '{date}' as {format}: {reason}")]
    DateFormatError {
        date: String,
        format: String,
        reason: String,
    },

    #[error("Experience entry {index} does not exist ({len} entries loaded)")]
    EntryOutOfRangeError { index: usize, len: usize },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ResumeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ResumeError::ConfigNotFoundError { .. }
            | ResumeError::ConfigParseError { .. }
            | ResumeError::MissingProfileError
            | ResumeError::MissingExperienceError
            | ResumeError::MissingFieldError { .. }
            | ResumeError::InvalidFieldTypeError { .. }
            | ResumeError::InvalidValueError { .. } => ErrorSeverity::High,
            ResumeError::UnknownFieldError(_)
            | ResumeError::DateFormatError { .. }
            | ResumeError::EntryOutOfRangeError { .. } => ErrorSeverity::Medium,
            ResumeError::IoError(_)
            | ResumeError::SerializationError(_)
            | ResumeError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ResumeError::ConfigNotFoundError { path, .. } => {
                format!("Could not read resume file '{}'", path.display())
            }
            ResumeError::ConfigParseError { path, source } => {
                format!("Resume file '{}' is not valid TOML\n{}", path.display(), source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResumeError::ConfigNotFoundError { .. } => {
                "Check the path passed with --file and that the file is readable"
            }
            ResumeError::ConfigParseError { .. } => {
                "Fix the TOML syntax near the reported line and column"
            }
            ResumeError::MissingProfileError => {
                "Add a [[default]] table at the top of the resume file"
            }
            ResumeError::MissingExperienceError => {
                "Add at least one [[default.experience]] block under [[default]]"
            }
            ResumeError::MissingFieldError { .. } | ResumeError::InvalidFieldTypeError { .. } => {
                "Every experience needs name, location, startdate, enddate, jobtitle and description as strings"
            }
            ResumeError::UnknownFieldError(_) => {
                "Use one of: name, location, startdate, enddate, jobtitle, description"
            }
            ResumeError::DateFormatError { .. } => {
                "Dates must be written as MM/dd/yyyy, for example 09/01/2023"
            }
            ResumeError::InvalidValueError { .. } => "Correct the reported value and try again",
            ResumeError::EntryOutOfRangeError { .. } => {
                "Run the `companies` command to see the valid entry indexes"
            }
            ResumeError::IoError(_) | ResumeError::SerializationError(_) | ResumeError::CsvError(_) => {
                "Check that the output stream is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;
