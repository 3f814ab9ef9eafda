use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("'{type_name}' object does not support item assignment")]
    ImmutabilityViolation { type_name: String },

    #[error("cannot assign to field '{field}'")]
    FrozenInstance { field: String },

    #[error("'{type_name}' object has no attribute '{field}'")]
    UnknownField { type_name: String, field: String },

    #[error("Unknown lesson: {name}")]
    UnknownLesson { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Chart rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 課程示範中刻意觸發的錯誤
    Demonstration,
    Configuration,
    Io,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::ImmutabilityViolation { .. }
            | LessonError::FrozenInstance { .. }
            | LessonError::UnknownField { .. } => ErrorCategory::Demonstration,
            LessonError::UnknownLesson { .. }
            | LessonError::ConfigError { .. }
            | LessonError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LessonError::IoError(_) | LessonError::SerializationError(_) => ErrorCategory::Io,
            LessonError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Demonstration => ErrorSeverity::Low,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 刻意示範的不可變錯誤，呼叫端應在本地攔截
    pub fn is_expected(&self) -> bool {
        self.category() == ErrorCategory::Demonstration
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::UnknownLesson { name } => {
                format!("No lesson named '{}'. Run `lesson-kit list` to see them all.", name)
            }
            LessonError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            LessonError::RenderError { .. } => "Could not draw the chart".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Demonstration => "This error is part of the lesson; nothing to fix",
            ErrorCategory::Configuration => "Check the config file and command-line flags",
            ErrorCategory::Io => "Check file permissions and that the terminal is writable",
            ErrorCategory::Rendering => "Try `--display inline` or `--display json`",
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
