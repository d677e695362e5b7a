use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    RuleTableInvalid,

    RootNotFound,

    FileReadFailed,
    FileWriteFailed,

    InternalIoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::RuleTableInvalid => "config.rule_table_invalid",

            ErrorCode::RootNotFound => "walk.root_not_found",

            ErrorCode::FileReadFailed => "file.read_failed",
            ErrorCode::FileWriteFailed => "file.write_failed",

            ErrorCode::InternalIoError => "internal.io_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTableInvalidDetails {
    pub pattern: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootNotFoundDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileIoDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn config_invalid_json(path: &Path, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.display().to_string(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            format!("Invalid JSON in {}: {}", path.display(), err),
            details,
        )
        .with_hint("Fix or remove the config file to fall back to built-in defaults")
    }

    pub fn rule_table_invalid(
        pattern: impl Into<String>,
        problem: impl Into<String>,
        conflicts_with: Option<String>,
    ) -> Self {
        let pattern = pattern.into();
        let problem = problem.into();
        let message = match &conflicts_with {
            Some(other) => format!(
                "Invalid rename rule '{}': {} (conflicts with '{}')",
                pattern, problem, other
            ),
            None => format!("Invalid rename rule '{}': {}", pattern, problem),
        };
        let details = to_details(RuleTableInvalidDetails {
            pattern,
            problem,
            conflicts_with,
        });

        Self::new(ErrorCode::RuleTableInvalid, message, details)
    }

    pub fn root_not_found(path: &Path) -> Self {
        let details = to_details(RootNotFoundDetails {
            path: path.display().to_string(),
        });

        Self::new(
            ErrorCode::RootNotFound,
            format!("Source directory not found: {}", path.display()),
            details,
        )
        .with_hint("Pass --root <DIR> or set \"root\" in rescheme.json")
    }

    pub fn file_read_failed(path: &Path, error: impl Into<String>) -> Self {
        Self::file_io(ErrorCode::FileReadFailed, "read", path, error.into())
    }

    pub fn file_write_failed(path: &Path, error: impl Into<String>) -> Self {
        Self::file_io(ErrorCode::FileWriteFailed, "write", path, error.into())
    }

    fn file_io(code: ErrorCode, verb: &str, path: &Path, error: String) -> Self {
        let message = format!("Failed to {} {}: {}", verb, path.display(), error);
        let details = to_details(FileIoDetails {
            path: path.display().to_string(),
            error,
        });
        Self::new(code, message, details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(context) => format!("IO error ({}): {}", context, error),
            None => format!("IO error: {}", error),
        };
        let details = to_details(InternalIoErrorDetails { error, context });

        Self::new(ErrorCode::InternalIoError, message, details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
