use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidValue,

    ValidationMissingArgument,
    ValidationInvalidArgument,
    ValidationInvalidJson,

    SnippetNotFound,
    DocumentNotFound,

    ExportTargetExists,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::SnippetNotFound => "snippet.not_found",
            ErrorCode::DocumentNotFound => "document.not_found",

            ErrorCode::ExportTargetExists => "export.target_exists",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetNotFoundDetails {
    pub id: String,
    pub dialect: String,
    pub available: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNotFoundDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTargetExistsDetails {
    pub path: String,
}

/// Details shared by the `internal.*` codes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

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

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
            tried,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    /// `input` is a truncated excerpt of what failed to parse, when available.
    pub fn validation_invalid_json(
        err: serde_json::Error,
        context: Option<String>,
        input: Option<String>,
    ) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
            "input": input,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn snippet_not_found(
        id: impl Into<String>,
        dialect: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        let dialect = dialect.into();
        let details = to_details(SnippetNotFoundDetails {
            id: id.into(),
            dialect: dialect.clone(),
            available,
        });

        Self::new(ErrorCode::SnippetNotFound, "Snippet not found", details).with_hint(format!(
            "Run 'scriptsmith snippet list --dialect {}' to see available snippets",
            dialect
        ))
    }

    pub fn document_not_found(path: impl Into<String>) -> Self {
        let details = to_details(DocumentNotFoundDetails { path: path.into() });

        Self::new(ErrorCode::DocumentNotFound, "Document not found", details)
            .with_hint("Run 'scriptsmith doc new <path>' to create a document")
    }

    pub fn export_target_exists(path: impl Into<String>) -> Self {
        let details = to_details(ExportTargetExistsDetails { path: path.into() });

        Self::new(
            ErrorCode::ExportTargetExists,
            "Export target already exists",
            details,
        )
        .with_hint("Pass --force to overwrite, or choose another --output-dir")
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalIoError, "IO error", error.into(), context)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::internal(ErrorCode::InternalJsonError, "JSON error", error.into(), context)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::internal(ErrorCode::InternalUnexpected, "Unexpected error", error.into(), None)
    }

    fn internal(code: ErrorCode, message: &str, error: String, context: Option<String>) -> Self {
        Self::new(code, message, to_details(InternalDetails { error, context }))
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
