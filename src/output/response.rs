//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use scriptsmith::error::Hint;
use scriptsmith::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Write raw script text to stdout exactly as generated.
pub fn print_raw(content: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = handle.write_all(content.as_bytes()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationInvalidJson => 2,

        ErrorCode::ExportTargetExists => 3,

        ErrorCode::SnippetNotFound | ErrorCode::DocumentNotFound => 4,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    print_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_includes_code_and_hints() {
        let err = Error::snippet_not_found("nope", "shell", vec!["shebang".to_string()]);

        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"snippet.not_found\""));
        assert!(json.contains("\"hints\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn success_envelope_omits_error() {
        let json = CliResponse::success(serde_json::json!({"bytes": 13}))
            .to_json()
            .unwrap();

        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"bytes\": 13"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn exit_codes_follow_error_family() {
        let cases = [
            (Error::validation_missing_argument(vec!["--on".to_string()]), 2),
            (Error::export_target_exists("script.sh"), 3),
            (Error::document_not_found("doc.json"), 4),
            (Error::internal_io("disk full", None), 1),
        ];

        for (err, expected) in cases {
            let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
            assert_eq!(exit_code, expected);
        }
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((vec!["a"], 0)));
        assert_eq!(exit_code, 0);
        assert_eq!(value.unwrap(), serde_json::json!(["a"]));
    }
}
