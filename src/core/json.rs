//! JSON helpers that map serde failures onto scriptsmith error codes.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::io;

/// Longest excerpt of rejected input echoed back in error details.
const INPUT_EXCERPT_CHARS: usize = 200;

/// Parse JSON text, reporting `validation.invalid_json` with an excerpt of the input.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s).map_err(|e| {
        let excerpt: String = s.chars().take(INPUT_EXCERPT_CHARS).collect();
        Error::validation_invalid_json(e, Some("parse json".to_string()), Some(excerpt))
    })
}

pub fn to_string_pretty<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize json".to_string())))
}

/// Resolve a document argument: inline JSON, `@path`, or `-` for stdin.
pub fn read_json_spec_to_string(spec: &str) -> Result<String> {
    io::read_input(spec, "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn inline_spec_is_returned_verbatim() {
        assert_eq!(read_json_spec_to_string("{\"a\":1}").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn at_spec_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{}").unwrap();
        let spec = format!("@{}", path.display());
        assert_eq!(read_json_spec_to_string(&spec).unwrap(), "{}");
    }

    #[test]
    fn empty_at_spec_is_rejected() {
        let err = read_json_spec_to_string("@ ").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn from_str_reports_invalid_json() {
        let err = from_str::<Value>("{nope").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
        assert_eq!(err.details["input"], "{nope");
    }

    #[test]
    fn long_input_is_truncated_in_details() {
        let input = format!("[{}", "1,".repeat(300));
        let err = from_str::<Value>(&input).unwrap_err();
        let excerpt = err.details["input"].as_str().unwrap();
        assert_eq!(excerpt.chars().count(), INPUT_EXCERPT_CHARS);
    }
}
