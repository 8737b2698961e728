//! Built-in code snippets, grouped by dialect.

use serde::Serialize;

use crate::dialect::Dialect;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

/// All snippets for `dialect`, in display order. Never empty.
pub fn snippets(dialect: Dialect) -> &'static [Snippet] {
    dialect.syntax().snippets()
}

pub fn find(dialect: Dialect, id: &str) -> Option<&'static Snippet> {
    snippets(dialect).iter().find(|s| s.id == id)
}

/// Like [`find`], but a missing id is a `snippet.not_found` error.
pub fn require(dialect: Dialect, id: &str) -> Result<&'static Snippet> {
    find(dialect, id).ok_or_else(|| {
        Error::snippet_not_found(
            id,
            dialect.as_str(),
            snippets(dialect).iter().map(|s| s.id.to_string()).collect(),
        )
    })
}

/// Append `code` to `body` on a new line. Duplicates simply append again.
pub fn insert_snippet(body: &str, code: &str) -> String {
    format!("{}\n{}", body, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dialect_has_snippets() {
        for dialect in Dialect::ALL {
            assert!(!snippets(dialect).is_empty());
        }
    }

    #[test]
    fn catalog_order_is_fixed() {
        let shell: Vec<&str> = snippets(Dialect::Shell).iter().map(|s| s.id).collect();
        assert_eq!(
            shell,
            vec!["shebang", "header_comment", "simple_func", "read_input"]
        );

        let ps: Vec<&str> = snippets(Dialect::PowerShell).iter().map(|s| s.id).collect();
        assert_eq!(
            ps,
            vec!["header_comment", "param_block", "simple_func", "read_input"]
        );
    }

    #[test]
    fn find_is_scoped_to_dialect() {
        assert!(find(Dialect::Shell, "shebang").is_some());
        assert!(find(Dialect::PowerShell, "shebang").is_none());
        assert!(find(Dialect::PowerShell, "param_block").is_some());
    }

    #[test]
    fn require_reports_missing_snippet() {
        let err = require(Dialect::PowerShell, "shebang").unwrap_err();
        assert_eq!(err.code.as_str(), "snippet.not_found");
        assert_eq!(err.details["dialect"], "powershell");
        assert_eq!(err.details["available"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn insert_appends_on_new_line() {
        assert_eq!(insert_snippet("", "echo hi\n"), "\necho hi\n");
        assert_eq!(insert_snippet("a", "b"), "a\nb");
    }

    #[test]
    fn duplicate_insert_appends_again() {
        let code = find(Dialect::Shell, "read_input").unwrap().code;
        let once = insert_snippet("", code);
        let twice = insert_snippet(&once, code);
        assert_eq!(twice.matches("read -p").count(), 2);
    }
}
