// Public modules
pub mod assemble;
pub mod dialect;
pub mod document;
pub mod error;
pub mod export;
pub mod json;
pub mod menu;
pub mod snippets;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use assemble::{assemble, Assembly, Section};
pub use dialect::{Dialect, DialectSyntax};
pub use document::{Action, DocumentState};
pub use error::{Error, ErrorCode, Result};
pub use menu::{generate_menu, MenuItem};
pub use snippets::Snippet;
