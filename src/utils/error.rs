//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

// Variants wrapping another error expose it through `source()` only,
// so `{:#}` chains print each cause once.

/// Errors that can occur while loading and shape-checking raw emissions data
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input file")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed")]
    JsonError(#[from] serde_json::Error),

    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to read file")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "trees.json is missing")
    }

    #[test]
    fn test_io_cause_printed_once() {
        let errors = [
            anyhow::Error::from(OutputError::ReadFailed(not_found())),
            anyhow::Error::from(OutputError::WriteFailed(not_found())),
            anyhow::Error::from(ParseError::ReadFailed(not_found())),
        ];

        for err in errors {
            let chain = format!("{:#}", err);
            assert_eq!(chain.matches("trees.json is missing").count(), 1, "{}", chain);
        }
    }

    #[test]
    fn test_chain_keeps_context() {
        let err = anyhow::Error::from(OutputError::WriteFailed(not_found()))
            .context("Failed to write trees to out.json");

        assert_eq!(
            format!("{:#}", err),
            "Failed to write trees to out.json: Failed to write file: trees.json is missing"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ParseError::TypeMismatch {
            path: r#"$.CHN["a.b"]"#.to_string(),
            expected: "object",
            found: "array",
        };

        assert_eq!(
            err.to_string(),
            r#"Type mismatch at $.CHN["a.b"]: expected object, found array"#
        );
    }
}
