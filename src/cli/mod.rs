//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod eval;
pub mod inspect;
pub mod translate;

/// Common CLI utilities
pub mod utils {
    use crate::error::{Error, Result};
    use std::io::Write;
    use std::path::Path;

    /// Write output to file or stdout, newline-terminated unless empty
    pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
        let mut buffer = content.to_string();
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        match output_path {
            Some(path) => std::fs::write(path, buffer).map_err(|e| Error::Output {
                message: format!("{}: {}", path.display(), e),
            }),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(buffer.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| Error::Output {
                        message: e.to_string(),
                    })
            }
        }
    }

    /// Pretty JSON rendering for machine-readable output
    pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Output {
            message: format!("failed to serialize JSON: {}", e),
        })
    }
}
