//! Translation driver
//!
//! Owns the constant table for one run and feeds the top-level children of
//! the document root through the compiler in document order.

use crate::compiler::compile_element;
use crate::error::Result;
use crate::expr::{ConstantTable, RedeclarationPolicy};
use crate::markup::{self, Element};
use serde::Serialize;
use std::path::Path;

/// Translation options
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// What happens when a constant name is declared twice
    pub redeclaration: RedeclarationPolicy,
}

impl TranslateOptions {
    /// Build options from CLI flags
    pub fn from_cli(strict_constants: bool) -> Self {
        Self {
            redeclaration: if strict_constants {
                RedeclarationPolicy::Reject
            } else {
                RedeclarationPolicy::Overwrite
            },
        }
    }
}

/// Output of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    /// One rendered entry per top-level node
    pub lines: Vec<String>,
    /// Constants as they stood after the last node
    pub constants: ConstantTable,
}

impl Translation {
    /// Lines joined with newlines, no trailing newline
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Main translator struct
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Translate every child of `root`. The first error aborts the run.
    pub fn translate_document(&self, root: &Element) -> Result<Translation> {
        let mut constants = ConstantTable::with_policy(self.options.redeclaration);
        let mut lines = Vec::with_capacity(root.children.len());

        log::debug!(
            "Translating {} top-level nodes under <{}>",
            root.children.len(),
            root.tag
        );
        for (index, child) in root.children.iter().enumerate() {
            let line = compile_element(child, &mut constants).map_err(|e| {
                log::debug!("Node {} (<{}>) failed: {}", index, child.tag, e);
                e
            })?;
            lines.push(line);
        }

        Ok(Translation { lines, constants })
    }

    /// Parse and translate an XML source string
    pub fn translate_str(&self, source: &str) -> Result<Translation> {
        let root = markup::parse_document(source)?;
        self.translate_document(&root)
    }

    /// Read, parse and translate an XML file
    pub fn translate_file(&self, path: &Path) -> Result<Translation> {
        let root = markup::parse_file(path)?;
        self.translate_document(&root)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_constants_flow_forward() {
        let translation = Translator::default()
            .translate_str(
                r#"<config>
                    <const name="size">42</const>
                    <const name="offset"><expr>|size 1 +|</expr></const>
                    <array><value><expr>|offset size -|</expr></value></array>
                </config>"#,
            )
            .unwrap();
        assert_eq!(
            translation.lines,
            vec!["const size = 42", "const offset = 43", "'( 1 )"]
        );
        assert_eq!(translation.constants.integer("offset").unwrap(), Some(43));
    }

    #[test]
    fn test_forward_reference_fails() {
        let err = Translator::default()
            .translate_str(
                r#"<config>
                    <const name="a"><expr>|b 1 +|</expr></const>
                    <const name="b">1</const>
                </config>"#,
            )
            .unwrap_err();
        assert_eq!(err, Error::UnrecognizedToken { token: "b".to_string() });
    }

    #[test]
    fn test_redeclaration_policies() {
        let source = r#"<config>
            <const name="a">1</const>
            <const name="a">2</const>
        </config>"#;

        let translation = Translator::default().translate_str(source).unwrap();
        assert_eq!(translation.to_text(), "const a = 1\nconst a = 2");
        assert_eq!(translation.constants.integer("a").unwrap(), Some(2));

        let strict = Translator::new(TranslateOptions::from_cli(true));
        assert_eq!(
            strict.translate_str(source).unwrap_err(),
            Error::ConstantRedeclared { name: "a".to_string() }
        );
    }

    #[test]
    fn test_empty_root() {
        let translation = Translator::default().translate_str("<config/>").unwrap();
        assert!(translation.lines.is_empty());
        assert_eq!(translation.to_text(), "");
    }
}
