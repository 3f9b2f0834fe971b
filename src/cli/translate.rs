use super::utils::{to_json, write_output};
use crate::error::Result;
use crate::translator::{TranslateOptions, Translator};
use clap::ValueEnum;

/// Output formats of the translate command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Dialect text, one line per top-level node
    #[default]
    Text,
    /// `{"lines": [...], "constants": {...}}`
    Json,
}

/// Arguments for the translate command
#[derive(Debug, Clone)]
pub struct TranslateArgs {
    pub input_path: std::path::PathBuf,
    pub output_path: Option<std::path::PathBuf>,
    pub format: OutputFormat,
    pub strict_constants: bool,
}

impl TranslateArgs {
    /// Convert to TranslateOptions
    pub fn to_options(&self) -> TranslateOptions {
        TranslateOptions::from_cli(self.strict_constants)
    }
}

/// Run the translate command
pub fn translate(args: &TranslateArgs) -> Result<()> {
    let translator = Translator::new(args.to_options());
    let translation = translator.translate_file(&args.input_path)?;

    log::info!(
        "Translated {} nodes, {} constants defined",
        translation.lines.len(),
        translation.constants.len()
    );

    let rendered = match args.format {
        OutputFormat::Text => translation.to_text(),
        OutputFormat::Json => to_json(&translation)?,
    };
    write_output(&rendered, args.output_path.as_deref())
}
