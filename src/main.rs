use clap::{Args, CommandFactory, Parser, Subcommand};
use miette::{Report, Result};
use std::path::PathBuf;

use confml_rs::cli;
use confml_rs::cli::translate::OutputFormat;

#[derive(Parser)]
#[command(name = "confml-rs")]
#[command(about = "Translate XML configuration markup into the list configuration dialect")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateCli,
}

#[derive(Args)]
struct TranslateCli {
    /// Input XML document
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject a constant declared twice instead of keeping the last value
    #[arg(long)]
    strict_constants: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single postfix expression
    Eval {
        /// Expression, e.g. "|x 1 +|"
        expression: String,

        /// Predefine a constant (NAME=VALUE), repeatable
        #[arg(short = 'D', long = "define", value_parser = cli::eval::parse_define)]
        defines: Vec<(String, i64)>,
    },

    /// Print the parsed node tree as JSON
    Inspect {
        /// Input XML document
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval {
            expression,
            defines,
        }) => {
            let args = cli::eval::EvalArgs {
                expression,
                defines,
            };
            cli::eval::eval(&args).map_err(Report::new)
        }
        Some(Commands::Inspect { input }) => cli::inspect::inspect(&input).map_err(Report::new),
        None => {
            let TranslateCli {
                input,
                output,
                format,
                strict_constants,
            } = cli.translate;
            let Some(input_path) = input else {
                Cli::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "an input document is required",
                    )
                    .exit();
            };
            let args = cli::translate::TranslateArgs {
                input_path,
                output_path: output,
                format,
                strict_constants,
            };
            cli::translate::translate(&args).map_err(Report::new)
        }
    }
}
