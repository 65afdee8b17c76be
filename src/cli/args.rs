//! Command line argument parsing for the wordbreak CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ENCODING_ENV, LOCALE_ENV};

/// wordbreak - split text into classified word-boundary tokens
#[derive(Parser, Debug, Clone)]
#[command(name = "wordbreak")]
#[command(about = "Split text into classified word-boundary tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordbreakArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordbreakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text from arguments, files or standard input
    Parse(ParseArgs),

    /// List the token categories
    Lextype,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Files to tokenize (standard input when none and no --text)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Tokenize this text instead of reading files
    #[arg(short, long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Locale used in boundary analysis
    #[arg(short, long, env = LOCALE_ENV)]
    pub locale: Option<String>,

    /// Encoding of the input and of the printed tokens
    #[arg(short, long, env = ENCODING_ENV)]
    pub encoding: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Leave out blank (space and punctuation) tokens
    #[arg(long)]
    pub skip_blank: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output, one token per row
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_text() {
        let args = WordbreakArgs::try_parse_from([
            "wordbreak",
            "parse",
            "--text",
            "hello world",
            "--locale",
            "ja_JP",
            "--skip-blank",
        ])
        .unwrap();

        if let Command::Parse(parse_args) = args.command {
            assert_eq!(parse_args.text.as_deref(), Some("hello world"));
            assert_eq!(parse_args.locale.as_deref(), Some("ja_JP"));
            assert!(parse_args.skip_blank);
            assert!(parse_args.files.is_empty());
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_parse_with_files() {
        let args =
            WordbreakArgs::try_parse_from(["wordbreak", "parse", "a.txt", "b.txt"]).unwrap();

        if let Command::Parse(parse_args) = args.command {
            assert_eq!(
                parse_args.files,
                vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            );
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_text_conflicts_with_files() {
        assert!(
            WordbreakArgs::try_parse_from(["wordbreak", "parse", "a.txt", "--text", "x"]).is_err()
        );
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WordbreakArgs::try_parse_from(["wordbreak", "lextype"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WordbreakArgs::try_parse_from(["wordbreak", "-vv", "lextype"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WordbreakArgs::try_parse_from(["wordbreak", "--quiet", "lextype"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WordbreakArgs::try_parse_from(["wordbreak", "--format", "json", "lextype"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
