//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordbreakArgs};
use crate::error::Result;
use crate::parser::category::Category;
use crate::parser::lextype::LexDescr;

/// One token as printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    pub category: Category,
    /// Length in host-encoding bytes.
    pub length: usize,
}

/// Tokens of one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub source: String,
    pub tokens: Vec<TokenRecord>,
    pub duration_ms: u64,
}

/// Result structure for the parse command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResults {
    pub documents: Vec<ParsedDocument>,
    pub total_tokens: usize,
}

/// Result structure for the lextype command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LextypeResult {
    pub categories: Vec<LexDescr>,
}

/// Printable as one CSV row per record.
pub trait CsvRows {
    /// Header row.
    fn header(&self) -> &'static str;
    /// Data rows.
    fn rows(&self) -> Vec<String>;
}

impl CsvRows for ParseResults {
    fn header(&self) -> &'static str {
        "source,index,category,length,text"
    }

    fn rows(&self) -> Vec<String> {
        self.documents
            .iter()
            .flat_map(|doc| {
                doc.tokens.iter().enumerate().map(move |(i, token)| {
                    format!(
                        "{},{},{},{},{}",
                        csv_field(&doc.source),
                        i,
                        token.category,
                        token.length,
                        csv_field(&token.text)
                    )
                })
            })
            .collect()
    }
}

impl CsvRows for LextypeResult {
    fn header(&self) -> &'static str {
        "lexid,alias,descr"
    }

    fn rows(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|d| format!("{},{},{}", d.lexid, d.alias, csv_field(&d.descr)))
            .collect()
    }
}

/// Human-readable rendering.
pub trait HumanOutput {
    /// Lines to print.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for ParseResults {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for doc in &self.documents {
            lines.push(format!("{} ({} tokens, {} ms)", doc.source, doc.tokens.len(), doc.duration_ms));
            for token in &doc.tokens {
                lines.push(format!(
                    "  {:<7} {:>4}  {:?}",
                    token.category.alias(),
                    token.length,
                    token.text
                ));
            }
        }
        lines.push(format!("Total tokens: {}", self.total_tokens));
        lines
    }
}

impl HumanOutput for LextypeResult {
    fn human_lines(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|d| format!("{:>2}  {:<7} {}", d.lexid, d.alias, d.descr))
            .collect()
    }
}

/// Output a result in the selected format.
pub fn output_result<T>(message: &str, result: &T, args: &WordbreakArgs) -> Result<()>
where
    T: Serialize + CsvRows + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WordbreakArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordbreakArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: CsvRows>(result: &T) -> Result<()> {
    println!("{}", result.header());
    for row in result.rows() {
        println!("{row}");
    }
    Ok(())
}

/// Quote a CSV field when needed.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
