//! Command implementations for the wordbreak CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{ParserConfig, settings};
use crate::encoding::HostCodec;
use crate::error::Result;
use crate::host::{TextSearchParser, WordBreakParser};
use crate::parser::category::Category;

/// Execute a CLI command.
pub fn execute_command(args: WordbreakArgs) -> Result<()> {
    match &args.command {
        Command::Parse(parse_args) => parse_inputs(parse_args.clone(), &args),
        Command::Lextype => show_lextype(&args),
    }
}

/// Tokenize every input and print the token streams.
fn parse_inputs(args: ParseArgs, cli_args: &WordbreakArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let codec = HostCodec::for_label(&config.encoding)?;
    info!(
        "tokenizing with locale {:?} and encoding {}",
        config.locale,
        codec.name()
    );
    settings::apply(config);

    let inputs = read_inputs(&args)?;
    let parser = WordBreakParser::new();

    let documents = inputs
        .par_iter()
        .map(|(source, bytes)| parse_document(&parser, &codec, source, bytes, args.skip_blank))
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Tokens",
        &ParseResults {
            total_tokens: documents.iter().map(|doc| doc.tokens.len()).sum(),
            documents,
        },
        cli_args,
    )
}

/// Print the token vocabulary.
fn show_lextype(cli_args: &WordbreakArgs) -> Result<()> {
    let parser = WordBreakParser::new();
    let categories = parser
        .lextype()
        .into_iter()
        .filter(|descr| !descr.is_sentinel())
        .collect();

    output_result("Token categories", &LextypeResult { categories }, cli_args)
}

/// Configuration file (or environment), then command line overrides.
fn resolve_config(args: &ParseArgs) -> Result<ParserConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            ParserConfig::from_file(path)?
        }
        None => ParserConfig::from_env(),
    };

    if let Some(locale) = &args.locale {
        config.locale = locale.clone();
    }
    if let Some(encoding) = &args.encoding {
        config.encoding = encoding.clone();
    }

    Ok(config)
}

/// Collect `(source name, raw bytes)` pairs.
fn read_inputs(args: &ParseArgs) -> Result<Vec<(String, Vec<u8>)>> {
    if let Some(text) = &args.text {
        return Ok(vec![("<text>".to_string(), text.clone().into_bytes())]);
    }

    if args.files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        return Ok(vec![("<stdin>".to_string(), bytes)]);
    }

    args.files
        .iter()
        .map(|path| -> Result<(String, Vec<u8>)> {
            Ok((path.display().to_string(), fs::read(path)?))
        })
        .collect()
}

/// Run one input through the parser callbacks.
pub fn parse_document<P: TextSearchParser>(
    parser: &P,
    codec: &HostCodec,
    source: &str,
    bytes: &[u8],
    skip_blank: bool,
) -> Result<ParsedDocument> {
    let started = Instant::now();
    let mut handle = parser.start(bytes, bytes.len())?;
    let mut tokens = Vec::new();

    loop {
        let token = parser.next_token(&mut handle)?;
        if token.is_end() {
            break;
        }

        let category = Category::from_id(token.token_type).unwrap_or(Category::Blank);
        if skip_blank && category == Category::Blank {
            continue;
        }

        let units = codec.decode(token.text)?;
        tokens.push(TokenRecord {
            text: String::from_utf16_lossy(&units),
            category,
            length: token.len(),
        });
    }

    parser.end(handle);

    Ok(ParsedDocument {
        source: source.to_string(),
        tokens,
        duration_ms: started.elapsed().as_millis() as u64,
    })
}
