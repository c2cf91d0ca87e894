use std::{fs::File, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use notal_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile, Span},
};
use notal_lexical::{token::Token, tokenizer::Tokenizer};
use notal_syntax::parser;

/// The source parsed when neither a file nor an inline source is given.
pub const DEMO_SOURCE: &str = "\"Hello\nNama\nSaya\nSofyan\"";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "notal",
    about = "Parses a single literal program and prints its syntax tree as JSON."
)]
pub struct Argument {
    /// The input file to parse.
    pub file: Option<PathBuf>,

    /// Parses the given text instead of a file.
    #[clap(short = 'e', long = "source", conflicts_with = "file")]
    pub source: Option<String>,

    /// Prints out the tokens of the source instead of the syntax tree.
    #[clap(long)]
    pub tokens: bool,

    /// Prints the JSON on a single line.
    #[clap(long)]
    pub compact: bool,
}

fn load_source_file(argument: &Argument) -> Result<SourceFile, ExitCode> {
    if let Some(source) = &argument.source {
        return Ok(SourceFile::from_string("<source>", source.as_str()));
    }

    let Some(path) = &argument.file else {
        return Ok(SourceFile::from_string("<demo>", DEMO_SOURCE));
    };

    let result = File::open(path)
        .map_err(source_file::Error::from)
        .and_then(|file| SourceFile::load(file, path.clone()));

    result.map_err(|error| {
        let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));

        eprintln!("{msg}");
        ExitCode::FAILURE
    })
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> ExitCode {
    match to_json(value, compact) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, error));
            ExitCode::FAILURE
        }
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let source_file = match load_source_file(&argument) {
        Ok(source_file) => source_file,
        Err(code) => return code,
    };

    if argument.tokens {
        let mut tokenizer = Tokenizer::new(source_file.content());
        let result = tokenizer.tokens().collect::<Result<Vec<Token>, _>>();

        return match result {
            Ok(tokens) => print_json(&tokens, argument.compact),
            Err(error) => {
                eprintln!(
                    "{error}\n{}",
                    SourceCodeDisplay::new(
                        &source_file,
                        Span::at(error.position()),
                        Some(error.help())
                    )
                );
                ExitCode::FAILURE
            }
        };
    }

    match parser::Parser::new().parse(source_file.content()) {
        Ok(program) => print_json(&program, argument.compact),
        Err(error) => {
            eprintln!(
                "{error}\n{}",
                SourceCodeDisplay::new(&source_file, error.span(), Some(error.help()))
            );
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
