//! Sort the words of a text file, and tell which one is the most frequent
//!
//! Words are read from an input text file (F1), numbers are thrown away,
//! case-insensitive duplicates are merged, and the remaining words are written
//! in sorted order to an F2.txt file next to the input.

mod config;
mod error;
mod input;
mod order;
mod output;
mod report;
mod sort;
mod stats;
mod tokenize;

use crate::{
    config::Config,
    error::{Error, Result},
    order::SortOrder,
    stats::FrequencyRecord,
};
use clap::Parser;
use log::LevelFilter;
use std::{fs, path::PathBuf, process::ExitCode};

/// Sort the unique words of a text file and report the most frequent one
///
/// Words are runs of letters, digits and underscores. Pure numbers are
/// ignored, and words that only differ by case are considered identical.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Path to the input text file, which must have a .txt extension
    ///
    /// Sorted words are written to an F2.txt file in the same directory.
    input: Option<PathBuf>,

    /// Sort order, "a" for ascending or "d" for descending
    ///
    /// Will interactively prompt for a sort order if not specified.
    #[arg(short, long, default_value = None)]
    order: Option<SortOrder>,
}

fn main() -> ExitCode {
    // Set up logging, but don't let a missing syslog daemon stop us
    if let Err(e) = setup_logging() {
        eprintln!("Warning: logging is disabled ({e})");
    }

    // Decode CLI arguments
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            report::error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Validate the user's request, then process the input file
fn run(args: &Args) -> Result<()> {
    let input = input::validate(args.input.as_deref())?;
    let order = order::pick(args)?;
    let config = Config::new(input, order)?;
    let outcome = process(&config)?;
    log::info!(
        "Wrote {} unique words to {}",
        outcome.unique_words.len(),
        config.output.display()
    );
    let FrequencyRecord { word, count } = &outcome.most_frequent;
    report::info(format_args!(
        "The most frequent word in F1 is '{word}', count: {count}"
    ));
    report::info(format_args!(
        "The file F2 has been created at: {}",
        config.output.display()
    ));
    Ok(())
}

/// Result of a successful run
#[derive(Clone, Debug, Eq, PartialEq)]
struct Outcome {
    /// Sorted unique words, as written to the output file
    unique_words: Vec<Word>,

    /// Most frequent word of the input, before deduplication
    most_frequent: FrequencyRecord,
}

/// Read words from the input file, write them back sorted, and collect stats
fn process(config: &Config) -> Result<Outcome> {
    // Read the whole input, replacing any invalid UTF-8
    let bytes = fs::read(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    // Both consumers below work from the same tokenization
    let words = tokenize::words(&text);
    let unique_words = sort::unique_sorted(&words, config.order);
    output::write_words(&unique_words, &config.output)?;
    let most_frequent = stats::most_frequent(&words);
    Ok(Outcome {
        unique_words,
        most_frequent,
    })
}

/// Lowercase word, as extracted from the input text
pub type Word = Box<str>;

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
