//! Choice of the output sort order

use crate::{
    error::{Error, Result},
    report, Args,
};
use anyhow::Context;
use dialoguer::Input;
use std::{
    io::{self, BufRead, IsTerminal},
    str::FromStr,
};

/// Text shown when asking for the sort order
const PROMPT: &str = "Choose sort order (a for ascending, d for descending)";

/// Direction in which unique words are sorted
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
//
impl SortOrder {
    /// Interpret a line of user input, `None` meaning that input has ended
    pub fn from_answer(answer: Option<&str>) -> Result<Self> {
        let Some(answer) = answer else {
            return Err(Error::InvalidSortOrder(None));
        };
        let trimmed = answer.trim();
        if trimmed.eq_ignore_ascii_case("a") {
            Ok(Self::Ascending)
        } else if trimmed.eq_ignore_ascii_case("d") {
            Ok(Self::Descending)
        } else {
            Err(Error::InvalidSortOrder(Some(trimmed.into())))
        }
    }
}
//
impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_answer(Some(s))
    }
}

/// Use the sort order from the command line, or ask for one
pub fn pick(args: &Args) -> Result<SortOrder> {
    let order = match args.order {
        Some(order) => order,
        None => prompt()?,
    };
    log::debug!("Sorting words in {order:?} order");
    Ok(order)
}

/// Ask the user for a sort order
///
/// A terminal gets an interactive prompt. Piped input is read one line at a
/// time. Either way, running out of input counts as an invalid answer.
pub fn prompt() -> Result<SortOrder> {
    if io::stdin().is_terminal() {
        let answer: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(end_of_input_as_no_answer)?;
        SortOrder::from_answer(Some(&answer))
    } else {
        report::info(format_args!("{PROMPT}: "));
        read_answer(io::stdin().lock())
    }
}

/// Read a sort order from one line of non-interactive input
pub fn read_answer(mut reader: impl BufRead) -> Result<SortOrder> {
    let mut answer = String::new();
    let bytes_read = reader
        .read_line(&mut answer)
        .context("reading the sort order")?;
    SortOrder::from_answer((bytes_read > 0).then_some(answer.as_str()))
}

/// Treat a prompt that was closed with end-of-input like a missing answer
fn end_of_input_as_no_answer(e: dialoguer::Error) -> Error {
    match e {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Error::InvalidSortOrder(None)
        }
        e => e.into(),
    }
}
