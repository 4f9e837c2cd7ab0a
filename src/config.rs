//! Run configuration

use crate::{error::Result, input, order::SortOrder};
use std::path::PathBuf;

/// Final run configuration
///
/// This is the result of combining validated [`Args`](crate::Args) with the
/// user's choice of sort order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Text file that words are read from
    pub input: PathBuf,

    /// File that sorted unique words are written to
    pub output: PathBuf,

    /// Direction in which unique words are sorted
    pub order: SortOrder,
}
//
impl Config {
    /// Determine run configuration from a validated input path and sort order
    pub fn new(input: PathBuf, order: SortOrder) -> Result<Self> {
        let output = input::output_path(&input)?;
        Ok(Self {
            input,
            output,
            order,
        })
    }
}
