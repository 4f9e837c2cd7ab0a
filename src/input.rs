//! Input file validation and output path derivation

use crate::error::{Error, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the file that sorted words are written to
pub const OUTPUT_FILE_NAME: &str = "F2.txt";

/// Extension that input files must have (compared case-insensitively)
const INPUT_EXTENSION: &str = "txt";

/// Check that the user pointed us to an existing `.txt` file
pub fn validate(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.ok_or(Error::Usage)?;
    if !path.is_file() {
        return Err(Error::NotFound(path.to_owned()));
    }
    let has_txt_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
    if !has_txt_extension {
        return Err(Error::InvalidExtension(path.to_owned()));
    }
    log::debug!("Validated input file {}", path.display());
    Ok(path.to_owned())
}

/// Location of the output file, next to the input file
///
/// A bare file name resolves to the current directory.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let dir = input
        .parent()
        .with_context(|| format!("unable to determine the directory of {}", input.display()))?;
    Ok(dir.join(OUTPUT_FILE_NAME))
}
