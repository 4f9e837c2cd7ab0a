//! Writing of sorted words to disk

use crate::{
    error::{Error, Result},
    Word,
};
use std::{fs, path::Path};

/// Separator between words in the output file
pub const SEPARATOR: &str = ", ";

/// Write words to a file, replacing whatever it contained before
pub fn write_words(words: &[Word], path: &Path) -> Result<()> {
    let content = words.join(SEPARATOR);
    fs::write(path, &content).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("Wrote {} words ({} bytes) to {}", words.len(), content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_words(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| w.into()).collect()
    }

    #[test]
    fn joins_words_with_comma_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("F2.txt");
        let words = to_words(&["cat", "mat", "on"]);
        write_words(&words, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "cat, mat, on");
        assert_eq!(content.split(SEPARATOR).collect::<Vec<_>>(), ["cat", "mat", "on"]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("F2.txt");
        fs::write(&path, "a much longer previous content").unwrap();
        write_words(&to_words(&["new"]), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn empty_list_gives_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("F2.txt");
        write_words(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn failures_become_write_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("F2.txt");
        let result = write_words(&to_words(&["word"]), &path);
        assert!(matches!(result, Err(Error::Write { path: p, .. }) if p == path));
    }
}
