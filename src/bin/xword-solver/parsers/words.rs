use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::warn;
use xword_solver::puzzle::Vocabulary;

use crate::result::XwordError;
use crate::result::XwordResult;

/// Reads and parses a word-list file; see [`parse_words`].
pub(crate) fn parse_word_file(path: &Path) -> XwordResult<Vocabulary> {
    let source = fs::read_to_string(path)
        .map_err(|e| XwordError::FileReadingError(e, path.display().to_string()))?;
    parse_words(&source)
}

/// Parses a word list with one word per line. Words are normalised to uppercase and blank lines
/// are skipped; a word containing anything other than ASCII letters is rejected.
pub(crate) fn parse_words(source: &str) -> XwordResult<Vocabulary> {
    let words: Vec<String> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.chars().all(|letter| letter.is_ascii_alphabetic()) {
                Ok(line.to_uppercase())
            } else {
                Err(XwordError::InvalidWord(line.to_owned()))
            }
        })
        .try_collect()?;
    if words.is_empty() {
        warn!("The word list does not contain any words");
    }
    Ok(Vocabulary::new(words))
}
