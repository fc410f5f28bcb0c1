use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;


#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("reading words file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("words file {} contains no words", path.display())]
    Empty { path: PathBuf },
}


/// Lowercased word list, only used for membership tests.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    /// byte lengths of the words above
    lengths: HashSet<usize>,
}

impl Dictionary {
    /// Reads one word per line from `path`.
    ///
    /// Fails if the file can't be read or has no lines at all. Invalid UTF-8 is replaced rather
    /// than rejected, such words just never match.
    pub fn load(path: impl AsRef<Path>) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DictionaryError::Read {
            path: path.to_owned(),
            source,
        })?;
        let buf = String::from_utf8_lossy(&bytes);

        let dictionary = Dictionary::from_lines(buf.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty { path: path.to_owned() });
        }
        Ok(dictionary)
    }

    pub fn from_lines<I, S>(lines: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = lines
            .into_iter()
            .map(|line| line.as_ref().to_lowercase())
            .collect();
        let lengths = words.iter().map(String::len).collect();
        Dictionary { words, lengths }
    }

    /// true if any word is exactly `length` bytes long
    pub fn has_length(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
