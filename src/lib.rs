//! Enumerates dictionary words that fit a set of wordle style constraints: letters that can't
//! appear in free positions, letters that must appear somewhere, and letters fixed at known
//! positions.

pub mod constraints;
pub mod dictionary;
pub mod letters;
pub mod search;

pub use constraints::Constraints;
pub use dictionary::{Dictionary, DictionaryError};
pub use letters::LetterSet;
pub use search::{candidates, filter_required, solve};
