//! Turns the raw `--exclude`, `--include` and `--known` flag values into [`Constraints`].
//!
//! Parsing is permissive: a token that doesn't fit its expected shape is dropped and the run
//! carries on as if it was never given.

use crate::letters::LetterSet;


/// highest position a single digit `--known` token can name
pub const MAX_KNOWN_POSITION: usize = 9;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraints {
    /// target word length
    pub length: usize,
    /// letters which can't be used in free positions
    pub excluded: LetterSet,
    /// letters tried in free positions, the alphabet minus `excluded`
    pub allowed: LetterSet,
    /// letters which must occur somewhere in the word
    pub required: LetterSet,
    /// fixed letter per position, `None` for free positions. Positions past the end are free.
    pub known: Vec<Option<char>>,
}

impl Constraints {
    pub fn parse(length: usize, exclude: &str, include: &str, known: &str) -> Constraints {
        let excluded = parse_letters(exclude);
        // exclusion wins over inclusion
        let required = parse_letters(include).difference(&excluded);
        Constraints {
            length,
            excluded,
            allowed: LetterSet::full().difference(&excluded),
            required,
            known: parse_known(known, length),
        }
    }

    /// constraints which only fix the length
    pub fn unconstrained(length: usize) -> Constraints {
        Constraints::parse(length, "", "", "")
    }

    /// the fixed letter at 0-based `position`, if any
    pub fn known_at(&self, position: usize) -> Option<char> {
        self.known.get(position).copied().flatten()
    }

    /// known positions as `(0-based position, letter)` pairs in position order
    pub fn known_positions(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.known
            .iter()
            .enumerate()
            .filter_map(|(i, fixed)| fixed.map(|ch| (i, ch)))
    }
}


/// parses a comma separated list of single letters, e.g. `m,s,e`
pub fn parse_letters(arg: &str) -> LetterSet {
    let mut set = LetterSet::default();
    for token in arg.to_lowercase().split(',') {
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            set.insert(ch);
        }
    }
    set
}

/// parses a comma separated list of `<position><letter>` tokens, e.g. `1m,2o,3u`
///
/// Positions are a single digit counting from 1. Later tokens for the same position replace
/// earlier ones. The result covers at most the first `MAX_KNOWN_POSITION` positions.
pub fn parse_known(arg: &str, length: usize) -> Vec<Option<char>> {
    let mut known = vec![None; length.min(MAX_KNOWN_POSITION)];
    for token in arg.to_lowercase().split(',') {
        if let Some((position, letter)) = parse_known_token(token) {
            if (1..=known.len()).contains(&position) {
                known[position - 1] = Some(letter);
            }
        }
    }
    known
}

fn parse_known_token(token: &str) -> Option<(usize, char)> {
    let mut chars = token.chars();
    let (digit, letter) = match (chars.next(), chars.next(), chars.next()) {
        (Some(digit), Some(letter), None) => (digit, letter),
        _ => return None,
    };
    if !digit.is_ascii_digit() || !letter.is_ascii_lowercase() {
        return None;
    }
    let position = digit.to_digit(10)? as usize;
    Some((position, letter))
}
