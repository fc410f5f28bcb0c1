use std::fmt;


/// index of a lowercase ascii letter in the alphabet, `None` for anything else
fn letter_index(letter: char) -> Option<u8> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8) - b'a')
    } else {
        None
    }
}


/// Set of lowercase ascii letters packed into the low 26 bits of a `u32`.
///
/// Iteration always goes in alphabetical order, which is what makes candidate generation
/// deterministic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    set: u32,
}

const ALL_LETTERS: u32 = (1u32 << 26) - 1;

impl LetterSet {
    /// every letter `a..=z`
    pub fn full() -> LetterSet {
        LetterSet { set: ALL_LETTERS }
    }

    pub fn from_word(word: &str) -> LetterSet {
        let mut set = LetterSet::default();
        for ch in word.chars() {
            set.insert(ch);
        }
        set
    }

    /// inserts `letter`, returns false if it isn't a lowercase ascii letter
    pub fn insert(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) => {
                self.set |= 1u32 << index;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) => (self.set & (1u32 << index)) != 0,
            None => false,
        }
    }

    /// letters in `self` but not in `other`
    pub fn difference(&self, other: &LetterSet) -> LetterSet {
        LetterSet { set: self.set & !other.set }
    }

    pub fn is_empty(&self) -> bool {
        self.set == 0
    }

    pub fn len(&self) -> usize {
        self.set.count_ones() as usize
    }

    /// true if `word` contains every letter of this set at least once
    pub fn is_subset_of_word(&self, word: &str) -> bool {
        let present = LetterSet::from_word(word);
        self.set & !present.set == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(move |&ch| self.contains(ch))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::default();
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_non_letters() {
        let mut set = LetterSet::default();
        assert!(set.insert('q'));
        assert!(!set.insert('Q'));
        assert!(!set.insert('1'));
        assert!(!set.insert('é'));
        assert_eq!(set.iter().collect::<String>(), "q");
    }

    #[test]
    fn iterates_in_alphabetical_order() {
        let set: LetterSet = "zebra".chars().collect();
        assert_eq!(set.iter().collect::<String>(), "aberz");
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn full_alphabet() {
        let all = LetterSet::full();
        assert_eq!(all.len(), 26);
        assert_eq!(all.iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
        assert!(all.difference(&LetterSet::full()).is_empty());
    }

    #[test]
    fn difference() {
        assert_eq!(LetterSet::from_word("xyz").difference(&LetterSet::from_word("y")), LetterSet::from_word("xz"));
    }

    #[test]
    fn subset_of_word() {
        let required = LetterSet::from_word("te");
        assert!(required.is_subset_of_word("crate"));
        assert!(!required.is_subset_of_word("crank"));
        assert!(LetterSet::default().is_subset_of_word(""));
    }
}
