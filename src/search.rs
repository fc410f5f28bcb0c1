use crate::constraints::Constraints;
use crate::dictionary::Dictionary;
use crate::letters::LetterSet;


/// Every dictionary word that fits the position constraints and the allowed alphabet.
///
/// Words are built depth first from the left, fixed positions take their known letter and free
/// positions try each allowed letter in alphabetical order, so the result order only depends on
/// the inputs. Nothing is generated when the dictionary has no word of the target length.
pub fn candidates(constraints: &Constraints, dictionary: &Dictionary) -> Vec<String> {
    let mut found = Vec::new();
    if !dictionary.has_length(constraints.length) {
        return found;
    }
    let mut word = String::new();
    extend(&mut word, constraints, dictionary, &mut found);
    found
}

fn extend(word: &mut String, constraints: &Constraints, dictionary: &Dictionary, found: &mut Vec<String>) {
    // all letters are ascii so the byte length is the position
    let position = word.len();
    if position == constraints.length {
        if dictionary.contains(word) {
            found.push(word.clone());
        }
        return;
    }

    match constraints.known_at(position) {
        Some(fixed) => {
            word.push(fixed);
            extend(word, constraints, dictionary, found);
            word.pop();
        }
        None => {
            for ch in constraints.allowed.iter() {
                word.push(ch);
                extend(word, constraints, dictionary, found);
                word.pop();
            }
        }
    }
}

/// keeps the words containing each of the `required` letters at least once
pub fn filter_required(words: Vec<String>, required: &LetterSet) -> Vec<String> {
    if required.is_empty() {
        return words;
    }
    words
        .into_iter()
        .filter(|word| required.is_subset_of_word(word))
        .collect()
}

/// generates the candidates and drops those missing a required letter
pub fn solve(constraints: &Constraints, dictionary: &Dictionary) -> Vec<String> {
    let words = candidates(constraints, dictionary);
    log::debug!("{} dictionary words match the known positions", words.len());
    let words = filter_required(words, &constraints.required);
    log::debug!("{} words contain all required letters", words.len());
    words
}
