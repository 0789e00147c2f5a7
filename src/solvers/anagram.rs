//! "Unscramble ...: <letters>" questions.

use super::Outcome;
use super::dictionary::Dictionary;
use crate::error::SolveError;

pub const FALLBACK: &str = "UNKNOWN";

/// Solve an unscramble question against `dictionary`. No prompt or no
/// matching word answers [`FALLBACK`].
pub fn solve_anagram(question: &str, dictionary: &Dictionary) -> String {
    solve_anagram_traced(question, dictionary).answer
}

pub(crate) fn solve_anagram_traced(question: &str, dictionary: &Dictionary) -> Outcome {
    let Some(scrambled) = extract(question) else {
        return Outcome::fallback(FALLBACK, None, SolveError::NoMatch { solver: "anagram" });
    };

    match unscramble(&scrambled, dictionary) {
        Some(word) => {
            tracing::debug!(%scrambled, %word, "anagram solved");
            Outcome::solved(word.to_string(), Some(scrambled), None)
        }
        // Not an error: the word is simply not in the list.
        None => {
            tracing::debug!(%scrambled, "no dictionary word matches");
            Outcome::unmatched(FALLBACK, Some(scrambled))
        }
    }
}

/// The scrambled letters, uppercased.
pub fn extract(question: &str) -> Option<String> {
    let caps = crate::regex!(r"(?i)unscramble.*?:\s*(\w+)").captures(question)?;
    Some(caps.get(1)?.as_str().to_uppercase())
}

/// First word in `dictionary` with the same letters as `scrambled`.
pub fn unscramble<'d>(scrambled: &str, dictionary: &'d Dictionary) -> Option<&'d str> {
    let target = letter_key(scrambled);
    dictionary.words_of_len(target.len()).find(|word| letter_key(word) == target)
}

fn letter_key(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters
}
