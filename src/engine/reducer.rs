//! Solution-space reduction from an observed pattern

use super::space::CandidateSpace;
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::matrix::PatternMatrix;

/// Keep the candidates that would have produced `observed` against `guess`
///
/// The input space is left untouched. The true answer always survives,
/// since its own pattern against the guess is the one observed.
///
/// # Errors
/// Returns `UnknownWord` if the guess is not in the guess list.
pub fn reduce(
    matrix: &PatternMatrix,
    guess: &Word,
    observed: Pattern,
    space: &CandidateSpace,
) -> Result<CandidateSpace> {
    let row = matrix.lookup_row(guess)?;
    Ok(CandidateSpace::from_sorted(
        space
            .indices()
            .iter()
            .copied()
            .filter(|&answer| row[answer] == observed)
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "AAAAAA", "ABCDEF", "PLANET", "LLAMAS", "ALARMS", "GHIJKL", "MNOPQR", "COCCYX", "STREET",
        "TESTER", "BANANA",
    ];

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn matrix() -> PatternMatrix {
        let words = words_from_slice(WORDS);
        PatternMatrix::build(words.clone(), words)
    }

    #[test]
    fn exact_guess_leaves_only_itself() {
        let m = matrix();
        let space = CandidateSpace::all(&m);
        let guess = word("ABCDEF");

        let observed = m.lookup(&guess, &word("ABCDEF")).unwrap();
        assert!(observed.is_perfect());

        let reduced = reduce(&m, &guess, observed, &space).unwrap();
        let left: Vec<&str> = reduced.words(&m).map(Word::text).collect();
        assert_eq!(left, ["ABCDEF"]);
        // Input untouched
        assert_eq!(space.len(), WORDS.len());
    }

    #[test]
    fn all_absent_keeps_words_sharing_no_letters() {
        let m = matrix();
        let space = CandidateSpace::all(&m);
        let guess = word("GHIJKL");

        let observed = m.lookup(&guess, &word("ABCDEF")).unwrap();
        assert_eq!(observed, Pattern::NONE);

        let reduced = reduce(&m, &guess, observed, &space).unwrap();
        let expected: Vec<&Word> = space
            .words(&m)
            .filter(|w| !w.codes().iter().any(|c| guess.codes().contains(c)))
            .collect();
        let actual: Vec<&Word> = reduced.words(&m).collect();
        assert_eq!(actual, expected);
        assert!(!reduced.contains(&m, &word("LLAMAS")));
        assert!(reduced.contains(&m, &word("MNOPQR")));
    }

    #[test]
    fn reduction_is_sound_and_monotone() {
        let m = matrix();
        let full = CandidateSpace::all(&m);

        for guess in m.guesses() {
            for answer in m.answers() {
                let observed = m.lookup(guess, answer).unwrap();
                let reduced = reduce(&m, guess, observed, &full).unwrap();
                assert!(reduced.contains(&m, answer), "{guess} lost {answer}");
                assert!(reduced.len() <= full.len());

                // Reducing again by the same observation changes nothing
                let again = reduce(&m, guess, observed, &reduced).unwrap();
                assert_eq!(again, reduced);
            }
        }
    }

    #[test]
    fn impossible_pattern_empties_space() {
        let m = matrix();
        let space = CandidateSpace::all(&m);
        // GHIJKL is the only listed word starting with G
        let observed = Pattern::from_str("G-----").unwrap();
        let reduced = reduce(&m, &word("GHIJKL"), observed, &space).unwrap();
        assert!(reduced.is_empty());
    }

    #[test]
    fn unknown_guess_is_error() {
        let m = matrix();
        let space = CandidateSpace::all(&m);
        assert!(reduce(&m, &word("ZZZZZZ"), Pattern::NONE, &space).is_err());
    }
}
