//! Multiple-choice questions: always pick the first option.

use super::Outcome;
use crate::puzzle::PuzzleOption;

pub const FALLBACK: &str = "A";

pub fn solve_selection(options: &[PuzzleOption]) -> String {
    solve_selection_traced(options).answer
}

pub(crate) fn solve_selection_traced(options: &[PuzzleOption]) -> Outcome {
    match options.first().map(|first| (first, first.answer_value())) {
        Some((_, Some(value))) => Outcome::solved(value.clone(), Some(value), None),
        Some((first, None)) => {
            tracing::debug!(option = ?first, "first option has neither id nor text");
            Outcome::unmatched(FALLBACK, None)
        }
        None => Outcome::unmatched(FALLBACK, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_choice_id() {
        let options = vec![PuzzleOption::choice("B", "Paris"), PuzzleOption::choice("C", "Rome")];

        assert_eq!(solve_selection(&options), "B");
    }

    #[test]
    fn empty_options_answer_a() {
        assert_eq!(solve_selection(&[]), "A");
    }

    #[test]
    fn bare_and_partial_options() {
        assert_eq!(solve_selection(&[PuzzleOption::Bare(serde_json::json!("Paris"))]), "Paris");
        assert_eq!(solve_selection(&[PuzzleOption::Bare(serde_json::json!(7))]), "7");
        assert_eq!(
            solve_selection(&[PuzzleOption::Choice { id: None, text: Some(serde_json::json!("Oslo")) }]),
            "Oslo"
        );
        assert_eq!(solve_selection(&[PuzzleOption::Choice { id: None, text: None }]), "A");
    }
}
