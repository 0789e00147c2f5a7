//! "What is <expr>?" questions.

mod charset;
mod evaluator;
mod tokenizer;

use charset::{CharClass, scan};
pub use evaluator::{MAX_DEPTH, evaluate};
pub use tokenizer::{Token, tokenize};

use super::Outcome;
use crate::error::{Result, SolveError};

pub const FALLBACK: &str = "0";

/// Solve an arithmetic question. Any failure answers [`FALLBACK`].
pub fn solve_expression(question: &str) -> String {
    solve_expression_traced(question).answer
}

pub(crate) fn solve_expression_traced(question: &str) -> Outcome {
    let Some(expr) = extract(question) else {
        return Outcome::fallback(FALLBACK, None, SolveError::NoMatch { solver: "expression" });
    };

    match evaluate_text(&expr).and_then(format_number) {
        Ok(answer) => {
            tracing::debug!(%expr, %answer, "expression solved");
            Outcome::solved(answer, Some(expr), None)
        }
        Err(err) => Outcome::fallback(FALLBACK, Some(expr), err),
    }
}

/// Pull the expression out of the question and normalize operator glyphs.
pub fn extract(question: &str) -> Option<String> {
    let caps = crate::regex!(r"(?is)what\s+is\s+(.+?)\?").captures(question)?;
    let expr = caps.get(1)?.as_str().trim();
    Some(expr.replace('\u{00d7}', "*").replace('\u{00f7}', "/"))
}

/// Validate, tokenize and evaluate an already extracted expression.
pub fn evaluate_text(expr: &str) -> Result<f64> {
    let scanned = scan(expr);
    if let Some(ch) = scanned.first_disallowed {
        return Err(SolveError::DisallowedCharacter { ch });
    }
    // Without a digit every parse ends in 0 or an error; report it as empty.
    if !scanned.classes.contains(CharClass::DIGIT) {
        return Err(SolveError::EmptyExpression);
    }
    evaluate(&tokenize(expr)?)
}

/// Whole values print as integers; anything else is rounded to two places.
pub fn format_number(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(SolveError::NonFinite);
    }
    if value == value.trunc() {
        return Ok(format!("{:.0}", value + 0.0));
    }
    // Round the exact binary value, ties to even: 0.125 -> 0.12.
    let text = format!("{value:.2}");
    let rounded: f64 = text.parse().map_err(|_| SolveError::MalformedNumber { text: text.clone() })?;
    if rounded == rounded.trunc() {
        // 2.999 rounds to a whole number but is still reported as a decimal.
        Ok(format!("{rounded:.1}"))
    } else {
        Ok(format!("{rounded}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_basic_questions() {
        assert_eq!(solve_expression("What is 2 + 3 * 4?"), "14");
        assert_eq!(solve_expression("What is (2 + 3) * 4?"), "20");
        assert_eq!(solve_expression("What is 10 / 4?"), "2.5");
        assert_eq!(solve_expression("What is 7 - 10?"), "-3");
    }

    #[test]
    fn extraction_is_case_and_space_tolerant() {
        assert_eq!(solve_expression("Quick one: what   IS 6 × 7 ?"), "42");
        assert_eq!(solve_expression("WHAT IS 9 ÷ 3?"), "3");
        assert_eq!(extract("What is  12 + 1 ? And what is 2?").as_deref(), Some("12 + 1"));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert_eq!(solve_expression("What is 2 + x?"), "0");
        assert_eq!(
            solve_expression_traced("What is 2 ^ 3?").reason,
            Some(SolveError::DisallowedCharacter { ch: '^' })
        );
    }

    #[test]
    fn falls_back_without_prompt() {
        let out = solve_expression_traced("Compute 2 + 2");

        assert_eq!(out.answer, "0");
        assert!(out.is_fallback());
        assert_eq!(out.extracted, None);
    }

    #[test]
    fn falls_back_on_evaluation_errors() {
        assert_eq!(solve_expression("What is 2 +?"), "0");
        assert_eq!(solve_expression("What is 1.2.3 + 1?"), "0");
        assert_eq!(solve_expression("What is 5 / 0?"), "0");
        assert_eq!(solve_expression("What is   ?"), "0");
        assert_eq!(evaluate_text("( + )"), Err(SolveError::EmptyExpression));
    }

    #[test]
    fn formats_results() {
        assert_eq!(format_number(4.0), Ok("4".to_string()));
        assert_eq!(format_number(-0.0), Ok("0".to_string()));
        assert_eq!(format_number(1.0 / 3.0), Ok("0.33".to_string()));
        assert_eq!(format_number(2.675_1), Ok("2.68".to_string()));
        assert_eq!(format_number(2.999), Ok("3.0".to_string()));
        assert_eq!(format_number(-0.001), Ok("-0.0".to_string()));
        assert_eq!(format_number(1e15), Ok("1000000000000000".to_string()));
        assert_eq!(format_number(f64::NAN), Err(SolveError::NonFinite));
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(format_number(0.125), Ok("0.12".to_string()));
        assert_eq!(format_number(0.625), Ok("0.62".to_string()));
        assert_eq!(format_number(0.375), Ok("0.38".to_string()));
        // 2.675 is stored just below the tie.
        assert_eq!(format_number(2.675), Ok("2.67".to_string()));
    }

    #[test]
    fn deep_nesting_falls_back() {
        let question = format!("What is {}1?", "(".repeat(100_000));
        let out = solve_expression_traced(&question);

        assert_eq!(out.answer, "0");
        assert_eq!(out.reason, Some(SolveError::NestingTooDeep));
    }
}
