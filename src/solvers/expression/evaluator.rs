//! Recursive-descent evaluation over a token slice.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := '(' expr ')' | number
//! ```
//!
//! Each level returns the value and the index just past what it consumed.
//! The grammar is applied permissively: a factor that is neither `(` nor a
//! number counts as `0` and is skipped, and a missing `)` is ignored. Only
//! running out of tokens where an operand is required is an error, as is
//! nesting parentheses deeper than [`MAX_DEPTH`].

use super::tokenizer::Token;
use crate::error::{Result, SolveError};

/// Deepest parenthesis nesting evaluated before giving up.
pub const MAX_DEPTH: usize = 256;

/// Evaluate `tokens` from the start, ignoring anything left over after the
/// first complete expression.
pub fn evaluate(tokens: &[Token]) -> Result<f64> {
    let (value, _) = parse_expr(tokens, 0, 0)?;
    Ok(value)
}

pub(crate) fn parse_expr(tokens: &[Token], pos: usize, depth: usize) -> Result<(f64, usize)> {
    let (mut value, mut pos) = parse_term(tokens, pos, depth)?;
    while let Some(op @ (Token::Plus | Token::Minus)) = tokens.get(pos) {
        let (rhs, next) = parse_term(tokens, pos + 1, depth)?;
        match op {
            Token::Plus => value += rhs,
            _ => value -= rhs,
        }
        pos = next;
    }
    Ok((value, pos))
}

fn parse_term(tokens: &[Token], pos: usize, depth: usize) -> Result<(f64, usize)> {
    let (mut value, mut pos) = parse_factor(tokens, pos, depth)?;
    while let Some(op @ (Token::Star | Token::Slash)) = tokens.get(pos) {
        let (rhs, next) = parse_factor(tokens, pos + 1, depth)?;
        match op {
            Token::Star => value *= rhs,
            _ => value /= rhs,
        }
        pos = next;
    }
    Ok((value, pos))
}

fn parse_factor(tokens: &[Token], pos: usize, depth: usize) -> Result<(f64, usize)> {
    match tokens.get(pos) {
        Some(Token::LParen) if depth >= MAX_DEPTH => Err(SolveError::NestingTooDeep),
        Some(Token::LParen) => {
            let (value, mut pos) = parse_expr(tokens, pos + 1, depth + 1)?;
            if let Some(Token::RParen) = tokens.get(pos) {
                pos += 1;
            }
            Ok((value, pos))
        }
        Some(Token::Number(value)) => Ok((*value, pos + 1)),
        // Stray operator or ')': neutral value, step over it.
        Some(_) => Ok((0.0, pos + 1)),
        None => Err(SolveError::UnexpectedEnd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::expression::tokenize;

    fn eval(src: &str) -> Result<f64> {
        evaluate(&tokenize(src)?)
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
        assert_eq!(eval("64 / 4 / 2"), Ok(8.0));
        assert_eq!(eval("2 * (3 + (4 - 1)) / 3"), Ok(4.0));
    }

    #[test]
    fn reports_consumed_position() {
        let tokens = tokenize("(1 + 2) 7").unwrap();

        assert_eq!(parse_expr(&tokens, 0, 0), Ok((3.0, 5)));
        assert_eq!(evaluate(&tokens), Ok(3.0));
    }

    #[test]
    fn unclosed_paren_is_tolerated() {
        assert_eq!(eval("(2 + 3 * 2"), Ok(8.0));
    }

    #[test]
    fn stray_tokens_count_as_zero() {
        assert_eq!(eval("2 + )"), Ok(2.0));
        // A leading minus is not unary: the '-' factor is 0 and the walk stops.
        assert_eq!(eval("-3 + 5"), Ok(0.0));
        assert_eq!(eval("4 * * 2"), Ok(0.0));
    }

    #[test]
    fn division_by_zero_is_ieee() {
        assert_eq!(eval("1 / 0"), Ok(f64::INFINITY));
        assert!(eval("0 / 0").unwrap().is_nan());
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let at_limit = format!("{}7{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(eval(&at_limit), Ok(7.0));

        let past_limit = format!("{}7", "(".repeat(MAX_DEPTH + 1));
        assert_eq!(eval(&past_limit), Err(SolveError::NestingTooDeep));

        assert_eq!(eval(&"(".repeat(100_000)), Err(SolveError::NestingTooDeep));
    }

    #[test]
    fn running_out_of_operands_is_an_error() {
        assert_eq!(eval("2 +"), Err(SolveError::UnexpectedEnd));
        assert_eq!(eval(""), Err(SolveError::UnexpectedEnd));
        assert_eq!(eval("("), Err(SolveError::UnexpectedEnd));
    }
}
