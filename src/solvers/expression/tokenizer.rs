use crate::error::{Result, SolveError};

/// A lexical unit of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Split `input` into tokens.
///
/// Whitespace and unknown characters are skipped. A maximal run of digits
/// and dots is a single number; a run that is not a valid float (`1.2.3`,
/// `.`) is a [`SolveError::MalformedNumber`].
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }
                let text = &input[start..end];
                let value = text.parse::<f64>().map_err(|_| SolveError::MalformedNumber { text: text.to_string() })?;
                Token::Number(value)
            }
            _ => continue,
        };
        tokens.push(token);
    }

    Ok(tokens)
}
