//! Character-class scan for extracted expressions.
//!
//! A single pass over the candidate text records which classes of character
//! it contains and the first character outside the arithmetic alphabet.

bitflags::bitflags! {
    /// Classes of character present in an expression.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        const DIGIT      = 1 << 0;
        const DISALLOWED = 1 << 1;
    }
}

/// Result of [`scan`]: the class mask and the first disallowed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharScan {
    pub classes: CharClass,
    pub first_disallowed: Option<char>,
}

pub fn scan(input: &str) -> CharScan {
    let mut classes = CharClass::empty();
    let mut first_disallowed = None;

    for ch in input.chars() {
        classes |= match ch {
            '0'..='9' => CharClass::DIGIT,
            '.' | '+' | '-' | '*' | '/' | '(' | ')' => CharClass::empty(),
            c if c.is_whitespace() => CharClass::empty(),
            c => {
                first_disallowed.get_or_insert(c);
                CharClass::DISALLOWED
            }
        };
    }

    CharScan { classes, first_disallowed }
}
