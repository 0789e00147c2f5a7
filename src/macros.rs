/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Every extraction pattern in the crate is a literal, so a bad pattern is a
/// programming error caught by the first test that touches it.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect(concat!("invalid regex: ", $pat)));
        &*RE
    }};
}

/// Declare a sequence rule: a name, a predicate over the full term list and
/// the prediction it makes when the predicate holds.
macro_rules! sequence_rule {
    (
        name: $name:expr,
        matches: |$m_terms:ident| $m_body:expr,
        next: |$n_terms:ident| $n_body:expr
        $(,)?
    ) => {
        $crate::solvers::sequence::SequenceRule {
            name: $name,
            matches: |$m_terms: &[i64]| -> bool { $m_body },
            next: |$n_terms: &[i64]| -> i128 { $n_body },
        }
    };
}
