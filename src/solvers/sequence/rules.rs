use crate::solvers::sequence::SequenceRule;

/// Sequence rules in priority order. The first rule whose predicate holds
/// makes the prediction; [`fallback_next`] applies when none does.
pub fn get() -> Vec<SequenceRule> {
    vec![rule_fibonacci(), rule_arithmetic(), rule_geometric(), rule_second_order()]
}

/// Every term from the third on is the sum of the two before it.
fn rule_fibonacci() -> SequenceRule {
    sequence_rule! {
        name: "fibonacci",
        matches: |terms| terms.windows(3).all(|w| w[0] as i128 + w[1] as i128 == w[2] as i128),
        next: |terms| last_two_sum(terms),
    }
}

/// Constant first difference.
fn rule_arithmetic() -> SequenceRule {
    sequence_rule! {
        name: "arithmetic",
        matches: |terms| is_constant(&differences(terms)),
        next: |terms| {
            let diffs = differences(terms);
            last(terms) + diffs[0]
        },
    }
}

/// Constant ratio (compared at 6 decimal places), no zero divisors.
fn rule_geometric() -> SequenceRule {
    sequence_rule! {
        name: "geometric",
        matches: |terms| {
            terms[..terms.len() - 1].iter().all(|&t| t != 0) && {
                let keys: Vec<i64> = ratios(terms).iter().map(|&r| ratio_key(r)).collect();
                keys.windows(2).all(|w| w[0] == w[1])
            }
        },
        // Truncates toward zero; a non-exact ratio can land one below the
        // "obvious" answer and that is accepted.
        next: |terms| (last(terms) as f64 * ratios(terms)[0]).trunc() as i128,
    }
}

/// First differences vary but their differences are constant.
fn rule_second_order() -> SequenceRule {
    sequence_rule! {
        name: "second-order",
        matches: |terms| is_constant(&differences(&differences_i64(terms))),
        next: |terms| {
            let diffs = differences(terms);
            let second = differences(&differences_i64(terms));
            last(terms) + diffs[diffs.len() - 1] + second[0]
        },
    }
}

/// Prediction used when no rule matches.
pub fn fallback_next(terms: &[i64]) -> i128 {
    last_two_sum(terms)
}

fn last(terms: &[i64]) -> i128 {
    terms[terms.len() - 1] as i128
}

fn last_two_sum(terms: &[i64]) -> i128 {
    last(terms) + terms[terms.len() - 2] as i128
}

fn differences<T: Copy + Into<i128>>(terms: &[T]) -> Vec<i128> {
    terms.windows(2).map(|w| Into::<i128>::into(w[1]) - Into::<i128>::into(w[0])).collect()
}

/// First differences narrowed back to `i64` for the second pass; a difference
/// that does not fit saturates, which can only make the constancy test fail.
fn differences_i64(terms: &[i64]) -> Vec<i64> {
    terms.windows(2).map(|w| w[1].saturating_sub(w[0])).collect()
}

fn ratios(terms: &[i64]) -> Vec<f64> {
    terms.windows(2).map(|w| w[1] as f64 / w[0] as f64).collect()
}

fn ratio_key(ratio: f64) -> i64 {
    (ratio * 1e6).round() as i64
}

fn is_constant(values: &[i128]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(terms: &[i64]) -> Vec<&'static str> {
        get().into_iter().filter(|r| (r.matches)(terms)).map(|r| r.name).collect()
    }

    #[test]
    fn rule_predicates() {
        assert_eq!(fired(&[1, 1, 2, 3, 5]), vec!["fibonacci"]);
        assert_eq!(fired(&[2, 4, 6, 8]), vec!["arithmetic", "second-order"]);
        assert_eq!(fired(&[1, 2, 4, 8]), vec!["geometric"]);
        assert_eq!(fired(&[1, 2, 4, 7]), vec!["second-order"]);
        assert_eq!(fired(&[1, 2, 3]), vec!["fibonacci", "arithmetic", "second-order"]);
        assert!(fired(&[3, 1, 4, 1, 5]).is_empty());
    }

    #[test]
    fn geometric_skips_zero_divisors() {
        assert!(!(rule_geometric().matches)(&[0, 0, 0]));
        assert!((rule_geometric().matches)(&[3, 3, 3]));
    }

    #[test]
    fn geometric_truncates() {
        assert_eq!((rule_geometric().next)(&[81, 54, 36]), 24);
        assert_eq!((rule_geometric().next)(&[4, 6, 9]), 13);
    }

    #[test]
    fn fallback_sums_last_two() {
        assert_eq!(fallback_next(&[3, 1, 4, 1, 5]), 6);
    }
}
