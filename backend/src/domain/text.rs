//! Small text helpers shared by the mutation services.

/// Split a comma-separated string into trimmed, non-empty tokens.
///
/// Tokens that are empty after trimming (from leading, trailing, or doubled
/// commas) are dropped rather than unioned into tag or skill sets.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a, b ,c", &["a", "b", "c"])]
    #[case("foo, bar", &["foo", "bar"])]
    #[case("foo, bar,", &["foo", "bar"])]
    #[case(",,foo", &["foo"])]
    #[case("   ", &[])]
    #[case("", &[])]
    fn splits_trims_and_drops_empty_tokens(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_csv(input), expected);
    }
}
