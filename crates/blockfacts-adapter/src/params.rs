/*
[INPUT]:  Caller-supplied multi-value arguments and endpoint parameters
[OUTPUT]: Comma-joined, space-stripped query values and ordered query strings
[POS]:    Parameter layer - shared by every endpoint group
[UPDATE]: When adding parameter kinds or changing query formatting
*/

use std::fmt;

/// Page requested when the caller does not pass one
pub const DEFAULT_PAGE: u32 = 1;

/// Join a sequence of tokens with `,` and strip literal spaces.
///
/// Order and duplicates are preserved; embedded commas are not escaped.
pub fn join_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            joined.push(',');
        }
        joined.push_str(value.as_ref());
    }
    normalize_joined(&joined)
}

/// Strip literal spaces from an already comma-joined value.
///
/// Only `' '` is removed; tabs and newlines pass through untouched.
pub fn normalize_joined(value: &str) -> String {
    value.replace(' ', "")
}

/// A multi-value query parameter: assets, denominators, exchanges, intervals, pairs.
///
/// Implemented for both sequences and pre-joined strings so that
/// `["BTC", "ETH"]` and `"BTC, ETH"` produce the same query value.
pub trait MultiValue {
    fn to_query_value(&self) -> String;
}

impl MultiValue for str {
    fn to_query_value(&self) -> String {
        normalize_joined(self)
    }
}

impl MultiValue for String {
    fn to_query_value(&self) -> String {
        normalize_joined(self)
    }
}

impl<S: AsRef<str>> MultiValue for [S] {
    fn to_query_value(&self) -> String {
        join_values(self)
    }
}

impl<S: AsRef<str>> MultiValue for Vec<S> {
    fn to_query_value(&self) -> String {
        join_values(self)
    }
}

impl<S: AsRef<str>, const N: usize> MultiValue for [S; N] {
    fn to_query_value(&self) -> String {
        join_values(self)
    }
}

impl<T: MultiValue + ?Sized> MultiValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Ordering of period movers results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoversSort {
    /// Biggest losers first (`sort=1`)
    #[default]
    LosersFirst,
    /// Biggest winners first (`sort=-1`)
    WinnersFirst,
}

impl MoversSort {
    pub fn as_i8(self) -> i8 {
        match self {
            MoversSort::LosersFirst => 1,
            MoversSort::WinnersFirst => -1,
        }
    }
}

impl fmt::Display for MoversSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Builds `path?k1=v1&k2=v2` with parameters in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct QueryBuilder {
    path: String,
    params: Vec<String>,
}

impl QueryBuilder {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub(crate) fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.params.push(format!("{name}={value}"));
        self
    }

    /// Omitted from the query string entirely when `None`.
    pub(crate) fn param_opt<V: fmt::Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    pub(crate) fn build(self) -> String {
        if self.params.is_empty() {
            self.path
        } else {
            format!("{}?{}", self.path, self.params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["a", "b c"], "a,bc")]
    #[case(&["BTC", "ETH", "BTC"], "BTC,ETH,BTC")]
    #[case(&["ETH", "BTC"], "ETH,BTC")]
    #[case(&[" BTC "], "BTC")]
    fn test_sequence_normalization(#[case] input: &[&str], #[case] expected: &str) {
        assert_eq!(input.to_query_value(), expected);
    }

    #[rstest]
    #[case("a, b c", "a,bc")]
    #[case("BTC,ETH", "BTC,ETH")]
    #[case("  ", "")]
    #[case("BTC,\tETH", "BTC,\tETH")]
    fn test_joined_normalization(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.to_query_value(), expected);
    }

    #[test]
    fn test_sequence_and_joined_forms_agree() {
        let from_vec = vec!["a".to_string(), "b c".to_string()].to_query_value();
        let from_array = ["a", "b c"].to_query_value();
        let from_str = "a, b c".to_query_value();
        let from_string = String::from("a, b c").to_query_value();

        assert_eq!(from_vec, "a,bc");
        assert_eq!(from_array, from_vec);
        assert_eq!(from_str, from_vec);
        assert_eq!(from_string, from_vec);
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(empty.to_query_value(), "");
    }

    #[test]
    fn test_embedded_commas_not_escaped() {
        assert_eq!(join_values(["BTC,ETH", "LTC"]), "BTC,ETH,LTC");
    }

    #[test]
    fn test_query_builder_keeps_order() {
        let endpoint = QueryBuilder::new("blockfacts/price/historical")
            .param("asset", "BTC")
            .param("denominator", "USD")
            .param("date", "01.02.2020")
            .param("time", "14:25:00")
            .param("interval", 20)
            .param("page", DEFAULT_PAGE)
            .build();

        assert_eq!(
            endpoint,
            "blockfacts/price/historical?asset=BTC&denominator=USD&date=01.02.2020&time=14:25:00&interval=20&page=1"
        );
    }

    #[test]
    fn test_query_builder_without_params() {
        assert_eq!(QueryBuilder::new("assets").build(), "assets");
    }

    #[test]
    fn test_query_builder_skips_missing_optional() {
        let endpoint = QueryBuilder::new("blockfacts/price/endOfDay")
            .param("asset", "BTC")
            .param_opt::<u32>("length", None)
            .build();
        assert_eq!(endpoint, "blockfacts/price/endOfDay?asset=BTC");

        let endpoint = QueryBuilder::new("blockfacts/price/endOfDay")
            .param("asset", "BTC")
            .param_opt("length", Some(7))
            .build();
        assert_eq!(endpoint, "blockfacts/price/endOfDay?asset=BTC&length=7");
    }

    #[test]
    fn test_movers_sort_rendering() {
        assert_eq!(MoversSort::default(), MoversSort::LosersFirst);
        assert_eq!(MoversSort::LosersFirst.to_string(), "1");
        assert_eq!(MoversSort::WinnersFirst.to_string(), "-1");
    }
}
