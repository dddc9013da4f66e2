//! Reveal masks for a query against a word.
//!
//! A mask has one character per character of the word: the word's own
//! character where it agrees with the query at that position, and
//! [`PLACEHOLDER`] everywhere else.

/// Character standing for "not revealed" in a mask.
pub const PLACEHOLDER: char = '_';

/// Compute the mask revealed when `query` is presented and `word` is the secret.
///
/// Positions past the end of the query are never revealed, so the empty query
/// yields an all-placeholder mask as long as the word itself. The mask length
/// therefore always encodes the word length.
pub fn reveal(word: &str, query: &str) -> String {
    let mut query = query.chars();
    word.chars()
        .map(|c| match query.next() {
            Some(q) if q == c => c,
            _ => PLACEHOLDER,
        })
        .collect()
}

/// Strip whitespace that callers may have left inside a response.
pub fn normalize_response(response: &str) -> String {
    response.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_longer_than_word() {
        assert_eq!(reveal("ab", "abcd"), "ab");
    }

    #[test]
    fn test_query_shorter_than_word() {
        assert_eq!(reveal("abcd", "ab"), "ab__");
    }
}
