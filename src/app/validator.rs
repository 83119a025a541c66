//! Search input validation.

use crate::domain::{SearchError, SEARCH_QUERY_LIMIT};

/// Validates raw search box text.
///
/// Trims surrounding whitespace and rejects queries whose trimmed length
/// exceeds [`SEARCH_QUERY_LIMIT`] characters. An empty result is valid and
/// means "no filter".
///
/// # Errors
///
/// Returns [`SearchError::TooLong`] when the trimmed input is too long.
///
/// # Example
///
/// ```rust
/// use storefront::app::validate;
///
/// assert_eq!(validate("  earbuds ").unwrap(), "earbuds");
/// assert!(validate(&"x".repeat(51)).is_err());
/// ```
pub fn validate(raw: &str) -> Result<String, SearchError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > SEARCH_QUERY_LIMIT {
        return Err(SearchError::TooLong {
            limit: SEARCH_QUERY_LIMIT,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_up_to_limit() {
        let exactly = format!("  {}  ", "a".repeat(SEARCH_QUERY_LIMIT));
        assert_eq!(validate(&exactly).unwrap(), "a".repeat(SEARCH_QUERY_LIMIT));
        assert_eq!(validate("\tLaptop\n").unwrap(), "Laptop");
    }

    #[test]
    fn whitespace_only_is_empty_query() {
        assert_eq!(validate("    ").unwrap(), "");
        assert_eq!(validate("").unwrap(), "");
    }

    #[test]
    fn rejects_over_limit_and_names_it() {
        let err = validate(&"b".repeat(SEARCH_QUERY_LIMIT + 1)).unwrap_err();
        assert_eq!(err, SearchError::TooLong { limit: 50 });
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let accented = "é".repeat(SEARCH_QUERY_LIMIT);
        assert!(accented.len() > SEARCH_QUERY_LIMIT);
        assert!(validate(&accented).is_ok());
    }

    #[test]
    fn padding_does_not_count_towards_limit() {
        let padded = format!("{}{}{}", " ".repeat(30), "c".repeat(SEARCH_QUERY_LIMIT), " ".repeat(30));
        assert!(validate(&padded).is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// `body` wrapped in random leading and trailing whitespace.
        fn padded(body: impl Strategy<Value = String>) -> impl Strategy<Value = (String, String)> {
            ("[ \t\n]{0,8}", body, "[ \t\n]{0,8}")
                .prop_map(|(lead, body, tail)| (format!("{lead}{body}{tail}"), body))
        }

        /// Between 2 and 50 characters, not starting or ending with whitespace.
        fn query_within_limit() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9]\\PC{0,48}[a-zA-Z0-9é]"
        }

        /// Between 51 and 70 characters, not starting or ending with whitespace.
        fn query_over_limit() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9]\\PC{49,68}[a-zA-Z0-9é]"
        }

        proptest! {
            /// Property: inputs within the limit validate to their trimmed form.
            #[test]
            fn accepts_trimmed_input_within_limit((raw, body) in padded(query_within_limit())) {
                prop_assert_eq!(validate(&raw), Ok(body));
            }

            /// Property: inputs over the limit always fail with the limit named.
            #[test]
            fn rejects_every_input_over_limit((raw, _body) in padded(query_over_limit())) {
                prop_assert_eq!(validate(&raw), Err(SearchError::TooLong { limit: SEARCH_QUERY_LIMIT }));
            }

            /// Property: validation is idempotent and deterministic.
            #[test]
            fn validating_a_valid_query_again_is_a_no_op(raw in any::<String>()) {
                if let Ok(query) = validate(&raw) {
                    prop_assert_eq!(validate(&query), Ok(query.clone()));
                }
                prop_assert_eq!(validate(&raw), validate(&raw));
            }
        }
    }
}
