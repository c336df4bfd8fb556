//! Query-string parsing module

use std::collections::HashMap;

/// Parse a raw query string (without the leading `?`) into a key → value map.
///
/// Percent-encoding is decoded. A bare key (`?question`) maps to an empty
/// value, so it still counts as a parameter. Duplicate keys keep the last
/// value.
pub fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    raw.map(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query_string_is_empty() {
        assert!(parse_query(None).is_empty());
    }

    #[test]
    fn test_empty_query_string_is_empty() {
        assert!(parse_query(Some("")).is_empty());
    }

    #[test]
    fn test_key_value_pairs() {
        let query = parse_query(Some("first=Kelsie&last=Dibben"));
        assert_eq!(query.len(), 2);
        assert_eq!(query["first"], "Kelsie");
        assert_eq!(query["last"], "Dibben");
    }

    #[test]
    fn test_bare_key_counts_as_parameter() {
        let query = parse_query(Some("Will%20I%20become%20rich?"));
        assert_eq!(query.len(), 1);
        assert_eq!(query["Will I become rich?"], "");
    }

    #[test]
    fn test_percent_decoding() {
        let query = parse_query(Some("first=K%26r&last=O%27Brien"));
        assert_eq!(query["first"], "K&r");
        assert_eq!(query["last"], "O'Brien");
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let query = parse_query(Some("a=1&a=2"));
        assert_eq!(query["a"], "2");
    }
}
