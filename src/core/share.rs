//! Share-token codec.
//!
//! A token is a comma-separated list of zero-based indices into the ascending
//! lexicographic order of all known file paths, embedded as `#hide=<token>`.
//! Indexing the sorted path list (rather than on-screen position) keeps the
//! token independent of which rows currently sit in the holding area, so
//! encoding the same hidden set always yields the same token.
//!
//! Positional indices are inherently fragile when the file list itself
//! changes between share and restore (re-sorting, filtering, new commits);
//! that is documented behavior of the format. Decoding skips entries that do
//! not resolve instead of failing.

use std::collections::BTreeSet;

use crate::config::FRAGMENT_PARAM;

/// Encode the hidden set as a token, given the sorted known-path order.
/// Hidden paths without a known row are not representable and are dropped.
pub fn encode(hidden: &BTreeSet<String>, known_sorted: &[String]) -> String {
    known_sorted
        .iter()
        .enumerate()
        .filter(|(_, path)| hidden.contains(*path))
        .map(|(index, _)| index.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a token into indices. Malformed entries are silently skipped.
pub fn decode(token: &str) -> Vec<usize> {
    token
        .split(',')
        .filter_map(|entry| entry.trim().parse().ok())
        .collect()
}

/// Resolve decoded indices against the current sorted known-path order.
/// Out-of-range indices are silently skipped.
pub fn resolve(indices: &[usize], known_sorted: &[String]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&index| known_sorted.get(index).cloned())
        .collect()
}

/// Build the URL fragment for a token: `#hide=<token>`.
pub fn fragment_for(token: &str) -> String {
    format!("#{}={}", FRAGMENT_PARAM, token)
}

/// Extract a token from a URL hash (without the leading '#'). Tolerates
/// additional `&`-separated segments around ours.
pub fn token_from_fragment(hash: &str) -> Option<String> {
    let prefix = format!("{}=", FRAGMENT_PARAM);
    hash.split('&')
        .find_map(|segment| segment.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        ["a.txt", "b/c.txt", "b/d.txt", "z.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_round_trip_is_set_identity() {
        let known = known();
        let hidden: BTreeSet<String> =
            ["b/d.txt".to_string(), "a.txt".to_string()].into_iter().collect();

        let token = encode(&hidden, &known);
        let restored: BTreeSet<String> =
            resolve(&decode(&token), &known).into_iter().collect();
        assert_eq!(restored, hidden);
    }

    #[test]
    fn test_encoding_is_order_independent() {
        let known = known();
        let forward: BTreeSet<String> =
            ["a.txt".to_string(), "z.txt".to_string()].into_iter().collect();
        let backward: BTreeSet<String> =
            ["z.txt".to_string(), "a.txt".to_string()].into_iter().collect();
        assert_eq!(encode(&forward, &known), encode(&backward, &known));
        assert_eq!(encode(&forward, &known), "0,3");
    }

    #[test]
    fn test_empty_set_round_trips() {
        let known = known();
        let token = encode(&BTreeSet::new(), &known);
        assert_eq!(token, "");
        assert!(decode(&token).is_empty());
    }

    #[test]
    fn test_decode_skips_garbage() {
        assert_eq!(decode("1,x,2,,-3, 4"), vec![1, 2, 4]);
    }

    #[test]
    fn test_resolve_skips_out_of_range() {
        let known = known();
        assert_eq!(
            resolve(&[1, 99, 2], &known),
            vec!["b/c.txt".to_string(), "b/d.txt".to_string()]
        );
    }

    #[test]
    fn test_hidden_path_without_row_is_dropped() {
        let known = known();
        let hidden: BTreeSet<String> =
            ["a.txt".to_string(), "gone.txt".to_string()].into_iter().collect();
        assert_eq!(encode(&hidden, &known), "0");
    }

    #[test]
    fn test_fragment_round_trip() {
        assert_eq!(fragment_for("1,2"), "#hide=1,2");
        assert_eq!(token_from_fragment("hide=1,2"), Some("1,2".to_string()));
        assert_eq!(
            token_from_fragment("other=x&hide=0"),
            Some("0".to_string())
        );
        assert_eq!(token_from_fragment("diff-123abc"), None);
        assert_eq!(token_from_fragment(""), None);
    }
}
