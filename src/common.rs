use core::cmp::Ordering;

/// Compares two keys ignoring case.
///
/// Both sides are folded through [`char::to_lowercase`] one character at a
/// time, so no intermediate `String` is allocated.
pub fn cmp_keys(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Returns `true` if `a` and `b` are the same key under [`cmp_keys`].
pub fn keys_eq(a: &str, b: &str) -> bool {
    cmp_keys(a, b) == Ordering::Equal
}

/// The partition letter for `key`: its first character upper-cased, if that
/// is an ASCII letter.
pub fn partition_letter(key: &str) -> Option<char> {
    let first = key.chars().next()?.to_ascii_uppercase();
    first.is_ascii_uppercase().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_keys_ignores_case() {
        assert_eq!(cmp_keys("Apple", "aPPLE"), Ordering::Equal);
        assert_eq!(cmp_keys("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_keys("Zebra", "apple"), Ordering::Greater);
        assert_eq!(cmp_keys("app", "APPLE"), Ordering::Less);
        assert!(keys_eq("", ""));
        assert!(!keys_eq("cat", "cats"));
    }

    #[test]
    fn test_partition_letter() {
        assert_eq!(partition_letter("apple"), Some('A'));
        assert_eq!(partition_letter("Zebra"), Some('Z'));
        assert_eq!(partition_letter("7x"), None);
        assert_eq!(partition_letter(""), None);
        assert_eq!(partition_letter("éclair"), None);
        assert_eq!(partition_letter(" space"), None);
    }
}
