use std::cmp::Ordering;

/// Default key ordering.
///
/// Keys are compared by their UTF-16 code units, which is the ordering a
/// host's default array sort applies to strings. It differs from `str`'s
/// byte order only for characters outside the Basic Multilingual Plane,
/// whose surrogate pairs sort before `U+E000..=U+FFFF`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use sort_keys::default_compare;
///
/// assert_eq!(default_compare("a", "b"), Ordering::Less);
/// assert_eq!(default_compare("B", "a"), Ordering::Less); // uppercase first
/// assert_eq!(default_compare("10", "9"), Ordering::Less); // not numeric
/// assert_eq!(default_compare("\u{1F600}", "\u{FF21}"), Ordering::Less);
/// ```
pub fn default_compare(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
