//! JSON Pointer (RFC 6901) rendering of graph paths.

/// Escapes a path component: `~` becomes `~0` and `/` becomes `~1`.
///
/// # Example
///
/// ```
/// use object_graph::pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("plain"), "plain");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ first, otherwise the ~ introduced by ~1 would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

/// Formats path components as a JSON Pointer. The root path is `""`.
///
/// # Example
///
/// ```
/// use object_graph::pointer::format_pointer;
///
/// assert_eq!(format_pointer::<&str>(&[]), "");
/// assert_eq!(format_pointer(&["a", "0", "b/c"]), "/a/0/b~1c");
/// ```
pub fn format_pointer<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component.as_ref()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
        assert_eq!(escape_component("~~"), "~0~0");
        assert_eq!(escape_component("//"), "~1~1");
        assert_eq!(escape_component(""), "");
    }

    #[test]
    fn test_format_pointer() {
        assert_eq!(format_pointer(&[""]), "/");
        assert_eq!(format_pointer(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
    }
}
