// Path Conversion Utilities
//
// The scanner identifies entries two ways: the full native path (stable identity
// within one scan) and a relative Unix-style path used for classification and
// for the depth rules of the enumerator.

/// Append a child name to a relative Unix-style path
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Number of directories between the root and the entry (root children are 0)
pub fn relative_depth(relative: &str) -> usize {
    if relative.is_empty() {
        0
    } else {
        relative.matches('/').count()
    }
}
