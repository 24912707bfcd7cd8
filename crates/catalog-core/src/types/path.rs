//! Helpers for absolute, slash-delimited catalog paths.
//!
//! Catalog paths never carry a trailing slash. The root directory is
//! spelled `"/"` by callers but behaves as the empty prefix, so root
//! children are paths with exactly one segment.

/// Return the scan prefix for the direct and deep descendants of
/// `directory`.
///
/// `"/"` and `""` both map to `"/"`; any other directory maps to
/// `directory + "/"`. Trailing slashes on the input are ignored.
pub fn directory_prefix(directory: &str) -> String {
    let base = directory.trim_end_matches('/');
    format!("{base}/")
}

/// Join a directory scan prefix (as returned by [`directory_prefix`]) with
/// a single child segment.
pub fn child_path(prefix: &str, child_name: &str) -> String {
    format!("{prefix}{child_name}")
}
