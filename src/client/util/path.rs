use std::sync::LazyLock;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static FILES_HOME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/server/[a-z0-9]+/files$").expect("valid regex"));

static FILE_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/server/[a-z0-9]+/files/(?:directory|edit)(/.*)?$").expect("valid regex")
});

/// Maps a file manager pathname onto the directory or file it shows.
///
/// - `/server/{id}/files` is the root, `/`.
/// - `/server/{id}/files/directory/...` and `/server/{id}/files/edit/...` yield the
///   remainder after the action segment, `/` when there is none.
/// - Anything else is returned unchanged, so already logical paths stay as they are.
///
/// Only lowercase alphanumeric server identifiers are recognised.
pub fn normalize_file_path(pathname: &str) -> String {
    if FILES_HOME.is_match(pathname) {
        return "/".to_string();
    }

    if let Some(captures) = FILE_ACTION.captures(pathname) {
        return match captures.get(1).map(|m| m.as_str()) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => "/".to_string(),
        };
    }

    pathname.to_string()
}

/// Joins a route prefix and a sub-path with exactly one `/` between them.
pub fn join_route(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        }
    } else {
        format!("{}/{}", prefix, path)
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-encodes each segment of a logical path, keeping the separators.
pub fn encode_path_segments(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Inverse of [`encode_path_segments`]. Invalid UTF-8 sequences are replaced.
pub fn decode_path(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// `/a/b/c.txt` -> `/a/b`, `/a` -> `/`.
pub fn parent_directory(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(index) => trimmed[..index].to_string(),
    }
}

/// Appends a file name to a directory, normalizing the separator.
pub fn join_file_path(directory: &str, name: &str) -> String {
    let joined = join_route(directory, name);
    if joined.starts_with('/') {
        joined
    } else {
        format!("/{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the files home route.
    ///
    /// Expected: the root path
    #[test]
    fn files_home_is_root() {
        assert_eq!(normalize_file_path("/server/abc123/files"), "/");
    }

    /// Tests directory and edit routes.
    ///
    /// Expected: the remainder after the action segment
    #[test]
    fn file_action_yields_remainder() {
        assert_eq!(normalize_file_path("/server/abc123/files/directory/foo/bar"), "/foo/bar");
        assert_eq!(normalize_file_path("/server/abc123/files/edit/config/server.properties"), "/config/server.properties");
        assert_eq!(normalize_file_path("/server/abc123/files/directory/"), "/");
    }

    /// Tests an action route without a remainder.
    ///
    /// Expected: empty capture defaults to the root
    #[test]
    fn empty_capture_defaults_to_root() {
        assert_eq!(normalize_file_path("/server/abc123/files/directory"), "/");
        assert_eq!(normalize_file_path("/server/abc123/files/edit"), "/");
    }

    /// Tests routes that match neither pattern.
    ///
    /// Verifies unrelated routes, uppercase or dashed identifiers and lookalike
    /// action segments fall through.
    ///
    /// Expected: input returned unchanged
    #[test]
    fn unmatched_paths_pass_through() {
        for path in [
            "/unrelated/route",
            "/server/ABC123/files",
            "/server/abc-123/files/directory/foo",
            "/server/abc123/files/directoryfoo",
            "/server/abc123/files/",
        ] {
            assert_eq!(normalize_file_path(path), path);
        }
    }

    /// Tests that normalizing a logical path again is a no-op.
    ///
    /// Expected: same output on the second application
    #[test]
    fn normalization_is_idempotent() {
        let logical = normalize_file_path("/server/abc123/files");
        assert_eq!(normalize_file_path(&logical), logical);
        let logical = normalize_file_path("/server/abc123/files/directory/plugins");
        assert_eq!(normalize_file_path(&logical), logical);
    }

    /// Tests route prefix joining.
    ///
    /// Expected: a single separator in every combination
    #[test]
    fn joins_routes() {
        assert_eq!(join_route("/server/abc123/", "/files"), "/server/abc123/files");
        assert_eq!(join_route("/server/abc123", "files"), "/server/abc123/files");
        assert_eq!(join_route("/server/abc123", ""), "/server/abc123");
        assert_eq!(join_route("", ""), "/");
    }

    /// Tests per-segment encoding and its inverse.
    ///
    /// Expected: separators kept, special characters encoded
    #[test]
    fn encodes_and_decodes_segments() {
        let encoded = encode_path_segments("/world nether/level#1.dat");
        assert_eq!(encoded, "/world%20nether/level%231.dat");
        assert_eq!(decode_path(&encoded), "/world nether/level#1.dat");
    }

    /// Tests parent lookups and file joins.
    ///
    /// Expected: parent of top-level entries is the root
    #[test]
    fn navigates_directories() {
        assert_eq!(parent_directory("/a/b/c.txt"), "/a/b");
        assert_eq!(parent_directory("/a/"), "/");
        assert_eq!(parent_directory("/"), "/");
        assert_eq!(join_file_path("/", "plugins"), "/plugins");
        assert_eq!(join_file_path("/plugins/", "/Essentials"), "/plugins/Essentials");
    }
}
