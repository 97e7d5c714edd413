//! Pure path helpers shared by every operation that touches a store.
//!
//! All store calls take normalized paths of the form `/{ownerId}/{fileName}`;
//! callers normalize exactly once at the boundary and these functions assume
//! forward slashes afterwards.

use crate::errors::{IndexError, IndexResult};

/// Normalize a path: backslashes become forward slashes, repeated slashes
/// collapse, the trailing slash is stripped, and exactly one leading slash
/// remains. Total and idempotent.
pub fn normalize(path: &str) -> String {
    let replaced = path.replace('\\', "/");

    let mut out = String::with_capacity(replaced.len() + 1);
    out.push('/');
    let mut prev_slash = true;
    for ch in replaced.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }

    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Parse the owner id from the first path segment.
pub fn owner_id_from_path(path: &str) -> IndexResult<i64> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse::<i64>().ok())
        .ok_or_else(|| IndexError::MalformedPath(path.to_string()))
}

/// Last path segment.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Directory prefix of a file path: everything but the last segment when
/// that segment carries a `.`, otherwise the path itself.
pub fn directory_of(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, last)) if last.contains('.') => {
            if dir.is_empty() {
                "/".to_string()
            } else {
                dir.to_string()
            }
        }
        _ => path.to_string(),
    }
}

/// Best-effort MIME type from the file name extension. Unknown or missing
/// extensions yield `None`; this never fails the caller.
pub fn content_type_from_name(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext.to_ascii_lowercase().as_str() {
        "txt" | "log" | "md" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "bin" => "application/octet-stream",
        _ => return None,
    };
    Some(mime.to_string())
}

/// Insert ` (n)` before the final extension, so `/t/a.tar.gz` becomes
/// `/t/a.tar (n).gz`. Names without an extension get the suffix appended,
/// keeping collision probes terminating for them too.
pub fn with_collision_suffix(path: &str, n: u32) -> String {
    match path.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem} ({n}).{ext}"),
        None => format!("{path} ({n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cleans_separators() {
        assert_eq!(normalize("7/photo.png"), "/7/photo.png");
        assert_eq!(normalize("//7///photo.png/"), "/7/photo.png");
        assert_eq!(normalize("\\7\\docs\\a.txt"), "/7/docs/a.txt");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["//7//a.png/", "\\x\\y", "/already/normal.txt", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn owner_id_parses_first_segment() {
        assert_eq!(owner_id_from_path("/7/photo.png").unwrap(), 7);
        assert_eq!(owner_id_from_path("/42/deep/nested.txt").unwrap(), 42);
        assert!(matches!(
            owner_id_from_path("/alice/photo.png"),
            Err(IndexError::MalformedPath(_))
        ));
        assert!(matches!(
            owner_id_from_path("/"),
            Err(IndexError::MalformedPath(_))
        ));
    }

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(file_name_from_path("/7/photo.png"), "photo.png");
        assert_eq!(file_name_from_path("photo.png"), "photo.png");
        assert_eq!(file_name_from_path("/7/docs/a.txt"), "a.txt");
    }

    #[test]
    fn directory_drops_dotted_leaf_only() {
        assert_eq!(directory_of("/Trash/7/photo.png"), "/Trash/7");
        assert_eq!(directory_of("/Trash/7/archive"), "/Trash/7/archive");
        assert_eq!(directory_of("/a.png"), "/");
    }

    #[test]
    fn content_type_is_best_effort() {
        assert_eq!(
            content_type_from_name("photo.PNG").as_deref(),
            Some("image/png")
        );
        assert_eq!(
            content_type_from_name("doc.pdf").as_deref(),
            Some("application/pdf")
        );
        assert_eq!(content_type_from_name("weird.xyz123"), None);
        assert_eq!(content_type_from_name("no_extension"), None);
    }

    #[test]
    fn collision_suffix_lands_before_extension() {
        assert_eq!(
            with_collision_suffix("/Trash/7/photo.png", 1),
            "/Trash/7/photo (1).png"
        );
        assert_eq!(
            with_collision_suffix("/Trash/7/a.tar.gz", 2),
            "/Trash/7/a.tar (2).gz"
        );
        assert_eq!(with_collision_suffix("/Trash/7/notes", 1), "/Trash/7/notes (1)");
    }
}
