//! Root path resolution.
//!
//! # Responsibilities
//! - Expand a leading `~` using the `HOME` environment variable
//! - Lexically normalize the result (no filesystem access)
//!
//! # Design Decisions
//! - No error path: malformed input is normalized best-effort, and a
//!   nonexistent directory is only discovered when a request hits it

use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied root path into a canonical form.
pub fn resolve(input: &str) -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_default();
    normalize(&expand(input, &home))
}

/// Substitute a leading `~` with the given home directory.
fn expand(input: &str, home: &str) -> PathBuf {
    match input.strip_prefix('~') {
        Some(rest) => Path::new(home).join(rest.trim_start_matches('/')),
        None => PathBuf::from(input),
    }
}

/// Lexical normalization: drop `.` segments and redundant separators,
/// resolve `..` against preceding components. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let undo = matches!(last, Some(Component::Normal(_)));
                // `..` above the root stays at the root
                let at_root = matches!(
                    last,
                    Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if undo {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
