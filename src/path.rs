//! Path algebra for the virtual filesystem.
//!
//! Everything here is pure string manipulation - nothing consults the
//! node tree. Whether a resolved path actually exists is the caller's
//! problem.

/// Resolve `arg` against the cursor `cwd` into an absolute normalized path.
///
/// `cwd` is either empty (root) or `/`-prefixed. An `arg` starting with
/// `/` is taken as absolute, anything else is joined onto the cursor.
/// `..` pops one segment (popping past root is a no-op), `.` and empty
/// segments are dropped. The result always carries a leading `/`.
pub fn resolve(cwd: &str, arg: &str) -> String {
    let joined = if arg.starts_with('/') {
        arg.to_string()
    } else if cwd.is_empty() {
        arg.to_string()
    } else {
        format!("{}/{}", cwd, arg)
    };

    let mut resolved: Vec<&str> = Vec::new();
    for part in joined.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            seg => resolved.push(seg),
        }
    }
    format!("/{}", resolved.join("/"))
}

/// Strip the leading slash so a resolved path can be walked from the
/// tree root. Root itself becomes the empty string.
pub fn strip_root(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Join a root-relative parent path and a child name. The root parent is
/// the empty string, so `join_rel("", "README.md")` is just `README.md`.
pub fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
