//! Slash-separated path algebra.
//!
//! Every path the engine handles is a `/`-separated string relative to the scan
//! root, with `"."` naming the root itself. Keeping this lexical (no `std::path`,
//! no filesystem lookups) is what lets the engine run without I/O and behave the
//! same on every platform.

/// Base distance for targets that can only be reached by walking upward from an
/// info directory. Any downward relation is always closer than this.
pub const UPWARD_DISTANCE: usize = 1_000_000;

/// Lexically normalizes a path: drops empty and `.` components and folds `..`
/// against the component before it. An empty result becomes `"."`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut out: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            _ => out.push(part),
        }
    }

    let joined = out.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return clean(path);
    }
    if path.is_empty() {
        return clean(base);
    }
    clean(&format!("{}/{}", base, path))
}

/// Everything but the last component, cleaned. `"."` when there is no separator.
pub fn dir(path: &str) -> String {
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(i) => clean(&path[..i]),
        None => ".".to_string(),
    }
}

pub fn base(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" }.to_string();
    }
    match trimmed.rfind('/') {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

fn components(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect()
}

/// Relative path that leads from `base` to `target`.
///
/// Returns `None` when `base` climbs out through `..` components that cannot be
/// walked back, or when only one of the two paths is rooted.
pub fn rel(base: &str, target: &str) -> Option<String> {
    let base = clean(base);
    let target = clean(target);
    if base == target {
        return Some(".".to_string());
    }
    if base.starts_with('/') != target.starts_with('/') {
        return None;
    }

    let b = components(&base);
    let t = components(&target);
    let common = b.iter().zip(&t).take_while(|(x, y)| x == y).count();

    if b[common..].contains(&"..") {
        return None;
    }

    let mut parts: Vec<&str> = vec![".."; b.len() - common];
    parts.extend_from_slice(&t[common..]);

    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}

fn is_upward(relative: &str) -> bool {
    relative == ".." || relative.starts_with("../")
}

/// How far an info directory is from a target directory.
///
/// - `0` when they are the same directory.
/// - separators in the relative path plus one when the target lies below the
///   info directory, so an immediate child directory is `1`.
/// - [`UPWARD_DISTANCE`] plus the number of `..` steps when the target can only be
///   reached by climbing; such candidates lose to any downward one.
pub fn distance(info_dir: &str, target_dir: &str) -> usize {
    let info_dir = clean(info_dir);
    let target_dir = clean(target_dir);
    if info_dir == target_dir {
        return 0;
    }

    match rel(&info_dir, &target_dir) {
        Some(r) if is_upward(&r) => {
            UPWARD_DISTANCE + r.split('/').filter(|c| *c == "..").count()
        }
        Some(r) => r.matches('/').count() + 1,
        None => usize::MAX,
    }
}

/// True when `dir` is `target` itself or lies somewhere beneath it. A target made
/// only of `..` steps sits above the root and so contains every path inside it.
pub fn is_self_or_ancestor(target: &str, dir: &str) -> bool {
    let target = clean(target);
    if components(&target).iter().all(|c| *c == "..") && !is_upward(&clean(dir)) {
        return true;
    }
    match rel(&target, dir) {
        Some(r) => !is_upward(&r),
        None => false,
    }
}

/// True when an annotation written as `local` in an info file living in
/// `info_dir` points at that directory or one of its parents. A bare `"."` is the
/// one accepted way for an info file to describe its own directory.
pub fn is_ancestor_reference(local: &str, resolved: &str, info_dir: &str) -> bool {
    local != "." && is_self_or_ancestor(resolved, info_dir)
}

/// Escapes spaces so a path survives as a single token on an info line.
pub fn escape(path: &str) -> String {
    path.replace(' ', "\\ ")
}

pub fn unescape(token: &str) -> String {
    token.replace("\\ ", " ")
}
