//! Base-path and path-prefix mechanics for configuration trees.
//!
//! Configuration files carry paths relative to the directory holding the
//! file. In memory, every path-bearing node shares a base directory and
//! optionally carries a `path_prefix` inserted between base and relative
//! paths. The [`HasPaths`] trait provides:
//!
//! - [`expand_path`](HasPaths::expand_path): resolve a path against base
//!   and prefix
//! - [`set_basepath`](HasPaths::set_basepath): anchor a freshly loaded tree
//! - [`change_basepath`](HasPaths::change_basepath): re-anchor a tree while
//!   keeping every relative path resolving to the same location, by
//!   rewriting prefixes
//!
//! All of it is lexical: no filesystem access, no symlink resolution.

use std::path::{Component, Path, PathBuf};

// ── Lexical path helpers ────────────────────────────────────────────────────

/// Join `path` onto `base` unless `path` is absolute or `base` is absent.
pub fn xjoin(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Lexically normalize a path: fold `.`, apply `..` where possible, drop
/// duplicate separators. An empty result becomes `"."`.
///
/// Leading `..` components of a relative path are preserved; a rooted
/// `/..` folds to `/`.
pub fn normpath(path: &Path) -> PathBuf {
    let mut head: Vec<Component<'_>> = Vec::new();
    let mut tail: Vec<Component<'_>> = Vec::new();

    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => head.push(comp),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(tail.last(), Some(Component::Normal(_))) {
                    tail.pop();
                } else if head.is_empty() {
                    tail.push(comp);
                }
            }
            Component::Normal(_) => tail.push(comp),
        }
    }

    let mut out = PathBuf::new();
    for comp in head.iter().chain(tail.iter()) {
        out.push(comp.as_os_str());
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Lexical relative path from `start` to `path`.
///
/// Both arguments are normalized first. When the two differ in
/// absoluteness, or `start` retains leading `..` components that cannot
/// be inverted lexically, `path` itself is returned; callers joining the
/// result back onto `start` still resolve to `path` in the absolute case.
pub fn relpath(path: &Path, start: &Path) -> PathBuf {
    let path = normpath(path);
    if path.is_absolute() != start.is_absolute() {
        return path;
    }
    let start = normpath(start);

    let pc: Vec<Component<'_>> = path.components().collect();
    let sc: Vec<Component<'_>> = start.components().collect();

    let mut common = 0;
    while common < pc.len() && common < sc.len() && pc[common] == sc[common] {
        common += 1;
    }

    let mut out = PathBuf::new();
    for comp in &sc[common..] {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => return path,
            _ => out.push(".."),
        }
    }
    for comp in &pc[common..] {
        if !matches!(comp, Component::CurDir) {
            out.push(comp.as_os_str());
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

// ── Path frame ──────────────────────────────────────────────────────────────

/// Per-node path resolution state, shared down a configuration tree.
///
/// Holds the base directory and the prefix inherited from the parent
/// node. Not serialized; it is established by
/// [`set_basepath`](HasPaths::set_basepath) after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFrame {
    basepath: Option<PathBuf>,
    parent_path_prefix: Option<PathBuf>,
}

// ── HasPaths ────────────────────────────────────────────────────────────────

/// Path resolution for configuration nodes.
///
/// Implementors supply access to their [`PathFrame`], their own
/// serialized `path_prefix` field and their nested path-bearing children;
/// the resolution and propagation logic comes with the trait.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use temblor_core::paths::{HasPaths, PathFrame};
///
/// struct Leaf {
///     data_path: PathBuf,
///     path_prefix: Option<PathBuf>,
///     frame: PathFrame,
/// }
///
/// impl HasPaths for Leaf {
///     fn path_frame(&self) -> &PathFrame {
///         &self.frame
///     }
///     fn path_frame_mut(&mut self) -> &mut PathFrame {
///         &mut self.frame
///     }
///     fn path_prefix(&self) -> Option<&Path> {
///         self.path_prefix.as_deref()
///     }
///     fn set_path_prefix(&mut self, prefix: Option<PathBuf>) {
///         self.path_prefix = prefix;
///     }
/// }
///
/// let mut leaf = Leaf {
///     data_path: PathBuf::from("data/events.yaml"),
///     path_prefix: Some(PathBuf::from("../shared")),
///     frame: PathFrame::default(),
/// };
/// leaf.set_basepath(Path::new("/work/run1"));
/// assert_eq!(
///     leaf.expand_path(&leaf.data_path),
///     PathBuf::from("/work/shared/data/events.yaml"),
/// );
/// ```
pub trait HasPaths {
    /// The node's resolution state.
    fn path_frame(&self) -> &PathFrame;

    /// Mutable access to the node's resolution state.
    fn path_frame_mut(&mut self) -> &mut PathFrame;

    /// The node's own serialized path prefix, if any.
    fn path_prefix(&self) -> Option<&Path>;

    /// Replace the node's own path prefix.
    fn set_path_prefix(&mut self, prefix: Option<PathBuf>);

    /// The node's direct path-bearing children.
    fn nested_path_nodes(&mut self) -> Vec<&mut dyn HasPaths> {
        Vec::new()
    }

    /// The prefix in effect for this node: its own, or the inherited one.
    fn effective_path_prefix(&self) -> Option<&Path> {
        self.path_prefix()
            .or(self.path_frame().parent_path_prefix.as_deref())
    }

    /// Current base directory, if one has been established.
    fn get_basepath(&self) -> Option<&Path> {
        self.path_frame().basepath.as_deref()
    }

    /// Anchor this node and all nested nodes at `basepath`.
    ///
    /// Used once after loading; prefixes are left untouched.
    fn set_basepath(&mut self, basepath: &Path) {
        self.set_basepath_with(basepath, None);
    }

    /// Recursion vehicle for [`set_basepath`](Self::set_basepath); passes
    /// the effective prefix down to children.
    fn set_basepath_with(&mut self, basepath: &Path, parent_path_prefix: Option<&Path>) {
        {
            let frame = self.path_frame_mut();
            frame.basepath = Some(basepath.to_path_buf());
            frame.parent_path_prefix = parent_path_prefix.map(Path::to_path_buf);
        }
        let effective = self.effective_path_prefix().map(Path::to_path_buf);
        for child in self.nested_path_nodes() {
            child.set_basepath_with(basepath, effective.as_deref());
        }
    }

    /// Re-anchor this node and all nested nodes at `basepath`, rewriting
    /// prefixes so every relative path keeps resolving to the same
    /// location.
    ///
    /// On a node that was never anchored this behaves like
    /// [`set_basepath`](Self::set_basepath).
    fn change_basepath(&mut self, basepath: &Path) {
        self.change_basepath_with(basepath, None);
    }

    /// Recursion vehicle for [`change_basepath`](Self::change_basepath).
    ///
    /// A node rewrites its own prefix when it carries one, or when no
    /// parent provides one; otherwise the parent's rewritten prefix
    /// already accounts for the move.
    fn change_basepath_with(&mut self, basepath: &Path, parent_path_prefix: Option<&Path>) {
        let old_basepath = match self.path_frame().basepath.clone() {
            Some(old) => old,
            None => {
                self.set_basepath_with(basepath, parent_path_prefix);
                return;
            }
        };

        self.path_frame_mut().parent_path_prefix = parent_path_prefix.map(Path::to_path_buf);

        if self.path_prefix().is_some() || parent_path_prefix.is_none() {
            let rel = relpath(&old_basepath, basepath);
            let rewritten = match self.path_prefix() {
                Some(prefix) => normpath(&xjoin(Some(rel.as_path()), prefix)),
                None => normpath(&rel),
            };
            // A no-op rebase keeps prefixless nodes prefixless.
            if self.path_prefix().is_some() || rewritten.as_os_str() != "." {
                self.set_path_prefix(Some(rewritten));
            }
        }

        let effective = self.effective_path_prefix().map(Path::to_path_buf);
        for child in self.nested_path_nodes() {
            child.change_basepath_with(basepath, effective.as_deref());
        }

        self.path_frame_mut().basepath = Some(basepath.to_path_buf());
    }

    /// Drop the anchor on this node and all nested nodes.
    ///
    /// Prefixes are left as they are; expansion falls back to
    /// prefix-relative results until a new base is set.
    fn clear_basepath(&mut self) {
        {
            let frame = self.path_frame_mut();
            frame.basepath = None;
            frame.parent_path_prefix = None;
        }
        for child in self.nested_path_nodes() {
            child.clear_basepath();
        }
    }

    /// Resolve one path against the base directory and effective prefix.
    ///
    /// Absolute paths pass through unchanged apart from normalization;
    /// the result is always lexically normalized.
    fn expand_path(&self, path: &Path) -> PathBuf {
        let prefixed = xjoin(self.effective_path_prefix(), path);
        normpath(&xjoin(self.path_frame().basepath.as_deref(), &prefixed))
    }

    /// Resolve a sequence of paths; same shape out as in.
    fn expand_paths(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths.iter().map(|p| self.expand_path(p)).collect()
    }

    /// Resolve an optional path; `None` stays `None`.
    fn expand_path_opt(&self, path: Option<&Path>) -> Option<PathBuf> {
        path.map(|p| self.expand_path(p))
    }
}
