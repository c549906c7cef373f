//! Hierarchical datastore keys.

use core::fmt;

/// A hierarchical, `/`-separated datastore key.
///
/// Keys are always absolute and never end in a separator (except the root).
/// `Key::new("a//b/")` and `Key::new("/a/b")` are the same key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    /// Builds a key from any path-like string, normalising separators.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let mut out = String::with_capacity(raw.as_ref().len() + 1);
        for segment in raw.as_ref().split('/').filter(|s| !s.is_empty()) {
            out.push('/');
            out.push_str(segment);
        }
        if out.is_empty() {
            out.push('/');
        }
        Key(out)
    }

    /// The root key `/`.
    pub fn root() -> Self {
        Key("/".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments, root excluded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Last segment, or `""` for the root.
    pub fn name(&self) -> &str {
        self.segments().last().unwrap_or("")
    }

    /// Parent key; the root is its own parent.
    pub fn parent(&self) -> Key {
        match self.0.rfind('/') {
            Some(0) | None => Key::root(),
            Some(idx) => Key(self.0[..idx].to_owned()),
        }
    }

    /// Appends `child` (itself possibly multi-segment) below this key.
    pub fn child(&self, child: impl AsRef<str>) -> Key {
        Key::new(format!("{}/{}", self.0, child.as_ref()))
    }

    /// True when `other` lies strictly below this key.
    pub fn is_ancestor_of(&self, other: &Key) -> bool {
        if self.is_root() {
            return !other.is_root();
        }
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Key::new(raw)
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Key::new(raw)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
