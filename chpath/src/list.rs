//! Ordered search-path lists.
//!
//! A [`PathList`] is the ordered sequence of entries obtained by splitting a
//! delimited search-path string such as `PATH`. Order is significant: it is
//! read left to right as search priority, and the cleaning pipeline keeps the
//! first occurrence of any duplicated directory.

use std::fmt;

/// The platform's search-path list separator.
///
/// `:` on Unix-like systems, `;` on Windows.
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';
/// The platform's search-path list separator.
///
/// `:` on Unix-like systems, `;` on Windows.
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// An ordered sequence of search-path entries.
///
/// Entries are kept exactly as supplied: no trimming, no normalization.
/// Splitting and joining are inverses as long as no entry contains the
/// separator itself, so `PathList::split(s).join() == s` for any `s`.
///
/// # Examples
///
/// ```
/// use chpath::PathList;
///
/// # #[cfg(unix)] {
/// let list = PathList::split("/usr/bin:/usr/local/bin");
/// assert_eq!(list.entries(), ["/usr/bin", "/usr/local/bin"]);
/// assert_eq!(list.join(), "/usr/bin:/usr/local/bin");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    /// Split a delimited search-path string into an ordered list.
    ///
    /// Empty-looking segments are preserved verbatim (an empty segment
    /// conventionally means the current directory). The empty string splits
    /// to the empty list, keeping `split` and [`join`](Self::join) inverses.
    #[must_use]
    pub fn split(raw: &str) -> Self {
        let entries = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(LIST_SEPARATOR).map(str::to_string).collect()
        };
        Self { entries }
    }

    /// Build a list from pre-split entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use chpath::PathList;
    ///
    /// let list = PathList::from_entries(vec!["/a".into(), "/b".into()]);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Place `extra` entries before the existing ones.
    ///
    /// The relative order within each group is preserved exactly as given;
    /// nothing is sorted or deduplicated here. An empty `extra` passes the
    /// list through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chpath::PathList;
    ///
    /// let list = PathList::from_entries(vec!["/a".into(), "/b".into()])
    ///     .prepend(vec!["/e1".into(), "/e2".into()]);
    /// assert_eq!(list.entries(), ["/e1", "/e2", "/a", "/b"]);
    /// ```
    #[must_use]
    pub fn prepend(self, extra: Vec<String>) -> Self {
        if extra.is_empty() {
            return self;
        }
        let mut entries = extra;
        entries.extend(self.entries);
        Self { entries }
    }

    /// Join the entries back into a single delimited string.
    #[must_use]
    pub fn join(&self) -> String {
        self.entries.join(&LIST_SEPARATOR.to_string())
    }

    /// The entries in order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the list, yielding the entries in order.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
