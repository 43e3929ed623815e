//! Core types for a segmented email body

use serde::{Deserialize, Serialize};
use std::fmt;

/// A segmented email body, fragments in top-to-bottom order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    pub(crate) const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// All fragments, hidden ones included
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments that make up the visible reply
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.hidden)
    }

    /// Fragments carrying quoted text from an earlier message
    pub fn quoted_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.quoted)
    }

    /// First signature block, if any
    #[must_use]
    pub fn signature(&self) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.signature)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Text of every non-hidden fragment joined by newlines.
    ///
    /// Only the end of the result is trimmed; leading and interior
    /// whitespace of each fragment is kept as-is.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let joined = self
            .visible_fragments()
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n");

        joined.trim_end().to_string()
    }
}

impl IntoIterator for Email {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Email {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// One classified block of an email body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    content: String,
    quoted: bool,
    signature: bool,
    hidden: bool,
}

impl Fragment {
    pub(crate) const fn new(content: String, quoted: bool, signature: bool, hidden: bool) -> Self {
        Self {
            content,
            quoted,
            signature,
            hidden,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines starting with `>`
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Closed by a signature delimiter (`--`, `-Name`, `Sent from my ...`)
    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    /// Excluded from [`Email::visible_text`]
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}
