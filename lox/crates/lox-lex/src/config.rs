//! Scanner configuration.

use crate::unicode::{
    is_ascii_ident_continue, is_ascii_ident_start, is_ident_continue, is_ident_start,
};

/// Which characters may appear in identifiers.
///
/// Digits are always ASCII regardless of the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// `[A-Za-z_][A-Za-z0-9_]*`; any other character is unexpected.
    #[default]
    Ascii,
    /// `_` and Unicode alphabetic characters start an identifier; `_` and
    /// Unicode alphanumeric characters continue it.
    Unicode,
}

impl IdentifierPolicy {
    /// Returns true if `c` may start an identifier.
    #[inline]
    pub fn is_start(self, c: char) -> bool {
        match self {
            IdentifierPolicy::Ascii => is_ascii_ident_start(c),
            IdentifierPolicy::Unicode => is_ident_start(c),
        }
    }

    /// Returns true if `c` may continue an identifier.
    #[inline]
    pub fn is_continue(self, c: char) -> bool {
        match self {
            IdentifierPolicy::Ascii => is_ascii_ident_continue(c),
            IdentifierPolicy::Unicode => is_ident_continue(c),
        }
    }
}

/// Options that change how the scanner treats its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Identifier character classes.
    pub identifiers: IdentifierPolicy,
    /// When set, `/*` inside a block comment opens a nested comment and
    /// each level needs its own `*/`. Otherwise the first `*/` closes.
    pub nested_comments: bool,
}

impl ScanConfig {
    /// Deepest block-comment nesting tracked when `nested_comments` is set.
    pub const MAX_COMMENT_DEPTH: u32 = 100;

    /// Sets the identifier policy.
    pub fn with_identifiers(mut self, identifiers: IdentifierPolicy) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Enables or disables nested block comments.
    pub fn with_nested_comments(mut self, nested_comments: bool) -> Self {
        self.nested_comments = nested_comments;
        self
    }
}
