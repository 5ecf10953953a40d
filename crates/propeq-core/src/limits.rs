//! Capacity ceilings for tokenization and parsing.

/// Hard ceilings applied while reading a pair of sentences.
///
/// Each limit turns into a fatal error when exceeded; nothing grows past
/// the configured size. The default token, variable and name ceilings
/// match the legacy fixed buffers; the nesting and height ceilings are
/// new and have no legacy counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of tokens in one sentence, end-of-input included.
    pub max_tokens: usize,
    /// Maximum number of distinct variable names across both sentences.
    ///
    /// Values above [`Assignment::MAX_WIDTH`](crate::Assignment::MAX_WIDTH)
    /// are clamped to it.
    pub max_variables: usize,
    /// Identifier characters kept per name; the rest are dropped.
    pub max_name_len: usize,
    /// Maximum nesting of negations and parenthesized groups.
    ///
    /// New ceiling: the legacy reader accepted any nesting that fit in the
    /// token buffer, so sentences like 300 stacked `!` were valid there and
    /// are rejected with the default here.
    pub max_nesting: usize,
    /// Maximum height of a parsed tree, counted in nodes from root to leaf.
    ///
    /// New ceiling. Left-folded chains such as `p & p & ... & p` grow the
    /// tree by one level per operator without any nesting in the text.
    pub max_height: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            max_variables: 16,
            max_name_len: 63,
            max_nesting: 256,
            // Tallest tree a 4096-token chain can produce.
            max_height: 2048,
        }
    }
}

impl Limits {
    /// Create limits with custom values.
    pub fn new(
        max_tokens: usize,
        max_variables: usize,
        max_name_len: usize,
        max_nesting: usize,
        max_height: usize,
    ) -> Self {
        Self {
            max_tokens,
            max_variables,
            max_name_len,
            max_nesting,
            max_height,
        }
    }

    /// Permissive limits for testing.
    pub fn permissive() -> Self {
        Self {
            max_tokens: 1 << 16,
            max_variables: 24,
            max_name_len: 255,
            max_nesting: 512,
            max_height: 4096,
        }
    }

    /// Strict limits for untrusted input.
    pub fn strict() -> Self {
        Self {
            max_tokens: 512,
            max_variables: 12,
            max_name_len: 31,
            max_nesting: 32,
            max_height: 256,
        }
    }

    /// Replace the variable capacity, keeping the other limits.
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }
}
