//! Variable interning shared by both sentences.

use tracing::debug;

use crate::ast::Assignment;
use crate::error::Error;
use crate::token::owned_name;

/// Ordered set of variable names.
///
/// A name's index is the position of its first occurrence, and the same
/// name always maps to the same index. One table is shared by the parses
/// of both sentences so assignment bits mean the same thing in each tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableTable {
    names: Vec<String>,
    capacity: usize,
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new(16)
    }
}

impl VariableTable {
    /// Create an empty table holding at most `capacity` names.
    ///
    /// Capacities wider than an [`Assignment`] are clamped.
    pub fn new(capacity: usize) -> Self {
        Self {
            names: Vec::new(),
            capacity: capacity.min(Assignment::MAX_WIDTH),
        }
    }

    /// Return the index of `name`, appending it if unseen.
    ///
    /// Matching is exact and case-sensitive.
    pub fn intern(&mut self, name: &str) -> Result<usize, Error> {
        if let Some(index) = self.index_of(name) {
            return Ok(index);
        }
        if self.names.len() >= self.capacity {
            return Err(Error::VariableCapacityExceeded(self.capacity));
        }
        self.names.try_reserve(1)?;
        self.names.push(owned_name(name)?);
        let index = self.names.len() - 1;
        debug!(name, index, "interned variable");
        Ok(index)
    }

    /// Look up a name without interning it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name stored at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of names this table accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
