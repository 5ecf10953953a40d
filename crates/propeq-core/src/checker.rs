//! Full pipeline over a pair of sentences.

use tracing::info;

use crate::equiv::{check_equivalence, Verdict};
use crate::error::Error;
use crate::limits::Limits;
use crate::parser::{parse_sentence, Trailing};
use crate::vars::VariableTable;

/// Result of checking a pair, with the variable table it was scanned over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub verdict: Verdict,
    pub variables: VariableTable,
}

impl Comparison {
    pub fn is_equivalent(&self) -> bool {
        self.verdict.is_equivalent()
    }

    /// Variable names paired with their values in the counterexample.
    pub fn counterexample_bindings(&self) -> Option<Vec<(&str, bool)>> {
        let counterexample = self.verdict.counterexample()?;
        Some(
            self.variables
                .iter()
                .enumerate()
                .map(|(i, name)| (name, counterexample.assignment.get(i)))
                .collect(),
        )
    }
}

/// Parses two sentences into one shared table and compares them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker {
    limits: Limits,
    trailing: Trailing,
}

impl Checker {
    /// Create a checker with default limits that ignores trailing tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker with custom limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            trailing: Trailing::default(),
        }
    }

    /// Set the trailing-token policy.
    pub fn trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    /// Check whether `first` and `second` are logically equivalent.
    ///
    /// # Errors
    ///
    /// Any tokenizer or parser error from either sentence. The second
    /// sentence is not read if the first fails, and nothing is evaluated
    /// unless both parse.
    pub fn check(&self, first: &str, second: &str) -> Result<Verdict, Error> {
        Ok(self.compare(first, second)?.verdict)
    }

    /// Like [`Checker::check`], also returning the variable table.
    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison, Error> {
        let mut variables = VariableTable::new(self.limits.max_variables);
        let a = parse_sentence(first, &mut variables, &self.limits, self.trailing)?;
        let b = parse_sentence(second, &mut variables, &self.limits, self.trailing)?;

        let verdict = check_equivalence(&a, &b, variables.len());
        info!(
            variables = variables.len(),
            equivalent = verdict.is_equivalent(),
            "compared sentences"
        );
        Ok(Comparison { verdict, variables })
    }
}

/// Check two sentences with default limits.
///
/// Returns `Ok(true)` when they are logically equivalent.
pub fn equivalent(first: &str, second: &str) -> Result<bool, Error> {
    Ok(Checker::new().check(first, second)?.is_equivalent())
}
