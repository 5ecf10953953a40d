//! Truth-table scan deciding whether two sentences are equivalent.
//!
//! The scan walks every assignment over the shared variable universe in
//! increasing integer order and stops at the first one where the two
//! sentences disagree.

use tracing::{debug, trace};

use crate::ast::{Assignment, Node};

/// Scan state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Assignments remain to be checked.
    Scanning,
    /// A verdict has been reached; no more steps are taken.
    Done,
}

/// Assignment on which two sentences differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counterexample {
    pub assignment: Assignment,
    /// Value of the first sentence.
    pub first: bool,
    /// Value of the second sentence.
    pub second: bool,
}

/// Outcome of an equivalence scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Equivalent,
    /// Carries the lowest-numbered distinguishing assignment.
    NotEquivalent(Counterexample),
}

impl Verdict {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent)
    }

    pub fn counterexample(&self) -> Option<&Counterexample> {
        match self {
            Verdict::Equivalent => None,
            Verdict::NotEquivalent(c) => Some(c),
        }
    }
}

/// Stepwise comparison of two trees over all `2^n` assignments.
#[derive(Debug)]
pub struct Scan<'a> {
    first: &'a Node,
    second: &'a Node,
    total: u64,
    next: u64,
    phase: Phase,
    verdict: Option<Verdict>,
}

impl<'a> Scan<'a> {
    /// Prepare a scan over `variables` variables.
    ///
    /// `variables` is clamped to [`Assignment::MAX_WIDTH`]. Zero variables
    /// means a single comparison of two constant values.
    pub fn new(first: &'a Node, second: &'a Node, variables: usize) -> Self {
        let width = variables.min(Assignment::MAX_WIDTH);
        Self {
            first,
            second,
            total: 1u64 << width,
            next: 0,
            phase: Phase::Scanning,
            verdict: None,
        }
    }

    /// Number of assignments in the full table.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of assignments already compared.
    pub fn checked(&self) -> u64 {
        match self.verdict {
            Some(Verdict::NotEquivalent(_)) => self.next + 1,
            _ => self.next,
        }
    }

    /// The verdict, once the scan is done.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Compare both trees under the next assignment.
    pub fn step(&mut self) -> Phase {
        if self.phase == Phase::Done {
            return Phase::Done;
        }

        let assignment = Assignment::new(self.next);
        let first = self.first.evaluate(assignment);
        let second = self.second.evaluate(assignment);

        if first != second {
            trace!(assignment = self.next, first, second, "sentences differ");
            self.verdict = Some(Verdict::NotEquivalent(Counterexample {
                assignment,
                first,
                second,
            }));
            self.phase = Phase::Done;
            return self.phase;
        }

        self.next += 1;
        if self.next == self.total {
            self.verdict = Some(Verdict::Equivalent);
            self.phase = Phase::Done;
        }
        self.phase
    }

    /// Step until done and return the verdict.
    pub fn run(mut self) -> Verdict {
        while self.step() == Phase::Scanning {}
        debug!(
            checked = self.checked(),
            total = self.total,
            equivalent = matches!(self.verdict, Some(Verdict::Equivalent)),
            "scan finished"
        );
        // step() only reports Done after recording a verdict.
        self.verdict.unwrap_or(Verdict::Equivalent)
    }
}

/// Compare two trees over every assignment to `variables` variables.
pub fn check_equivalence(first: &Node, second: &Node, variables: usize) -> Verdict {
    Scan::new(first, second, variables).run()
}
