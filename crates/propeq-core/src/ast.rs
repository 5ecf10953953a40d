//! Sentence trees and their evaluation under an assignment.

use std::fmt;

use crate::vars::VariableTable;

/// Truth values for every interned variable, one bit each.
///
/// Bit `i` is the value of the variable with index `i`. The integer
/// counter of the equivalence scan is used directly as the bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Assignment(u64);

impl Assignment {
    /// Widest variable universe an assignment can describe.
    pub const MAX_WIDTH: usize = 63;

    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// Value of variable `index`.
    #[inline]
    pub fn get(self, index: usize) -> bool {
        index < 64 && (self.0 >> index) & 1 == 1
    }
}

/// A node of a parsed sentence.
///
/// Every operator node owns its operands; trees never share subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Variable reference by table index.
    Var(usize),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Implies(Box<Node>, Box<Node>),
    Iff(Box<Node>, Box<Node>),
}

impl Node {
    pub fn var(index: usize) -> Self {
        Node::Var(index)
    }

    pub fn not(operand: Node) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn and(left: Node, right: Node) -> Self {
        Node::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Node, right: Node) -> Self {
        Node::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Node, right: Node) -> Self {
        Node::Iff(Box::new(left), Box::new(right))
    }

    /// Evaluate this tree under `assignment`.
    ///
    /// Both operands of a binary node are always evaluated.
    pub fn evaluate(&self, assignment: Assignment) -> bool {
        match self {
            Node::Var(index) => assignment.get(*index),
            Node::Not(x) => !x.evaluate(assignment),
            Node::And(l, r) => {
                let (p, q) = (l.evaluate(assignment), r.evaluate(assignment));
                p && q
            }
            Node::Or(l, r) => {
                let (p, q) = (l.evaluate(assignment), r.evaluate(assignment));
                p || q
            }
            Node::Implies(l, r) => {
                let (p, q) = (l.evaluate(assignment), r.evaluate(assignment));
                !p || q
            }
            Node::Iff(l, r) => l.evaluate(assignment) == r.evaluate(assignment),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(x) => 1 + x.depth(),
            Node::And(l, r) | Node::Or(l, r) | Node::Implies(l, r) | Node::Iff(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Fully parenthesized infix rendering using the names in `vars`.
    pub fn display<'a>(&'a self, vars: &'a VariableTable) -> DisplayNode<'a> {
        DisplayNode { node: self, vars }
    }
}

/// [`fmt::Display`] adapter returned by [`Node::display`].
pub struct DisplayNode<'a> {
    node: &'a Node,
    vars: &'a VariableTable,
}

impl fmt::Display for DisplayNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, l, r) = match self.node {
            Node::Var(index) => {
                return match self.vars.name(*index) {
                    Some(name) => write!(f, "{name}"),
                    None => write!(f, "#{index}"),
                };
            }
            Node::Not(x) => return write!(f, "!{}", x.display(self.vars)),
            Node::And(l, r) => ("&", l, r),
            Node::Or(l, r) => ("|", l, r),
            Node::Implies(l, r) => ("->", l, r),
            Node::Iff(l, r) => ("<->", l, r),
        };
        write!(f, "({} {op} {})", l.display(self.vars), r.display(self.vars))
    }
}
