//! Recursive-descent parser for propositional sentences.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr   := impl ( IFF impl )*
//! impl   := or   ( IMPL or )*
//! or     := and  ( OR and )*
//! and    := unary ( AND unary )*
//! unary  := NOT unary | '(' expr ')' | IDENT
//! ```
//!
//! Every binary level folds to the left, including `->` and `<->`:
//! `a -> b -> c` parses as `(a -> b) -> c`.

use tracing::debug;

use crate::ast::Node;
use crate::error::Error;
use crate::limits::Limits;
use crate::token::{tokenize, Token, TokenStream};
use crate::vars::VariableTable;

/// What to do with tokens left over after a complete sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trailing {
    /// Stop at the end of the first complete sentence and ignore the rest.
    #[default]
    Ignore,
    /// Fail with [`Error::TrailingInput`] unless the stream is exhausted.
    Reject,
}

/// Parser over one token stream, interning into a shared table.
#[derive(Debug)]
pub struct Parser<'a> {
    stream: TokenStream,
    vars: &'a mut VariableTable,
    trailing: Trailing,
    max_nesting: usize,
    max_height: usize,
    nesting: usize,
}

/// A parsed subtree with its height in nodes.
struct Subtree {
    node: Node,
    height: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with default ceilings and trailing policy.
    pub fn new(stream: TokenStream, vars: &'a mut VariableTable) -> Self {
        let limits = Limits::default();
        Self {
            stream,
            vars,
            trailing: Trailing::default(),
            max_nesting: limits.max_nesting,
            max_height: limits.max_height,
            nesting: 0,
        }
    }

    /// Set the trailing-token policy.
    pub fn trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    /// Set the maximum nesting of negations and groups.
    pub fn max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Set the maximum height of the resulting tree.
    pub fn max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Parse one sentence, consuming the parser.
    pub fn parse(mut self) -> Result<Node, Error> {
        let tree = self.parse_expr()?;
        if self.trailing == Trailing::Reject && !self.stream.at_end() {
            return Err(Error::TrailingInput {
                found: self.stream.peek().clone(),
                position: self.stream.position(),
            });
        }
        Ok(tree.node)
    }

    fn parse_expr(&mut self) -> Result<Subtree, Error> {
        let mut left = self.parse_impl()?;
        while *self.stream.peek() == Token::Iff {
            self.stream.advance();
            let right = self.parse_impl()?;
            left = self.join(Node::iff, left, right)?;
        }
        Ok(left)
    }

    fn parse_impl(&mut self) -> Result<Subtree, Error> {
        let mut left = self.parse_or()?;
        while *self.stream.peek() == Token::Implies {
            self.stream.advance();
            let right = self.parse_or()?;
            left = self.join(Node::implies, left, right)?;
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Subtree, Error> {
        let mut left = self.parse_and()?;
        while *self.stream.peek() == Token::Or {
            self.stream.advance();
            let right = self.parse_and()?;
            left = self.join(Node::or, left, right)?;
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Subtree, Error> {
        let mut left = self.parse_unary()?;
        while *self.stream.peek() == Token::And {
            self.stream.advance();
            let right = self.parse_unary()?;
            left = self.join(Node::and, left, right)?;
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Subtree, Error> {
        let position = self.stream.position();
        match self.stream.peek() {
            Token::Not => {
                self.stream.advance();
                self.enter()?;
                let operand = self.parse_unary()?;
                self.nesting -= 1;
                let height = self.check_height(operand.height + 1)?;
                Ok(Subtree {
                    node: Node::not(operand.node),
                    height,
                })
            }
            Token::LParen => {
                self.stream.advance();
                self.enter()?;
                let inner = self.parse_expr()?;
                if *self.stream.peek() != Token::RParen {
                    return Err(Error::UnterminatedGroup {
                        position: self.stream.position(),
                    });
                }
                self.stream.advance();
                self.nesting -= 1;
                Ok(inner)
            }
            Token::Ident(name) => {
                let index = self.vars.intern(name)?;
                self.stream.advance();
                Ok(Subtree {
                    node: Node::var(index),
                    height: 1,
                })
            }
            found => Err(Error::UnexpectedToken {
                found: found.clone(),
                position,
            }),
        }
    }

    fn join(
        &self,
        make: fn(Node, Node) -> Node,
        left: Subtree,
        right: Subtree,
    ) -> Result<Subtree, Error> {
        let height = self.check_height(1 + left.height.max(right.height))?;
        Ok(Subtree {
            node: make(left.node, right.node),
            height,
        })
    }

    fn check_height(&self, height: usize) -> Result<usize, Error> {
        if height > self.max_height {
            return Err(Error::HeightExceeded(self.max_height));
        }
        Ok(height)
    }

    fn enter(&mut self) -> Result<(), Error> {
        self.nesting += 1;
        if self.nesting > self.max_nesting {
            return Err(Error::DepthExceeded(self.max_nesting));
        }
        Ok(())
    }
}

/// Tokenize and parse one sentence into `vars`.
pub fn parse_sentence(
    text: &str,
    vars: &mut VariableTable,
    limits: &Limits,
    trailing: Trailing,
) -> Result<Node, Error> {
    let stream = tokenize(text, limits)?;
    let node = Parser::new(stream, vars)
        .trailing(trailing)
        .max_nesting(limits.max_nesting)
        .max_height(limits.max_height)
        .parse()?;
    debug!(
        sentence = %node.display(vars),
        height = node.depth(),
        variables = vars.len(),
        "parsed sentence"
    );
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with(text: &str, vars: &mut VariableTable) -> Result<Node, Error> {
        parse_sentence(text, vars, &Limits::default(), Trailing::Ignore)
    }

    /// Parse and render in fully parenthesized form.
    fn grouping(text: &str) -> String {
        let mut vars = VariableTable::default();
        let node = parse_with(text, &mut vars).unwrap();
        node.display(&vars).to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(grouping("p | q & r"), "(p | (q & r))");
        assert_eq!(grouping("p & q | r"), "((p & q) | r)");
        assert_eq!(grouping("p | q -> r"), "((p | q) -> r)");
        assert_eq!(grouping("p -> q <-> r"), "((p -> q) <-> r)");
        assert_eq!(grouping("p <-> q -> r"), "(p <-> (q -> r))");
        assert_eq!(grouping("!p & q"), "(!p & q)");
    }

    #[test]
    fn test_left_fold_chains() {
        assert_eq!(grouping("a -> b -> c"), "((a -> b) -> c)");
        assert_eq!(grouping("a <-> b <-> c"), "((a <-> b) <-> c)");
        assert_eq!(grouping("a & b & c & d"), "(((a & b) & c) & d)");
        assert_eq!(grouping("a | b v c"), "((a | b) | c)");
    }

    #[test]
    fn test_parentheses_and_negation() {
        assert_eq!(grouping("a -> (b -> c)"), "(a -> (b -> c))");
        assert_eq!(grouping("~!(p)"), "!!p");
        assert_eq!(grouping("!(p & q)"), "!(p & q)");
        assert_eq!(grouping("((p))"), "p");
    }

    #[test]
    fn test_missing_right_operand() {
        let mut vars = VariableTable::default();
        assert_eq!(
            parse_with("p &", &mut vars),
            Err(Error::UnexpectedToken {
                found: Token::End,
                position: 2
            })
        );
    }

    #[test]
    fn test_unexpected_tokens() {
        let mut vars = VariableTable::default();
        assert_eq!(
            parse_with("", &mut vars),
            Err(Error::UnexpectedToken {
                found: Token::End,
                position: 0
            })
        );
        assert_eq!(
            parse_with("& p", &mut vars),
            Err(Error::UnexpectedToken {
                found: Token::And,
                position: 0
            })
        );
        assert_eq!(
            parse_with("()", &mut vars),
            Err(Error::UnexpectedToken {
                found: Token::RParen,
                position: 1
            })
        );
    }

    #[test]
    fn test_unterminated_group() {
        let mut vars = VariableTable::default();
        assert_eq!(
            parse_with("(p & q", &mut vars),
            Err(Error::UnterminatedGroup { position: 4 })
        );
        assert_eq!(
            parse_with("(p q)", &mut vars),
            Err(Error::UnterminatedGroup { position: 2 })
        );
    }

    #[test]
    fn test_trailing_tokens_ignored_by_default() {
        assert_eq!(grouping("p q"), "p");
        assert_eq!(grouping("p ) & q"), "p");
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let mut vars = VariableTable::default();
        let result = parse_sentence("p ) & q", &mut vars, &Limits::default(), Trailing::Reject);
        assert_eq!(
            result,
            Err(Error::TrailingInput {
                found: Token::RParen,
                position: 1
            })
        );
        assert!(parse_sentence("(p)", &mut vars, &Limits::default(), Trailing::Reject).is_ok());
    }

    #[test]
    fn test_shared_interning() {
        let mut vars = VariableTable::default();
        let first = parse_with("p & q", &mut vars).unwrap();
        let second = parse_with("q | p | r", &mut vars).unwrap();
        assert_eq!(first, Node::and(Node::var(0), Node::var(1)));
        assert_eq!(
            second,
            Node::or(Node::or(Node::var(1), Node::var(0)), Node::var(2))
        );
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_nesting_limit() {
        let limits = Limits {
            max_nesting: 3,
            ..Limits::default()
        };
        let mut vars = VariableTable::default();
        assert!(parse_sentence("!(!p)", &mut vars, &limits, Trailing::Ignore).is_ok());
        // Nesting is counted per level, not per occurrence.
        assert!(parse_sentence("!p & !q & (r) & !!!s", &mut vars, &limits, Trailing::Ignore).is_ok());
        assert_eq!(
            parse_sentence("!!(!p)", &mut vars, &limits, Trailing::Ignore),
            Err(Error::DepthExceeded(3))
        );
    }

    #[test]
    fn test_height_limit_covers_chains() {
        let limits = Limits {
            max_height: 4,
            ..Limits::default()
        };
        let mut vars = VariableTable::default();
        // Three operators over four leaves: height 4.
        let node = parse_sentence("a & b & c & d", &mut vars, &limits, Trailing::Ignore).unwrap();
        assert_eq!(node.depth(), 4);
        assert_eq!(
            parse_sentence("a & b & c & d & e", &mut vars, &limits, Trailing::Ignore),
            Err(Error::HeightExceeded(4))
        );
        assert_eq!(
            parse_sentence("a -> b <-> c | !!d", &mut vars, &limits, Trailing::Ignore),
            Err(Error::HeightExceeded(4))
        );
        // Parentheses add no height of their own.
        assert!(parse_sentence("((((!!!a))))", &mut vars, &limits, Trailing::Ignore).is_ok());
    }

    #[test]
    fn test_variable_capacity_during_parse() {
        let limits = Limits::default().with_max_variables(2);
        let mut vars = VariableTable::new(limits.max_variables);
        assert_eq!(
            parse_sentence("a & b & c", &mut vars, &limits, Trailing::Ignore),
            Err(Error::VariableCapacityExceeded(2))
        );
    }
}
