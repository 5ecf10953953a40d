//! propeq: propositional equivalence by truth table
//!
//! Reads two propositional sentences in infix notation and decides whether
//! they are logically equivalent by comparing them under every assignment
//! to their combined variables.
//!
//! # Overview
//!
//! - **Tokenizer** — text to a closed token vocabulary
//! - **Variable table** — one name-to-index map shared by both sentences
//! - **Parser** — recursive descent, every binary level left-associative
//! - **Evaluator** — pure tree walk under a bit-vector assignment
//! - **Scan** — enumerates all `2^n` assignments, stopping at the first
//!   disagreement
//!
//! Operators, lowest precedence first: `<->`, `->`, `|` (also `v`, `V`),
//! `&`, and prefix `!` (also `~`).
//!
//! # Example
//!
//! ```
//! use propeq_core::{equivalent, Checker, Error, Limits};
//!
//! assert_eq!(equivalent("p -> q", "!p | q"), Ok(true));
//! assert_eq!(equivalent("p", "!p"), Ok(false));
//!
//! // Capacities are fatal, not silently raised.
//! let checker = Checker::with_limits(Limits::default().with_max_variables(1));
//! assert_eq!(
//!     checker.check("p", "q"),
//!     Err(Error::VariableCapacityExceeded(1))
//! );
//! ```
//!
//! # Lower-level pieces
//!
//! ```
//! use propeq_core::{check_equivalence, parse_sentence, Limits, Trailing, VariableTable};
//!
//! let limits = Limits::default();
//! let mut vars = VariableTable::new(limits.max_variables);
//! let a = parse_sentence("p <-> q", &mut vars, &limits, Trailing::Ignore).unwrap();
//! let b = parse_sentence("(p->q)&(q->p)", &mut vars, &limits, Trailing::Ignore).unwrap();
//!
//! assert_eq!(a.display(&vars).to_string(), "(p <-> q)");
//! assert!(check_equivalence(&a, &b, vars.len()).is_equivalent());
//! ```

pub mod ast;
pub mod checker;
pub mod equiv;
pub mod error;
pub mod limits;
pub mod parser;
pub mod token;
pub mod vars;

pub use ast::{Assignment, DisplayNode, Node};
pub use checker::{equivalent, Checker, Comparison};
pub use equiv::{check_equivalence, Counterexample, Phase, Scan, Verdict};
pub use error::Error;
pub use limits::Limits;
pub use parser::{parse_sentence, Parser, Trailing};
pub use token::{tokenize, Token, TokenStream};
pub use vars::VariableTable;
