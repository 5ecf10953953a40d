//! Tokens and the tokenizer for propositional sentences.
//!
//! The vocabulary is closed: parentheses, the five connectives and
//! identifiers. Every stream ends with [`Token::End`].

use std::fmt;

use tracing::{trace, warn};

use crate::error::Error;
use crate::limits::Limits;

/// A single lexeme of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// End of input. Always the last token of a stream.
    End,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Negation: `!` or `~`
    Not,
    /// Conjunction: `&`
    And,
    /// Disjunction: `|`, `v` or `V`
    Or,
    /// Material implication: `->`
    Implies,
    /// Biconditional: `<->`
    Iff,
    /// Variable name, possibly truncated.
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::End => write!(f, "end of input"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Not => write!(f, "'!'"),
            Token::And => write!(f, "'&'"),
            Token::Or => write!(f, "'|'"),
            Token::Implies => write!(f, "'->'"),
            Token::Iff => write!(f, "'<->'"),
            Token::Ident(name) => write!(f, "identifier `{name}`"),
        }
    }
}

/// Tokens of one sentence with a forward-only read cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// The token under the cursor.
    pub fn peek(&self) -> &Token {
        // The stream always ends with End and the cursor never moves past it.
        &self.tokens[self.cursor]
    }

    /// Return the token under the cursor and move past it.
    ///
    /// The cursor stays on [`Token::End`] once it gets there.
    pub fn advance(&mut self) -> &Token {
        let at = self.cursor;
        if self.tokens[at] != Token::End {
            self.cursor += 1;
        }
        &self.tokens[at]
    }

    /// Index of the token under the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Check if the cursor has reached [`Token::End`].
    pub fn at_end(&self) -> bool {
        *self.peek() == Token::End
    }
}

/// Convert one sentence into a token stream.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] for a character that starts no lexeme
/// - [`Error::TokenCapacityExceeded`] past `limits.max_tokens`
/// - [`Error::AllocationFailure`] if token storage cannot be reserved
pub fn tokenize(text: &str, limits: &Limits) -> Result<TokenStream, Error> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        // Matches C isspace: ASCII whitespace plus vertical tab.
        if b.is_ascii_whitespace() || b == 0x0b {
            i += 1;
            continue;
        }

        let (token, len) = match b {
            b'(' => (Token::LParen, 1),
            b')' => (Token::RParen, 1),
            b'!' | b'~' => (Token::Not, 1),
            b'&' => (Token::And, 1),
            // Checked before identifiers: a leading `v` is always disjunction.
            b'|' | b'v' | b'V' => (Token::Or, 1),
            b'<' if bytes[i..].starts_with(b"<->") => (Token::Iff, 3),
            b'-' if bytes[i..].starts_with(b"->") => (Token::Implies, 2),
            b if b.is_ascii_alphabetic() => {
                let len = bytes[i..]
                    .iter()
                    .take_while(|c| c.is_ascii_alphanumeric() || **c == b'_')
                    .count();
                let kept = len.min(limits.max_name_len);
                if kept < len {
                    warn!(
                        name = &text[i..i + len],
                        kept, "identifier truncated to name length limit"
                    );
                }
                (Token::Ident(owned_name(&text[i..i + kept])?), len)
            }
            _ => {
                // Multi-byte characters never start a lexeme; report the whole char.
                let ch = text[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Error::InvalidCharacter { ch, offset: i });
            }
        };

        push(&mut tokens, token, limits)?;
        i += len;
    }
    push(&mut tokens, Token::End, limits)?;

    trace!(count = tokens.len(), "tokenized sentence");
    Ok(TokenStream { tokens, cursor: 0 })
}

/// Copy a name into storage reserved without aborting on failure.
pub(crate) fn owned_name(name: &str) -> Result<String, Error> {
    let mut owned = String::new();
    owned.try_reserve_exact(name.len())?;
    owned.push_str(name);
    Ok(owned)
}

fn push(tokens: &mut Vec<Token>, token: Token, limits: &Limits) -> Result<(), Error> {
    if tokens.len() >= limits.max_tokens {
        return Err(Error::TokenCapacityExceeded(limits.max_tokens));
    }
    tokens.try_reserve(1)?;
    tokens.push(token);
    Ok(())
}
