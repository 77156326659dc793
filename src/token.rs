//! Tokenization of normalized formula text.
//!
//! Runs after [`normalize`][crate::normalize::normalize], so operators appear
//! only as canonical glyphs. The policy for anything else is strict: an
//! unrecognized character fails with
//! [`Error::InvalidCharacter`][crate::error::Error::InvalidCharacter] at its
//! byte offset, rather than being silently skipped.

use crate::error::Error;
use crate::expr::{BinOp, Span};
use crate::types::Var;

/// What a token is, with no inferred meaning beyond its kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    Variable(Var),
    Not,
    Binary(BinOp),
    LParen,
    RParen,
}

/// A token together with its byte span in the normalized text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Splits normalized text into tokens, preserving input order.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    for (offset, ch) in expr.char_indices() {
        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '~' => TokenKind::Not,
            '∧' => TokenKind::Binary(BinOp::And),
            '∨' => TokenKind::Binary(BinOp::Or),
            '⊕' => TokenKind::Binary(BinOp::Xor),
            '→' => TokenKind::Binary(BinOp::Implies),
            '↔' => TokenKind::Binary(BinOp::Iff),
            other => match Var::from_char(other) {
                Some(var) => TokenKind::Variable(var),
                None => return Err(Error::InvalidCharacter { ch: other, offset }),
            },
        };
        tokens.push(Token {
            kind,
            span: Span::new(offset, offset + ch.len_utf8()),
        });
    }
    Ok(tokens)
}
