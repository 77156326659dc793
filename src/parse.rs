//! Precedence-climbing parser for normalized token streams.
//!
//! Grammar (all binary connectives left-associative):
//!
//! ```text
//! IFF     := IMPLIES (↔ IMPLIES)*
//! IMPLIES := OR (→ OR)*
//! OR      := XOR (∨ XOR)*
//! XOR     := AND (⊕ AND)*
//! AND     := UNARY (∧ UNARY)*
//! UNARY   := ~ UNARY | PRIMARY
//! PRIMARY := ( IFF ) | VARIABLE
//! ```
//!
//! The layered productions collapse into a single climbing loop keyed on
//! [`BinOp::precedence`]. Parsing fails fast: no partial tree is returned.
//!
//! Each parsed operand carries two ranges: the node's own span (parentheses
//! wrapping the node excluded) and the consumed extent (parentheses
//! included). Extents are what parent nodes cover, which is how
//! `(p∧q)∨r` ends up with an `∨` node spanning the whole input while the
//! `∧` node spans only `p∧q`.

use log::trace;

use crate::error::Error;
use crate::expr::{BinOp, Expr, Span};
use crate::token::{Token, TokenKind};

/// The weakest binding strength; climbing starts here.
const MIN_PRECEDENCE: u8 = 1;

/// Parses a token stream into an expression tree.
///
/// Fails with [`Error::EmptyExpression`] when no token is a variable (this
/// covers empty input, `~`, and `()`), with
/// [`Error::UnbalancedParentheses`] on stray or unclosed parentheses, and
/// with [`Error::UnexpectedToken`] when a token violates the grammar.
pub fn parse(tokens: &[Token]) -> Result<Expr, Error> {
    if !tokens.iter().any(|t| matches!(t.kind, TokenKind::Variable(_))) {
        return Err(Error::EmptyExpression);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let parsed = parser.expression(MIN_PRECEDENCE)?;

    // The grammar must consume everything; a leftover `)` means a stray
    // close, anything else is two productions jammed together.
    if let Some(token) = parser.peek() {
        return Err(match token.kind {
            TokenKind::RParen => Error::UnbalancedParentheses { offset: token.span.start },
            _ => Error::UnexpectedToken { offset: token.span.start },
        });
    }

    Ok(parsed.node)
}

/// A node together with the token extent it was parsed from.
struct Parsed {
    node: Expr,
    extent: Span,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// One past the end of the last token; where a missing operand would be.
    fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.span.end)
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Parsed, Error> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.peek_binary() {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;
            trace!("climb: {} at precedence {}", op, op.precedence());

            // `precedence + 1` on the right keeps every connective
            // left-associative, `→` and `↔` included.
            let rhs = self.expression(op.precedence() + 1)?;
            let extent = lhs.extent.cover(rhs.extent);
            lhs = Parsed {
                node: Expr::Binary(op, Box::new(lhs.node), Box::new(rhs.node), extent),
                extent,
            };
        }

        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Parsed, Error> {
        let Some(token) = self.peek() else {
            return Err(Error::UnexpectedToken { offset: self.end_offset() });
        };

        match token.kind {
            TokenKind::Not => {
                self.pos += 1;
                let operand = self.unary()?;
                let extent = token.span.cover(operand.extent);
                Ok(Parsed {
                    node: Expr::Not(Box::new(operand.node), extent),
                    extent,
                })
            }
            TokenKind::Variable(var) => {
                self.pos += 1;
                Ok(Parsed {
                    node: Expr::Variable(var, token.span),
                    extent: token.span,
                })
            }
            TokenKind::LParen => {
                self.pos += 1;
                let inner = self.expression(MIN_PRECEDENCE)?;
                match self.peek() {
                    Some(close) if close.kind == TokenKind::RParen => {
                        self.pos += 1;
                        // The parens belong to the extent, not the node.
                        Ok(Parsed {
                            node: inner.node,
                            extent: token.span.cover(close.span),
                        })
                    }
                    _ => Err(Error::UnbalancedParentheses { offset: token.span.start }),
                }
            }
            TokenKind::RParen => Err(Error::UnbalancedParentheses { offset: token.span.start }),
            TokenKind::Binary(_) => Err(Error::UnexpectedToken { offset: token.span.start }),
        }
    }

    fn peek_binary(&self) -> Option<BinOp> {
        match self.peek()?.kind {
            TokenKind::Binary(op) => Some(op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::token::tokenize;
    use crate::types::Var;

    fn parse_text(text: &str) -> Result<Expr, Error> {
        parse(&tokenize(text).unwrap())
    }

    fn text_of<'a>(expr: &Expr, source: &'a str) -> &'a str {
        expr.span().slice(source)
    }

    #[test]
    fn test_single_variable() {
        let expr = parse_text("p").unwrap();
        assert_eq!(expr, Expr::Variable(Var::P, Span::new(0, 1)));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let source = "p∧q∨r";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, lhs, rhs, _) = &expr else {
            panic!("expected binary root, got {:?}", expr);
        };
        assert_eq!(*op, BinOp::Or);
        assert_eq!(text_of(lhs, source), "p∧q");
        assert_eq!(text_of(rhs, source), "r");
    }

    #[test]
    fn test_xor_sits_between_and_and_or() {
        // p∨q⊕r∧s must group as p∨(q⊕(r∧s))
        let source = "p∨q⊕r∧s";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, _, rhs, _) = &expr else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinOp::Or);
        assert_eq!(text_of(rhs, source), "q⊕r∧s");
    }

    #[test]
    fn test_implies_associates_left() {
        // Deliberate normalization: p→q→r is (p→q)→r
        let source = "p→q→r";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, lhs, rhs, _) = &expr else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinOp::Implies);
        assert_eq!(text_of(lhs, source), "p→q");
        assert_eq!(text_of(rhs, source), "r");
    }

    #[test]
    fn test_iff_is_weakest() {
        let source = "p→q↔r∨s";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, lhs, rhs, _) = &expr else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinOp::Iff);
        assert_eq!(text_of(lhs, source), "p→q");
        assert_eq!(text_of(rhs, source), "r∨s");
    }

    #[test]
    fn test_parens_override_precedence() {
        let source = "p∧(q∨r)";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, lhs, rhs, span) = &expr else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinOp::And);
        assert_eq!(text_of(lhs, source), "p");
        // The inner node's span excludes the parens...
        assert_eq!(text_of(rhs, source), "q∨r");
        // ...while the parent's span includes them.
        assert_eq!(span.slice(source), "p∧(q∨r)");
    }

    #[test]
    fn test_not_applies_to_narrowest_term() {
        let source = "~p∧q";
        let expr = parse_text(source).unwrap();
        let Expr::Binary(op, lhs, _, _) = &expr else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinOp::And);
        assert_eq!(text_of(lhs, source), "~p");
    }

    #[test]
    fn test_double_negation() {
        let source = "~~p";
        let expr = parse_text(source).unwrap();
        let Expr::Not(inner, span) = &expr else {
            panic!("expected negation root");
        };
        assert_eq!(span.slice(source), "~~p");
        assert_eq!(text_of(inner, source), "~p");
    }

    #[test]
    fn test_not_over_parens_keeps_them_in_span() {
        let source = "~(p∧q)";
        let expr = parse_text(source).unwrap();
        let Expr::Not(inner, span) = &expr else {
            panic!("expected negation root");
        };
        assert_eq!(span.slice(source), "~(p∧q)");
        assert_eq!(text_of(inner, source), "p∧q");
    }

    #[test]
    fn test_redundant_parens_parse_to_inner_tree() {
        // (p) and p build the same node shape; only spans differ
        let plain = parse_text("p").unwrap();
        let wrapped = parse_text("(p)").unwrap();
        assert_eq!(plain, Expr::Variable(Var::P, Span::new(0, 1)));
        assert_eq!(wrapped, Expr::Variable(Var::P, Span::new(1, 2)));
    }

    #[test]
    fn test_trailing_operator_fails() {
        let err = parse_text("p∧").unwrap_err();
        assert_eq!(err, Error::UnexpectedToken { offset: 4 });
    }

    #[test]
    fn test_leading_operator_fails() {
        let err = parse_text("∧p").unwrap_err();
        assert_eq!(err, Error::UnexpectedToken { offset: 0 });
    }

    #[test]
    fn test_adjacent_variables_fail() {
        let err = parse_text("pq").unwrap_err();
        assert_eq!(err, Error::UnexpectedToken { offset: 1 });
    }

    #[test]
    fn test_unclosed_paren_fails() {
        let err = parse_text("(p∧q").unwrap_err();
        assert_eq!(err, Error::UnbalancedParentheses { offset: 0 });
    }

    #[test]
    fn test_stray_close_paren_fails() {
        let err = parse_text("p)q").unwrap_err();
        assert_eq!(err, Error::UnbalancedParentheses { offset: 1 });

        let err = parse_text(")p").unwrap_err();
        assert_eq!(err, Error::UnbalancedParentheses { offset: 0 });
    }

    #[test]
    fn test_no_variable_is_empty_expression() {
        assert_eq!(parse_text("").unwrap_err(), Error::EmptyExpression);
        assert_eq!(parse_text("~").unwrap_err(), Error::EmptyExpression);
        assert_eq!(parse_text("()").unwrap_err(), Error::EmptyExpression);
    }
}
