//! Sub-expression extraction for truth-table columns.
//!
//! A truth table shows one computed column per syntactically distinct
//! sub-expression, ordered smallest to largest so every column appears
//! before any column that contains it. The extraction is a single post-order
//! walk of the parse tree: each non-leaf node contributes the text of its
//! span, duplicates (by resulting text, not tree identity) collapse to the
//! first occurrence, and the full formula's own text closes the list.
//!
//! This replaces the ad hoc operator-substring heuristics such displays are
//! often built from; the tree walk is both simpler and correct for nested
//! parenthesization.
//!
//! # Example
//!
//! ```
//! use taut_rs::formula::Formula;
//!
//! let f = Formula::parse("(p∧q)∨r").unwrap();
//! assert_eq!(f.subexpressions(), ["p∧q", "(p∧q)∨r"]);
//!
//! // A repeated sub-expression yields a single entry.
//! let f = Formula::parse("(p∧q)∨(p∧q)").unwrap();
//! assert_eq!(f.subexpressions(), ["p∧q", "(p∧q)∨(p∧q)"]);
//! ```

use crate::expr::Expr;
use crate::formula::Formula;

/// A distinct sub-expression: its text and the first node that produced it.
#[derive(Debug, Clone, Copy)]
pub struct SubExpr<'a> {
    /// The exact text, sliced from the normalized source.
    pub text: &'a str,
    /// The node whose span produced `text`.
    pub node: &'a Expr,
}

impl Formula {
    /// Ordered, distinct textual sub-expressions, bottom-up, ending with the
    /// full formula's text. Bare single variables are excluded; they get
    /// their own columns ahead of these.
    pub fn subexpressions(&self) -> Vec<&str> {
        self.subexpression_entries().iter().map(|e| e.text).collect()
    }

    /// Like [`Formula::subexpressions`], but keeping the node that produced
    /// each text so callers can evaluate the column.
    pub fn subexpression_entries(&self) -> Vec<SubExpr<'_>> {
        let mut entries = Vec::new();
        collect(self.root(), self.text(), &mut entries);

        // The whole normalized text closes the list. When the root was
        // parenthesized its span-text lacks the outer parens, so the full
        // text differs and still maps to the root node. A formula that is
        // textually a bare variable contributes nothing here.
        let full = self.text();
        let is_bare_variable =
            matches!(self.root(), Expr::Variable(var, _) if full.len() == 1 && full.starts_with(var.to_char()));
        if !is_bare_variable && entries.last().map(|e: &SubExpr| e.text) != Some(full) {
            push_unique(&mut entries, SubExpr { text: full, node: self.root() });
        }

        entries
    }
}

fn collect<'a>(expr: &'a Expr, source: &'a str, out: &mut Vec<SubExpr<'a>>) {
    match expr {
        Expr::Variable(..) => {}
        Expr::Not(operand, span) => {
            collect(operand, source, out);
            push_unique(out, SubExpr { text: span.slice(source), node: expr });
        }
        Expr::Binary(_, lhs, rhs, span) => {
            collect(lhs, source, out);
            collect(rhs, source, out);
            push_unique(out, SubExpr { text: span.slice(source), node: expr });
        }
    }
}

fn push_unique<'a>(out: &mut Vec<SubExpr<'a>>, entry: SubExpr<'a>) {
    if !out.iter().any(|e| e.text == entry.text) {
        out.push(entry);
    }
}
