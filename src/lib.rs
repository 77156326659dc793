//! # taut-rs: Tautology checking and truth tables in Rust
//!
//! **`taut-rs`** is a small, pure engine for propositional logic over the
//! fixed variable alphabet `{p, q, r, s}` and the connectives
//! NOT, AND, OR, IMPLIES, IFF and XOR. It answers two questions about a
//! formula: *is it a tautology?* and *what does its full truth table look
//! like, sub-expression columns included?*
//!
//! ## What is a tautology?
//!
//! A formula is a **tautology** when it evaluates to true under every
//! assignment of truth values to its variables. `p∨~p` is one; `p∧~p` is
//! true nowhere. With at most 4 variables the assignment space never
//! exceeds 16 rows, so exhaustive checking is exact and instant.
//!
//! ## Key Features
//!
//! - **Notation-tolerant input**: ASCII shortcuts (`!`, `&&`, `->`, `<->`,
//!   `xor`) and the canonical glyphs (`~ ∧ ∨ → ↔ ⊕`) both parse; everything
//!   is [normalized][crate::normalize] first.
//! - **Precedence-correct parsing** into an immutable tree whose nodes
//!   carry exact source spans, so every sub-expression's display text is
//!   recovered from the input rather than re-printed.
//! - **Two evaluators**: direct tree recursion and a compiled
//!   reverse-Polish stack pass, guaranteed to agree.
//! - **Deterministic tables**: variables in alphabetical order, rows from
//!   all-true to all-false, sub-expression columns smallest to largest.
//! - **Pure functions throughout**: no shared state, no I/O; every request
//!   parses fresh and runs to completion.
//!
//! ## Quick Start
//!
//! Add `taut-rs` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! taut-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use taut_rs::formula::Formula;
//!
//! // 1. Parse (ASCII notation is normalized to canonical glyphs)
//! let f = Formula::parse("p -> (q | p)").unwrap();
//! assert_eq!(f.text(), "p→(q∨p)");
//!
//! // 2. Check for tautology
//! assert!(f.is_tautology());
//! assert_eq!(f.one_counterexample(), None);
//!
//! // 3. Tabulate, sub-expression columns included
//! let table = Formula::parse("(p∧q)∨r").unwrap().truth_table();
//! assert_eq!(table.columns(), ["p", "q", "r", "p∧q", "(p∧q)∨r"]);
//! assert_eq!(table.num_rows(), 8);
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: the [`Formula`][crate::formula::Formula] manager every
//!   operation goes through.
//! - **[`normalize`]** / **[`token`]** / **[`parse`]**: the text pipeline:
//!   notation normalization, strict tokenization, precedence climbing.
//! - **[`eval`]**: tree and reverse-Polish evaluation.
//! - **[`assign`]**: enumeration of the `2^n` assignment rows.
//! - **[`subexpr`]** / **[`table`]** / **[`taut`]**: sub-expression
//!   extraction, truth tables, tautology checking.

pub mod assign;
pub mod error;
pub mod eval;
pub mod expr;
pub mod formula;
pub mod normalize;
pub mod parse;
pub mod subexpr;
pub mod table;
pub mod taut;
pub mod token;
pub mod types;
