//! Parsed formulas and the central API.
//!
//! All operations go through [`Formula`]: it owns the normalized source
//! text, the parsed tree and the canonical variable list, and the capability
//! modules ([`taut`][crate::taut], [`table`][crate::table],
//! [`subexpr`][crate::subexpr]) extend it with further `impl` blocks.
//!
//! A `Formula` is built fresh per request and is read-only afterwards;
//! nothing is cached between formulas, and independent formulas share no
//! state.
//!
//! # Example
//!
//! ```
//! use taut_rs::formula::Formula;
//! use taut_rs::types::{Assignment, Var};
//!
//! // ASCII input is normalized before parsing.
//! let f = Formula::parse("p -> (q | p)").unwrap();
//! assert_eq!(f.text(), "p→(q∨p)");
//! assert_eq!(f.variables(), &[Var::P, Var::Q]);
//!
//! let assignment = Assignment::from_pairs([(Var::P, true), (Var::Q, false)]);
//! assert_eq!(f.evaluate(&assignment), Ok(true));
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::assign::Assignments;
use crate::error::Error;
use crate::expr::Expr;
use crate::normalize::normalize;
use crate::parse::parse;
use crate::token::tokenize;
use crate::types::{Assignment, Var};

/// A parsed propositional formula together with its normalized source text.
#[derive(Debug, Clone)]
pub struct Formula {
    text: String,
    root: Expr,
    variables: Vec<Var>,
}

impl Formula {
    /// Normalizes, tokenizes and parses `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_rs::formula::Formula;
    /// use taut_rs::error::Error;
    ///
    /// assert!(Formula::parse("p <-> q").is_ok());
    /// assert_eq!(Formula::parse("p∧").unwrap_err(), Error::UnexpectedToken { offset: 4 });
    /// assert_eq!(Formula::parse("~").unwrap_err(), Error::EmptyExpression);
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let text = normalize(input);
        debug!("parse: normalized {:?} -> {:?}", input, text);
        let tokens = tokenize(&text)?;
        let root = parse(&tokens)?;
        let variables = root.variables();
        Ok(Formula { text, root, variables })
    }

    /// The normalized source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct variables used by the formula, in canonical order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// The root of the expression tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the formula under `assignment`.
    ///
    /// The assignment must bind every variable the formula references;
    /// otherwise [`Error::UnboundVariable`] is returned.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        self.root.evaluate(assignment)
    }

    /// All `2^n` assignments over this formula's variables, in truth-table
    /// row order (all-true first, all-false last).
    pub fn assignments(&self) -> Assignments {
        Assignments::new(self.variables.clone())
    }

    /// Evaluation under an assignment known to be total, i.e. one produced
    /// by [`Formula::assignments`].
    pub(crate) fn evaluate_total(&self, assignment: &Assignment) -> bool {
        match self.root.evaluate(assignment) {
            Ok(value) => value,
            Err(_) => unreachable!("enumerated assignments bind every formula variable"),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let f = Formula::parse("p && !q").unwrap();
        assert_eq!(f.text(), "p∧~q");
        assert_eq!(f.to_string(), "p∧~q");
    }

    #[test]
    fn test_variables_sorted() {
        let f = Formula::parse("s∨q∨s").unwrap();
        assert_eq!(f.variables(), &[Var::Q, Var::S]);
    }

    #[test]
    fn test_evaluate_requires_complete_assignment() {
        let f = Formula::parse("p∧q").unwrap();
        let partial = Assignment::from_pairs([(Var::P, true)]);
        assert_eq!(f.evaluate(&partial), Err(Error::UnboundVariable(Var::Q)));
    }

    #[test]
    fn test_invalid_character_reaches_caller() {
        let err = Formula::parse("p ∧ x").unwrap_err();
        // Offset is into the normalized text "p∧x"
        assert_eq!(err, Error::InvalidCharacter { ch: 'x', offset: 4 });
    }

    #[test]
    fn test_from_str() {
        let f: Formula = "p→p".parse().unwrap();
        assert_eq!(f.text(), "p→p");
        assert!("p∧".parse::<Formula>().is_err());
    }

    #[test]
    fn test_fresh_parse_per_request() {
        // Two parses of the same text are independent values
        let a = Formula::parse("p∨q").unwrap();
        let b = Formula::parse("p∨q").unwrap();
        assert_eq!(a.text(), b.text());
        assert_eq!(a.root(), b.root());
    }
}
