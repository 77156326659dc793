//! Tautology checking.
//!
//! A tautology is a formula that evaluates to true under every assignment of
//! its variables. With the alphabet fixed at four variables the assignment
//! space is at most 16 rows, so the check is a plain exhaustive sweep in
//! truth-table row order.
//!
//! # Example
//!
//! ```
//! use taut_rs::formula::Formula;
//!
//! assert!(Formula::parse("p∨~p").unwrap().is_tautology());
//! assert!(Formula::parse("p→p").unwrap().is_tautology());
//! assert!(!Formula::parse("p∧~p").unwrap().is_tautology());
//! ```

use std::fmt;

use log::debug;

use crate::formula::Formula;
use crate::types::{Assignment, Var};

/// Outcome of a tautology check, shaped for display surfaces.
#[derive(Debug, Clone)]
pub struct TautologyReport {
    /// The normalized formula text.
    pub formula: String,
    /// The variables used, in canonical order.
    pub variables: Vec<Var>,
    pub is_tautology: bool,
}

impl fmt::Display for TautologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars: Vec<String> = self.variables.iter().map(Var::to_string).collect();
        write!(
            f,
            "{} [{}]: {}",
            self.formula,
            vars.join(", "),
            if self.is_tautology { "tautology" } else { "not a tautology" }
        )
    }
}

impl Formula {
    /// True iff the formula holds under every assignment of its variables.
    pub fn is_tautology(&self) -> bool {
        self.one_counterexample().is_none()
    }

    /// Returns one falsifying assignment, if any exists.
    ///
    /// Rows are probed in truth-table order, so the result is the first
    /// counterexample a reader would find in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use taut_rs::formula::Formula;
    /// use taut_rs::types::Var;
    ///
    /// let f = Formula::parse("p→q").unwrap();
    /// let witness = f.one_counterexample().unwrap();
    /// assert_eq!(witness.get(Var::P), Some(true));
    /// assert_eq!(witness.get(Var::Q), Some(false));
    ///
    /// assert_eq!(Formula::parse("p→p").unwrap().one_counterexample(), None);
    /// ```
    pub fn one_counterexample(&self) -> Option<Assignment> {
        for assignment in self.assignments() {
            if !self.evaluate_total(&assignment) {
                debug!("counterexample for {}: [{}]", self, assignment);
                return Some(assignment);
            }
        }
        None
    }

    /// Runs the check and packages the result for a display surface.
    pub fn check(&self) -> TautologyReport {
        TautologyReport {
            formula: self.text().to_string(),
            variables: self.variables().to_vec(),
            is_tautology: self.is_tautology(),
        }
    }
}
