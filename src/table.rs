//! Truth-table construction.
//!
//! A [`TruthTable`] is the complete tabulation of a formula: one column per
//! variable (alphabetical), then one per distinct sub-expression smallest to
//! largest, ending with the full formula; one row per assignment, all-true
//! first. The structure is plain `columns`/`rows` data for a rendering
//! surface to consume; the `Display` impl is the in-crate text rendering,
//! useful in tests and on a terminal.
//!
//! # Example
//!
//! ```
//! use taut_rs::formula::Formula;
//!
//! let table = Formula::parse("(p∧q)∨r").unwrap().truth_table();
//! assert_eq!(table.columns(), ["p", "q", "r", "p∧q", "(p∧q)∨r"]);
//! assert_eq!(table.num_rows(), 8);
//!
//! // First row: all variables true, so every column is true.
//! assert_eq!(table.rows()[0], vec![true, true, true, true, true]);
//! ```

use std::fmt;

use crate::formula::Formula;

/// A complete truth table: ordered column labels and boolean rows.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    columns: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Ordered column labels: variables, sub-expressions, full formula.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in enumeration order; each row's values match `columns`.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows whose final (full formula) column is true.
    pub fn count_true(&self) -> usize {
        self.rows.iter().filter(|row| *row.last().unwrap_or(&false)).count()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count().max(1)).collect();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| format!(" {:>width$} ", column, width = width))
            .collect();
        writeln!(f, "{}", header.join("|"))?;

        let separator: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
        writeln!(f, "{}", separator.join("+"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(&value, &width)| {
                    format!(" {:>width$} ", if value { "T" } else { "F" }, width = width)
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl Formula {
    /// Builds the full truth table, sub-expression columns included.
    pub fn truth_table(&self) -> TruthTable {
        let entries = self.subexpression_entries();

        let mut columns: Vec<String> = self.variables().iter().map(|v| v.to_string()).collect();
        columns.extend(entries.iter().map(|e| e.text.to_string()));

        let assignments = self.assignments();
        let mut rows = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let mut row: Vec<bool> = assignment.values().map(|(_, value)| value).collect();
            for entry in &entries {
                match entry.node.evaluate(&assignment) {
                    Ok(value) => row.push(value),
                    Err(_) => unreachable!("enumerated assignments bind every formula variable"),
                }
            }
            rows.push(row);
        }

        TruthTable { columns, rows }
    }
}
