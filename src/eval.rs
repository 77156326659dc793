//! Truth-value evaluation.
//!
//! Two interchangeable strategies are provided: direct recursion over the
//! tree ([`Expr::evaluate`]) and a two-pass scheme that compiles the tree to
//! reverse Polish order once ([`Expr::to_rpn`]) and then evaluates it with a
//! single stack pass ([`Rpn::evaluate`]). Both are deterministic and total
//! given a complete assignment, and they agree on every formula and
//! assignment, a property the tests exercise over the whole 4-variable
//! assignment space.

use crate::error::Error;
use crate::expr::{BinOp, Expr};
use crate::formula::Formula;
use crate::types::{Assignment, Var};

impl Expr {
    /// Evaluates the tree under `assignment` by direct recursion.
    ///
    /// Both operands of a binary node are always evaluated; over pure
    /// boolean algebra there is nothing to short-circuit.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        match self {
            Expr::Variable(var, _) => {
                assignment.get(*var).ok_or(Error::UnboundVariable(*var))
            }
            Expr::Not(operand, _) => Ok(!operand.evaluate(assignment)?),
            Expr::Binary(op, lhs, rhs, _) => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(op.apply(lhs, rhs))
            }
        }
    }

    /// Compiles the tree to reverse Polish (postfix) order.
    pub fn to_rpn(&self) -> Rpn {
        let mut ops = Vec::new();
        self.emit_rpn(&mut ops);
        Rpn { ops }
    }

    fn emit_rpn(&self, out: &mut Vec<RpnOp>) {
        match self {
            Expr::Variable(var, _) => out.push(RpnOp::Push(*var)),
            Expr::Not(operand, _) => {
                operand.emit_rpn(out);
                out.push(RpnOp::Not);
            }
            Expr::Binary(op, lhs, rhs, _) => {
                lhs.emit_rpn(out);
                rhs.emit_rpn(out);
                out.push(RpnOp::Apply(*op));
            }
        }
    }
}

/// One step of a postfix evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RpnOp {
    /// Push a variable's value.
    Push(Var),
    /// Negate the top of the stack.
    Not,
    /// Pop two values and apply a connective.
    Apply(BinOp),
}

/// A formula compiled to reverse Polish order, evaluable with one stack pass.
#[derive(Debug, Clone)]
pub struct Rpn {
    ops: Vec<RpnOp>,
}

impl Rpn {
    /// The postfix operation sequence.
    pub fn ops(&self) -> &[RpnOp] {
        &self.ops
    }

    /// Evaluates the postfix sequence under `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.ops.len());
        for op in &self.ops {
            match op {
                RpnOp::Push(var) => {
                    let value = assignment.get(*var).ok_or(Error::UnboundVariable(*var))?;
                    stack.push(value);
                }
                RpnOp::Not => {
                    let Some(top) = stack.pop() else {
                        unreachable!("postfix sequence is well-formed by construction");
                    };
                    stack.push(!top);
                }
                RpnOp::Apply(op) => {
                    let Some(rhs) = stack.pop() else {
                        unreachable!("postfix sequence is well-formed by construction");
                    };
                    let Some(lhs) = stack.pop() else {
                        unreachable!("postfix sequence is well-formed by construction");
                    };
                    stack.push(op.apply(lhs, rhs));
                }
            }
        }
        let Some(result) = stack.pop() else {
            unreachable!("postfix sequence leaves exactly one value");
        };
        debug_assert!(stack.is_empty());
        Ok(result)
    }
}

/// One line of a step-by-step evaluation display: a sub-expression's text and
/// its value under the assignment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EvalStep {
    pub text: String,
    pub value: bool,
}

impl Formula {
    /// A step list for display: every distinct sub-expression with its value
    /// under `assignment`, bottom-up, ending with the whole formula.
    pub fn evaluation_steps(&self, assignment: &Assignment) -> Result<Vec<EvalStep>, Error> {
        self.subexpression_entries()
            .into_iter()
            .map(|entry| {
                Ok(EvalStep {
                    text: entry.text.to_string(),
                    value: entry.node.evaluate(assignment)?,
                })
            })
            .collect()
    }
}
