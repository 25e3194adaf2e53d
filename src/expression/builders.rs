use std::ops;

use crate::expression::ast::Expression;
use crate::expression::constants::DEFAULT_VARIABLE;

/// A numeric literal
pub fn constant(value: f64) -> Expression {
    Expression::Constant(value)
}

/// A named symbol, resolved through the binding at evaluation time
pub fn symbol(name: impl Into<String>) -> Expression {
    Expression::Symbol(name.into())
}

/// The default differentiation variable, `x`
pub fn variable() -> Expression {
    symbol(DEFAULT_VARIABLE)
}

/// Sum of two subexpressions. Accepts anything convertible into an
/// expression, so `add(3.0, "x")` builds `3 + x`.
pub fn add(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::Add(Box::new(left.into()), Box::new(right.into()))
}

/// Product of two subexpressions
pub fn multiply(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::Multiply(Box::new(left.into()), Box::new(right.into()))
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        constant(value)
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        symbol(name)
    }
}

impl From<String> for Expression {
    fn from(name: String) -> Self {
        symbol(name)
    }
}

impl ops::Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        add(self, rhs)
    }
}

impl ops::Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        multiply(self, rhs)
    }
}
