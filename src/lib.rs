//! Exprdiff - Evaluate and differentiate small arithmetic expression trees
//!
//! Expressions are built from numeric constants, named symbols, addition and
//! multiplication. Both evaluation and differentiation resolve symbols through a
//! [`Binding`] supplied per call and never modify the tree, so one expression
//! can be evaluated at many points, including from several threads at once.

pub mod batch;
pub mod binding;
pub mod catalog;
pub mod expression;

// Re-export the main public API
pub use batch::{BatchError, SweepRange, evaluate_batch, sweep};
pub use binding::{Binding, BindingError, parse_assignment};
pub use expression::{
    DEFAULT_VARIABLE, Evaluation, Expression, ExpressionError, add, constant, multiply, symbol,
    variable,
};

/// Evaluate `expr` with its symbols resolved through `binding`
///
/// # Errors
///
/// Returns [`ExpressionError::UnboundSymbol`] if a symbol in `expr` has no
/// value in `binding`.
///
/// # Examples
///
/// ```
/// use exprdiff::{Binding, add, evaluate, multiply};
///
/// // 3 + x * x at x = 2
/// let expr = add(3.0, multiply("x", "x"));
/// assert_eq!(evaluate(&expr, &Binding::from([("x", 2.0)])), Ok(7.0));
/// ```
pub fn evaluate(expr: &Expression, binding: &Binding) -> Result<f64, ExpressionError> {
    expr.evaluate(binding)
}

/// Derivative of `expr` with respect to `x`, evaluated at `binding`
///
/// # Errors
///
/// Returns [`ExpressionError::UnboundSymbol`] if a symbol that appears in a
/// product has no value in `binding`.
///
/// # Examples
///
/// ```
/// use exprdiff::{Binding, add, differentiate, multiply};
///
/// // d/dx (3 + x * x) = 2x, so 4 at x = 2
/// let expr = add(3.0, multiply("x", "x"));
/// assert_eq!(differentiate(&expr, &Binding::from([("x", 2.0)])), Ok(4.0));
/// ```
pub fn differentiate(expr: &Expression, binding: &Binding) -> Result<f64, ExpressionError> {
    expr.differentiate(binding)
}
