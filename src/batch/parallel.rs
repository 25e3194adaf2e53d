use log::info;
use rayon::prelude::*;

use crate::batch::range::SweepRange;
use crate::binding::Binding;
use crate::expression::{Evaluation, Expression, ExpressionError};

/// Value and derivative with respect to `var` at every binding.
///
/// Bindings are processed in parallel; results come back in input order and
/// a failure at one binding leaves the others untouched.
pub fn evaluate_batch(
    expr: &Expression,
    var: &str,
    bindings: &[Binding],
) -> Vec<Result<Evaluation, ExpressionError>> {
    info!("Evaluating {} at {} bindings", expr, bindings.len());

    bindings
        .par_iter()
        .map(|binding| expr.evaluate_with_derivative(var, binding))
        .collect()
}

/// Rebind `var` over `range` on top of `base` and evaluate at each point.
pub fn sweep(
    expr: &Expression,
    var: &str,
    base: &Binding,
    range: &SweepRange,
) -> Vec<(f64, Result<Evaluation, ExpressionError>)> {
    let points = range.points();
    let bindings: Vec<Binding> = points
        .iter()
        .map(|&point| base.clone().with(var, point))
        .collect();

    points
        .into_iter()
        .zip(evaluate_batch(expr, var, &bindings))
        .collect()
}
