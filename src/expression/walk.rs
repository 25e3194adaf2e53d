use log::trace;

use crate::binding::Binding;
use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Pending work for the explicit-stack traversal
enum Task<'a> {
    Value(&'a Expression),
    Derivative(&'a Expression),
    Sum,
    Product,
    ProductRule,
}

/// Computes the value (`var` is `None`) or the derivative with respect to
/// `var` without recursing, so tree depth is limited only by memory.
///
/// Children are scheduled so the left operand is always finished before the
/// right one, which keeps the leftmost unbound symbol the one reported.
pub(crate) fn walk(
    root: &Expression,
    var: Option<&str>,
    binding: &Binding,
) -> Result<f64, ExpressionError> {
    let mut tasks = vec![match var {
        Some(_) => Task::Derivative(root),
        None => Task::Value(root),
    }];
    let mut results: Vec<f64> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Value(Expression::Constant(value)) => results.push(*value),
            Task::Value(Expression::Symbol(name)) => {
                let value = binding.get(name).ok_or_else(|| {
                    trace!("Symbol '{}' has no value in the binding", name);
                    ExpressionError::UnboundSymbol(name.clone())
                })?;
                results.push(value);
            }
            Task::Value(Expression::Add(l, r)) => {
                tasks.extend([Task::Sum, Task::Value(r), Task::Value(l)]);
            }
            Task::Value(Expression::Multiply(l, r)) => {
                tasks.extend([Task::Product, Task::Value(r), Task::Value(l)]);
            }
            Task::Derivative(Expression::Constant(_)) => results.push(0.0),
            Task::Derivative(Expression::Symbol(name)) => {
                results.push(if Some(name.as_str()) == var { 1.0 } else { 0.0 });
            }
            Task::Derivative(Expression::Add(l, r)) => {
                tasks.extend([Task::Sum, Task::Derivative(r), Task::Derivative(l)]);
            }
            Task::Derivative(Expression::Multiply(l, r)) => {
                tasks.extend([
                    Task::ProductRule,
                    Task::Value(r),
                    Task::Derivative(r),
                    Task::Value(l),
                    Task::Derivative(l),
                ]);
            }
            Task::Sum => {
                let [left, right] = take(&mut results);
                results.push(left + right);
            }
            Task::Product => {
                let [left, right] = take(&mut results);
                results.push(left * right);
            }
            Task::ProductRule => {
                let [left_prime, left, right_prime, right] = take(&mut results);
                results.push(left_prime * right + right_prime * left);
            }
        }
    }

    let [result] = take(&mut results);
    Ok(result)
}

/// Pops the last `N` results, oldest first.
fn take<const N: usize>(results: &mut Vec<f64>) -> [f64; N] {
    let operands = results.split_off(results.len().saturating_sub(N));
    match operands.try_into() {
        Ok(operands) => operands,
        Err(_) => unreachable!("operation scheduled before its {} operands", N),
    }
}
