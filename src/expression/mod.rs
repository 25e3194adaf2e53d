//! Expression trees, their evaluation and differentiation

mod ast;
mod builders;
mod constants;
mod diff;
mod display;
mod errors;
mod eval;
mod latex;
mod walk;

pub use ast::{Evaluation, Expression};
pub use builders::{add, constant, multiply, symbol, variable};
pub use constants::DEFAULT_VARIABLE;
pub use errors::ExpressionError;
