use log::debug;

use crate::binding::Binding;
use crate::expression::ast::{Evaluation, Expression};
use crate::expression::constants::DEFAULT_VARIABLE;
use crate::expression::errors::ExpressionError;
use crate::expression::walk::walk;

impl Expression {
    /// Derivative with respect to `x`, evaluated at `binding`.
    ///
    /// # Errors
    ///
    /// See [`Expression::differentiate_wrt`].
    pub fn differentiate(&self, binding: &Binding) -> Result<f64, ExpressionError> {
        self.differentiate_wrt(DEFAULT_VARIABLE, binding)
    }

    /// Derivative with respect to `var`, evaluated at `binding`.
    ///
    /// Sums only need the derivatives of their operands, so symbols that
    /// never appear under a product are not looked up. The product rule needs
    /// the value of both factors, which makes every symbol below a
    /// [`Expression::Multiply`] node require a binding.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnboundSymbol`] when a symbol under a
    /// product is missing from the binding.
    pub fn differentiate_wrt(
        &self,
        var: &str,
        binding: &Binding,
    ) -> Result<f64, ExpressionError> {
        debug!(
            "Differentiating expression of depth {} with respect to {}",
            self.depth(),
            var
        );

        let result = walk(self, Some(var), binding);

        match &result {
            Ok(value) => debug!("Derivative evaluated to: {}", value),
            Err(e) => debug!("Differentiation failed: {}", e),
        }

        result
    }

    /// Value and derivative with respect to `var` in one call.
    ///
    /// # Errors
    ///
    /// Fails if either the evaluation or the differentiation fails.
    pub fn evaluate_with_derivative(
        &self,
        var: &str,
        binding: &Binding,
    ) -> Result<Evaluation, ExpressionError> {
        Ok(Evaluation {
            value: self.evaluate(binding)?,
            derivative: self.differentiate_wrt(var, binding)?,
        })
    }
}
