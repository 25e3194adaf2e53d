use log::debug;

use crate::binding::Binding;
use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::walk::walk;

impl Expression {
    /// Evaluates the expression with symbols resolved through `binding`
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnboundSymbol`] when a symbol is missing
    /// from the binding.
    pub fn evaluate(&self, binding: &Binding) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression of depth {}", self.depth());

        let result = walk(self, None, binding);

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
