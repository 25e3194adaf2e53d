use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unbound symbol: {0}")]
    UnboundSymbol(String),
}
