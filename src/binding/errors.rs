use thiserror::Error;

/// Errors that can occur while building a binding from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("Expected NAME=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("Invalid symbol name: '{0}'")]
    InvalidName(String),
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}
