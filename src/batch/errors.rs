use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    #[error("Invalid sweep range '{0}', expected FROM:TO:STEPS")]
    InvalidRange(String),
    #[error("Sweep needs at least one step")]
    ZeroSteps,
}
