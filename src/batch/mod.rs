//! Parallel evaluation of one expression at many bindings

mod errors;
mod parallel;
mod range;

pub use errors::BatchError;
pub use parallel::{evaluate_batch, sweep};
pub use range::SweepRange;

#[cfg(test)]
mod tests;
