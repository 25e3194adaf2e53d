//! Named sample expressions for demonstrations

mod samples;

pub use samples::{Sample, find, samples};
