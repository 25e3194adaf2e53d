use std::str::FromStr;

use crate::batch::errors::BatchError;

/// Evenly spaced points from `from` to `to`, both ends included
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub from: f64,
    pub to: f64,
    pub steps: usize,
}

impl SweepRange {
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or either bound is not finite.
    pub fn new(from: f64, to: f64, steps: usize) -> Result<Self, BatchError> {
        if steps == 0 {
            return Err(BatchError::ZeroSteps);
        }
        if !from.is_finite() || !to.is_finite() {
            return Err(BatchError::InvalidRange(format!("{}:{}:{}", from, to, steps)));
        }
        Ok(Self { from, to, steps })
    }

    pub fn points(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.from];
        }

        let last = self.steps - 1;
        let width = self.to - self.from;
        (0..self.steps)
            .map(|i| {
                if i == last {
                    self.to
                } else {
                    self.from + width * (i as f64) / (last as f64)
                }
            })
            .collect()
    }
}

impl FromStr for SweepRange {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BatchError::InvalidRange(s.to_string());

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [from, to, steps] = parts.as_slice() else {
            return Err(invalid());
        };

        let from = from.parse::<f64>().map_err(|_| invalid())?;
        let to = to.parse::<f64>().map_err(|_| invalid())?;
        let steps = steps.parse::<usize>().map_err(|_| invalid())?;

        Self::new(from, to, steps)
    }
}
