/// Name of the symbol `differentiate` works with respect to
pub const DEFAULT_VARIABLE: &str = "x";
