//! Symbol bindings supplied to evaluation and differentiation

mod errors;
mod map;
mod parse;
mod validation;

pub use errors::BindingError;
pub use map::Binding;
pub use parse::parse_assignment;
pub use validation::validate_symbol_name;
