use log::debug;

use crate::binding::errors::BindingError;
use crate::binding::validation::validate_symbol_name;

/// Parse a `NAME=VALUE` assignment such as `x=2.5`
///
/// # Errors
///
/// Returns an error if the `=` is missing, the name is not a valid symbol
/// name, or the value is not a number.
pub fn parse_assignment(input: &str) -> Result<(String, f64), BindingError> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| BindingError::MissingSeparator(input.to_string()))?;

    let name = name.trim();
    let value = value.trim();
    validate_symbol_name(name)?;

    let parsed = value.parse::<f64>().map_err(|_| BindingError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })?;

    debug!("Parsed assignment {} = {}", name, parsed);
    Ok((name.to_string(), parsed))
}
