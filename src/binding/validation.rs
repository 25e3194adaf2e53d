use log::{debug, warn};

use crate::binding::errors::BindingError;

/// # Errors
///
/// Returns an error if the name is empty, starts with anything other than a
/// letter or underscore, or contains characters other than letters, digits
/// and underscores.
pub fn validate_symbol_name(name: &str) -> Result<(), BindingError> {
    debug!("Validating symbol name: '{}'", name);

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');

    if !valid_start || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        warn!("Rejected symbol name: '{}'", name);
        return Err(BindingError::InvalidName(name.to_string()));
    }

    Ok(())
}
