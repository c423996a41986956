use crate::config::ModuleConfig;
use crate::domain::{capitalize_name, split_email, Organization};
use crate::error::CoreError;

/// Map an email address to `"<Name> [<Org>]"`.
///
/// Fails with [`CoreError::InvalidAddressFormat`] when the address does not
/// have exactly one "@" or its domain has fewer than two labels.
pub fn derive_display_name(address: &str) -> Result<String, CoreError> {
    let parts = split_email(address)?;
    let org = Organization::from_email(&parts);
    Ok(format!(
        "{} [{}]",
        capitalize_name(parts.local()),
        org.render()
    ))
}

/// Display name for an address under `config`: derived, or the address itself
/// when `extract_from_email` is off.
pub fn display_name_for_address(config: &ModuleConfig, address: &str) -> Result<String, CoreError> {
    if config.extract_from_email {
        derive_display_name(address)
    } else {
        Ok(address.to_string())
    }
}
