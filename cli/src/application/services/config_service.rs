//! Application service: configuration use-cases.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::{ClientConfig, validate_config};

/// Load, normalize and validate the client configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds invalid values.
pub fn load_config(store: &impl ConfigStore) -> Result<ClientConfig> {
    let config = store.load()?.normalized();
    validate_config(&config).with_context(|| match store.path() {
        Ok(path) => format!("invalid configuration in {}", path.display()),
        Err(_) => "invalid configuration".to_string(),
    })?;
    Ok(config)
}
