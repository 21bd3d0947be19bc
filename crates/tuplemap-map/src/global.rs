//! Process-wide registry published once at startup.
//!
//! [`initialize`] builds the registry and publishes it through a [`OnceLock`];
//! every later read through [`global`] sees the same immutable registry.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{MappingError, Result};
use crate::registry::{MappingConfiguration, MappingRegistry};

static GLOBAL_REGISTRY: OnceLock<MappingRegistry> = OnceLock::new();

/// Builds the process-wide registry from `configure` and publishes it.
///
/// # Errors
///
/// Returns [`MappingError::AlreadyInitialized`] if a registry was already
/// published, or any error from [`MappingConfiguration::build`].
pub fn initialize<F>(configure: F) -> Result<&'static MappingRegistry>
where
    F: FnOnce(&mut MappingConfiguration),
{
    if GLOBAL_REGISTRY.get().is_some() {
        return Err(MappingError::AlreadyInitialized);
    }
    let mut config = MappingConfiguration::new();
    configure(&mut config);
    let profiles = config.profiles().join(",");
    let registry = config.build()?;
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| MappingError::AlreadyInitialized)?;
    debug!(%profiles, "published global mapping registry");
    global()
}

/// Returns the published registry.
///
/// # Errors
///
/// Returns [`MappingError::NotInitialized`] before [`initialize`] succeeded.
pub fn global() -> Result<&'static MappingRegistry> {
    GLOBAL_REGISTRY.get().ok_or(MappingError::NotInitialized)
}
