//! API key resolution.
//!
//! An inline `api_key` in the config wins; otherwise the variable named by
//! `api_key_env` is read. Keys are wrapped in [`SecretString`] immediately so
//! they never show up in `Debug` output or logs.
//!
//! Variables can also come from a `.env` file, see [`load_env_file`].

use memcat_application::ClientError;
use memcat_domain::ProviderEndpoint;
use secrecy::SecretString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load `KEY=value` pairs from a dotenv file into the process environment.
///
/// `None` looks for `.env` in the current directory and its parents.
/// Variables that are already set keep their values. Returns the file that
/// was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("Ignoring unreadable env file: {}", e);
            None
        }
    }
}

/// Resolve the API key for `endpoint` from config or the process environment.
pub fn resolve_api_key(endpoint: &ProviderEndpoint) -> Result<SecretString, ClientError> {
    resolve_api_key_with(endpoint, |name| std::env::var(name).ok())
}

/// Same as [`resolve_api_key`] with an injectable variable lookup.
pub fn resolve_api_key_with<F>(
    endpoint: &ProviderEndpoint,
    lookup: F,
) -> Result<SecretString, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = endpoint
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| lookup(&endpoint.api_key_env).filter(|k| !k.trim().is_empty()));

    match key {
        Some(key) => Ok(SecretString::from(key)),
        None => Err(ClientError::MissingCredentials(format!(
            "set {} or providers.*.api_key",
            endpoint.api_key_env
        ))),
    }
}
