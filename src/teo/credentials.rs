//! TencentCloud credential resolution from multiple sources

use log::debug;
use std::collections::HashMap;
use std::fs;

use crate::config::credentials;
use crate::error::{Result, TeoError};

/// A secret id / secret key pair used to sign API requests
#[derive(Debug, Clone)]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: String,
}

/// Credential resolution with fallback logic
pub struct CredentialResolver;

impl CredentialResolver {
    /// Resolve credentials from multiple sources with fallback:
    /// 1. CLI arguments (if both provided)
    /// 2. Environment variables (TENCENTCLOUD_SECRET_ID, TENCENTCLOUD_SECRET_KEY)
    /// 3. Shared credentials file (~/.tencentcloud/credentials, `[default]` profile)
    ///
    /// A source is only used when it supplies the complete pair; a lone
    /// secret id with no key falls through to the next source.
    pub fn resolve(
        cli_secret_id: Option<&str>,
        cli_secret_key: Option<&str>,
    ) -> Result<Credentials> {
        // 1. CLI arguments take precedence
        if let (Some(id), Some(key)) = (cli_secret_id, cli_secret_key) {
            debug!("Using credentials from CLI arguments");
            return Ok(Credentials {
                secret_id: id.to_string(),
                secret_key: key.to_string(),
            });
        }

        // 2. Environment variables
        if let (Ok(id), Ok(key)) = (
            std::env::var(credentials::SECRET_ID_ENV_VAR),
            std::env::var(credentials::SECRET_KEY_ENV_VAR),
        ) {
            debug!(
                "Using credentials from {} / {} environment variables",
                credentials::SECRET_ID_ENV_VAR,
                credentials::SECRET_KEY_ENV_VAR
            );
            return Ok(Credentials {
                secret_id: id,
                secret_key: key,
            });
        }

        // 3. Shared credentials file
        debug!(
            "No credentials in CLI arguments or environment variables, trying {}",
            credentials::FILE_PATH
        );
        Self::read_from_credentials_file()
    }

    /// Resolve the region, if any: CLI argument, then TENCENTCLOUD_REGION.
    /// The TEO endpoint is global, so a missing region is not an error.
    pub fn resolve_region(cli_region: Option<&str>) -> Option<String> {
        if let Some(region) = cli_region {
            debug!("Using region from CLI argument");
            return Some(region.to_string());
        }
        match std::env::var(credentials::REGION_ENV_VAR) {
            Ok(region) if !region.is_empty() => {
                debug!(
                    "Using region from {} environment variable",
                    credentials::REGION_ENV_VAR
                );
                Some(region)
            }
            _ => None,
        }
    }

    /// Read the `[default]` profile from the shared credentials file
    fn read_from_credentials_file() -> Result<Credentials> {
        let credentials_path = Self::get_credentials_path()
            .ok_or_else(|| TeoError::CredentialsNotFound(Self::not_found_message(None)))?;

        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(&credentials_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(TeoError::CredentialsNotFound(Self::not_found_message(
                    Some(&credentials_path),
                )));
            }
        };

        let profile = parse_profile(&content, credentials::DEFAULT_PROFILE);
        match (profile.get("secret_id"), profile.get("secret_key")) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                debug!(
                    "Using credentials from file {} profile [{}]",
                    credentials_path.display(),
                    credentials::DEFAULT_PROFILE
                );
                Ok(Credentials {
                    secret_id: id.clone(),
                    secret_key: key.clone(),
                })
            }
            _ => Err(TeoError::CredentialsNotFound(Self::not_found_message(
                Some(&credentials_path),
            ))),
        }
    }

    /// Generate helpful error message when no credentials are found
    fn not_found_message(credentials_path: Option<&std::path::Path>) -> String {
        let file_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No TencentCloud credentials found. Please provide them using one of:\n\
             \n\
             1. CLI arguments:     teoctl --secret-id <ID> --secret-key <KEY>\n\
             2. Environment vars:  export {}=<ID>\n\
             \x20                  export {}=<KEY>\n\
             3. Credentials file:  ~/{} with a [{}] profile\n\
             \n\
             Checked: CLI arguments, env vars{}",
            credentials::SECRET_ID_ENV_VAR,
            credentials::SECRET_KEY_ENV_VAR,
            credentials::FILE_PATH,
            credentials::DEFAULT_PROFILE,
            file_info
        )
    }

    /// Path to the shared credentials file (~/.tencentcloud/credentials)
    fn get_credentials_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}

/// Parse one `[profile]` section of an INI-style credentials file into
/// key/value pairs. Lines outside the requested profile are skipped, as
/// are comments (`#` or `;`) and lines with no `=`.
fn parse_profile(content: &str, profile: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    let mut in_profile = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_profile = line[1..line.len() - 1].trim() == profile;
            continue;
        }
        if !in_profile {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    values
}
