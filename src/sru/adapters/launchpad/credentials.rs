//! Cached session credentials for the remote service.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory under the user cache directory.
const CACHE_SUBDIR: &str = "sru-tasker";
/// Credential file name inside the application cache directory.
const CREDENTIAL_FILE: &str = "credentials.json";

/// Errors raised while locating or reading the credential store.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No cache directory convention is available on this system.
    #[error("no user cache directory available")]
    NoCacheDir,

    /// The credential file could not be read.
    #[error("cannot read credentials at {path}: {source}")]
    Unreadable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The credential file is not valid JSON for this store.
    #[error("malformed credentials at {path}: {source}")]
    Malformed {
        /// Path that was read.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// OAuth 1.0 credential triple as cached by the sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    consumer_key: String,
    access_token: String,
    access_secret: String,
}

impl Credentials {
    /// Builds a credential triple directly, bypassing the on-disk store.
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    /// Returns the conventional credential file location,
    /// `$XDG_CACHE_HOME/sru-tasker/credentials.json` with the usual
    /// home-directory fallback.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NoCacheDir`] when no cache directory
    /// convention exists.
    pub fn cache_path() -> Result<PathBuf, CredentialError> {
        dirs::cache_dir()
            .map(|dir| dir.join(CACHE_SUBDIR).join(CREDENTIAL_FILE))
            .ok_or(CredentialError::NoCacheDir)
    }

    /// Loads credentials from the conventional cache location.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the store is missing or malformed.
    pub fn load_default() -> Result<Self, CredentialError> {
        Self::load_from(Self::cache_path()?)
    }

    /// Loads credentials from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the file is unreadable or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CredentialError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the OAuth 1.0 PLAINTEXT authorization header the service
    /// expects on every request.
    #[must_use]
    pub fn authorization_header(&self, clock: &impl Clock) -> String {
        let now = clock.utc();
        let timestamp = now.timestamp();
        let nonce = now.timestamp_micros();
        format!(
            "OAuth realm=\"OAuth\", \
             oauth_version=\"1.0\", \
             oauth_signature_method=\"PLAINTEXT\", \
             oauth_consumer_key=\"{consumer}\", \
             oauth_token=\"{token}\", \
             oauth_signature=\"%26{secret}\", \
             oauth_timestamp=\"{timestamp}\", \
             oauth_nonce=\"{nonce}\"",
            consumer = self.consumer_key,
            token = self.access_token,
            secret = self.access_secret,
        )
    }
}
