//! Backend secrets, read from the process environment with an optional
//! config-file fallback.

use super::file_config::CredentialsConfig;

pub const CLIENT_ID_VAR: &str = "SPOTIPY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIPY_CLIENT_SECRET";
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_key: Option<String>,
}

impl Credentials {
    /// Reads the three secrets through `lookup`, falling back to `file`.
    /// Blank values count as missing.
    pub fn resolve<F>(lookup: F, file: Option<&CredentialsConfig>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, fallback: Option<&String>| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| fallback.filter(|v| !v.trim().is_empty()).cloned())
        };
        Self {
            client_id: pick(CLIENT_ID_VAR, file.and_then(|f| f.client_id.as_ref())),
            client_secret: pick(CLIENT_SECRET_VAR, file.and_then(|f| f.client_secret.as_ref())),
            api_key: pick(API_KEY_VAR, file.and_then(|f| f.api_key.as_ref())),
        }
    }

    /// Names of the variables that resolved to nothing.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (CLIENT_ID_VAR, &self.client_id),
            (CLIENT_SECRET_VAR, &self.client_secret),
            (API_KEY_VAR, &self.api_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id.as_ref().map(|_| "<set>"))
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<set>"))
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}
