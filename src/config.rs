//! Client options and their defaults.
//!
//! [ClientOptions] is what a caller provides: any field may be missing.
//! [ClientOptions::resolve] fills in every missing field from the defaults,
//! one leaf at a time, producing the [ClientConfig] a [crate::TrackThis]
//! client is built from.

use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://trackthis.nl";
pub const DEFAULT_PRODUCT: &str = "vpscash";
pub const DEFAULT_PRODUCT_GROUP: &str = "webcamsv4";

/// Caller-supplied options. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub endpoint: Option<String>,
    #[serde(alias = "auth")]
    pub credentials: Option<CredentialsOptions>,
    pub tracker: Option<TrackerOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialsOptions {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerOptions {
    pub product: Option<String>,
    pub product_group: Option<String>,
    pub website_key: Option<String>,
    pub website_domain: Option<String>,
}

/// Resolved, immutable configuration of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub credentials: Credentials,
    pub tracker: Tracker,
}

/// HTTP Basic credentials for the TrackThis API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Product settings sent along with account operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    pub product: String,
    pub product_group: String,
    pub website_key: Option<String>,
    pub website_domain: Option<String>,
}

impl ClientOptions {
    /// Options with only the given credentials set.
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Some(CredentialsOptions {
                username: Some(username.into()),
                password: Some(password.into()),
            }),
            ..Default::default()
        }
    }

    /// Read options from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs_err::read_to_string(path.as_ref())?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // an empty document means "no options"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read options from `TRACKTHIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credentials = CredentialsOptions {
            username: lookup("TRACKTHIS_USERNAME"),
            password: lookup("TRACKTHIS_PASSWORD"),
        };
        let tracker = TrackerOptions {
            product: lookup("TRACKTHIS_PRODUCT"),
            product_group: lookup("TRACKTHIS_PRODUCT_GROUP"),
            website_key: lookup("TRACKTHIS_WEBSITE_KEY"),
            website_domain: lookup("TRACKTHIS_WEBSITE_DOMAIN"),
        };
        Self {
            endpoint: lookup("TRACKTHIS_ENDPOINT"),
            credentials: Some(credentials).filter(|c| c != &CredentialsOptions::default()),
            tracker: Some(tracker).filter(|t| t != &TrackerOptions::default()),
        }
    }

    /// Merge two sets of options field-by-field. Fields set in `self` win.
    pub fn or(self, other: Self) -> Self {
        Self {
            endpoint: self.endpoint.or(other.endpoint),
            credentials: merge(self.credentials, other.credentials, CredentialsOptions::or),
            tracker: merge(self.tracker, other.tracker, TrackerOptions::or),
        }
    }

    /// Fill every missing field with its default value.
    pub fn resolve(self) -> ClientConfig {
        let credentials = self.credentials.unwrap_or_default();
        let tracker = self.tracker.unwrap_or_default();
        ClientConfig {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            credentials: Credentials {
                username: credentials.username.unwrap_or_default(),
                password: credentials.password.unwrap_or_default(),
            },
            tracker: Tracker {
                product: tracker
                    .product
                    .unwrap_or_else(|| DEFAULT_PRODUCT.to_string()),
                product_group: tracker
                    .product_group
                    .unwrap_or_else(|| DEFAULT_PRODUCT_GROUP.to_string()),
                website_key: tracker.website_key,
                website_domain: tracker.website_domain,
            },
        }
    }
}

impl CredentialsOptions {
    fn or(self, other: Self) -> Self {
        Self {
            username: self.username.or(other.username),
            password: self.password.or(other.password),
        }
    }
}

impl TrackerOptions {
    fn or(self, other: Self) -> Self {
        Self {
            product: self.product.or(other.product),
            product_group: self.product_group.or(other.product_group),
            website_key: self.website_key.or(other.website_key),
            website_domain: self.website_domain.or(other.website_domain),
        }
    }
}

fn merge<T>(a: Option<T>, b: Option<T>, f: impl FnOnce(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (a, b) => a.or(b),
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientOptions::default().resolve()
    }
}
