use crate::api::Api;
use crate::config::{ClientConfig, ClientOptions};
use crate::errors::TrackThisError;
use crate::transport::Transport;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;

/// TrackThis API client.
///
/// All operations of [Api] can be called on the client directly.
#[derive(Clone)]
pub struct TrackThis {
    config: Arc<ClientConfig>,
    api: Api,
}

pub struct TrackThisBuilder {
    config: ClientConfig,
    builder: reqwest_middleware::ClientBuilder,
}

impl TrackThisBuilder {
    pub(crate) fn new(options: ClientOptions) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(accept_json())
            .user_agent(concat!("trackthis-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self {
            config: options.resolve(),
            builder,
        })
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            config: self.config,
            builder: self.builder.with(middleware),
        }
    }

    /// Create the client. Fails if the configured endpoint is not an HTTP(S) URL.
    pub fn build(self) -> Result<TrackThis, TrackThisError> {
        let config = Arc::new(self.config);
        let transport = Transport::new(self.builder.build(), Arc::clone(&config))?;
        Ok(TrackThis {
            config,
            api: Api::new(transport),
        })
    }
}

impl TrackThis {
    /// Create a client, using defaults for every option not given.
    pub fn new(options: ClientOptions) -> Result<Self, TrackThisError> {
        Self::build(options)?.build()
    }

    /// Create a client builder.
    pub fn build(options: ClientOptions) -> Result<TrackThisBuilder, reqwest::Error> {
        TrackThisBuilder::new(options)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &Api {
        &self.api
    }
}

impl std::ops::Deref for TrackThis {
    type Target = Api;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("application/json"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_new_with_credentials_only() {
        let client = TrackThis::new(ClientOptions::with_credentials("jan", "geheim")).unwrap();
        assert_eq!(client.config().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.config().credentials.username, "jan");
        assert_eq!(
            client.transport().request_url("/api/action/checkLogin"),
            "http://trackthis.nl/api/action/checkLogin"
        );
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let options = ClientOptions {
            endpoint: Some("trackthis.nl".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            TrackThis::new(options),
            Err(TrackThisError::InvalidEndpoint(_))
        ));
    }
}
