//! HTTP plumbing shared by every TrackThis operation.

mod query;
mod selector;

pub use selector::{InvalidSelector, Selector, ACCOUNT_ROWS};

use crate::config::{ClientConfig, Credentials};
use crate::errors::{check, TrackThisError};
use crate::types::EndpointUrl;
use bytes::BytesMut;
use futures::StreamExt;
use query::to_query_pairs;
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Decoded response body of a TrackThis request.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResponse {
    /// The whole document.
    Document(Value),
    /// Elements matched by a [Selector].
    Rows(Vec<Value>),
}

impl RemoteResponse {
    pub fn into_document(self) -> Value {
        match self {
            RemoteResponse::Document(value) => value,
            RemoteResponse::Rows(rows) => Value::Array(rows),
        }
    }

    pub fn into_rows(self) -> Vec<Value> {
        match self {
            RemoteResponse::Rows(rows) => rows,
            RemoteResponse::Document(Value::Array(rows)) => rows,
            RemoteResponse::Document(Value::Null) => Vec::new(),
            RemoteResponse::Document(value) => vec![value],
        }
    }
}

/// Per-request settings of [Transport::request].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    /// Credentials to use instead of the configured ones.
    pub auth: Option<Credentials>,
    pub selector: Option<Selector>,
}

/// Sends requests to the configured TrackThis endpoint.
#[derive(Clone)]
pub struct Transport {
    client: ClientWithMiddleware,
    endpoint: EndpointUrl,
    config: Arc<ClientConfig>,
}

impl Transport {
    pub fn new(
        client: ClientWithMiddleware,
        config: Arc<ClientConfig>,
    ) -> Result<Self, TrackThisError> {
        let endpoint = EndpointUrl::try_from(config.endpoint.as_str())?;
        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join the endpoint and `path` with exactly one slash.
    pub fn request_url(&self, path: &str) -> String {
        join_url(self.endpoint.as_str(), path)
    }

    /// Make a GET request, sending `parameters` as the query string.
    pub async fn get<P: Serialize + ?Sized>(
        &self,
        path: &str,
        parameters: &P,
        selector: Option<&Selector>,
    ) -> Result<RemoteResponse, TrackThisError> {
        let options = RequestOptions {
            query: to_query_pairs(parameters)?,
            auth: None,
            selector: selector.cloned(),
        };
        self.request(Method::GET, path, options).await
    }

    /// Make a single request and decode its JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<RemoteResponse, TrackThisError> {
        let url = self.request_url(path);
        let RequestOptions {
            query,
            auth,
            selector,
        } = options;
        let credentials = auth.as_ref().unwrap_or(&self.config.credentials);
        debug!(%method, %url, params = query.len(), "Sending TrackThis request");

        let res = self
            .client
            .request(method, &url)
            .query(&query)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        let body = read_body(check(res).await?).await?;
        let document = decode(&body)?;
        debug!(%url, bytes = body.len(), "Received TrackThis response");

        Ok(match selector {
            Some(selector) => RemoteResponse::Rows(selector.select(document)),
            None => RemoteResponse::Document(document),
        })
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Consume the response body chunk by chunk.
async fn read_body(res: reqwest::Response) -> Result<BytesMut, TrackThisError> {
    let mut body = BytesMut::new();
    let mut chunks = res.bytes_stream();
    while let Some(chunk) = chunks.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(body)
}

/// An empty body decodes to `null`.
fn decode(body: &[u8]) -> Result<Value, TrackThisError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(TrackThisError::Decode)
}
