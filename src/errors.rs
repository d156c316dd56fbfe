//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::types::{Action, PartnerCode};
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidEndpoint {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidEndpoint);

/// Errors representing failed interactions with TrackThis.
#[derive(thiserror::Error, Debug)]
pub enum TrackThisError {
    /// Error response with an explanation from TrackThis.
    #[error("({status:?} {reason:?}): {text}")]
    Status {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Network failure, or a response body which could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    /// Response body is not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request parameters cannot be written as a query string.
    #[error("cannot encode request parameters: {0}")]
    Query(String),

    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),

    /// TrackThis answered, but did not report `ok` for the operation.
    #[error("TrackThis rejected \"{action}\": {response}")]
    RemoteRejected {
        action: Action,
        response: serde_json::Value,
    },

    /// TrackThis answered without a value the operation depends on.
    #[error("TrackThis returned an empty result for \"{action}\"")]
    EmptyResult { action: Action },

    /// Account `partner_code` was created, but configuring it afterwards failed.
    /// The account is left as it was created.
    #[error("account {partner_code} was created, but could not be edited")]
    PartialRegistration {
        partner_code: PartnerCode,
        #[source]
        source: Box<TrackThisError>,
    },
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, TrackThisError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(TrackThisError::Transport)?;
            Err(TrackThisError::Status {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

impl From<reqwest_middleware::Error> for TrackThisError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => TrackThisError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => TrackThisError::Transport(e),
        }
    }
}

/// An error which might occur while reading client options.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
