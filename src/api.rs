//! Operations of the TrackThis API.

mod accounts;
mod login;
mod payments;

use crate::errors::TrackThisError;
use crate::requests::Tagged;
use crate::transport::{RemoteResponse, Selector, Transport};
use crate::types::Action;
use serde::Serialize;

/// TrackThis operations, built on a [Transport].
#[derive(Clone)]
pub struct Api {
    transport: Transport,
}

impl Api {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Send `params` to the resource of `action`, tagged with that action.
    async fn call<P: Serialize>(
        &self,
        action: Action,
        params: &P,
        selector: Option<&Selector>,
    ) -> Result<RemoteResponse, TrackThisError> {
        let tagged = Tagged {
            action: action.discriminator(),
            params,
        };
        self.transport
            .get(action.resource(), &tagged, selector)
            .await
    }
}
