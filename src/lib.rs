//! Client library for the TrackThis affiliate API.
//!
//! ```no_run
//! use trackthis::{AccountFilter, ClientOptions, TrackThis};
//!
//! # async fn example() -> Result<(), trackthis::errors::TrackThisError> {
//! let client = TrackThis::new(ClientOptions::with_credentials("user", "secret"))?;
//! let accounts = client.search_accounts(&AccountFilter::username("bob")).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod config;
pub mod errors;
mod models;
mod requests;
pub mod transport;
pub mod types;

pub use api::Api;
pub use client::{TrackThis, TrackThisBuilder};
pub use config::{ClientConfig, ClientOptions};
pub use models::{CredentialsCheck, Registration};
pub use requests::{
    AccountChanges, AccountFilter, AccountLookup, LoginCredentials, NewAccount, PaymentsQuery,
    RegisterPerformer,
};
pub use reqwest;
