//! Defines models for requests sent to TrackThis.
//!
//! Each operation has its own parameter struct, so only the fields listed
//! here can ever reach the API.

use crate::types::{AccountType, Action, PartnerCode, Username};
use serde::Serialize;
use std::collections::BTreeMap;

/// Filter of an account search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Username>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "hoofdcode", skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<PartnerCode>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    /// Any other filter understood by the search API.
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl AccountFilter {
    pub fn username(username: impl Into<Username>) -> Self {
        Self {
            username: Some(username.into()),
            ..Default::default()
        }
    }

    /// Add a filter which has no dedicated field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.other.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A username, or a complete filter, identifying one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    Username(Username),
    Filter(AccountFilter),
}

impl AccountLookup {
    pub fn into_filter(self) -> AccountFilter {
        match self {
            AccountLookup::Username(username) => AccountFilter::username(username),
            AccountLookup::Filter(filter) => filter,
        }
    }
}

impl From<&str> for AccountLookup {
    fn from(value: &str) -> Self {
        Self::Username(Username::from(value))
    }
}

impl From<Username> for AccountLookup {
    fn from(value: Username) -> Self {
        Self::Username(value)
    }
}

impl From<AccountFilter> for AccountLookup {
    fn from(value: AccountFilter) -> Self {
        Self::Filter(value)
    }
}

/// Account to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: Username,
    pub account_type: AccountType,
}

/// Mutable fields of an account. Fields left as `None` are not changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    // identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    // address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    // contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    // banking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    /// Chamber of commerce registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coc_number: Option<String>,
}

/// Performer account to create and configure in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPerformer {
    pub username: Username,
    pub changes: AccountChanges,
}

/// Username and password to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    /// Sent as an empty value when `None`.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    pub username: Username,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<Username>, password: impl Into<String>) -> Self {
        Self {
            account_type: None,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Payment statistics to retrieve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsQuery {
    pub account_type: AccountType,
    /// How rows are grouped, e.g. `day` or `month`.
    pub grouping: Option<String>,
    /// Named reporting period, e.g. `month`.
    pub period: Option<String>,
    pub date: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl Default for PaymentsQuery {
    fn default() -> Self {
        Self {
            account_type: AccountType::Webcam,
            grouping: None,
            period: None,
            date: None,
            filters: Default::default(),
        }
    }
}

/// Response format requested for payment statistics.
pub(crate) const PAYMENTS_RESPONSE_TYPE: &str = "json";

// Wire formats. The `action` field is added by Tagged.

/// Parameters of one call, tagged with the action they are for.
#[derive(Serialize)]
pub(crate) struct Tagged<'a, P: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(flatten)]
    pub params: &'a P,
}

#[derive(Serialize)]
pub(crate) struct SearchParams<'a> {
    #[serde(skip_serializing_if = "AccountFilter::is_empty")]
    pub filter: &'a AccountFilter,
}

#[derive(Serialize)]
pub(crate) struct FullParams<'a> {
    pub hoofdcode: &'a PartnerCode,
}

#[derive(Serialize)]
pub(crate) struct CreateParams<'a> {
    pub username: &'a Username,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub product: &'a str,
}

#[derive(Serialize)]
pub(crate) struct EditParams<'a> {
    pub hoofdcode: &'a PartnerCode,
    pub changes: &'a AccountChanges,
}

#[derive(Serialize)]
pub(crate) struct PaymentsParams<'a> {
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(rename = "responseType")]
    pub response_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<&'a BTreeMap<String, String>>,
}

impl<'a> PaymentsParams<'a> {
    pub fn new(query: &'a PaymentsQuery) -> Self {
        Self {
            account_type: query.account_type,
            response_type: PAYMENTS_RESPONSE_TYPE,
            grouping: query.grouping.as_deref(),
            period: query.period.as_deref(),
            date: query.date.as_deref(),
            filters: Some(&query.filters).filter(|f| !f.is_empty()),
        }
    }
}
