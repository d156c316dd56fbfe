use serde::{Deserialize, Serialize};

/// Kind of account registered on TrackThis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// A webcam performer.
    Webcam,
    /// A studio managing performers.
    Studio,
    Affiliate,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Webcam => "webcam",
            AccountType::Studio => "studio",
            AccountType::Affiliate => "affiliate",
        }
    }
}

/// Operations understood by the TrackThis API.
///
/// Every request made by [crate::Api] is tagged with exactly one [Action],
/// which also decides the resource path the request is sent to.
#[derive(Serialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Search,
    Full,
    Create,
    Edit,
    Payments,
    CheckLogin,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::Full => "full",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Payments => "payments",
            Action::CheckLogin => "checkLogin",
        }
    }

    /// Path of the resource handling this action, relative to the endpoint.
    pub fn resource(&self) -> &'static str {
        match self {
            Action::Search | Action::Full | Action::Create | Action::Edit => {
                "api/action/accountv2"
            }
            Action::Payments => "api/action/stats",
            Action::CheckLogin => "api/action/checkLogin",
        }
    }

    /// Value of the `action` query parameter, if the resource expects one.
    ///
    /// `checkLogin` is named by its resource path alone.
    pub(crate) fn discriminator(&self) -> Option<Self> {
        match self {
            Action::CheckLogin => None,
            other => Some(*other),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
