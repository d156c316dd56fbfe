use aliri_braid::braid;

/// TrackThis account username.
#[braid(serde)]
pub struct Username;

/// The code which identifies an account on TrackThis, called `hoofdcode` by the API.
#[braid(serde)]
pub struct PartnerCode;
