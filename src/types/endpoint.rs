//! NewType for the base address of the TrackThis API.

use crate::errors::InvalidEndpoint;
use aliri_braid::braid;

/// An [EndpointUrl] is the base URL of a TrackThis installation, e.g.
/// `http://trackthis.nl`
#[braid(validator, serde)]
pub struct EndpointUrl(String);

impl aliri_braid::Validator for EndpointUrl {
    type Error = InvalidEndpoint;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(())
        } else {
            Err(InvalidEndpoint::Protocol(s.to_string()))
        }
    }
}
