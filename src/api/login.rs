use super::Api;
use crate::errors::TrackThisError;
use crate::models::CredentialsCheck;
use crate::requests::LoginCredentials;
use crate::types::Action;

impl Api {
    /// Check whether a username and password belong to an account.
    pub async fn validate_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<CredentialsCheck, TrackThisError> {
        let res = self.call(Action::CheckLogin, credentials, None).await?;
        Ok(CredentialsCheck::from_response(res.into_document()))
    }
}
