use super::Api;
use crate::errors::TrackThisError;
use crate::models::{accept_ok, partner_code_of, Registration};
use crate::requests::*;
use crate::transport::Selector;
use crate::types::{AccountType, Action, PartnerCode};
use serde_json::Value;
use tracing::warn;

impl Api {
    /// Search for accounts. An empty filter returns every account.
    pub async fn search_accounts(
        &self,
        filter: &AccountFilter,
    ) -> Result<Vec<Value>, TrackThisError> {
        let res = self
            .call(
                Action::Search,
                &SearchParams { filter },
                Some(&Selector::account_rows()),
            )
            .await?;
        Ok(res.into_rows())
    }

    /// Get everything TrackThis knows about an account.
    pub async fn find_full(&self, partner_code: &PartnerCode) -> Result<Value, TrackThisError> {
        let params = FullParams {
            hoofdcode: partner_code,
        };
        let res = self.call(Action::Full, &params, None).await?;
        Ok(res.into_document())
    }

    /// Create an account for the configured product, returning the `data` of the response.
    ///
    /// [TrackThisError::RemoteRejected] is returned for a successful HTTP status
    /// without `"ok": true`. A non-success status fails with
    /// [TrackThisError::Status] instead, whatever the body says.
    pub async fn create_account(&self, account: &NewAccount) -> Result<Value, TrackThisError> {
        let params = CreateParams {
            username: &account.username,
            account_type: account.account_type,
            product: &self.transport.config().tracker.product,
        };
        let res = self.call(Action::Create, &params, None).await?;
        accept_ok(Action::Create, res.into_document())
    }

    pub async fn edit_account(
        &self,
        partner_code: &PartnerCode,
        changes: &AccountChanges,
    ) -> Result<Value, TrackThisError> {
        let params = EditParams {
            hoofdcode: partner_code,
            changes,
        };
        let res = self.call(Action::Edit, &params, None).await?;
        Ok(res.into_document())
    }

    /// Find the first account matching a username or filter.
    pub async fn find_account(
        &self,
        lookup: impl Into<AccountLookup>,
    ) -> Result<Option<Value>, TrackThisError> {
        let filter = lookup.into().into_filter();
        let rows = self.search_accounts(&filter).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn find_performer(
        &self,
        lookup: impl Into<AccountLookup>,
    ) -> Result<Option<Value>, TrackThisError> {
        self.find_account(of_type(lookup, AccountType::Webcam)).await
    }

    pub async fn find_studio(
        &self,
        lookup: impl Into<AccountLookup>,
    ) -> Result<Option<Value>, TrackThisError> {
        self.find_account(of_type(lookup, AccountType::Studio)).await
    }

    /// Create a performer account, then edit it with the given changes.
    ///
    /// The two requests are not atomic. When editing fails, the account stays
    /// created and [TrackThisError::PartialRegistration] names it.
    pub async fn register_performer(
        &self,
        options: &RegisterPerformer,
    ) -> Result<Registration, TrackThisError> {
        let account = NewAccount {
            username: options.username.clone(),
            account_type: AccountType::Webcam,
        };
        let created = self.create_account(&account).await?;
        let partner_code = partner_code_of(&created).ok_or(TrackThisError::EmptyResult {
            action: Action::Create,
        })?;
        match self.edit_account(&partner_code, &options.changes).await {
            Ok(edited) => Ok(Registration {
                partner_code,
                created,
                edited,
            }),
            Err(source) => {
                warn!(%partner_code, error = %source, "Performer created but not edited");
                Err(TrackThisError::PartialRegistration {
                    partner_code,
                    source: Box::new(source),
                })
            }
        }
    }
}

fn of_type(lookup: impl Into<AccountLookup>, account_type: AccountType) -> AccountFilter {
    AccountFilter {
        account_type: Some(account_type),
        ..lookup.into().into_filter()
    }
}
