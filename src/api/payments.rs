use super::Api;
use crate::errors::TrackThisError;
use crate::models::{accept_ok, is_empty};
use crate::requests::{PaymentsParams, PaymentsQuery};
use crate::types::Action;
use serde_json::Value;
use tracing::debug;

impl Api {
    /// Get payment statistics. Returns `None` when TrackThis has nothing to report,
    /// either as an empty response or as an `ok` response with empty `data`.
    ///
    /// A non-success HTTP status fails with [TrackThisError::Status], even when
    /// the body is a `{"ok": false}` envelope.
    pub async fn find_payments(
        &self,
        query: &PaymentsQuery,
    ) -> Result<Option<Value>, TrackThisError> {
        let res = self
            .call(Action::Payments, &PaymentsParams::new(query), None)
            .await?
            .into_document();
        if is_empty(&res) {
            debug!(period = ?query.period, date = ?query.date, "No payments found");
            return Ok(None);
        }
        let data = accept_ok(Action::Payments, res)?;
        if is_empty(&data) {
            debug!(period = ?query.period, date = ?query.date, "No payments found");
            return Ok(None);
        }
        Ok(Some(data))
    }
}
