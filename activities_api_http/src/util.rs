use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::HttpClientError;

/// Error body the service returns on a rejected request, e.g.
/// `{"detail": "Already signed up"}`. `detail` is not guaranteed.
#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct ErrorResponse {
    pub detail: Option<String>,
}

/// Handle a JSON response body, returning either the expected deserialized
/// object or an [`HttpClientError`].
///
/// The body is parsed regardless of status: rejected requests carry a
/// structured `detail`, and a body that is not JSON at all is a parse
/// failure whatever the status says.
pub(crate) fn handle_response<T>(status: StatusCode, body: &[u8]) -> Result<T, HttpClientError>
where
    T: DeserializeOwned,
{
    if status.is_success() {
        Ok(serde_json::from_slice(body)?)
    } else {
        let err: ErrorResponse = serde_json::from_slice(body)?;
        Err(HttpClientError::Rejected {
            status: status.as_u16(),
            detail: err.detail,
        })
    }
}
