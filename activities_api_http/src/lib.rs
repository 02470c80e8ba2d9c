pub mod constants;
mod types;
mod util;

use url::Url;

use crate::constants::ApiEndpoints;
use crate::util::handle_response;

pub use crate::types::{Activity, ActivityCatalog, Confirmation};

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("host url {0} cannot be a base for endpoint paths")]
    InvalidHost(String),
    #[error("request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl HttpClientError {
    /// Whether the server answered and refused the request, as opposed to a
    /// transport or decode failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, HttpClientError::Rejected { .. })
    }

    /// Server-provided rejection detail, when there is one.
    pub fn rejection_detail(&self) -> Option<&str> {
        match self {
            HttpClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ActivitiesClient {
    http_client: reqwest::Client,
    host_url: String,
}

impl ActivitiesClient {
    pub fn new(host_url: String) -> Result<Self, HttpClientError> {
        let client = reqwest::Client::builder().build()?;

        let host_url = host_url.trim_end_matches('/').to_string();
        // Reject malformed hosts at construction rather than on first use.
        let base = Url::parse(&host_url)?;
        if base.cannot_be_a_base() {
            return Err(HttpClientError::InvalidHost(host_url));
        }

        Ok(ActivitiesClient {
            http_client: client,
            host_url,
        })
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.host_url, endpoint)
    }

    /// URL for a per-activity action: `/activities/{name}/{action}`. The
    /// activity name is pushed as a path segment so spaces, slashes and
    /// non-ASCII get percent-encoded instead of splitting the path.
    fn action_url(&self, activity: &str, action: &str) -> Result<Url, HttpClientError> {
        let mut url = Url::parse(&self.endpoint(ApiEndpoints::ACTIVITIES))?;
        url.path_segments_mut()
            .map_err(|_| HttpClientError::InvalidHost(self.host_url.clone()))?
            .push(activity)
            .push(action);
        Ok(url)
    }

    /// Fetch the full catalog. Key order in the response is preserved.
    pub async fn list_activities(&self) -> Result<ActivityCatalog, HttpClientError> {
        let res = self
            .http_client
            .get(self.endpoint(ApiEndpoints::ACTIVITIES))
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        tracing::debug!("list_activities");
        handle_response(status, &body)
    }

    /// Sign `email` up for `activity`.
    pub async fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<Confirmation, HttpClientError> {
        let res = self
            .http_client
            .post(self.action_url(activity, ApiEndpoints::SIGNUP)?)
            .query(&[("email", email)])
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        tracing::debug!("signup");
        handle_response(status, &body)
    }

    /// Remove `email` from `activity`'s roster.
    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<Confirmation, HttpClientError> {
        let res = self
            .http_client
            .post(self.action_url(activity, ApiEndpoints::UNREGISTER)?)
            .query(&[("email", email)])
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        tracing::debug!("unregister");
        handle_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ApiUrls;

    fn client() -> ActivitiesClient {
        ActivitiesClient::new(ApiUrls::LOCAL_ADDRESS.to_string()).unwrap()
    }

    #[test]
    fn action_url_percent_encodes_spaces() {
        let url = client()
            .action_url("Chess Club", ApiEndpoints::SIGNUP)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Chess%20Club/signup"
        );
    }

    #[test]
    fn action_url_keeps_slashes_inside_the_segment() {
        let url = client()
            .action_url("A/B Club", ApiEndpoints::UNREGISTER)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/A%2FB%20Club/unregister"
        );
    }

    #[test]
    fn action_url_percent_encodes_non_ascii() {
        let url = client().action_url("Café", ApiEndpoints::SIGNUP).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Caf%C3%A9/signup"
        );
    }

    #[test]
    fn email_is_query_encoded() {
        let url = client()
            .action_url("Chess Club", ApiEndpoints::SIGNUP)
            .unwrap();
        let request = reqwest::Client::new()
            .post(url)
            .query(&[("email", "a b@x.com")])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/activities/Chess%20Club/signup?email=a+b%40x.com"
        );
    }

    #[test]
    fn trailing_slash_on_the_host_is_normalized() {
        let client = ActivitiesClient::new("http://localhost:8000/".to_string()).unwrap();
        assert_eq!(
            client.endpoint(ApiEndpoints::ACTIVITIES),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn unparseable_host_is_rejected_at_construction() {
        let err = ActivitiesClient::new("not a url".to_string()).unwrap_err();
        assert!(matches!(err, HttpClientError::Url(_)));
    }

    #[test]
    fn non_base_host_is_rejected_at_construction() {
        let err = ActivitiesClient::new("mailto:someone@example.com".to_string()).unwrap_err();
        assert!(matches!(err, HttpClientError::InvalidHost(_)));
    }
}
