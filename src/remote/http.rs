use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::model::{FeatureId, FeaturePage, SortBy, UserId, UserVotes, VoteRequest, VoteResponse};
use crate::remote::error::RemoteError;
use crate::remote::FeatureApi;

/// [`FeatureApi`] over HTTP with JSON bodies.
pub struct HttpFeatureApi {
    client: Client,
    base_url: String,
}

impl HttpFeatureApi {
    /// Build a client with the configured request and connect timeouts.
    pub fn new(config: &ApiConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, RemoteError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| RemoteError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })
    }

    async fn execute<T>(&self, builder: RequestBuilder) -> Result<T, RemoteError>
    where
        T: DeserializeOwned + Default,
    {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
            RemoteError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            tracing::warn!(
                method = %method,
                url = %url,
                status = %status,
                error = %message,
                "Server returned error status"
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        decode_body(&body)
    }

    async fn send_vote(
        &self,
        method: Method,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<VoteResponse, RemoteError> {
        let url = self.url(&format!("/api/features/{}/vote", feature_id))?;
        let builder = self.client.request(method, url).json(&VoteRequest { user_id });
        self.execute(builder).await
    }
}

#[async_trait]
impl FeatureApi for HttpFeatureApi {
    async fn list_features(
        &self,
        page: u32,
        per_page: u32,
        sort_by: &SortBy,
    ) -> Result<FeaturePage, RemoteError> {
        let mut url = self.url("/api/features")?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string())
            .append_pair("sort_by", sort_by.as_str());

        self.execute(self.client.get(url)).await
    }

    async fn cast_vote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<VoteResponse, RemoteError> {
        self.send_vote(Method::POST, feature_id, user_id).await
    }

    async fn retract_vote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<VoteResponse, RemoteError> {
        self.send_vote(Method::DELETE, feature_id, user_id).await
    }

    async fn user_votes(&self, user_id: UserId) -> Result<UserVotes, RemoteError> {
        let url = self.url(&format!("/api/users/{}/votes", user_id))?;
        self.execute(self.client.get(url)).await
    }
}

/// An empty or `null` success body decodes as the payload's default.
fn decode_body<T>(body: &str) -> Result<T, RemoteError>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Prefer the server's `{"error": "..."}` text, then the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string())
}
