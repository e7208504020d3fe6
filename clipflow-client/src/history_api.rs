//! Server history API abstraction.
//!
//! The cache talks to this trait so it can be exercised without a network;
//! [`RestHistoryApi`] is the production implementation against the Clipflow
//! server.

use async_trait::async_trait;
use url::Url;
use uuid::Uuid;

use clipflow_model::{SearchHistoryEntry, WatchHistoryEntry};

use crate::error::{ClientError, ClientResult};

#[async_trait]
pub trait HistoryApi: Send + Sync {
    async fn watch_history(&self) -> ClientResult<Vec<WatchHistoryEntry>>;
    async fn report_progress(&self, video_id: Uuid, progress: i32) -> ClientResult<()>;
    async fn remove_watch_entry(&self, video_id: Uuid) -> ClientResult<()>;
    async fn clear_watch_history(&self) -> ClientResult<()>;
    async fn watching_now(&self) -> ClientResult<Option<WatchHistoryEntry>>;

    async fn search_history(&self) -> ClientResult<Vec<SearchHistoryEntry>>;
    async fn add_search_keyword(&self, keyword: &str) -> ClientResult<()>;
    async fn remove_search_keyword(&self, keyword: &str) -> ClientResult<()>;
    async fn clear_search_history(&self) -> ClientResult<()>;
}

/// REST client for the server's `/api/v1/history` surface.
#[derive(Debug, Clone)]
pub struct RestHistoryApi {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl RestHistoryApi {
    pub fn new(server_url: &str, token: impl Into<String>) -> ClientResult<Self> {
        let base_url = Url::parse(server_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BadServerUrl);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::BadServerUrl)?;
            path.pop_if_empty();
            path.extend(["api", "v1", "history"]);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let response = self
            .client
            .get(self.endpoint(segments)?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, segments: &[&str]) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.endpoint(segments)?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryApi for RestHistoryApi {
    async fn watch_history(&self) -> ClientResult<Vec<WatchHistoryEntry>> {
        self.get_json(&["watch"]).await
    }

    async fn report_progress(&self, video_id: Uuid, progress: i32) -> ClientResult<()> {
        let response = self
            .client
            .post(self.endpoint(&["watch", &video_id.to_string()])?)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "progress": progress }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn remove_watch_entry(&self, video_id: Uuid) -> ClientResult<()> {
        self.delete(&["watch", &video_id.to_string()]).await
    }

    async fn clear_watch_history(&self) -> ClientResult<()> {
        self.delete(&["watch"]).await
    }

    async fn watching_now(&self) -> ClientResult<Option<WatchHistoryEntry>> {
        self.get_json(&["watch", "live"]).await
    }

    async fn search_history(&self) -> ClientResult<Vec<SearchHistoryEntry>> {
        self.get_json(&["search"]).await
    }

    async fn add_search_keyword(&self, keyword: &str) -> ClientResult<()> {
        let response = self
            .client
            .post(self.endpoint(&["search", keyword])?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn remove_search_keyword(&self, keyword: &str) -> ClientResult<()> {
        self.delete(&["search", keyword]).await
    }

    async fn clear_search_history(&self) -> ClientResult<()> {
        self.delete(&["search"]).await
    }
}
