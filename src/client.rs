use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response};

use crate::artifacts::{Artifact, ArtifactList};
use crate::config::{PER_PAGE, Settings};
use crate::error::{Error, Result};

pub const USER_AGENT: &str = "github-API-client";
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Authenticated client for the artifact endpoints of the hosting API.
pub struct GithubClient {
    client: Client,
    token: String,
    list_url: String,
}

impl GithubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Self::build_client()?;

        Ok(Self {
            client,
            token: settings.token.clone(),
            list_url: settings.list_artifacts_url(),
        })
    }

    fn build_client() -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }

    /// Fetch the first page of artifacts.
    pub async fn list_artifacts(&self) -> Result<ArtifactList> {
        tracing::debug!("Listing artifacts from {}", self.list_url);

        let response = self
            .client
            .get(&self.list_url)
            .query(&[("per_page", PER_PAGE)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Artifact listing returned status {}", status);
            return Err(Error::ListFailed { status });
        }

        let list: ArtifactList = parse_body(response).await?;
        tracing::info!(
            "Repository reports {} artifacts, {} listed on the first page",
            list.total_count,
            list.artifacts.len()
        );
        Ok(list)
    }

    pub async fn delete_artifact(&self, artifact: &Artifact) -> Result<()> {
        match artifact.id {
            Some(id) => tracing::debug!(
                "Deleting artifact {} (id {}) at {}",
                artifact.name,
                id,
                artifact.url
            ),
            None => tracing::debug!("Deleting artifact {} at {}", artifact.name, artifact.url),
        }

        let response = self
            .client
            .delete(&artifact.url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Deletion of artifact {} returned status {}",
                artifact.name,
                status
            );
            return Err(Error::DeleteFailed {
                name: artifact.name.clone(),
                status,
            });
        }

        tracing::info!(
            "Deleted artifact {} (updated {})",
            artifact.name,
            artifact.updated_at
        );
        Ok(())
    }
}

async fn parse_body<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
