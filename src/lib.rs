//! Enforce a retention count on the GitHub Actions artifacts of a repository.
//!
//! A run lists the artifacts once, keeps the newest `max-artifacts` of them and
//! deletes the rest one at a time, stopping at the first failed deletion.

pub mod actions;
pub mod artifacts;
pub mod client;
pub mod config;
pub mod error;
pub mod parsing;

pub use artifacts::{Artifact, ArtifactList, Plan};
pub use client::GithubClient;
pub use config::{Inputs, Repository, Settings};
pub use error::{ConfigError, Error, Result};

pub const WITHIN_LIMIT_MESSAGE: &str =
    "There are less artifacts in this repository than the maximum allowed number.";
pub const SUCCESS_MESSAGE: &str = "Successfully deleted old artifacts";

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    WithinLimit {
        total_count: u64,
    },
    Pruned {
        total_count: u64,
        /// Names of the deleted artifacts, in deletion order.
        deleted: Vec<String>,
    },
}

impl Outcome {
    pub fn deleted(&self) -> &[String] {
        match self {
            Outcome::WithinLimit { .. } => &[],
            Outcome::Pruned { deleted, .. } => deleted,
        }
    }

    /// Lines reported to the user once the run has finished.
    pub fn messages(&self) -> Vec<&'static str> {
        match self {
            Outcome::WithinLimit { .. } => vec![WITHIN_LIMIT_MESSAGE, SUCCESS_MESSAGE],
            Outcome::Pruned { .. } => vec![SUCCESS_MESSAGE],
        }
    }
}

/// Validate the inputs and enforce the retention count.
///
/// Invalid inputs fail with [`Error::Configuration`] before any request is made.
pub async fn run(inputs: Inputs) -> Result<Outcome> {
    let settings = Settings::from_inputs(inputs)?;
    enforce(&settings).await
}

/// List the repository's artifacts and delete those beyond the retention count.
///
/// Deletions are issued one after another, newest expired artifact first. The
/// first failure ends the run; artifacts deleted before it stay deleted.
pub async fn enforce(settings: &Settings) -> Result<Outcome> {
    tracing::info!(
        "Enforcing a maximum of {} artifacts on {}",
        settings.max_artifacts,
        settings.repository
    );

    let client = GithubClient::new(settings)?;
    let list = client.list_artifacts().await?;
    let total_count = list.total_count;

    let expired = match artifacts::plan(list, settings.max_artifacts) {
        Plan::WithinLimit => {
            tracing::info!(
                "{} artifacts present, limit is {}; nothing to delete",
                total_count,
                settings.max_artifacts
            );
            return Ok(Outcome::WithinLimit { total_count });
        }
        Plan::Delete(expired) => expired,
    };

    tracing::info!("Deleting {} expired artifacts", expired.len());

    let mut deleted = Vec::with_capacity(expired.len());
    for artifact in &expired {
        client.delete_artifact(artifact).await?;
        deleted.push(artifact.name.clone());
    }

    Ok(Outcome::Pruned {
        total_count,
        deleted,
    })
}
