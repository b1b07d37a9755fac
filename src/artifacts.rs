use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A build artifact as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    /// API URL of the artifact; deletion is addressed here.
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactList {
    pub total_count: u64,
    pub artifacts: Vec<Artifact>,
}

/// What a run has to do with the listed artifacts.
#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    WithinLimit,
    /// Artifacts to delete, newest first.
    Delete(Vec<Artifact>),
}

/// Decide what to delete, keeping at most `keep` artifacts.
///
/// The decision is made on the reported `total_count`, not on the length of
/// the fetched page.
pub fn plan(list: ArtifactList, keep: usize) -> Plan {
    if list.total_count <= keep as u64 {
        return Plan::WithinLimit;
    }

    Plan::Delete(select_expired(list.artifacts, keep))
}

/// Remove the `keep` newest artifacts from the list, returning the remaining
/// older ones ordered newest first.
///
/// Ordering is by `updated_at` only. The sort is stable, so artifacts sharing a
/// timestamp stay in the order the API listed them.
pub fn select_expired(mut artifacts: Vec<Artifact>, keep: usize) -> Vec<Artifact> {
    artifacts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    if keep >= artifacts.len() {
        return Vec::new();
    }

    artifacts.split_off(keep)
}
