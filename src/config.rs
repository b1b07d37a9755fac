use std::fmt;

use url::Url;

use crate::error::ConfigError;
use crate::parsing::{parse_max_artifacts, parse_repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of artifacts requested from the listing endpoint. Only one page is fetched.
pub const PER_PAGE: u32 = 100;

/// Raw run inputs as supplied by the automation environment.
#[derive(Clone, Default)]
pub struct Inputs {
    pub github_token: Option<String>,
    pub max_artifacts: Option<String>,
    pub repository: Option<String>,
    pub api_url: Option<String>,
}

impl fmt::Debug for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inputs")
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("max_artifacts", &self.max_artifacts)
            .field("repository", &self.repository)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Validated settings for a single run.
#[derive(Clone)]
pub struct Settings {
    pub token: String,
    pub max_artifacts: usize,
    pub repository: Repository,
    pub api_url: Url,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"***")
            .field("max_artifacts", &self.max_artifacts)
            .field("repository", &self.repository)
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

impl Settings {
    /// Validate raw inputs. The threshold is checked first so a bad
    /// `max-artifacts` is always the reported problem.
    pub fn from_inputs(inputs: Inputs) -> Result<Self, ConfigError> {
        let max_artifacts = parse_max_artifacts(inputs.max_artifacts.as_deref().unwrap_or(""))?;

        let token = inputs
            .github_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingInput("github-token"))?;

        let repository = inputs
            .repository
            .filter(|r| !r.trim().is_empty())
            .ok_or(ConfigError::MissingInput("repository"))?;
        let (owner, name) = parse_repository(&repository)
            .ok_or_else(|| ConfigError::InvalidRepository(repository.clone()))?;
        let repository = Repository {
            owner: owner.to_string(),
            name: name.to_string(),
        };

        let raw_url = inputs
            .api_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: raw_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Settings {
            token: token.trim().to_string(),
            max_artifacts,
            repository,
            api_url,
        })
    }

    /// Listing endpoint for the configured repository, without the query string.
    pub fn list_artifacts_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/artifacts",
            self.api_url.as_str().trim_end_matches('/'),
            self.repository.owner,
            self.repository.name
        )
    }
}
