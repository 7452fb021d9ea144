//! Job configuration models loaded from `.intro-sync.toml`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Optional on-disk configuration. Every section falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub discussion: DiscussionConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.repository.validate()?;
        self.discussion.validate()?;
        Ok(())
    }
}

/// Repository that stores the record files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// `owner/name`; `GITHUB_REPOSITORY` overrides it.
    #[serde(default)]
    pub name: Option<String>,
    /// Branch that change requests target.
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
    /// Directory holding one JSON record per comment.
    #[serde(default = "default_records_dir")]
    pub records_dir: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { name: None, base_branch: default_base_branch(), records_dir: default_records_dir() }
    }
}

impl RepositoryConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.base_branch.trim().is_empty() {
            return Err(AppError::config_error("repository.base_branch must not be empty"));
        }
        if self.records_dir.trim().is_empty() {
            return Err(AppError::config_error("repository.records_dir must not be empty"));
        }
        Ok(())
    }
}

/// Discussion thread where introductions are posted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscussionConfig {
    /// `owner/name` of the repository hosting the discussion.
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
    /// Node id of the discussion; when absent the id returned by the comment query is used.
    #[serde(default)]
    pub id: Option<String>,
    /// Number of comments fetched when looking up the reply target.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Forum name used in the welcome reply.
    #[serde(default = "default_forum_name")]
    pub forum_name: String,
}

impl Default for DiscussionConfig {
    fn default() -> Self {
        Self {
            repository: None,
            number: None,
            id: None,
            page_size: default_page_size(),
            forum_name: default_forum_name(),
        }
    }
}

impl DiscussionConfig {
    fn validate(&self) -> Result<(), AppError> {
        // GitHub GraphQL connections accept at most 100 nodes per page.
        if !(1..=100).contains(&self.page_size) {
            return Err(AppError::config_error("discussion.page_size must be between 1 and 100"));
        }
        Ok(())
    }
}

/// Hosted API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_rest_url")]
    pub rest_url: Url,
    #[serde(default = "default_graphql_url")]
    pub graphql_url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { rest_url: default_rest_url(), graphql_url: default_graphql_url() }
    }
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_records_dir() -> String {
    "members".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_forum_name() -> String {
    "咸鱼肆".to_string()
}

fn default_rest_url() -> Url {
    Url::parse("https://api.github.com").expect("Default REST URL must be valid")
}

fn default_graphql_url() -> Url {
    Url::parse("https://api.github.com/graphql").expect("Default GraphQL URL must be valid")
}

/// `owner/name` pair identifying a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self { owner: owner.to_string(), name: name.to_string() })
            }
            _ => Err(AppError::config_error(format!(
                "Invalid repository '{value}': expected 'owner/name'"
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Where the discussion thread lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionLocation {
    pub repository: RepoSlug,
    pub number: u64,
    pub id: Option<String>,
    pub page_size: u32,
}

/// Fully resolved settings for one job run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repository: RepoSlug,
    pub base_branch: String,
    pub records_dir: String,
    pub discussion: DiscussionLocation,
    pub forum_name: String,
    pub rest_url: Url,
    pub graphql_url: Url,
}
