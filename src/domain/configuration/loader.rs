//! Settings and event loading from the config file and the process environment.
//!
//! Environment access goes through a lookup function so the same code serves
//! `std::env::var` in production and a map in tests.

use url::Url;

use crate::domain::configuration::sync_config::{DiscussionLocation, RepoSlug, Settings, SyncConfig};
use crate::domain::{AppError, CommentEvent, EventAction};

pub const TOKEN_VAR: &str = "INTRO_TOKEN";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const DISCUSSION_REPOSITORY_VAR: &str = "DISCUSSION_REPOSITORY";
pub const DISCUSSION_NUMBER_VAR: &str = "DISCUSSION_NUMBER";
pub const DISCUSSION_ID_VAR: &str = "DISCUSSION_ID";
pub const REST_URL_VAR: &str = "INTRO_SYNC_API_URL";
pub const GRAPHQL_URL_VAR: &str = "INTRO_SYNC_GRAPHQL_URL";

pub const ACTION_VAR: &str = "EVENT_NAME";
pub const COMMENT_ID_VAR: &str = "COMMENT_ID";
pub const CONTENT_VAR: &str = "COMMENT_CONTENT";
pub const LINK_VAR: &str = "COMMENT_LINK";
pub const ACTOR_VAR: &str = "GITHUB_ACTOR";

/// Parse and validate `.intro-sync.toml` content.
pub fn parse_config_content(content: &str) -> Result<SyncConfig, AppError> {
    let config: SyncConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Merge file configuration with environment overrides.
pub fn resolve_settings<F>(config: SyncConfig, env: F) -> Result<Settings, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let repository = non_empty(&env, REPOSITORY_VAR)
        .or(config.repository.name)
        .ok_or_else(|| missing("repository", REPOSITORY_VAR, "repository.name"))?
        .parse::<RepoSlug>()?;

    let discussion_repository = non_empty(&env, DISCUSSION_REPOSITORY_VAR)
        .or(config.discussion.repository)
        .ok_or_else(|| {
            missing("discussion repository", DISCUSSION_REPOSITORY_VAR, "discussion.repository")
        })?
        .parse::<RepoSlug>()?;

    let number = match non_empty(&env, DISCUSSION_NUMBER_VAR) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            AppError::config_error(format!("{DISCUSSION_NUMBER_VAR} must be a number, got '{raw}'"))
        })?,
        None => config.discussion.number.ok_or_else(|| {
            missing("discussion number", DISCUSSION_NUMBER_VAR, "discussion.number")
        })?,
    };

    let rest_url = url_override(&env, REST_URL_VAR)?.unwrap_or(config.api.rest_url);
    let graphql_url = url_override(&env, GRAPHQL_URL_VAR)?.unwrap_or(config.api.graphql_url);

    Ok(Settings {
        repository,
        base_branch: config.repository.base_branch,
        records_dir: config.repository.records_dir,
        discussion: DiscussionLocation {
            repository: discussion_repository,
            number,
            id: non_empty(&env, DISCUSSION_ID_VAR).or(config.discussion.id),
            page_size: config.discussion.page_size,
        },
        forum_name: config.discussion.forum_name,
        rest_url,
        graphql_url,
    })
}

/// API token used for both REST and GraphQL calls.
pub fn load_token<F>(env: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(&env, TOKEN_VAR).ok_or_else(|| {
        AppError::config_error(format!("{TOKEN_VAR} environment variable not set"))
    })
}

/// Read the triggering comment event. Content may legitimately be empty.
pub fn load_event<F>(env: F) -> Result<CommentEvent, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str| {
        env(name).ok_or_else(|| {
            AppError::config_error(format!("{name} environment variable not set"))
        })
    };

    let comment_id = required(COMMENT_ID_VAR)?.trim().to_string();
    if comment_id.is_empty() {
        return Err(AppError::config_error(format!("{COMMENT_ID_VAR} must not be empty")));
    }

    Ok(CommentEvent {
        action: EventAction::parse(required(ACTION_VAR)?.trim()),
        comment_id,
        content: required(CONTENT_VAR)?,
        link: required(LINK_VAR)?,
        actor: required(ACTOR_VAR)?.trim().to_string(),
    })
}

fn non_empty<F>(env: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(name).filter(|value| !value.trim().is_empty())
}

fn url_override<F>(env: &F, name: &str) -> Result<Option<Url>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env, name)
        .map(|raw| {
            Url::parse(raw.trim()).map_err(|e| {
                AppError::config_error(format!("{name} is not a valid URL ('{raw}'): {e}"))
            })
        })
        .transpose()
}

fn missing(what: &str, var: &str, key: &str) -> AppError {
    AppError::config_error(format!(
        "No {what} configured: set {var} or `{key}` in .intro-sync.toml"
    ))
}
