//! Repository host implementation on the GitHub REST API using reqwest.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, RepoSlug};
use crate::ports::{CommitInfo, PullRequestInfo, RepositoryFile, RepositoryHost};

const SERVICE: &str = "GitHub REST";
const GITHUB_JSON: &str = "application/vnd.github+json";
pub(crate) const CLIENT_USER_AGENT: &str = concat!("intro-sync/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the records repository.
#[derive(Clone)]
pub struct HttpRepositoryHost {
    token: String,
    api_url: Url,
    repository: RepoSlug,
    client: Client,
}

impl std::fmt::Debug for HttpRepositoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRepositoryHost")
            .field("api_url", &self.api_url)
            .field("repository", &self.repository)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpRepositoryHost {
    pub fn new(token: String, api_url: Url, repository: RepoSlug) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, api_url, repository, client })
    }

    /// Repository endpoint URL. Each segment is percent-encoded on its own.
    fn endpoint<'a, I>(&self, tail: I) -> Result<Url, AppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("API URL cannot be a base: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", self.repository.owner.as_str(), self.repository.name.as_str()])
            .extend(tail);
        Ok(url)
    }

    fn contents_endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.endpoint(std::iter::once("contents").chain(path.split('/')))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }

    fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, AppError> {
        let response = self
            .authorized(request)
            .send()
            .map_err(|e| AppError::Http { service: SERVICE.into(), details: e.to_string() })?;

        let response = ensure_success(response)?;
        response.json().map_err(|e| AppError::parse_error(what, e))
    }
}

pub(crate) fn ensure_success_for(service: &str, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let details = response.text().unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Api { service: service.to_string(), status: status.as_u16(), details })
}

fn ensure_success(response: Response) -> Result<Response, AppError> {
    ensure_success_for(SERVICE, response)
}

#[derive(Debug, Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Debug, Serialize)]
struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    reference: String,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    path: String,
    sha: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct DeleteContentRequest<'a> {
    message: &'a str,
    sha: &'a str,
    branch: &'a str,
}

#[derive(Debug, Deserialize)]
struct ContentCommitResponse {
    commit: CommitObject,
}

#[derive(Debug, Deserialize)]
struct CommitObject {
    sha: String,
    #[serde(default)]
    html_url: String,
}

#[derive(Debug, Serialize)]
struct CreatePullRequest<'a> {
    title: &'a str,
    body: &'a str,
    head: &'a str,
    base: &'a str,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    number: u64,
    html_url: String,
    head: PullRef,
    base: PullRef,
}

#[derive(Debug, Deserialize)]
struct PullRef {
    #[serde(rename = "ref")]
    name: String,
}

impl From<ContentCommitResponse> for CommitInfo {
    fn from(value: ContentCommitResponse) -> Self {
        CommitInfo { sha: value.commit.sha, url: value.commit.html_url }
    }
}

impl RepositoryHost for HttpRepositoryHost {
    fn branch_tip_sha(&self, branch: &str) -> Result<String, AppError> {
        let url = self.endpoint(["git", "ref", "heads"].into_iter().chain(branch.split('/')))?;
        let git_ref: GitRef = self.send(self.client.get(url), "branch reference")?;
        Ok(git_ref.object.sha)
    }

    fn create_branch(&self, branch: &str, sha: &str) -> Result<(), AppError> {
        let request = CreateRefRequest { reference: format!("refs/heads/{}", branch), sha };
        let url = self.endpoint(["git", "refs"])?;
        let _: serde_json::Value = self.send(self.client.post(url).json(&request), "created ref")?;
        Ok(())
    }

    fn get_file(&self, path: &str, branch: &str) -> Result<RepositoryFile, AppError> {
        let request = self.client.get(self.contents_endpoint(path)?).query(&[("ref", branch)]);
        let file: ContentResponse = self.send(request, "file contents")?;

        if file.encoding != "base64" {
            return Err(AppError::parse_error(
                "file contents",
                format!("unsupported encoding '{}' for {}", file.encoding, file.path),
            ));
        }
        let packed: String = file.content.split_whitespace().collect();
        let bytes = BASE64.decode(packed).map_err(|e| AppError::parse_error("file contents", e))?;
        let content =
            String::from_utf8(bytes).map_err(|e| AppError::parse_error("file contents", e))?;

        Ok(RepositoryFile { path: file.path, sha: file.sha, content })
    }

    fn create_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        let request =
            PutContentRequest { message, content: BASE64.encode(content), branch, sha: None };
        let response: ContentCommitResponse = self.send(
            self.client.put(self.contents_endpoint(path)?).json(&request),
            "file commit",
        )?;
        Ok(response.into())
    }

    fn update_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        let request =
            PutContentRequest { message, content: BASE64.encode(content), branch, sha: Some(sha) };
        let response: ContentCommitResponse = self.send(
            self.client.put(self.contents_endpoint(path)?).json(&request),
            "file commit",
        )?;
        Ok(response.into())
    }

    fn delete_file(
        &self,
        path: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        let request = DeleteContentRequest { message, sha, branch };
        let response: ContentCommitResponse = self.send(
            self.client.delete(self.contents_endpoint(path)?).json(&request),
            "file commit",
        )?;
        Ok(response.into())
    }

    fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequestInfo, AppError> {
        let request = CreatePullRequest { title, body, head, base };
        let pull: PullResponse =
            self.send(self.client.post(self.endpoint(["pulls"])?).json(&request), "pull request")?;

        Ok(PullRequestInfo {
            number: pull.number,
            url: pull.html_url,
            head: pull.head.name,
            base: pull.base.name,
        })
    }
}
