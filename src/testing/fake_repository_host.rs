use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommitInfo, PullRequestInfo, RepositoryFile, RepositoryHost};

/// A commit recorded by the fake host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCommit {
    pub path: String,
    pub message: String,
    pub branch: String,
    /// `None` for deletions.
    pub content: Option<String>,
    /// Blob SHA the change was based on, for updates and deletions.
    pub prior_sha: Option<String>,
}

/// In-memory repository host. Files are shared by every branch.
pub struct FakeRepositoryHost {
    pub tip_sha: Mutex<Option<String>>,
    pub branches: Mutex<Vec<(String, String)>>,
    pub files: Mutex<BTreeMap<String, RepositoryFile>>,
    pub commits: Mutex<Vec<FakeCommit>>,
    pub pull_requests: Mutex<Vec<(String, String, String, String)>>,
    pub pull_request_failure: Mutex<Option<u16>>,
}

impl Default for FakeRepositoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRepositoryHost {
    pub fn new() -> Self {
        Self {
            tip_sha: Mutex::new(Some("base123".to_string())),
            branches: Mutex::new(Vec::new()),
            files: Mutex::new(BTreeMap::new()),
            commits: Mutex::new(Vec::new()),
            pull_requests: Mutex::new(Vec::new()),
            pull_request_failure: Mutex::new(None),
        }
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(
            path.to_string(),
            RepositoryFile {
                path: path.to_string(),
                sha: format!("blob-{}", path),
                content: content.to_string(),
            },
        );
        self
    }

    pub fn file_content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|file| file.content.clone())
    }

    fn require_branch(&self, branch: &str) -> Result<(), AppError> {
        if self.branches.lock().unwrap().iter().any(|(name, _)| name == branch) {
            Ok(())
        } else {
            Err(not_found(&format!("branch {}", branch)))
        }
    }

    fn record(
        &self,
        path: &str,
        message: &str,
        branch: &str,
        content: Option<&str>,
        prior_sha: Option<&str>,
    ) -> CommitInfo {
        let mut commits = self.commits.lock().unwrap();
        commits.push(FakeCommit {
            path: path.to_string(),
            message: message.to_string(),
            branch: branch.to_string(),
            content: content.map(str::to_string),
            prior_sha: prior_sha.map(str::to_string),
        });
        let sha = format!("commit{}", commits.len());
        CommitInfo { url: format!("https://example.com/commit/{}", sha), sha }
    }
}

fn not_found(what: &str) -> AppError {
    AppError::Api { service: "fake".into(), status: 404, details: format!("{} not found", what) }
}

impl RepositoryHost for FakeRepositoryHost {
    fn branch_tip_sha(&self, _branch: &str) -> Result<String, AppError> {
        self.tip_sha.lock().unwrap().clone().ok_or_else(|| not_found("base branch"))
    }

    fn create_branch(&self, branch: &str, sha: &str) -> Result<(), AppError> {
        let mut branches = self.branches.lock().unwrap();
        if branches.iter().any(|(name, _)| name == branch) {
            return Err(AppError::Api {
                service: "fake".into(),
                status: 422,
                details: "Reference already exists".into(),
            });
        }
        branches.push((branch.to_string(), sha.to_string()));
        Ok(())
    }

    fn get_file(&self, path: &str, branch: &str) -> Result<RepositoryFile, AppError> {
        self.require_branch(branch)?;
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn create_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        self.require_branch(branch)?;
        let commit = self.record(path, message, branch, Some(content), None);
        self.files.lock().unwrap().insert(
            path.to_string(),
            RepositoryFile {
                path: path.to_string(),
                sha: format!("blob-{}", commit.sha),
                content: content.to_string(),
            },
        );
        Ok(commit)
    }

    fn update_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        self.require_branch(branch)?;
        let mut files = self.files.lock().unwrap();
        let file = files.get_mut(path).ok_or_else(|| not_found(path))?;
        if file.sha != sha {
            return Err(AppError::Api {
                service: "fake".into(),
                status: 409,
                details: format!("{} does not match {}", sha, file.sha),
            });
        }
        let commit = self.record(path, message, branch, Some(content), Some(sha));
        file.sha = format!("blob-{}", commit.sha);
        file.content = content.to_string();
        Ok(commit)
    }

    fn delete_file(
        &self,
        path: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError> {
        self.require_branch(branch)?;
        let removed = self.files.lock().unwrap().remove(path).ok_or_else(|| not_found(path))?;
        if removed.sha != sha {
            return Err(AppError::Api {
                service: "fake".into(),
                status: 409,
                details: format!("{} does not match {}", sha, removed.sha),
            });
        }
        Ok(self.record(path, message, branch, None, Some(sha)))
    }

    fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequestInfo, AppError> {
        if let Some(status) = *self.pull_request_failure.lock().unwrap() {
            return Err(AppError::Api {
                service: "fake".into(),
                status,
                details: "Validation Failed".into(),
            });
        }
        let mut pulls = self.pull_requests.lock().unwrap();
        pulls.push((head.to_string(), base.to_string(), title.to_string(), body.to_string()));
        let number = pulls.len() as u64 + 41;
        Ok(PullRequestInfo {
            number,
            url: format!("https://example.com/pr/{}", number),
            head: head.to_string(),
            base: base.to_string(),
        })
    }
}
