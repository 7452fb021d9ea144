use crate::domain::AppError;

/// A file read from a branch, with the blob SHA needed to change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFile {
    pub path: String,
    pub sha: String,
    pub content: String,
}

/// Commit produced by a file change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub url: String,
    pub head: String,
    pub base: String,
}

/// Port for the version-control hosting API of the records repository.
pub trait RepositoryHost {
    /// SHA of the commit at the tip of `branch`.
    fn branch_tip_sha(&self, branch: &str) -> Result<String, AppError>;

    /// Create `branch` pointing at `sha`. Fails if the branch exists.
    fn create_branch(&self, branch: &str, sha: &str) -> Result<(), AppError>;

    /// Read a file as it is on `branch`.
    fn get_file(&self, path: &str, branch: &str) -> Result<RepositoryFile, AppError>;

    fn create_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError>;

    /// Replace a file; `sha` is the blob being replaced.
    fn update_file(
        &self,
        path: &str,
        message: &str,
        content: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError>;

    fn delete_file(
        &self,
        path: &str,
        message: &str,
        sha: &str,
        branch: &str,
    ) -> Result<CommitInfo, AppError>;

    fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequestInfo, AppError>;
}
