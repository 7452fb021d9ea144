//! Shared testing harness for `intro-sync` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated checkout of the records repository plus the event environment.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    env: Vec<(String, String)>,
}

impl TestContext {
    /// Create a new isolated environment with a config file and an empty `members/`.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("members")).expect("Failed to create members directory");

        fs::write(
            work_dir.join(".intro-sync.toml"),
            r#"[repository]
name = "SaltyfishShop/Introduce-Yourself"

[discussion]
repository = "SaltyfishShop/big_discussion"
number = 5
"#,
        )
        .expect("Failed to write config");

        Self { root, work_dir, env: vec![("INTRO_TOKEN".into(), "test-token".into())] }
    }

    /// Path to the checkout used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Point both APIs at a mock server.
    pub(crate) fn with_api(mut self, server_url: &str) -> Self {
        self.env.push(("INTRO_SYNC_API_URL".into(), server_url.to_string()));
        self.env.push(("INTRO_SYNC_GRAPHQL_URL".into(), format!("{}/graphql", server_url)));
        self
    }

    /// Describe the triggering comment event.
    pub(crate) fn with_event(
        mut self,
        action: &str,
        comment_id: &str,
        content: &str,
        actor: &str,
    ) -> Self {
        self.env.push(("EVENT_NAME".into(), action.into()));
        self.env.push(("COMMENT_ID".into(), comment_id.into()));
        self.env.push(("COMMENT_CONTENT".into(), content.into()));
        self.env.push((
            "COMMENT_LINK".into(),
            format!(
                "https://github.com/SaltyfishShop/big_discussion/discussions/5#discussioncomment-{}",
                comment_id
            ),
        ));
        self.env.push(("GITHUB_ACTOR".into(), actor.into()));
        self
    }

    pub(crate) fn without_env(mut self, name: &str) -> Self {
        self.env.retain(|(key, _)| key != name);
        self
    }

    /// Place a record file in the local checkout.
    pub(crate) fn write_record(&self, file_name: &str, content: &str) {
        fs::write(self.work_dir.join("members").join(file_name), content)
            .expect("Failed to write record");
    }

    /// Build a command for the compiled binary with only the harness environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("intro-sync").expect("Failed to locate intro-sync binary");
        cmd.current_dir(&self.work_dir).env_clear().env("HOME", self.root.path());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}
