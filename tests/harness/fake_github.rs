//! Mock GitHub REST and GraphQL endpoints backed by mockito.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

pub(crate) const REPO_PATH: &str = "/repos/SaltyfishShop/Introduce-Yourself";
pub(crate) const PR_URL: &str = "https://github.com/SaltyfishShop/Introduce-Yourself/pull/42";

pub(crate) struct FakeGitHub {
    pub(crate) server: ServerGuard,
}

impl FakeGitHub {
    pub(crate) fn start() -> Self {
        Self { server: Server::new() }
    }

    pub(crate) fn url(&self) -> String {
        self.server.url()
    }

    /// `main` resolves and one branch is created from it.
    pub(crate) fn branch_setup(&mut self) -> Vec<Mock> {
        let resolve = self
            .server
            .mock("GET", format!("{}/git/ref/heads/main", REPO_PATH).as_str())
            .with_status(200)
            .with_body(r#"{"ref": "refs/heads/main", "object": {"sha": "base123"}}"#)
            .create();
        let create = self
            .server
            .mock("POST", format!("{}/git/refs", REPO_PATH).as_str())
            .match_body(Matcher::PartialJson(json!({"sha": "base123"})))
            .with_status(201)
            .with_body(r#"{"ref": "refs/heads/comment", "object": {"sha": "base123"}}"#)
            .expect(1)
            .create();
        vec![resolve, create]
    }

    pub(crate) fn pull_request(&mut self, hits: usize) -> Mock {
        self.server
            .mock("POST", format!("{}/pulls", REPO_PATH).as_str())
            .match_body(Matcher::PartialJson(json!({"base": "main"})))
            .expect(hits)
            .with_status(201)
            .with_body(
                json!({
                    "number": 42,
                    "html_url": PR_URL,
                    "head": {"ref": "comment-x"},
                    "base": {"ref": "main"}
                })
                .to_string(),
            )
            .create()
    }

    /// Discussion page listing the given comment ids.
    pub(crate) fn discussion_comments(&mut self, comment_ids: &[&str]) -> Mock {
        let nodes: Vec<_> = comment_ids
            .iter()
            .map(|id| {
                json!({
                    "id": format!("DC_{}", id),
                    "url": format!(
                        "https://github.com/SaltyfishShop/big_discussion/discussions/5#discussioncomment-{}",
                        id
                    )
                })
            })
            .collect();
        self.server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({"variables": {"number": 5, "first": 100}})))
            .with_status(200)
            .with_body(
                json!({"data": {"repository": {"discussion": {
                    "id": "D_kwDOIb6PHs4ASZ_A",
                    "comments": {"nodes": nodes}
                }}}})
                .to_string(),
            )
            .create()
    }

    /// Reply mutation whose body matches `body_pattern`.
    pub(crate) fn reply(&mut self, reply_to: &str, body_pattern: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({"variables": {
                    "discussionId": "D_kwDOIb6PHs4ASZ_A",
                    "replyToId": reply_to
                }})),
                Matcher::Regex(body_pattern.to_string()),
            ]))
            .expect(hits)
            .with_status(200)
            .with_body(r#"{"data": {"addDiscussionComment": {"comment": {"id": "DC_reply"}}}}"#)
            .create()
    }
}
