//! Discussion board implementation on the GitHub GraphQL API.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::domain::{AppError, DiscussionLocation};
use crate::ports::{DiscussionBoard, DiscussionComment, DiscussionPage};
use crate::services::github_rest_http::{CLIENT_USER_AGENT, ensure_success_for};

const SERVICE: &str = "GitHub GraphQL";

const COMMENTS_QUERY: &str = r#"
query($owner: String!, $name: String!, $number: Int!, $first: Int!) {
  repository(owner: $owner, name: $name) {
    discussion(number: $number) {
      id
      comments(first: $first) {
        nodes {
          id
          url
        }
      }
    }
  }
}
"#;

const ADD_REPLY_MUTATION: &str = r#"
mutation($discussionId: ID!, $replyToId: ID!, $body: String!) {
  addDiscussionComment(input: {discussionId: $discussionId, replyToId: $replyToId, body: $body}) {
    comment {
      id
    }
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CommentsData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    discussion: Option<DiscussionNode>,
}

#[derive(Debug, Deserialize)]
struct DiscussionNode {
    id: String,
    comments: CommentConnection,
}

#[derive(Debug, Deserialize)]
struct CommentConnection {
    nodes: Vec<CommentNode>,
}

#[derive(Debug, Deserialize)]
struct CommentNode {
    id: String,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddReplyData {
    add_discussion_comment: AddReplyPayload,
}

#[derive(Debug, Deserialize)]
struct AddReplyPayload {
    comment: CommentId,
}

#[derive(Debug, Deserialize)]
struct CommentId {
    id: String,
}

/// GraphQL client bound to one discussion thread.
#[derive(Clone)]
pub struct HttpDiscussionBoard {
    token: String,
    graphql_url: Url,
    discussion: DiscussionLocation,
    client: Client,
}

impl std::fmt::Debug for HttpDiscussionBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDiscussionBoard")
            .field("graphql_url", &self.graphql_url)
            .field("discussion", &self.discussion)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpDiscussionBoard {
    pub fn new(
        token: String,
        graphql_url: Url,
        discussion: DiscussionLocation,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, graphql_url, discussion, client })
    }

    fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        what: &str,
    ) -> Result<T, AppError> {
        let response = self
            .client
            .post(self.graphql_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .json(&GraphQlRequest { query, variables })
            .send()
            .map_err(|e| AppError::Http { service: SERVICE.into(), details: e.to_string() })?;

        let body: GraphQlResponse<T> = ensure_success_for(SERVICE, response)?
            .json()
            .map_err(|e| AppError::parse_error(what, e))?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            let details = errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
            return Err(AppError::Api { service: SERVICE.into(), status: 200, details });
        }

        body.data.ok_or_else(|| AppError::parse_error(what, "response has no data"))
    }
}

impl DiscussionBoard for HttpDiscussionBoard {
    fn list_comments(&self, first: u32) -> Result<DiscussionPage, AppError> {
        let variables = json!({
            "owner": self.discussion.repository.owner,
            "name": self.discussion.repository.name,
            "number": self.discussion.number,
            "first": first,
        });
        let data: CommentsData = self.execute(COMMENTS_QUERY, variables, "discussion comments")?;

        let discussion = data
            .repository
            .and_then(|repository| repository.discussion)
            .ok_or_else(|| AppError::Api {
                service: SERVICE.into(),
                status: 404,
                details: format!(
                    "discussion #{} not found in {}",
                    self.discussion.number, self.discussion.repository
                ),
            })?;

        Ok(DiscussionPage {
            discussion_id: discussion.id,
            comments: discussion
                .comments
                .nodes
                .into_iter()
                .map(|node| DiscussionComment { id: node.id, url: node.url })
                .collect(),
        })
    }

    fn add_reply(
        &self,
        discussion_id: &str,
        reply_to_id: &str,
        body: &str,
    ) -> Result<String, AppError> {
        let variables = json!({
            "discussionId": discussion_id,
            "replyToId": reply_to_id,
            "body": body,
        });
        let data: AddReplyData =
            self.execute(ADD_REPLY_MUTATION, variables, "reply mutation result")?;
        Ok(data.add_discussion_comment.comment.id)
    }
}
