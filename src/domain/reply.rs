//! Bot replies posted under the originating comment.

use crate::domain::AppError;

/// Reply announcing the pull request that carries the change.
pub fn success_reply(forum_name: &str, pull_request_url: &str) -> String {
    format!(
        "[bot] 欢迎来到{forum_name}！Pipeline 已创建 [PR]({pull_request_url}) 来将你的自我介绍合入，请耐心等待 review~"
    )
}

/// Reply describing why the job stopped.
pub fn failure_reply(error: &AppError) -> String {
    format!("[bot] Pipeline 异常退出，详情：\n{}: {}", error.kind(), error)
}
