//! Formatting rules for self-introduction comments.
//!
//! An introduction is rendered as a single level-3 section, so the comment
//! must open with `###`, must not start any other section of level 1-3, and
//! must not contain a page break.

use thiserror::Error;

const LEADING_HEADING: &str = "###";
const PAGE_BREAK: &str = "\n---";

/// A violated formatting rule. The messages are shown to the comment author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatViolation {
    #[error("内容应当以三级标题 `###` 开头。请修改你的评论。")]
    MissingLeadingHeading,

    #[error("内容中不应包含三级和三级以上的标题。请修改你的评论。")]
    NestedHeading,

    #[error("内容中不应包含分页符。请修改你的评论。")]
    PageBreak,
}

/// Check comment content against the rules, stopping at the first violation.
pub fn validate_content(content: &str) -> Result<(), FormatViolation> {
    if !starts_with_level_three_heading(content) {
        return Err(FormatViolation::MissingLeadingHeading);
    }
    if contains_nested_heading(&content[LEADING_HEADING.len()..]) {
        return Err(FormatViolation::NestedHeading);
    }
    if content.contains(PAGE_BREAK) {
        return Err(FormatViolation::PageBreak);
    }
    Ok(())
}

fn starts_with_level_three_heading(content: &str) -> bool {
    content
        .strip_prefix(LEADING_HEADING)
        .is_some_and(|rest| !rest.starts_with('#'))
}

/// A line break followed by one to three `#` and any whitespace opens a heading.
///
/// The whitespace may itself be the next line break, so a bare `##` line counts
/// unless it ends the content.
fn contains_nested_heading(body: &str) -> bool {
    body.match_indices('\n').any(|(at, _)| {
        let rest = &body[at + 1..];
        let marks = rest.chars().take_while(|c| *c == '#').count();
        (1..=3).contains(&marks) && rest[marks..].chars().next().is_some_and(char::is_whitespace)
    })
}
