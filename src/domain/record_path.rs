//! Naming of record files inside the records directory.

/// Where the record for a comment lives, and whether it already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTarget {
    /// Repository-relative path using `/` separators.
    pub path: String,
    pub exists: bool,
}

impl RecordTarget {
    /// Use the existing file if one was found, otherwise name a new one after the actor.
    pub fn resolve(
        records_dir: &str,
        existing_file_name: Option<String>,
        actor: &str,
        comment_id: &str,
    ) -> Self {
        match existing_file_name {
            Some(file_name) => Self { path: join(records_dir, &file_name), exists: true },
            None => Self {
                path: join(records_dir, &record_file_name(actor, comment_id)),
                exists: false,
            },
        }
    }
}

/// `<actor>-<comment id>.json`
pub fn record_file_name(actor: &str, comment_id: &str) -> String {
    format!("{actor}-{comment_id}.json")
}

/// File name suffix shared by every record of a comment, whoever authored it.
pub fn record_suffix(comment_id: &str) -> String {
    format!("-{comment_id}.json")
}

fn join(dir: &str, file_name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() { file_name.to_string() } else { format!("{dir}/{file_name}") }
}
