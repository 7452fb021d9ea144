use crate::domain::AppError;
use crate::ports::RecordDirectory;

/// Record directory listing a fixed set of file names.
#[derive(Debug, Clone, Default)]
pub struct FakeRecordDirectory {
    pub file_names: Vec<String>,
}

impl FakeRecordDirectory {
    pub fn with_files(names: &[&str]) -> Self {
        Self { file_names: names.iter().map(|name| name.to_string()).collect() }
    }
}

impl RecordDirectory for FakeRecordDirectory {
    fn find_by_suffix(&self, suffix: &str) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> =
            self.file_names.iter().filter(|name| name.ends_with(suffix)).cloned().collect();
        names.sort();
        Ok(names)
    }
}
