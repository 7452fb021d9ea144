use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RecordDirectory;

/// Records directory inside a local checkout of the records repository.
#[derive(Debug, Clone)]
pub struct FilesystemRecordDirectory {
    dir: PathBuf,
}

impl FilesystemRecordDirectory {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl RecordDirectory for FilesystemRecordDirectory {
    fn find_by_suffix(&self, suffix: &str) -> Result<Vec<String>, AppError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            // No directory yet means no records yet.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) if name.ends_with(suffix) => names.push(name.to_string()),
                _ => {}
            }
        }
        names.sort();
        Ok(names)
    }
}
