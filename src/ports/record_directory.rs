use crate::domain::AppError;

/// Port for looking up record files in the checked-out records directory.
pub trait RecordDirectory {
    /// File names (not paths) in the directory ending with `suffix`, sorted.
    fn find_by_suffix(&self, suffix: &str) -> Result<Vec<String>, AppError>;
}
