//! File entries and the per-folder file directory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::sort::{sort_entries, ListOrder, Listed};

/// A file entry. Only metadata is kept; there is no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Folded file name, also the key inside its folder.
    pub name: String,
    /// Free-form description (may be empty).
    pub description: String,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
}

impl File {
    /// Create a new file entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at,
        }
    }
}

impl Listed for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Files owned by one folder, keyed by folded name.
///
/// Keys passed in must already be folded.
#[derive(Debug, Clone, Default)]
pub struct FileDirectory {
    files: HashMap<String, File>,
}

impl FileDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a file with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.files.contains_key(key)
    }

    /// Get a file by key.
    pub fn get(&self, key: &str) -> Option<&File> {
        self.files.get(key)
    }

    /// Insert a file under its own name.
    ///
    /// Returns false and leaves the directory untouched if the key is taken.
    pub fn insert(&mut self, file: File) -> bool {
        if self.files.contains_key(&file.name) {
            return false;
        }
        self.files.insert(file.name.clone(), file);
        true
    }

    /// Remove a file by key.
    pub fn remove(&mut self, key: &str) -> Option<File> {
        self.files.remove(key)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if there are no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Snapshot of all files in the requested order.
    pub fn list(&self, order: ListOrder) -> Vec<File> {
        let mut files: Vec<File> = self.files.values().cloned().collect();
        sort_entries(&mut files, order);
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{SortKey, SortOrder};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut dir = FileDirectory::new();
        assert!(dir.is_empty());

        assert!(dir.insert(File::new("myfile", "My file description", at(10))));
        assert_eq!(dir.len(), 1);
        assert!(dir.contains("myfile"));

        let file = dir.get("myfile").unwrap();
        assert_eq!(file.description, "My file description");
        assert_eq!(file.created_at, at(10));
    }

    #[test]
    fn test_insert_duplicate_keeps_original() {
        let mut dir = FileDirectory::new();
        dir.insert(File::new("myfile", "first", at(10)));

        assert!(!dir.insert(File::new("myfile", "second", at(11))));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("myfile").unwrap().description, "first");
    }

    #[test]
    fn test_remove() {
        let mut dir = FileDirectory::new();
        dir.insert(File::new("myfile", "", at(10)));

        let removed = dir.remove("myfile").unwrap();
        assert_eq!(removed.name, "myfile");
        assert!(dir.is_empty());
        assert!(dir.remove("myfile").is_none());
    }

    #[test]
    fn test_list_sorted() {
        let mut dir = FileDirectory::new();
        dir.insert(File::new("myfile1", "", at(9)));
        dir.insert(File::new("myfile3", "", at(11)));
        dir.insert(File::new("myfile2", "", at(10)));

        let names: Vec<String> = dir
            .list(ListOrder::default())
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["myfile1", "myfile2", "myfile3"]);

        let names: Vec<String> = dir
            .list(ListOrder::new(SortKey::Created, SortOrder::Desc))
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["myfile3", "myfile2", "myfile1"]);
    }
}
