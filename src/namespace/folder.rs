//! Folder entries and the per-user folder directory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::file::FileDirectory;
use super::sort::{sort_entries, ListOrder, Listed};

/// A folder entry owned by one user.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Folded folder name, also the key inside the user's directory.
    pub name: String,
    /// Free-form description (may be empty).
    pub description: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Files in this folder.
    pub files: FileDirectory,
}

impl Folder {
    /// Create a new, empty folder.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at,
            files: FileDirectory::new(),
        }
    }

    /// Number of files in the folder.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Listed for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Summary of a folder as returned by listings.
///
/// Listings hand out summaries so callers never hold the folder's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    /// Folded folder name.
    pub name: String,
    /// Folder description.
    pub description: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Folder> for FolderSummary {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            description: folder.description.clone(),
            created_at: folder.created_at,
        }
    }
}

impl Listed for FolderSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Folders owned by one user, keyed by folded name.
///
/// Keys passed in must already be folded.
#[derive(Debug, Clone, Default)]
pub struct FolderDirectory {
    folders: HashMap<String, Folder>,
}

impl FolderDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a folder with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.folders.contains_key(key)
    }

    /// Get a folder by key.
    pub fn get(&self, key: &str) -> Option<&Folder> {
        self.folders.get(key)
    }

    /// Get a folder by key for modification.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Folder> {
        self.folders.get_mut(key)
    }

    /// Insert a folder under its own name.
    ///
    /// Returns false and leaves the directory untouched if the key is taken.
    pub fn insert(&mut self, folder: Folder) -> bool {
        if self.folders.contains_key(&folder.name) {
            return false;
        }
        self.folders.insert(folder.name.clone(), folder);
        true
    }

    /// Remove a folder and everything in it.
    pub fn remove(&mut self, key: &str) -> Option<Folder> {
        self.folders.remove(key)
    }

    /// Re-key a folder, keeping its description, timestamp and files.
    ///
    /// Returns false without changes if `from` is missing or `to` is taken.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        if self.folders.contains_key(to) {
            return false;
        }
        match self.folders.remove(from) {
            Some(mut folder) => {
                folder.name = to.to_string();
                self.folders.insert(to.to_string(), folder);
                true
            }
            None => false,
        }
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if there are no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Snapshot of all folders in the requested order.
    pub fn list(&self, order: ListOrder) -> Vec<FolderSummary> {
        let mut folders: Vec<FolderSummary> =
            self.folders.values().map(FolderSummary::from).collect();
        sort_entries(&mut folders, order);
        folders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{File, SortKey, SortOrder};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_insert_and_contains() {
        let mut dir = FolderDirectory::new();
        assert!(dir.insert(Folder::new("myfolder", "My folder description", at(10))));
        assert!(dir.contains("myfolder"));
        assert!(!dir.contains("other"));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut dir = FolderDirectory::new();
        dir.insert(Folder::new("myfolder", "first", at(10)));
        assert!(!dir.insert(Folder::new("myfolder", "second", at(11))));
        assert_eq!(dir.get("myfolder").unwrap().description, "first");
    }

    #[test]
    fn test_remove_drops_files() {
        let mut dir = FolderDirectory::new();
        let mut folder = Folder::new("myfolder", "", at(10));
        folder.files.insert(File::new("myfile", "", at(10)));
        dir.insert(folder);

        let removed = dir.remove("myfolder").unwrap();
        assert_eq!(removed.file_count(), 1);
        assert!(dir.is_empty());
    }

    #[test]
    fn test_rename_preserves_contents() {
        let mut dir = FolderDirectory::new();
        let mut folder = Folder::new("old", "keep me", at(8));
        folder.files.insert(File::new("myfile", "inside", at(9)));
        dir.insert(folder);

        assert!(dir.rename("old", "new"));
        assert!(!dir.contains("old"));

        let folder = dir.get("new").unwrap();
        assert_eq!(folder.name, "new");
        assert_eq!(folder.description, "keep me");
        assert_eq!(folder.created_at, at(8));
        assert!(folder.files.contains("myfile"));
    }

    #[test]
    fn test_rename_onto_existing_is_refused() {
        let mut dir = FolderDirectory::new();
        dir.insert(Folder::new("a", "first", at(8)));
        dir.insert(Folder::new("b", "second", at(9)));

        assert!(!dir.rename("a", "b"));
        assert_eq!(dir.get("a").unwrap().description, "first");
        assert_eq!(dir.get("b").unwrap().description, "second");
    }

    #[test]
    fn test_rename_missing() {
        let mut dir = FolderDirectory::new();
        assert!(!dir.rename("ghost", "new"));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_list_summaries() {
        let mut dir = FolderDirectory::new();
        dir.insert(Folder::new("b", "", at(9)));
        dir.insert(Folder::new("a", "", at(11)));
        dir.get_mut("a")
            .unwrap()
            .files
            .insert(File::new("x", "", at(12)));

        let listed = dir.list(ListOrder::new(SortKey::Created, SortOrder::Asc));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "b");
        assert_eq!(listed[1].name, "a");
    }
}
