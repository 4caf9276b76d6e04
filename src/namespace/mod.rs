//! Namespace engine for vfsys.
//!
//! This module holds the user → folder → file hierarchy in memory and
//! enforces its rules:
//! - Names are folded to lowercase on every write and lookup
//! - Names are unique among siblings at each level
//! - Deleting a folder deletes its files
//! - Every check runs before any write, so a failed call changes nothing

mod clock;
mod error;
mod file;
mod folder;
mod sort;
mod user;
mod validation;

use tracing::{debug, info};

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::NamespaceError;
pub use file::{File, FileDirectory};
pub use folder::{Folder, FolderDirectory, FolderSummary};
pub use sort::{sort_entries, ListOrder, Listed, SortFlags, SortKey, SortOrder};
pub use user::{User, UserRegistry};
pub use validation::{is_valid_name, normalize_name};

/// The in-memory namespace.
///
/// Owned by whoever drives it; there is no process-wide instance.
pub struct Namespace {
    users: UserRegistry,
    clock: Box<dyn Clock>,
}

impl Namespace {
    /// Create an empty namespace stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty namespace with a custom time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            users: UserRegistry::new(),
            clock: Box::new(clock),
        }
    }

    /// Read-only access to the user registry.
    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    // ───────────────────────────── users ─────────────────────────────

    /// Register a new user.
    pub fn register(&mut self, user: &str) -> Result<(), NamespaceError> {
        self.users.register(user)
    }

    /// Check whether a user is registered (any casing).
    pub fn user_exists(&self, user: &str) -> bool {
        self.users.exists(user)
    }

    // ──────────────────────────── folders ────────────────────────────

    /// Create a folder for a user.
    ///
    /// Checks run in order: user exists, name is valid, name is free.
    pub fn create_folder(
        &mut self,
        user: &str,
        folder: &str,
        description: &str,
    ) -> Result<(), NamespaceError> {
        let now = self.clock.now();
        let owner = self.user_mut(user)?;

        if !is_valid_name(folder) {
            return Err(NamespaceError::InvalidName(folder.to_string()));
        }

        let key = normalize_name(folder);
        if !owner.folders.insert(Folder::new(&key, description, now)) {
            return Err(NamespaceError::FolderAlreadyExists(folder.to_string()));
        }

        info!(user = %owner.name, folder = %key, "Created folder");
        Ok(())
    }

    /// List a user's folders in the requested order.
    ///
    /// A user without folders yields an empty list.
    pub fn list_folders(
        &self,
        user: &str,
        order: ListOrder,
    ) -> Result<Vec<FolderSummary>, NamespaceError> {
        let owner = self.user(user)?;
        let folders = owner.folders.list(order);
        debug!(
            user = %owner.name,
            count = folders.len(),
            sort = %order.key,
            order = %order.order,
            "Listed folders"
        );
        Ok(folders)
    }

    /// List a user's folders using flags as typed.
    ///
    /// The user is checked first. An empty directory lists as empty
    /// whatever the flags say; otherwise bad flags are rejected.
    pub fn list_folders_by_flags(
        &self,
        user: &str,
        flags: &SortFlags,
    ) -> Result<Vec<FolderSummary>, NamespaceError> {
        if self.user(user)?.folders.is_empty() {
            return Ok(Vec::new());
        }
        self.list_folders(user, flags.resolve()?)
    }

    /// Delete a folder and all of its files.
    pub fn delete_folder(&mut self, user: &str, folder: &str) -> Result<(), NamespaceError> {
        let owner = self.user_mut(user)?;
        let removed = owner
            .folders
            .remove(&normalize_name(folder))
            .ok_or_else(|| NamespaceError::FolderNotFound(folder.to_string()))?;

        info!(
            user = %owner.name,
            folder = %removed.name,
            files = removed.file_count(),
            "Deleted folder"
        );
        Ok(())
    }

    /// Rename a folder.
    ///
    /// Description, creation time and files carry over. Checks run in
    /// order: user exists, folder exists, new name is valid, new name is
    /// free. A rename that only changes case collides with itself.
    pub fn rename_folder(
        &mut self,
        user: &str,
        folder: &str,
        new_name: &str,
    ) -> Result<(), NamespaceError> {
        let owner = self.user_mut(user)?;
        let from = normalize_name(folder);

        if !owner.folders.contains(&from) {
            return Err(NamespaceError::FolderNotFound(folder.to_string()));
        }

        if !is_valid_name(new_name) {
            return Err(NamespaceError::InvalidName(new_name.to_string()));
        }

        let to = normalize_name(new_name);
        if !owner.folders.rename(&from, &to) {
            return Err(NamespaceError::FolderAlreadyExists(new_name.to_string()));
        }

        info!(user = %owner.name, from = %from, to = %to, "Renamed folder");
        Ok(())
    }

    /// Check whether a user owns a folder (any casing).
    pub fn folder_exists(&self, user: &str, folder: &str) -> bool {
        self.folder(user, folder).is_some()
    }

    /// Look up a folder.
    pub fn folder(&self, user: &str, folder: &str) -> Option<&Folder> {
        self.users
            .get(user)
            .and_then(|owner| owner.folders.get(&normalize_name(folder)))
    }

    // ───────────────────────────── files ─────────────────────────────

    /// Create a file in a user's folder.
    ///
    /// Checks run in order: user exists, folder exists, name is valid,
    /// name is free within the folder.
    pub fn create_file(
        &mut self,
        user: &str,
        folder: &str,
        file: &str,
        description: &str,
    ) -> Result<(), NamespaceError> {
        let now = self.clock.now();
        let parent = self.folder_mut(user, folder)?;

        if !is_valid_name(file) {
            return Err(NamespaceError::InvalidName(file.to_string()));
        }

        let key = normalize_name(file);
        if !parent.files.insert(File::new(&key, description, now)) {
            return Err(NamespaceError::FileAlreadyExists {
                file: file.to_string(),
                folder: folder.to_string(),
            });
        }

        info!(folder = %parent.name, file = %key, "Created file");
        Ok(())
    }

    /// List the files of a folder in the requested order.
    ///
    /// An empty folder yields an empty list.
    pub fn list_files(
        &self,
        user: &str,
        folder: &str,
        order: ListOrder,
    ) -> Result<Vec<File>, NamespaceError> {
        let owner = self.user(user)?;
        let parent = owner
            .folders
            .get(&normalize_name(folder))
            .ok_or_else(|| NamespaceError::FolderNotFound(folder.to_string()))?;

        let files = parent.files.list(order);
        debug!(
            user = %owner.name,
            folder = %parent.name,
            count = files.len(),
            sort = %order.key,
            order = %order.order,
            "Listed files"
        );
        Ok(files)
    }

    /// List the files of a folder using flags as typed.
    ///
    /// Checks run user, then folder, then flags.
    pub fn list_files_by_flags(
        &self,
        user: &str,
        folder: &str,
        flags: &SortFlags,
    ) -> Result<Vec<File>, NamespaceError> {
        let parent = self
            .user(user)?
            .folders
            .get(&normalize_name(folder))
            .ok_or_else(|| NamespaceError::FolderNotFound(folder.to_string()))?;
        if parent.files.is_empty() {
            return Ok(Vec::new());
        }
        self.list_files(user, folder, flags.resolve()?)
    }

    /// Delete a file from a folder.
    pub fn delete_file(
        &mut self,
        user: &str,
        folder: &str,
        file: &str,
    ) -> Result<(), NamespaceError> {
        let parent = self.folder_mut(user, folder)?;
        let removed = parent
            .files
            .remove(&normalize_name(file))
            .ok_or_else(|| NamespaceError::FileNotFound(file.to_string()))?;

        info!(folder = %parent.name, file = %removed.name, "Deleted file");
        Ok(())
    }

    /// Check whether a file exists (any casing).
    pub fn file_exists(&self, user: &str, folder: &str, file: &str) -> bool {
        self.folder(user, folder)
            .is_some_and(|parent| parent.files.contains(&normalize_name(file)))
    }

    // ──────────────────────────── lookups ────────────────────────────

    fn user(&self, user: &str) -> Result<&User, NamespaceError> {
        self.users
            .get(user)
            .ok_or_else(|| NamespaceError::UserNotFound(user.to_string()))
    }

    fn user_mut(&mut self, user: &str) -> Result<&mut User, NamespaceError> {
        self.users
            .get_mut(user)
            .ok_or_else(|| NamespaceError::UserNotFound(user.to_string()))
    }

    fn folder_mut(&mut self, user: &str, folder: &str) -> Result<&mut Folder, NamespaceError> {
        self.user_mut(user)?
            .folders
            .get_mut(&normalize_name(folder))
            .ok_or_else(|| NamespaceError::FolderNotFound(folder.to_string()))
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
