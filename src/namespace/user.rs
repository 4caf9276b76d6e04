//! Users and the user registry.

use std::collections::HashMap;

use tracing::info;

use super::folder::FolderDirectory;
use super::validation::{is_valid_name, normalize_name};
use super::NamespaceError;

/// A registered user.
#[derive(Debug, Clone, Default)]
pub struct User {
    /// Folded user name.
    pub name: String,
    /// Folders owned by the user.
    pub folders: FolderDirectory,
}

impl User {
    /// Create a user with no folders.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folders: FolderDirectory::new(),
        }
    }
}

/// All registered users, keyed by folded name.
///
/// Users are never removed.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// The name is folded before the uniqueness check, so `Alice` and
    /// `ALICE` collide. A name that is already taken is reported before
    /// its characters are checked.
    pub fn register(&mut self, name: &str) -> Result<(), NamespaceError> {
        let key = normalize_name(name);

        if self.users.contains_key(&key) {
            return Err(NamespaceError::UserAlreadyExists(key));
        }

        if !is_valid_name(name) {
            return Err(NamespaceError::InvalidName(name.to_string()));
        }

        info!(user = %key, "Registered user");
        self.users.insert(key.clone(), User::new(key));
        Ok(())
    }

    /// Case-insensitive membership test.
    pub fn exists(&self, name: &str) -> bool {
        self.users.contains_key(&normalize_name(name))
    }

    /// Look up a user by (unfolded) name.
    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.get(&normalize_name(name))
    }

    /// Look up a user by (unfolded) name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.get_mut(&normalize_name(name))
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
