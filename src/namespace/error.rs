//! Error types for namespace operations.

use thiserror::Error;

/// Errors returned by the namespace engine.
///
/// Every variant carries the name as the caller supplied it, so messages
/// echo back what was typed. A failed operation never mutates the namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// The name contains characters outside `[A-Za-z0-9]`.
    #[error("The {0} contains invalid chars.")]
    InvalidName(String),

    /// A user with the same folded name is already registered.
    #[error("The {0} has already existed.")]
    UserAlreadyExists(String),

    /// The user already owns a folder with the same folded name.
    #[error("The {0} has already existed.")]
    FolderAlreadyExists(String),

    /// The folder already contains a file with the same folded name.
    #[error("The {file} has already existed in the {folder}.")]
    FileAlreadyExists {
        /// File name as supplied.
        file: String,
        /// Folder name as supplied.
        folder: String,
    },

    /// The user is not registered.
    #[error("The {0} doesn't exist.")]
    UserNotFound(String),

    /// The folder does not exist for the user.
    #[error("The {0} doesn't exist.")]
    FolderNotFound(String),

    /// The file does not exist in the folder.
    #[error("The {0} doesn't exist.")]
    FileNotFound(String),

    /// The listing sort flag is not recognized.
    #[error("Invalid sort flag: {0} (expected --sort-name or --sort-created)")]
    InvalidSortKey(String),

    /// The listing order flag is not recognized.
    #[error("Invalid sort order: {0} (expected asc or desc)")]
    InvalidOrder(String),
}
