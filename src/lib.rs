//! vfsys - in-memory virtual file system
//!
//! Users own folders and folders own files. Everything lives in memory for
//! the length of one shell session and is driven by line-oriented commands.

pub mod command;
pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod shell;

pub use command::{split_arguments, Command, CommandError, Output, Router};
pub use config::Config;
pub use error::{Result, VfsError};
pub use namespace::{
    Clock, File, Folder, FolderSummary, ListOrder, ManualClock, Namespace, NamespaceError,
    SortFlags, SortKey, SortOrder, SystemClock,
};
pub use shell::Shell;
