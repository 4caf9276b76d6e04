//! Command router: maps parsed commands onto namespace operations.

use tracing::debug;

use crate::datetime::{format_utc_datetime, DEFAULT_FORMAT, LOCAL_TIMEZONE};
use crate::namespace::{File, FolderSummary, Namespace};

use super::{Command, CommandError, Output};

/// Routes commands into a [`Namespace`] and formats the results.
///
/// The router owns the namespace for the lifetime of a session.
pub struct Router {
    namespace: Namespace,
    timezone: String,
    datetime_format: String,
}

impl Router {
    /// Create a router over the given namespace.
    ///
    /// Timestamps are shown on the local clock in `YYYY-MM-DD HH:MM:SS`.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            timezone: LOCAL_TIMEZONE.to_string(),
            datetime_format: DEFAULT_FORMAT.to_string(),
        }
    }

    /// Set the display timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the timestamp format for listings.
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Parse and execute one tokenized command line.
    pub fn execute(&mut self, args: &[String]) -> Result<Output, CommandError> {
        let command = Command::parse(args)?;
        self.dispatch(command)
    }

    /// Execute a parsed command.
    pub fn dispatch(&mut self, command: Command) -> Result<Output, CommandError> {
        debug!(command = %command, "Dispatching command");

        let output = match command {
            Command::Register { user } => {
                self.namespace.register(&user)?;
                Output::Message(format!("Add {user} successfully."))
            }
            Command::CreateFolder {
                user,
                folder,
                description,
            } => {
                self.namespace.create_folder(&user, &folder, &description)?;
                Output::Message(format!("Create {folder} successfully."))
            }
            Command::ListFolders { user, flags } => {
                let folders = self.namespace.list_folders_by_flags(&user, &flags)?;
                if folders.is_empty() {
                    Output::Warning(format!("The {user} doesn't have any folders."))
                } else {
                    Output::Rows(
                        folders
                            .iter()
                            .map(|folder| self.folder_row(folder, &user))
                            .collect(),
                    )
                }
            }
            Command::DeleteFolder { user, folder } => {
                self.namespace.delete_folder(&user, &folder)?;
                Output::Message(format!("Delete {folder} successfully."))
            }
            Command::RenameFolder {
                user,
                folder,
                new_name,
            } => {
                self.namespace.rename_folder(&user, &folder, &new_name)?;
                Output::Message(format!("Rename {folder} to {new_name} successfully."))
            }
            Command::CreateFile {
                user,
                folder,
                file,
                description,
            } => {
                self.namespace
                    .create_file(&user, &folder, &file, &description)?;
                Output::Message(format!("Create {file} in {user}/{folder} successfully."))
            }
            Command::ListFiles {
                user,
                folder,
                flags,
            } => {
                let files = self.namespace.list_files_by_flags(&user, &folder, &flags)?;
                if files.is_empty() {
                    Output::Warning("The folder is empty.".to_string())
                } else {
                    Output::Rows(
                        files
                            .iter()
                            .map(|file| self.file_row(file, &folder, &user))
                            .collect(),
                    )
                }
            }
            Command::DeleteFile { user, folder, file } => {
                self.namespace.delete_file(&user, &folder, &file)?;
                Output::Message(format!("Delete {file} in {user}/{folder} successfully."))
            }
        };

        Ok(output)
    }

    /// `name description created user`
    fn folder_row(&self, folder: &FolderSummary, user: &str) -> String {
        format!(
            "{} {} {} {}",
            folder.name,
            folder.description,
            self.format_time(&folder.created_at),
            user
        )
    }

    /// `name description created folder user`
    fn file_row(&self, file: &File, folder: &str, user: &str) -> String {
        format!(
            "{} {} {} {} {}",
            file.name,
            file.description,
            self.format_time(&file.created_at),
            folder,
            user
        )
    }

    fn format_time(&self, dt: &chrono::DateTime<chrono::Utc>) -> String {
        format_utc_datetime(dt, &self.timezone, &self.datetime_format)
    }
}
