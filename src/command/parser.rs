//! Command line tokenizer and command parser.
//!
//! Lines are split on whitespace; a double-quoted run becomes a single
//! argument so descriptions can contain spaces:
//!
//! ```text
//! create-folder alice notes "meeting notes"
//! ```

use std::fmt;

use crate::namespace::SortFlags;

use super::CommandError;

/// Split a command line into arguments.
///
/// Double quotes group words and are stripped. `""` yields an empty
/// argument. An unterminated quote extends to the end of the line.
pub fn split_arguments(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}

/// Command information for usage and help display.
pub struct CommandInfo {
    /// Command keyword.
    pub name: &'static str,
    /// Command syntax.
    pub syntax: &'static str,
    /// Minimum number of arguments after the keyword.
    pub min_args: usize,
}

/// All commands the shell understands.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "register",
        syntax: "register [username]",
        min_args: 1,
    },
    CommandInfo {
        name: "create-folder",
        syntax: "create-folder [username] [foldername] [description]?",
        min_args: 2,
    },
    CommandInfo {
        name: "list-folders",
        syntax: "list-folders [username] [--sort-name|--sort-created] [asc|desc]",
        min_args: 1,
    },
    CommandInfo {
        name: "delete-folder",
        syntax: "delete-folder [username] [foldername]",
        min_args: 2,
    },
    CommandInfo {
        name: "rename-folder",
        syntax: "rename-folder [username] [foldername] [new-folder-name]",
        min_args: 3,
    },
    CommandInfo {
        name: "create-file",
        syntax: "create-file [username] [foldername] [filename] [description]?",
        min_args: 3,
    },
    CommandInfo {
        name: "list-files",
        syntax: "list-files [username] [foldername] [--sort-name|--sort-created] [asc|desc]",
        min_args: 2,
    },
    CommandInfo {
        name: "delete-file",
        syntax: "delete-file [username] [foldername] [filename]",
        min_args: 3,
    },
];

/// Look up a command by keyword.
pub fn command_info(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|info| info.name == name)
}

/// A parsed command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a user.
    Register { user: String },
    /// Create a folder for a user.
    CreateFolder {
        user: String,
        folder: String,
        description: String,
    },
    /// List a user's folders.
    ListFolders { user: String, flags: SortFlags },
    /// Delete a folder and its files.
    DeleteFolder { user: String, folder: String },
    /// Rename a folder.
    RenameFolder {
        user: String,
        folder: String,
        new_name: String,
    },
    /// Create a file in a folder.
    CreateFile {
        user: String,
        folder: String,
        file: String,
        description: String,
    },
    /// List the files of a folder.
    ListFiles {
        user: String,
        folder: String,
        flags: SortFlags,
    },
    /// Delete a file.
    DeleteFile {
        user: String,
        folder: String,
        file: String,
    },
}

impl Command {
    /// Parse a tokenized command line.
    ///
    /// The first element is the keyword. Only arity is checked here; listing
    /// flags are kept as typed. Extra trailing arguments are ignored.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (keyword, rest) = match args.split_first() {
            Some((keyword, rest)) => (keyword.as_str(), rest),
            None => return Err(CommandError::UnrecognizedCommand(String::new())),
        };

        let info = command_info(keyword)
            .ok_or_else(|| CommandError::UnrecognizedCommand(keyword.to_string()))?;
        if rest.len() < info.min_args {
            return Err(CommandError::InsufficientArguments { usage: info.syntax });
        }

        let arg = |i: usize| rest[i].clone();
        let optional = |i: usize| rest.get(i).map(String::as_str);

        let command = match keyword {
            "register" => Command::Register { user: arg(0) },
            "create-folder" => Command::CreateFolder {
                user: arg(0),
                folder: arg(1),
                description: optional(2).unwrap_or_default().to_string(),
            },
            "list-folders" => Command::ListFolders {
                user: arg(0),
                flags: SortFlags::new(optional(1), optional(2)),
            },
            "delete-folder" => Command::DeleteFolder {
                user: arg(0),
                folder: arg(1),
            },
            "rename-folder" => Command::RenameFolder {
                user: arg(0),
                folder: arg(1),
                new_name: arg(2),
            },
            "create-file" => Command::CreateFile {
                user: arg(0),
                folder: arg(1),
                file: arg(2),
                description: optional(3).unwrap_or_default().to_string(),
            },
            "list-files" => Command::ListFiles {
                user: arg(0),
                folder: arg(1),
                flags: SortFlags::new(optional(2), optional(3)),
            },
            "delete-file" => Command::DeleteFile {
                user: arg(0),
                folder: arg(1),
                file: arg(2),
            },
            other => return Err(CommandError::UnrecognizedCommand(other.to_string())),
        };

        Ok(command)
    }

    /// Get the command keyword.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::CreateFolder { .. } => "create-folder",
            Command::ListFolders { .. } => "list-folders",
            Command::DeleteFolder { .. } => "delete-folder",
            Command::RenameFolder { .. } => "rename-folder",
            Command::CreateFile { .. } => "create-file",
            Command::ListFiles { .. } => "list-files",
            Command::DeleteFile { .. } => "delete-file",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Register { user } => write!(f, "register {user}"),
            Command::CreateFolder { user, folder, .. } => {
                write!(f, "create-folder {user} {folder}")
            }
            Command::ListFolders { user, flags } => write!(f, "list-folders {user} {flags}"),
            Command::DeleteFolder { user, folder } => write!(f, "delete-folder {user} {folder}"),
            Command::RenameFolder {
                user,
                folder,
                new_name,
            } => write!(f, "rename-folder {user} {folder} {new_name}"),
            Command::CreateFile {
                user, folder, file, ..
            } => write!(f, "create-file {user} {folder} {file}"),
            Command::ListFiles {
                user,
                folder,
                flags,
            } => write!(f, "list-files {user} {folder} {flags}"),
            Command::DeleteFile { user, folder, file } => {
                write!(f, "delete-file {user} {folder} {file}")
            }
        }
    }
}
