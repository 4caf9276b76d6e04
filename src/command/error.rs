//! Errors raised while routing a command.

use thiserror::Error;

use crate::namespace::NamespaceError;

/// Command routing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for the command.
    #[error("Insufficient arguments\nUsage: {usage}")]
    InsufficientArguments {
        /// Usage line for the command.
        usage: &'static str,
    },

    /// No command with this keyword. The keyword is kept for logs only.
    #[error("Unrecognized command")]
    UnrecognizedCommand(String),

    /// The namespace rejected the operation.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}
