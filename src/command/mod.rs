//! Command layer for vfsys.
//!
//! Turns tokenized command lines into namespace operations:
//! - Tokenizing with quoted arguments
//! - Arity checks and defaults for optional arguments
//! - Formatting success messages and listing rows

mod error;
mod output;
mod parser;
mod router;

pub use error::CommandError;
pub use output::Output;
pub use parser::{command_info, split_arguments, Command, CommandInfo, COMMANDS};
pub use router::Router;
