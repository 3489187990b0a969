/// Interactive text menu over a line-oriented stream
///
/// This module implements the console front end:
/// 1. Shows the menu and reads a command
/// 2. Reads typed field values, re-prompting until each one is valid
/// 3. Calls the registry tools and prints their results

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuCommand;
pub use prompt::Prompter;
pub use session::Shell;

use thiserror::Error;

/// Errors that end a shell session
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed")]
    InputClosed,
}
