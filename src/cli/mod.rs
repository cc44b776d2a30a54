//! Terminal front end: the form and list views plus the command shell that
//! drives them.

pub mod core;
pub mod forms;
pub mod list_view;
pub mod output;
mod shell;
pub mod shell_context;

pub use self::core::{CliError, CommandError, Reply};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
