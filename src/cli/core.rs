//! Command handling for the tracker shell.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::info;

use crate::errors::{TrackerError, ValidationError};
use crate::tracker::{CalorieSummary, IdGenerator, SelectionMode};

use super::list_view::{self, format_calories, render_list, render_summary, resolve_target};
use super::shell_context::ShellContext;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    UnknownCommand(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Core(#[from] TrackerError),
}

/// Fatal shell failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

/// What the shell should do with a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A rendered view, printed as is.
    View(String),
    /// A short confirmation message.
    Notice(String),
    Exit,
}

pub type CommandResult = Result<Reply, CommandError>;

pub(crate) const COMMANDS: &[(&str, &str)] = &[
    ("list", "Show all activities"),
    ("summary", "Show consumed, burned and net calories"),
    ("categories", "Show the category catalog"),
    ("form", "Show the current draft"),
    ("category", "category <id>: choose the draft category"),
    ("name", "name <text>: set the draft name"),
    ("calories", "calories <number>: set the draft calories"),
    ("save", "Save the draft as a new or edited activity"),
    ("edit", "edit <row|id>: load an activity into the form"),
    ("delete", "delete <row|id>: remove an activity"),
    ("help", "Show this help"),
    ("exit", "Leave the shell"),
];

pub(crate) fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

fn require_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("Usage: {usage}")))
}

impl<G: IdGenerator> ShellContext<G> {
    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let reply = match command {
            "list" | "ls" => Ok(Reply::View(render_list(
                self.store.state(),
                &self.catalog,
                &self.style,
            ))),
            "summary" => {
                let summary = CalorieSummary::from_state(self.store.state(), &self.catalog);
                Ok(Reply::View(render_summary(&summary, &self.style)))
            }
            "categories" => Ok(Reply::View(self.render_categories())),
            "form" => Ok(Reply::View(self.render_form())),
            "category" => self.cmd_category(args),
            "name" => self.cmd_name(args),
            "calories" => self.cmd_calories(args),
            "save" => self.cmd_save(),
            "edit" => self.cmd_edit(args),
            "delete" | "rm" => self.cmd_delete(args),
            "help" | "?" => Ok(Reply::View(render_help())),
            "exit" | "quit" => Ok(Reply::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        };
        self.form.sync(self.store.state());
        reply
    }

    fn cmd_category(&mut self, args: &[&str]) -> CommandResult {
        let raw = require_arg(args, "category <id>")?;
        let id = raw.parse::<u32>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a category id"))
        })?;
        self.form.select_category(&self.catalog, id)?;
        let name = self.catalog.resolve_name(id).unwrap_or_default();
        Ok(Reply::Notice(format!("Category set to {name}")))
    }

    fn cmd_name(&mut self, args: &[&str]) -> CommandResult {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments("Usage: name <text>".into()));
        }
        self.form.set_name(args.join(" "));
        Ok(Reply::Notice(format!("Name set to `{}`", self.form.draft().name)))
    }

    fn cmd_calories(&mut self, args: &[&str]) -> CommandResult {
        let raw = require_arg(args, "calories <number>")?;
        self.form.set_calories_input(raw)?;
        Ok(Reply::Notice(format!(
            "Calories set to {}",
            format_calories(self.form.draft().calories)
        )))
    }

    fn cmd_save(&mut self) -> CommandResult {
        let draft = self.form.draft();
        let message = format!(
            "Saved `{}` ({} {})",
            draft.name,
            format_calories(draft.calories),
            self.style.unit_label
        );
        let action = self.form.submit()?;
        self.store.dispatch(action);
        info!(activities = self.store.state().len(), "activity saved");
        Ok(Reply::Notice(message))
    }

    fn cmd_edit(&mut self, args: &[&str]) -> CommandResult {
        let id = self.target(args, "edit <row|id>")?;
        self.store.dispatch(list_view::edit_action(id));
        self.form.sync(self.store.state());
        Ok(Reply::Notice(format!(
            "Editing `{}`",
            self.form.draft().name
        )))
    }

    fn cmd_delete(&mut self, args: &[&str]) -> CommandResult {
        let id = self.target(args, "delete <row|id>")?;
        let name = self
            .store
            .state()
            .activity(&id)
            .map(|activity| activity.name.clone())
            .unwrap_or_default();
        self.store.dispatch(list_view::delete_action(id));
        Ok(Reply::Notice(format!("Deleted `{name}`")))
    }

    fn target(&self, args: &[&str], usage: &str) -> Result<String, CommandError> {
        let raw = require_arg(args, usage)?;
        resolve_target(self.store.state(), raw)
            .ok_or_else(|| CommandError::InvalidArguments(format!("No activity matches `{raw}`")))
    }

    fn render_categories(&self) -> String {
        self.catalog
            .iter()
            .map(|category| format!("{}. {} ({})\n", category.id, category.name, category.kind))
            .collect()
    }

    fn render_form(&self) -> String {
        let draft = self.form.draft();
        let mode = match self.store.state().mode() {
            SelectionMode::Create => "create",
            SelectionMode::Edit => "edit",
        };
        let status = match self.form.validate() {
            Ok(()) => "ready".to_string(),
            Err(err) => format!("disabled: {err}"),
        };
        format!(
            "Mode: {mode}\nCategory: {}\nName: {}\n{}: {}\n[{}] {status}\n",
            self.catalog.resolve_name(draft.category).unwrap_or_default(),
            draft.name,
            self.style.unit_label,
            format_calories(draft.calories),
            self.form.submit_label(&self.catalog),
        )
    }
}

fn render_help() -> String {
    COMMANDS
        .iter()
        .map(|(name, help)| format!("{name:<12}{help}\n"))
        .collect()
}
