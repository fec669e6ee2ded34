//! Parsing and execution of the `rlayout` sub-commands.
//!
//! The front-end hands over one raw argument string; parsing it into a typed
//! [`Command`] and every validation failure mode live here. Execution mutates
//! the store and refreshes the catalog; nothing is mutated on any error path.

use std::str::FromStr;

use strum::{Display, EnumString};
use thiserror::Error;

use crate::catalog::RuleCatalog;
use crate::host::{ConfigStore, LayoutHost};
use crate::store::{NicklistPref, RuleStore};

pub const USAGE: &str = "\
Usage: rlayout size <layout> <width> <height>
       rlayout nicklist <layout> <on|off>
       rlayout remove <layout>
       rlayout list
       rlayout terminal

    size: set max size (width and height) for layout to be automatically applied
nicklist: show or hide nicklist bar when layout is automatically applied
  remove: remove settings for responsive layout
    list: list current configuration
terminal: list current terminal width and height";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Size,
    Nicklist,
    Remove,
    List,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Size { layout: String, width: u32, height: u32 },
    Nicklist { layout: String, value: NicklistPref },
    Remove { layout: String },
    List,
    Terminal,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Too few arguments for option '{0}'.")]
    BadArgumentCount(Verb),
    #[error("Invalid size '{0}', width and height must be positive numbers.")]
    InvalidSize(String),
    #[error("Invalid argument '{value}' for option '{verb}'.")]
    InvalidValue { verb: Verb, value: String },
    #[error("Layout '{0}' doesn't exist, see /help layout to create one.")]
    UnknownLayout(String),
    #[error("Could not remove '{0}', rlayout not found.")]
    UnknownRule(String),
    #[error("Unknown option '{0}'.")]
    UnknownVerb(String),
}

impl Command {
    /// Parses the raw argument string. An empty string is the help request;
    /// trailing tokens after `list`/`terminal` are tolerated.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let mut tokens = raw.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(Self::Help);
        };
        let verb =
            Verb::from_str(word).map_err(|_| CommandError::UnknownVerb(word.to_owned()))?;
        let rest: Vec<&str> = tokens.collect();

        match verb {
            Verb::Size => {
                let &[layout, width, height] = rest.as_slice() else {
                    return Err(CommandError::BadArgumentCount(verb));
                };
                let dimension = |token: &str| token.parse::<u32>().ok().filter(|v| *v > 0);
                match (dimension(width), dimension(height)) {
                    (Some(width), Some(height)) => {
                        Ok(Self::Size { layout: layout.to_owned(), width, height })
                    }
                    _ => Err(CommandError::InvalidSize(format!("{width} {height}"))),
                }
            }
            Verb::Nicklist => {
                let &[layout, value] = rest.as_slice() else {
                    return Err(CommandError::BadArgumentCount(verb));
                };
                let value = value.parse::<NicklistPref>().map_err(|_| {
                    CommandError::InvalidValue { verb, value: value.to_owned() }
                })?;
                Ok(Self::Nicklist { layout: layout.to_owned(), value })
            }
            Verb::Remove => {
                let &[layout] = rest.as_slice() else {
                    return Err(CommandError::BadArgumentCount(verb));
                };
                Ok(Self::Remove { layout: layout.to_owned() })
            }
            Verb::List => Ok(Self::List),
            Verb::Terminal => Ok(Self::Terminal),
        }
    }
}

/// Executes a parsed command. Mutating verbs validate their preconditions
/// first, so a returned error always means the store is untouched.
pub fn run<H: LayoutHost, C: ConfigStore>(
    cmd: Command,
    host: &H,
    store: &RuleStore<C>,
    catalog: &mut RuleCatalog,
) -> Result<(), CommandError> {
    match cmd {
        Command::Help => {
            host.print(USAGE);
            Ok(())
        }
        Command::Size { layout, width, height } => {
            if !host.layout_exists(&layout) {
                return Err(CommandError::UnknownLayout(layout));
            }
            store.set_size(&layout, width, height);
            catalog.refresh(store);
            Ok(())
        }
        Command::Nicklist { layout, value } => {
            if !host.layout_exists(&layout) {
                return Err(CommandError::UnknownLayout(layout));
            }
            // The catalog carries no nicklist data, so no refresh is needed.
            store.set_nicklist(&layout, value);
            Ok(())
        }
        Command::Remove { layout } => {
            if !store.rule_names().contains(&layout) {
                return Err(CommandError::UnknownRule(layout));
            }
            store.remove(&layout);
            catalog.refresh(store);
            host.print(&format!("Removed rlayout '{layout}'"));
            Ok(())
        }
        Command::List => {
            let names = store.rule_names();
            if names.is_empty() {
                host.print("No configuration set.");
                return Ok(());
            }
            for name in names {
                let width = store.width(&name).unwrap_or_default();
                let height = store.height(&name).unwrap_or_default();
                let mut line = format!("[{name}] width: {width}, height: {height}");
                if let Some(nicklist) = store.nicklist_raw(&name) {
                    line.push_str(&format!(", nicklist: {nicklist}"));
                }
                host.print(&line);
            }
            Ok(())
        }
        Command::Terminal => {
            let (width, height) = host.terminal_size();
            host.print(&format!("Current terminal width x height is: {width} x {height}"));
            Ok(())
        }
    }
}
