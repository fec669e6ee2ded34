//! Responsive layout engine: picks a named layout whenever the terminal is
//! resized, based on per-layout width/height thresholds kept in a flat
//! key-value configuration namespace, and exposes the `rlayout` command
//! surface for managing those thresholds.
//!
//! The engine is host-agnostic: the terminal multiplexer that owns the actual
//! layouts, the nicklist bar, and the configuration backend is reached only
//! through the traits in [`host`]. Event dispatch is serial by host contract,
//! so nothing here needs locking.

pub mod applier;
pub mod catalog;
pub mod command;
pub mod engine;
pub mod host;
pub mod matcher;
pub mod store;

pub use catalog::{RuleCatalog, RuleEntry};
pub use command::{Command, CommandError};
pub use engine::Engine;
pub use host::{ConfigStore, LayoutHost};
pub use store::{NicklistPref, RuleStore};

#[cfg(test)]
pub(crate) mod testing;
