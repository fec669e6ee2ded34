//! Event-facing wiring. The host binds its resize signal to
//! [`Engine::handle_resize`] and its command dispatch to
//! [`Engine::handle_command`]; both are invoked serially by the host's event
//! loop, so the engine is the catalog's single writer.

use tracing::{debug, warn};

use crate::applier;
use crate::catalog::RuleCatalog;
use crate::command::{self, Command, CommandError};
use crate::host::{ConfigStore, LayoutHost};
use crate::matcher;
use crate::store::RuleStore;

pub struct Engine<H, C> {
    host: H,
    store: RuleStore<C>,
    catalog: RuleCatalog,
}

impl<H: LayoutHost, C: ConfigStore> Engine<H, C> {
    /// Registers the global nicklist default and builds the initial catalog.
    pub fn new(host: H, backend: C) -> Self {
        let store = RuleStore::new(backend);
        store.ensure_defaults();
        let mut catalog = RuleCatalog::default();
        catalog.refresh(&store);
        Self { host, store, catalog }
    }

    /// Resize notification carries no payload; dimensions are pulled from the
    /// host. A terminal size that fails to parse drops the event with a
    /// warning and leaves the current layout untouched.
    pub fn handle_resize(&self) {
        let (raw_width, raw_height) = self.host.terminal_size();
        let (Ok(width), Ok(height)) = (raw_width.parse::<u32>(), raw_height.parse::<u32>())
        else {
            warn!(
                width = %raw_width,
                height = %raw_height,
                "terminal dimensions are not numeric, ignoring resize"
            );
            return;
        };

        let Some(entry) = matcher::select(&self.catalog, width, height) else {
            debug!("no layout rules configured, ignoring resize");
            return;
        };
        applier::apply(&self.host, &self.store, &entry.name);
    }

    /// One raw argument string per invocation; all parsing and validation
    /// happens here. Failures print a diagnostic and mutate nothing.
    pub fn handle_command(&mut self, args: &str) {
        let cmd = match Command::parse(args) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.host.print(&err.to_string());
                if matches!(err, CommandError::UnknownVerb(_)) {
                    self.host.print(command::USAGE);
                }
                return;
            }
        };
        if let Err(err) = command::run(cmd, &self.host, &self.store, &mut self.catalog) {
            self.host.print(&err.to_string());
        }
    }

    /// Completion candidates for `<layout>` arguments, sorted.
    pub fn layout_name_candidates(&self) -> Vec<String> {
        self.store.rule_names()
    }

    /// Completion candidates for the nicklist toggle, sorted.
    pub fn toggle_candidates(&self) -> [&'static str; 2] {
        ["off", "on"]
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &RuleStore<C> {
        &self.store
    }
}
