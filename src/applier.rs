//! Idempotent layout activation with nicklist-bar resolution.

use tracing::debug;

use crate::host::{ConfigStore, LayoutHost};
use crate::store::{NicklistPref, RuleStore};

/// Activates `name` at the host unless it is already active, then applies the
/// rule's nicklist preference.
///
/// A rule can outlive its layout (the host may have deleted it); that case is
/// dropped silently. Re-applying the active layout is skipped entirely so a
/// stream of resize events never repeats activation or bar toggling.
pub fn apply<H: LayoutHost, C: ConfigStore>(host: &H, store: &RuleStore<C>, name: &str) {
    if !host.layout_exists(name) {
        debug!(%name, "layout not known to host, skipping");
        return;
    }
    if host.is_active_layout(name) {
        return;
    }

    host.print(&format!("Applying layout {name}"));
    host.activate_layout(name);
    toggle_nicklist(host, store, name);
}

/// Resolves the nicklist preference for `name` and toggles the bar. An absent
/// or empty per-rule value falls back to the global default; an unknown
/// stored literal resolves to no action without falling back.
fn toggle_nicklist<H: LayoutHost, C: ConfigStore>(host: &H, store: &RuleStore<C>, name: &str) {
    let resolved = match store.nicklist_raw(name) {
        None => NicklistPref::from_stored(store.global_nicklist().as_deref()),
        Some(value) => NicklistPref::from_stored(Some(&value)),
    };
    match resolved {
        NicklistPref::On => host.show_nicklist_bar(),
        NicklistPref::Off => host.hide_nicklist_bar(),
        NicklistPref::Unset => {}
    }
}
