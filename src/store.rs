//! Typed access to the `layout.<name>.<field>` key namespace.
//!
//! No validation happens here; the store is a pass-through over the backend
//! with key composition and string/integer encoding. Empty values from the
//! backend are normalized to absent, matching hosts that report unset options
//! as empty strings.

use rustc_hash::FxHashSet;
use strum::EnumString;

use crate::host::ConfigStore;

pub const KEY_PREFIX: &str = "layout.";

const FIELD_WIDTH: &str = "width";
const FIELD_HEIGHT: &str = "height";
const FIELD_NICKLIST: &str = "nicklist";

/// Process-wide fallback used when a rule has no nicklist preference of its
/// own.
const GLOBAL_NICKLIST_KEY: &str = "nicklist";
const GLOBAL_NICKLIST_DEFAULT: &str = "on";

/// Nicklist-bar preference for a rule. `Unset` means "leave the bar alone";
/// the command surface only ever writes `On` or `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NicklistPref {
    On,
    Off,
    #[strum(disabled)]
    Unset,
}

impl NicklistPref {
    /// Decodes a stored value. Anything other than the two known literals,
    /// including an absent value, is `Unset`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("on") => Self::On,
            Some("off") => Self::Off,
            _ => Self::Unset,
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::On => Some("on"),
            Self::Off => Some("off"),
            Self::Unset => None,
        }
    }
}

pub struct RuleStore<C> {
    backend: C,
}

impl<C: ConfigStore> RuleStore<C> {
    pub fn new(backend: C) -> Self {
        Self { backend }
    }

    /// Registers the global nicklist default when the host has none stored.
    pub fn ensure_defaults(&self) {
        if self.get(GLOBAL_NICKLIST_KEY).is_none() {
            self.backend.set(GLOBAL_NICKLIST_KEY, GLOBAL_NICKLIST_DEFAULT);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.backend.get(key).filter(|value| !value.is_empty())
    }

    fn field_key(name: &str, field: &str) -> String {
        format!("{KEY_PREFIX}{name}.{field}")
    }

    /// Distinct rule names derived from the stored keys, sorted. A name is
    /// the key minus the namespace prefix and the trailing field segment, so
    /// layout names containing dots survive the round trip.
    pub fn rule_names(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut names = Vec::new();
        for key in self.backend.keys_with_prefix(KEY_PREFIX) {
            let Some(rest) = key.strip_prefix(KEY_PREFIX) else {
                continue;
            };
            let Some((name, _field)) = rest.rsplit_once('.') else {
                continue;
            };
            if !name.is_empty() && seen.insert(name.to_owned()) {
                names.push(name.to_owned());
            }
        }
        names.sort_unstable();
        names
    }

    pub fn width(&self, name: &str) -> Option<String> {
        self.get(&Self::field_key(name, FIELD_WIDTH))
    }

    pub fn height(&self, name: &str) -> Option<String> {
        self.get(&Self::field_key(name, FIELD_HEIGHT))
    }

    /// Raw per-rule nicklist value. Kept as a string so the applier can
    /// distinguish "unset, fall back to the global default" from "set to an
    /// unknown literal, do nothing."
    pub fn nicklist_raw(&self, name: &str) -> Option<String> {
        self.get(&Self::field_key(name, FIELD_NICKLIST))
    }

    pub fn global_nicklist(&self) -> Option<String> {
        self.get(GLOBAL_NICKLIST_KEY)
    }

    pub fn set_size(&self, name: &str, width: u32, height: u32) {
        self.backend.set(&Self::field_key(name, FIELD_WIDTH), &width.to_string());
        self.backend.set(&Self::field_key(name, FIELD_HEIGHT), &height.to_string());
    }

    pub fn set_nicklist(&self, name: &str, pref: NicklistPref) {
        let key = Self::field_key(name, FIELD_NICKLIST);
        match pref.as_stored() {
            Some(value) => self.backend.set(&key, value),
            None => self.backend.unset(&key),
        }
    }

    /// Unsets all three fields unconditionally, whether or not they were ever
    /// written.
    pub fn remove(&self, name: &str) {
        for field in [FIELD_WIDTH, FIELD_HEIGHT, FIELD_NICKLIST] {
            self.backend.unset(&Self::field_key(name, field));
        }
    }
}
