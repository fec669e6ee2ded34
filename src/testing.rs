//! Stub collaborators shared by the unit tests.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::host::{ConfigStore, LayoutHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Activate(String),
    ShowNicklist,
    HideNicklist,
    Print(String),
}

/// In-memory layout host recording every observable side effect.
#[derive(Default)]
pub struct FakeHost {
    pub layouts: Vec<String>,
    pub active: RefCell<Option<String>>,
    pub term_size: RefCell<(String, String)>,
    pub calls: RefCell<Vec<HostCall>>,
}

impl FakeHost {
    pub fn with_layouts(layouts: &[&str]) -> Self {
        Self {
            layouts: layouts.iter().map(|name| (*name).to_owned()).collect(),
            term_size: RefCell::new(("80".to_owned(), "24".to_owned())),
            ..Self::default()
        }
    }

    pub fn set_terminal(&self, width: &str, height: &str) {
        *self.term_size.borrow_mut() = (width.to_owned(), height.to_owned());
    }

    pub fn printed(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Print(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn activations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Activate(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl LayoutHost for FakeHost {
    fn layout_exists(&self, name: &str) -> bool {
        self.layouts.iter().any(|layout| layout == name)
    }

    fn is_active_layout(&self, name: &str) -> bool {
        self.active.borrow().as_deref() == Some(name)
    }

    fn activate_layout(&self, name: &str) {
        *self.active.borrow_mut() = Some(name.to_owned());
        self.calls.borrow_mut().push(HostCall::Activate(name.to_owned()));
    }

    fn show_nicklist_bar(&self) {
        self.calls.borrow_mut().push(HostCall::ShowNicklist);
    }

    fn hide_nicklist_bar(&self) {
        self.calls.borrow_mut().push(HostCall::HideNicklist);
    }

    fn terminal_size(&self) -> (String, String) {
        self.term_size.borrow().clone()
    }

    fn print(&self, message: &str) {
        self.calls.borrow_mut().push(HostCall::Print(message.to_owned()));
    }
}

/// In-memory key-value backend.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn seeded(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in pairs {
            store.set(key, value);
        }
        store
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn unset(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.values.borrow().keys().filter(|key| key.starts_with(prefix)).cloned().collect()
    }
}
