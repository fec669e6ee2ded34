//! Contracts for the external collaborators the engine drives. The concrete
//! binding (WeeChat, tmux control mode, a test stub) lives outside this crate.

/// The application that owns layouts, the nicklist bar, and the terminal.
pub trait LayoutHost {
    fn layout_exists(&self, name: &str) -> bool;
    fn is_active_layout(&self, name: &str) -> bool;
    fn activate_layout(&self, name: &str);
    fn show_nicklist_bar(&self);
    fn hide_nicklist_bar(&self);
    /// Current terminal (width, height) as the host reports them. Values stay
    /// strings at this boundary; the engine owns parsing.
    fn terminal_size(&self) -> (String, String);
    /// User-visible diagnostic output.
    fn print(&self, message: &str);
}

/// Flat key-value configuration backend. Values are strings; durability is
/// the backend's concern.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn unset(&self, key: &str);
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}
