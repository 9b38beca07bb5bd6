pub mod shortcut;
