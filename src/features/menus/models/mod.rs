mod menu_entry;

pub use menu_entry::{MenuEntry, MenuSet};
