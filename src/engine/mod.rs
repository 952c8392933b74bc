pub mod aria;
pub mod focus;
pub mod item;
pub mod key;
pub mod list;
pub mod menu;
pub mod port;
pub mod submenu;

pub use item::{ListPath, MenuItem};
pub use key::{KeyInput, MenuKey, Modifiers};
pub use list::{MenuList, MenuSignal};
pub use menu::{Menu, MenuEvent, Selection};
pub use port::{FocusCursor, FocusPort, FocusTarget};
