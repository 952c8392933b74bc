//! The widget root: trigger, open/closed state and the working item tree.

use tracing::{debug, info};

use crate::engine::focus::first_enabled_index;
use crate::engine::item::{ListPath, MenuItem};
use crate::engine::key::{KeyInput, MenuKey};
use crate::engine::list::{Interaction, MenuList, MenuSignal};
use crate::engine::port::FocusPort;
use crate::engine::submenu::{close_all_submenus, open_path};

/// A chosen leaf, identified by label and by index path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub path: ListPath,
}

/// Notifications for the embedding application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    Closed,
    Selected(Selection),
}

#[derive(Clone, Debug, Default)]
pub struct Menu {
    open: bool,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Seed the working copy from configuration. Open flags in the input are
    /// ignored; the menu always starts fully collapsed.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            open: false,
            items: close_all_submenus(&items),
        }
    }

    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = close_all_submenus(&items);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn open_path(&self) -> ListPath {
        open_path(&self.items)
    }

    pub fn toggle<P: FocusPort + ?Sized>(&mut self, port: &mut P) -> Option<MenuEvent> {
        if self.open {
            self.close(port, true);
            return Some(MenuEvent::Closed);
        }

        self.open = true;
        self.items = close_all_submenus(&self.items);
        if let Some(first) = first_enabled_index(&self.items) {
            port.move_focus_to(&[], first);
        }
        debug!("menu opened");
        Some(MenuEvent::Opened)
    }

    pub fn on_trigger_click<P: FocusPort + ?Sized>(&mut self, port: &mut P) -> Option<MenuEvent> {
        self.toggle(port)
    }

    pub fn on_trigger_key<P: FocusPort + ?Sized>(
        &mut self,
        input: KeyInput,
        port: &mut P,
    ) -> Option<MenuEvent> {
        match input.key {
            MenuKey::Enter | MenuKey::Space => self.toggle(port),
            _ => None,
        }
    }

    /// A pointer event landed outside the trigger and every rendered list.
    pub fn on_outside_interaction(&mut self) -> Option<MenuEvent> {
        let was_open = self.open;
        self.open = false;
        self.items = close_all_submenus(&self.items);
        if was_open {
            debug!("menu closed by outside interaction");
            Some(MenuEvent::Closed)
        } else {
            None
        }
    }

    /// Key press on item `index` of the list at `list`.
    pub fn on_item_key<P: FocusPort + ?Sized>(
        &mut self,
        list: &[usize],
        index: usize,
        input: KeyInput,
        port: &mut P,
    ) -> Option<MenuEvent> {
        self.interact(list, Interaction::Key { index, input }, port)
    }

    /// Click on item `index` of the list at `list`.
    pub fn on_item_click<P: FocusPort + ?Sized>(
        &mut self,
        list: &[usize],
        index: usize,
        port: &mut P,
    ) -> Option<MenuEvent> {
        self.interact(list, Interaction::Click { index }, port)
    }

    fn interact<P: FocusPort + ?Sized>(
        &mut self,
        list: &[usize],
        interaction: Interaction,
        port: &mut P,
    ) -> Option<MenuEvent> {
        if !self.open {
            return None;
        }
        let signal = MenuList::top(&mut self.items).dispatch(list, interaction, port)?;
        self.on_child_signal(signal, port)
    }

    /// Resolve a signal that bubbled out of the top list. Every signal
    /// collapses all submenus; only a collapse request keeps the menu open.
    pub fn on_child_signal<P: FocusPort + ?Sized>(
        &mut self,
        signal: MenuSignal,
        port: &mut P,
    ) -> Option<MenuEvent> {
        self.items = close_all_submenus(&self.items);
        match signal {
            MenuSignal::Select { item, path } => {
                info!(label = %item.label, path = ?path, "item selected");
                self.open = false;
                port.focus_trigger();
                Some(MenuEvent::Selected(Selection {
                    label: item.label,
                    path,
                }))
            }
            MenuSignal::CollapseToParent { parent_index } => {
                port.move_focus_to(&[], parent_index);
                debug!(parent_index, "collapsed to top list");
                None
            }
            MenuSignal::Dismiss { restore_focus } => {
                self.close(port, restore_focus);
                Some(MenuEvent::Closed)
            }
        }
    }

    fn close<P: FocusPort + ?Sized>(&mut self, port: &mut P, restore_focus: bool) {
        self.open = false;
        self.items = close_all_submenus(&self.items);
        if restore_focus {
            port.focus_trigger();
        }
        debug!(restore_focus, "menu closed");
    }
}
