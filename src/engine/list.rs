//! One level of the menu tree.
//!
//! A `MenuList` borrows the items of a single level together with the path
//! that leads to it. Interactions address a list by path; the top list walks
//! down through open parents, builds the child `MenuList` for the next level
//! and handles whatever signal the child hands back on the way up.

use tracing::{debug, trace};

use crate::engine::focus::{
    first_enabled_index, last_enabled_index, next_enabled_index, next_match_by_prefix,
    previous_enabled_index,
};
use crate::engine::item::{ListPath, MenuItem};
use crate::engine::key::{KeyInput, MenuKey};
use crate::engine::port::FocusPort;
use crate::engine::submenu::close_item;

/// Upward notification from a list to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    /// A leaf was chosen. `path` is the full index path of the leaf.
    Select { item: MenuItem, path: ListPath },
    /// The list opened from `parent_index` wants to close and hand focus back.
    CollapseToParent { parent_index: usize },
    /// The whole widget should close.
    Dismiss { restore_focus: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Key { index: usize, input: KeyInput },
    Click { index: usize },
}

pub struct MenuList<'a> {
    items: &'a mut [MenuItem],
    path: ListPath,
}

impl<'a> MenuList<'a> {
    pub fn top(items: &'a mut [MenuItem]) -> Self {
        Self {
            items,
            path: Vec::new(),
        }
    }

    fn nested(items: &'a mut [MenuItem], path: ListPath) -> Self {
        Self { items, path }
    }

    pub fn is_top(&self) -> bool {
        self.path.is_empty()
    }

    /// Index of the item in the parent list that opened this list.
    pub fn parent_index(&self) -> Option<usize> {
        self.path.last().copied()
    }

    pub fn items(&self) -> &[MenuItem] {
        &*self.items
    }

    /// Route `interaction` to the list at `target` (relative to this list)
    /// and resolve the signal it produces. Lists that are not open do not
    /// receive interactions.
    pub fn dispatch<P: FocusPort + ?Sized>(
        &mut self,
        target: &[usize],
        interaction: Interaction,
        port: &mut P,
    ) -> Option<MenuSignal> {
        let Some((&child_index, rest)) = target.split_first() else {
            return match interaction {
                Interaction::Key { index, input } => self.on_item_key_down(index, input, port),
                Interaction::Click { index } => self.on_item_click(index, port),
            };
        };

        let signal = {
            let item = self.items.get_mut(child_index)?;
            if !item.is_open {
                return None;
            }
            let children = item.submenu.as_deref_mut().filter(|c| !c.is_empty())?;
            let mut path = self.path.clone();
            path.push(child_index);
            MenuList::nested(children, path).dispatch(rest, interaction, port)?
        };
        self.on_signal_from_child(signal, port)
    }

    pub fn on_item_key_down<P: FocusPort + ?Sized>(
        &mut self,
        index: usize,
        input: KeyInput,
        port: &mut P,
    ) -> Option<MenuSignal> {
        if self.items.is_empty() {
            return None;
        }
        let current = self
            .focused_index(port)
            .unwrap_or(index)
            .min(self.items.len() - 1);

        match input.key {
            MenuKey::Enter | MenuKey::Space => {
                if self.items[current].disabled {
                    return None;
                }
                self.activate_item(current, port)
            }
            MenuKey::Escape => Some(self.escape_signal()),
            MenuKey::ArrowDown => {
                let next = next_enabled_index(current, self.items());
                self.move_focus(current, next, port);
                None
            }
            MenuKey::ArrowUp => {
                let previous = previous_enabled_index(current, self.items());
                self.move_focus(current, previous, port);
                None
            }
            MenuKey::ArrowRight => {
                let item = &self.items[current];
                if item.has_submenu() && !item.disabled {
                    return self.activate_item(current, port);
                }
                None
            }
            MenuKey::ArrowLeft => self
                .parent_index()
                .map(|parent_index| MenuSignal::CollapseToParent { parent_index }),
            MenuKey::Home => {
                if let Some(first) = first_enabled_index(self.items()) {
                    self.move_focus(current, first, port);
                }
                None
            }
            MenuKey::End => {
                if let Some(last) = last_enabled_index(self.items()) {
                    self.move_focus(current, last, port);
                }
                None
            }
            MenuKey::Tab => Some(MenuSignal::Dismiss {
                restore_focus: false,
            }),
            MenuKey::Char(_) => {
                let ch = input.search_char()?;
                let found = next_match_by_prefix(ch, Some(current), self.items())?;
                self.move_focus(current, found, port);
                None
            }
            MenuKey::Other => None,
        }
    }

    /// Clicking a parent toggles its submenu; clicking a leaf selects it.
    /// The click is consumed here, so it never counts as an outside click.
    pub fn on_item_click<P: FocusPort + ?Sized>(
        &mut self,
        index: usize,
        port: &mut P,
    ) -> Option<MenuSignal> {
        let item = self.items.get(index)?;
        if item.disabled {
            return None;
        }
        if item.is_leaf() {
            return Some(self.select_signal(index));
        }

        if item.is_open {
            self.items[index] = close_item(&self.items[index]);
            debug!(path = ?self.path, index, "submenu closed by click");
        } else {
            self.open_submenu(index);
        }
        port.move_focus_to(&self.path, index);
        None
    }

    /// Open a parent item and move focus into its list, or select a leaf.
    pub fn activate_item<P: FocusPort + ?Sized>(
        &mut self,
        index: usize,
        port: &mut P,
    ) -> Option<MenuSignal> {
        let item = self.items.get(index)?;
        if item.is_leaf() {
            return Some(self.select_signal(index));
        }

        self.open_submenu(index);
        if let Some(first) = first_enabled_index(self.items[index].children()) {
            let mut child_path = self.path.clone();
            child_path.push(index);
            port.move_focus_to(&child_path, first);
        }
        None
    }

    /// Absorb a collapse request from the child list, or pass the signal on.
    pub fn on_signal_from_child<P: FocusPort + ?Sized>(
        &mut self,
        signal: MenuSignal,
        port: &mut P,
    ) -> Option<MenuSignal> {
        match signal {
            MenuSignal::CollapseToParent { parent_index } if !self.is_top() => {
                if let Some(item) = self.items.get(parent_index) {
                    self.items[parent_index] = close_item(item);
                }
                port.move_focus_to(&self.path, parent_index);
                debug!(path = ?self.path, parent_index, "collapse absorbed");
                None
            }
            other => {
                trace!(path = ?self.path, signal = ?other, "signal escalated");
                Some(other)
            }
        }
    }

    fn open_submenu(&mut self, index: usize) {
        for (i, item) in self.items.iter_mut().enumerate() {
            if i == index {
                *item = MenuItem {
                    is_open: true,
                    ..close_item(item)
                };
            } else if item.is_open {
                *item = close_item(item);
            }
        }
        debug!(path = ?self.path, index, label = %self.items[index].label, "submenu opened");
    }

    fn escape_signal(&self) -> MenuSignal {
        match self.parent_index() {
            Some(parent_index) => MenuSignal::CollapseToParent { parent_index },
            None => MenuSignal::Dismiss {
                restore_focus: true,
            },
        }
    }

    fn select_signal(&self, index: usize) -> MenuSignal {
        let mut path = self.path.clone();
        path.push(index);
        MenuSignal::Select {
            item: self.items[index].clone(),
            path,
        }
    }

    fn focused_index<P: FocusPort + ?Sized>(&self, port: &P) -> Option<usize> {
        (0..self.items.len()).find(|&i| port.is_focused(&self.path, i))
    }

    fn move_focus<P: FocusPort + ?Sized>(&self, current: usize, next: usize, port: &mut P) {
        let already_there = next == current && port.is_focused(&self.path, current);
        if !already_there && !self.items[next].disabled {
            port.move_focus_to(&self.path, next);
        }
    }
}
