//! Accessibility attributes a host attaches to the rendered trigger, lists
//! and items.

use crate::engine::item::MenuItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Menu,
    MenuItem,
    Group,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Menu => "menu",
            Role::MenuItem => "menuitem",
            Role::Group => "group",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerAria {
    pub has_popup: bool,
    pub expanded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListAria {
    pub role: Role,
    pub tab_index: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemAria<'a> {
    pub role: Role,
    pub label: &'a str,
    pub has_popup: bool,
    pub expanded: bool,
    pub disabled: bool,
    pub tab_index: i32,
}

pub fn trigger_aria(open: bool) -> TriggerAria {
    TriggerAria {
        has_popup: true,
        expanded: open,
    }
}

/// Lists take focus only programmatically.
pub fn list_aria() -> ListAria {
    ListAria {
        role: Role::Menu,
        tab_index: -1,
    }
}

/// An open parent renders as a group wrapping its child list.
pub fn item_aria(item: &MenuItem) -> ItemAria<'_> {
    ItemAria {
        role: if item.is_open { Role::Group } else { Role::MenuItem },
        label: &item.label,
        has_popup: item.submenu.is_some(),
        expanded: item.is_open,
        disabled: item.disabled,
        tab_index: if item.disabled { -1 } else { 0 },
    }
}

impl ItemAria<'_> {
    /// Attribute pairs in the form a markup host would emit. Absent
    /// attributes are omitted rather than rendered as `false`.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", self.role.as_str().to_string()),
            ("aria-label", self.label.to_string()),
            ("tabindex", self.tab_index.to_string()),
        ];
        if self.has_popup {
            attrs.push(("aria-haspopup", "true".to_string()));
        }
        if self.expanded {
            attrs.push(("aria-expanded", "true".to_string()));
        }
        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        attrs
    }
}
