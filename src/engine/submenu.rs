use crate::engine::item::{ListPath, MenuItem};

/// Deep copy of `items` with every `is_open` flag cleared at every level.
pub fn close_all_submenus(items: &[MenuItem]) -> Vec<MenuItem> {
    items.iter().map(close_item).collect()
}

/// Copy of `item` closed together with everything beneath it.
pub fn close_item(item: &MenuItem) -> MenuItem {
    MenuItem {
        label: item.label.clone(),
        is_open: false,
        disabled: item.disabled,
        submenu: item.submenu.as_deref().map(close_all_submenus),
    }
}

/// True iff no item anywhere in the tree is open.
pub fn is_all_closed(items: &[MenuItem]) -> bool {
    items
        .iter()
        .all(|item| !item.is_open && item.submenu.as_deref().is_none_or(is_all_closed))
}

/// Path of open parent items from the top list down. Follows the first open
/// parent at each level; with a single open sibling per list this is the
/// whole open state.
pub fn open_path(items: &[MenuItem]) -> ListPath {
    let mut path = Vec::new();
    let mut list = items;
    while let Some(index) = list
        .iter()
        .position(|item| item.is_open && item.has_submenu())
    {
        path.push(index);
        list = list[index].children();
    }
    path
}
