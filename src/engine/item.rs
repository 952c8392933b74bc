use serde::{Deserialize, Serialize};

/// Indices of the open parent items leading to a list, starting at the top
/// list. The top list itself is the empty path.
pub type ListPath = Vec<usize>;

/// One entry of a menu tree.
///
/// An item with a non-empty `submenu` is a parent item: activating it opens
/// the child list instead of selecting. Every other item is a leaf, including
/// one whose `submenu` is present but empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItem>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MenuItem {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn parent(label: impl Into<String>, submenu: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            submenu: Some(submenu),
            ..Self::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn opened(mut self) -> Self {
        self.is_open = true;
        self
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.as_ref().is_some_and(|items| !items.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_submenu()
    }

    /// Child items, empty for leaves.
    pub fn children(&self) -> &[MenuItem] {
        self.submenu.as_deref().unwrap_or(&[])
    }
}

/// Resolve the list addressed by `path`, following `submenu` arrays.
pub fn list_at<'a>(items: &'a [MenuItem], path: &[usize]) -> Option<&'a [MenuItem]> {
    let mut list = items;
    for &index in path {
        list = list.get(index)?.submenu.as_deref()?;
    }
    Some(list)
}

/// Resolve a single item by its full index path.
pub fn item_at<'a>(items: &'a [MenuItem], path: &[usize]) -> Option<&'a MenuItem> {
    let (&last, parents) = path.split_last()?;
    list_at(items, parents)?.get(last)
}
