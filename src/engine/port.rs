use crate::engine::item::ListPath;

/// Focus control implemented by the host over its rendered items.
///
/// `list` addresses a rendered list by the indices of the open parents that
/// lead to it; the top list is `&[]`. The engine never stores focus itself.
pub trait FocusPort {
    fn is_focused(&self, list: &[usize], index: usize) -> bool;
    fn move_focus_to(&mut self, list: &[usize], index: usize);
    fn focus_trigger(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    None,
    Trigger,
    Item { list: ListPath, index: usize },
}

/// In-memory focus port for hosts without a native focus model.
#[derive(Clone, Debug, Default)]
pub struct FocusCursor {
    target: FocusTarget,
}

impl FocusCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> &FocusTarget {
        &self.target
    }

    pub fn focused_item(&self) -> Option<(&[usize], usize)> {
        match &self.target {
            FocusTarget::Item { list, index } => Some((list.as_slice(), *index)),
            _ => None,
        }
    }

    pub fn is_trigger_focused(&self) -> bool {
        self.target == FocusTarget::Trigger
    }

    pub fn blur(&mut self) {
        self.target = FocusTarget::None;
    }
}

impl FocusPort for FocusCursor {
    fn is_focused(&self, list: &[usize], index: usize) -> bool {
        matches!(&self.target, FocusTarget::Item { list: l, index: i } if l == list && *i == index)
    }

    fn move_focus_to(&mut self, list: &[usize], index: usize) {
        self.target = FocusTarget::Item {
            list: list.to_vec(),
            index,
        };
    }

    fn focus_trigger(&mut self) {
        self.target = FocusTarget::Trigger;
    }
}
