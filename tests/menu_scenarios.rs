use menutree::engine::submenu::is_all_closed;
use menutree::engine::{FocusCursor, FocusPort, FocusTarget, KeyInput, Menu, MenuEvent};
use menutree::store::menu_file::load_bundled;

/// A minimal host: routes key presses to whatever holds focus, the way a
/// rendering layer would.
struct Host {
    menu: Menu,
    focus: FocusCursor,
}

impl Host {
    fn bundled(name: &str) -> Self {
        let mut focus = FocusCursor::new();
        focus.focus_trigger();
        Self {
            menu: Menu::new(load_bundled(name).unwrap()),
            focus,
        }
    }

    fn press(&mut self, name: &str) -> Option<MenuEvent> {
        let input = KeyInput::named(name);
        match self.focus.target().clone() {
            FocusTarget::Trigger => self.menu.on_trigger_key(input, &mut self.focus),
            FocusTarget::Item { list, index } => {
                self.menu.on_item_key(&list, index, input, &mut self.focus)
            }
            FocusTarget::None => None,
        }
    }

    fn click(&mut self, list: &[usize], index: usize) -> Option<MenuEvent> {
        self.menu.on_item_click(list, index, &mut self.focus)
    }

    fn focused(&self) -> Option<(Vec<usize>, usize)> {
        self.focus
            .focused_item()
            .map(|(list, index)| (list.to_vec(), index))
    }

    fn label_at(&self, path: &[usize]) -> &str {
        &menutree::engine::item::item_at(self.menu.items(), path)
            .unwrap()
            .label
    }
}

#[test]
fn open_enter_and_escape_back_to_services() {
    let mut host = Host::bundled("site");

    assert_eq!(host.press("Enter"), Some(MenuEvent::Opened));
    assert_eq!(host.focused(), Some((vec![], 0)));
    assert_eq!(host.label_at(&[0]), "Home");

    host.press("ArrowDown");
    host.press("ArrowDown");
    assert_eq!(host.focused(), Some((vec![], 2)));
    assert_eq!(host.label_at(&[2]), "Services");

    assert_eq!(host.press("Enter"), None);
    assert!(host.menu.items()[2].is_open);
    assert_eq!(host.focused(), Some((vec![2], 0)));
    assert_eq!(host.label_at(&[2, 0]), "Web Design");

    assert_eq!(host.press("Escape"), None);
    assert!(!host.menu.items()[2].is_open);
    assert!(host.menu.is_open());
    assert_eq!(host.focused(), Some((vec![], 2)));
}

#[test]
fn selecting_a_leaf_three_levels_down_closes_everything() {
    let mut host = Host::bundled("deep");

    host.press("Enter");
    host.press("Enter");
    assert_eq!(host.focused(), Some((vec![0], 0)));
    host.press("ArrowDown");
    host.press("ArrowRight");
    assert_eq!(host.focused(), Some((vec![0, 1], 0)));
    host.press("ArrowDown");
    host.press("Enter");
    assert_eq!(host.focused(), Some((vec![0, 1, 1], 0)));
    assert_eq!(host.menu.open_path(), vec![0, 1, 1]);

    host.press("End");
    assert_eq!(host.label_at(&[0, 1, 1, 2]), "scratch");

    let event = host.press("Enter");
    match event {
        Some(MenuEvent::Selected(selection)) => {
            assert_eq!(selection.label, "scratch");
            assert_eq!(selection.path, vec![0, 1, 1, 2]);
        }
        other => panic!("expected a selection, got {other:?}"),
    }
    assert!(is_all_closed(host.menu.items()));
    assert!(!host.menu.is_open());
    assert!(host.focus.is_trigger_focused());
}

#[test]
fn outside_click_closes_every_open_level() {
    let mut host = Host::bundled("deep");
    host.press("Enter");
    host.click(&[], 0);
    host.click(&[0], 1);
    host.click(&[0, 1], 1);
    assert_eq!(host.menu.open_path(), vec![0, 1, 1]);

    assert_eq!(host.menu.on_outside_interaction(), Some(MenuEvent::Closed));
    assert!(!host.menu.is_open());
    assert!(is_all_closed(host.menu.items()));

    assert_eq!(host.menu.on_outside_interaction(), None);
}

#[test]
fn left_and_escape_unwind_one_level_at_a_time() {
    let mut host = Host::bundled("deep");
    host.press("Enter");
    host.press("ArrowRight");
    host.press("ArrowDown");
    host.press("ArrowRight");
    host.press("ArrowDown");
    host.press("ArrowRight");
    assert_eq!(host.menu.open_path(), vec![0, 1, 1]);

    host.press("ArrowLeft");
    assert_eq!(host.menu.open_path(), vec![0, 1]);
    assert_eq!(host.focused(), Some((vec![0, 1], 1)));

    host.press("Escape");
    assert_eq!(host.menu.open_path(), vec![0]);
    assert_eq!(host.focused(), Some((vec![0], 1)));

    host.press("ArrowLeft");
    assert!(host.menu.open_path().is_empty());
    assert_eq!(host.focused(), Some((vec![], 0)));
    assert!(host.menu.is_open());

    // The top list has no parent to return to
    host.press("ArrowLeft");
    assert!(host.menu.is_open());
    assert_eq!(host.focused(), Some((vec![], 0)));

    assert_eq!(host.press("Escape"), Some(MenuEvent::Closed));
    assert!(host.focus.is_trigger_focused());
}

#[test]
fn tab_closes_without_returning_focus() {
    let mut host = Host::bundled("site");
    host.press("Enter");
    host.press("End");
    host.press("ArrowUp");
    host.press("Enter");
    assert_eq!(host.menu.open_path(), vec![2]);

    assert_eq!(host.press("Tab"), Some(MenuEvent::Closed));
    assert!(!host.menu.is_open());
    assert!(is_all_closed(host.menu.items()));
    assert!(!host.focus.is_trigger_focused());
}

#[test]
fn home_end_and_wrap_skip_disabled_items() {
    let mut host = Host::bundled("zones");
    host.press("Enter");

    host.press("End");
    assert_eq!(host.label_at(&[host.focused().unwrap().1]), "Battlegrounds-1");

    host.press("ArrowDown");
    assert_eq!(host.focused(), Some((vec![], 0)));

    host.press("ArrowUp");
    assert_eq!(host.focused(), Some((vec![], 2)));

    host.press("Home");
    assert_eq!(host.focused(), Some((vec![], 0)));
}

#[test]
fn character_search_cycles_enabled_matches() {
    let mut host = Host::bundled("zones");
    host.press("Enter");

    host.press("b");
    assert_eq!(host.focused(), Some((vec![], 2)));
    assert_eq!(host.label_at(&[2]), "Battlegrounds-1");
    // Battlegrounds-2 is disabled, so the only match is the current item
    host.press("B");
    assert_eq!(host.focused(), Some((vec![], 2)));

    host.press("k");
    assert_eq!(host.focused(), Some((vec![], 1)));
    host.press("o");
    assert_eq!(host.focused(), Some((vec![], 1)));

    host.press("Enter");
    assert_eq!(host.focused(), Some((vec![1], 0)));
    host.press("t");
    assert_eq!(host.label_at(&[1, 2]), "Tanaris");
    assert_eq!(host.focused(), Some((vec![1], 2)));
}

#[test]
fn opening_a_sibling_closes_the_previous_one() {
    let mut host = Host::bundled("zones");
    host.press("Enter");
    host.click(&[], 0);
    assert_eq!(host.menu.open_path(), vec![0]);

    host.click(&[], 1);
    assert_eq!(host.menu.open_path(), vec![1]);
    assert!(!host.menu.items()[0].is_open);

    // Clicking the open parent again toggles it shut
    host.click(&[], 1);
    assert!(host.menu.open_path().is_empty());
    assert!(host.menu.is_open());
}

#[test]
fn disabled_items_ignore_clicks_and_cannot_open() {
    let mut host = Host::bundled("zones");
    host.press("Enter");

    assert!(host.menu.items()[3].disabled && host.menu.items()[3].is_leaf());
    assert!(host.menu.items()[4].disabled && host.menu.items()[4].has_submenu());

    assert_eq!(host.click(&[], 3), None);
    assert_eq!(host.click(&[], 4), None);
    assert!(!host.menu.items()[4].is_open);
    assert!(host.menu.open_path().is_empty());
    assert!(host.menu.is_open());
    assert_eq!(host.focused(), Some((vec![], 0)));
}

#[test]
fn clicking_a_nested_leaf_selects_it() {
    let mut host = Host::bundled("site");
    host.press("Enter");
    host.click(&[], 2);
    let event = host.click(&[2], 1);
    assert_eq!(
        event,
        Some(MenuEvent::Selected(menutree::engine::Selection {
            label: "SEO".to_string(),
            path: vec![2, 1],
        }))
    );
    assert!(is_all_closed(host.menu.items()));
}

#[test]
fn interactions_with_closed_lists_are_ignored() {
    let mut host = Host::bundled("site");
    assert_eq!(host.click(&[], 0), None);
    host.press("Enter");
    // Services is closed, so its list is not rendered
    assert_eq!(host.click(&[2], 0), None);
    assert!(host.menu.is_open());
}
