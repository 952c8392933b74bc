use chrono::{DateTime, Local};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::info;

use menutree::config::Config;
use menutree::engine::aria::{item_aria, trigger_aria};
use menutree::engine::item::{MenuItem, item_at};
use menutree::engine::key::MenuKey;
use menutree::engine::{FocusCursor, FocusPort, FocusTarget, Menu, MenuEvent, Selection};
use menutree::ui::components::menu::{Hit, MenuLayout};
use menutree::ui::input::key_input;
use menutree::ui::layout::AppLayout;
use menutree::ui::theme::Theme;

pub struct SelectionRecord {
    pub selection: Selection,
    pub at: DateTime<Local>,
}

pub struct App {
    pub menu: Menu,
    pub focus: FocusCursor,
    pub config: Config,
    pub theme: Theme,
    pub area: Rect,
    pub selections: Vec<SelectionRecord>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, items: Vec<MenuItem>, theme: Theme) -> Self {
        let mut focus = FocusCursor::new();
        focus.focus_trigger();
        Self {
            menu: Menu::new(items),
            focus,
            config,
            theme,
            area: Rect::default(),
            selections: Vec::new(),
            should_quit: false,
        }
    }

    pub fn layout(&self) -> MenuLayout {
        let main = AppLayout::new(self.area).main;
        MenuLayout::new(&self.menu, &self.config.trigger_label, main)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let input = key_input(key);
        let event = match self.focus.target().clone() {
            FocusTarget::Item { list, index } if self.menu.is_open() => {
                self.menu.on_item_key(&list, index, input, &mut self.focus)
            }
            FocusTarget::Trigger => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                    return;
                }
                self.menu.on_trigger_key(input, &mut self.focus)
            }
            // Focus left the widget (Tab) or was never placed: the trigger is
            // the only other stop in the tab order.
            _ => {
                match input.key {
                    MenuKey::Tab => self.focus.focus_trigger(),
                    MenuKey::Char('q') => self.should_quit = true,
                    _ => {}
                }
                None
            }
        };
        self.record(event);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = self.layout();
        let event = match layout.hit_test(&self.menu, mouse.column, mouse.row) {
            Hit::Trigger => {
                self.focus.focus_trigger();
                self.menu.on_trigger_click(&mut self.focus)
            }
            Hit::Item { list, index } => self.menu.on_item_click(&list, index, &mut self.focus),
            Hit::List => None,
            Hit::Outside => self.menu.on_outside_interaction(),
        };
        self.record(event);
    }

    fn record(&mut self, event: Option<MenuEvent>) {
        if let Some(MenuEvent::Selected(selection)) = event {
            info!(label = %selection.label, path = ?selection.path, "selection received");
            self.selections.push(SelectionRecord {
                selection,
                at: Local::now(),
            });
        }
    }

    pub fn last_selection_text(&self) -> Option<String> {
        self.selections.last().map(|record| {
            format!(
                "{} selected {}",
                record.at.format("%H:%M:%S"),
                record.selection.label
            )
        })
    }

    /// Accessibility attributes of whatever holds focus, as a markup host
    /// would render them.
    pub fn focus_description(&self) -> String {
        match self.focus.target() {
            FocusTarget::Trigger => {
                let aria = trigger_aria(self.menu.is_open());
                format!(
                    "button aria-haspopup={} aria-expanded={}",
                    aria.has_popup, aria.expanded
                )
            }
            FocusTarget::Item { list, index } => {
                let mut path = list.clone();
                path.push(*index);
                match item_at(self.menu.items(), &path) {
                    Some(item) if self.menu.is_open() => item_aria(item)
                        .attributes()
                        .into_iter()
                        .map(|(name, value)| format!("{name}={value}"))
                        .collect::<Vec<_>>()
                        .join(" "),
                    _ => String::new(),
                }
            }
            FocusTarget::None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use menutree::engine::submenu::is_all_closed;
    use menutree::store::menu_file::load_bundled;

    fn app() -> App {
        let mut app = App::new(
            Config::default(),
            load_bundled("site").unwrap(),
            Theme::default(),
        );
        app.area = Rect::new(0, 0, 80, 24);
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn keyboard_selection_is_recorded() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        assert!(app.menu.is_open());
        app.handle_key(press(KeyCode::Char('s')));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::End));
        app.handle_key(press(KeyCode::Enter));

        assert!(!app.menu.is_open());
        assert_eq!(app.selections.len(), 1);
        assert_eq!(app.selections[0].selection.label, "SEO");
        assert!(app.last_selection_text().unwrap().ends_with("selected SEO"));
        assert!(app.focus.is_trigger_focused());
    }

    #[test]
    fn q_only_quits_from_trigger() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_leaves_menu_and_returns_to_trigger() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Tab));
        assert!(!app.menu.is_open());
        assert!(!app.focus.is_trigger_focused());
        app.handle_key(press(KeyCode::Tab));
        assert!(app.focus.is_trigger_focused());
    }

    #[test]
    fn clicking_outside_closes_everything() {
        let mut app = app();
        let trigger = app.layout().trigger;
        app.handle_mouse(click(trigger.x, trigger.y));
        assert!(app.menu.is_open());

        let (_, top) = app.layout().lists[0];
        app.handle_mouse(click(top.x + 1, top.y + 3));
        assert_eq!(app.menu.open_path(), vec![2]);

        app.handle_mouse(click(79, 20));
        assert!(!app.menu.is_open());
        assert!(is_all_closed(app.menu.items()));
    }

    #[test]
    fn focus_description_reports_aria() {
        let mut app = app();
        assert_eq!(
            app.focus_description(),
            "button aria-haspopup=true aria-expanded=false"
        );
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Up));
        assert!(app.focus_description().contains("aria-haspopup=true"));
        assert!(app.focus_description().contains("aria-label=Services"));
    }
}
