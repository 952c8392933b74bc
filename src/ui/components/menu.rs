use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::engine::item::{ListPath, MenuItem, list_at};
use crate::engine::menu::Menu;
use crate::engine::port::{FocusCursor, FocusPort};
use crate::ui::layout::{ListBox, cascade_rects};
use crate::ui::theme::Theme;

const SUBMENU_MARKER: &str = "\u{25b8}";
const TRIGGER_MARKER: &str = "\u{25be}";

/// What a pointer position lands on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    Item { list: ListPath, index: usize },
    /// Inside a list box but not on an item (border, padding).
    List,
    Outside,
}

/// Screen geometry of the trigger and every rendered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub trigger: Rect,
    pub lists: Vec<(ListPath, Rect)>,
}

impl MenuLayout {
    pub fn new(menu: &Menu, trigger_label: &str, area: Rect) -> Self {
        let trigger_width = (trigger_label.chars().count() as u16).saturating_add(6);
        let trigger = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            trigger_width,
            1,
        )
        .intersection(area);

        if !menu.is_open() {
            return Self {
                trigger,
                lists: Vec::new(),
            };
        }

        let open = menu.open_path();
        let mut paths: Vec<ListPath> = vec![Vec::new()];
        for depth in 1..=open.len() {
            paths.push(open[..depth].to_vec());
        }

        let boxes: Vec<ListBox> = paths
            .iter()
            .map(|path| {
                let items = list_at(menu.items(), path).unwrap_or(&[]);
                ListBox {
                    width: list_width(items),
                    rows: items.len() as u16,
                    anchor_row: path.last().copied().unwrap_or(0) as u16,
                }
            })
            .collect();

        let rects = cascade_rects(area, trigger, &boxes);
        Self {
            trigger,
            lists: paths.into_iter().zip(rects).collect(),
        }
    }

    pub fn hit_test(&self, menu: &Menu, column: u16, row: u16) -> Hit {
        let contains = |r: &Rect| {
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        };
        if contains(&self.trigger) {
            return Hit::Trigger;
        }
        // Deeper lists are drawn on top, so test them first
        for (path, rect) in self.lists.iter().rev() {
            if !contains(rect) {
                continue;
            }
            let inner = Block::bordered().inner(*rect);
            let len = list_at(menu.items(), path).map_or(0, <[MenuItem]>::len);
            if contains(&inner) {
                let index = (row - inner.y) as usize;
                if index < len {
                    return Hit::Item {
                        list: path.clone(),
                        index,
                    };
                }
            }
            return Hit::List;
        }
        Hit::Outside
    }
}

fn list_width(items: &[MenuItem]) -> u16 {
    let widest = items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0);
    // border + padding + marker column
    (widest as u16).saturating_add(6)
}

pub struct MenuView<'a> {
    menu: &'a Menu,
    focus: &'a FocusCursor,
    trigger_label: &'a str,
    theme: &'a Theme,
}

impl<'a> MenuView<'a> {
    pub fn new(
        menu: &'a Menu,
        focus: &'a FocusCursor,
        trigger_label: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            menu,
            focus,
            trigger_label,
            theme,
        }
    }

    fn render_trigger(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let focused = self.focus.is_trigger_focused();
        let style = if focused {
            Style::default()
                .fg(colors.focused_fg())
                .bg(colors.focused_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.accent())
        };
        let marker = if self.menu.is_open() { "\u{25b4}" } else { TRIGGER_MARKER };
        let text = format!("[ {} {marker} ]", self.trigger_label);
        Paragraph::new(Line::from(Span::styled(text, style))).render(area, buf);
    }

    fn render_list(&self, path: &[usize], area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let Some(items) = list_at(self.menu.items(), path) else {
            return;
        };
        let has_focus = (0..items.len()).any(|i| self.focus.is_focused(path, i));

        Clear.render(area, buf);
        let block = Block::bordered()
            .border_style(Style::default().fg(if has_focus {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let focused = self.focus.is_focused(path, index);
                let marker = if item.has_submenu() { SUBMENU_MARKER } else { " " };
                let label_width = width.saturating_sub(4);
                let text = format!(" {:<label_width$} {marker} ", item.label);

                let mut style = Style::default().fg(colors.fg());
                if item.disabled {
                    style = style.fg(colors.disabled()).add_modifier(Modifier::DIM);
                } else if item.is_open {
                    style = style.fg(colors.expanded()).add_modifier(Modifier::BOLD);
                }
                if focused {
                    style = style
                        .bg(colors.focused_bg())
                        .fg(colors.focused_fg())
                        .add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(text, style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for &MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = MenuLayout::new(self.menu, self.trigger_label, area);
        self.render_trigger(layout.trigger, buf);
        for (path, rect) in &layout.lists {
            self.render_list(path, *rect, buf);
        }
    }
}
