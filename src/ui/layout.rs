use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Size of one rendered list and the row of the parent item it hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListBox {
    pub width: u16,
    pub rows: u16,
    pub anchor_row: u16,
}

/// Place each open list to the right of its parent, level with the parent
/// item. The top list drops down from the trigger. Every rect is clipped to
/// `area`.
pub fn cascade_rects(area: Rect, trigger: Rect, boxes: &[ListBox]) -> Vec<Rect> {
    let mut rects: Vec<Rect> = Vec::with_capacity(boxes.len());
    for (level, b) in boxes.iter().enumerate() {
        let height = b.rows.saturating_add(2);
        let (x, y) = match rects.last() {
            None => (trigger.x, trigger.bottom()),
            Some(prev) => (prev.right(), prev.y.saturating_add(1).saturating_add(b.anchor_row)),
        };
        // Keep the whole box on screen when it would run off the bottom
        let y = if y.saturating_add(height) > area.bottom() {
            area.bottom().saturating_sub(height).max(area.y)
        } else {
            y
        };
        let rect = Rect::new(x, y, b.width, height).intersection(area);
        tracing::trace!(level, ?rect, "list placed");
        rects.push(rect);
    }
    rects
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_list_drops_below_trigger() {
        let area = Rect::new(0, 0, 80, 24);
        let trigger = Rect::new(2, 1, 10, 1);
        let rects = cascade_rects(
            area,
            trigger,
            &[ListBox {
                width: 16,
                rows: 4,
                anchor_row: 0,
            }],
        );
        assert_eq!(rects, vec![Rect::new(2, 2, 16, 6)]);
    }

    #[test]
    fn child_list_aligns_with_parent_item() {
        let area = Rect::new(0, 0, 80, 24);
        let trigger = Rect::new(0, 0, 10, 1);
        let rects = cascade_rects(
            area,
            trigger,
            &[
                ListBox {
                    width: 12,
                    rows: 4,
                    anchor_row: 0,
                },
                ListBox {
                    width: 14,
                    rows: 2,
                    anchor_row: 2,
                },
            ],
        );
        // Parent item 2 sits at y = 1 (top) + 1 (border) + 2
        assert_eq!(rects[1], Rect::new(12, 4, 14, 4));
    }

    #[test]
    fn lists_are_clipped_to_area() {
        let area = Rect::new(0, 0, 20, 8);
        let trigger = Rect::new(0, 0, 6, 1);
        let rects = cascade_rects(
            area,
            trigger,
            &[
                ListBox {
                    width: 15,
                    rows: 3,
                    anchor_row: 0,
                },
                ListBox {
                    width: 15,
                    rows: 6,
                    anchor_row: 2,
                },
            ],
        );
        assert!(rects.iter().all(|r| r.intersection(area) == *r));
        assert_eq!(rects[1].width, 5);
        assert_eq!(rects[1].bottom(), 8);
    }

    #[test]
    fn hint_lines_wrap() {
        let lines = pack_hint_lines(&["[Enter] Open", "[Esc] Back", "[q] Quit"], 28);
        assert_eq!(lines, vec!["  [Enter] Open  [Esc] Back", "  [q] Quit"]);
        assert!(pack_hint_lines(&[], 20).is_empty());
    }
}
