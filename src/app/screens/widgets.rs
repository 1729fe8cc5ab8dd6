//! Shared building blocks for screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Split the frame into title, body and help rows
pub fn frame_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Body
            Constraint::Length(3), // Help text
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render the boxed screen title
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(title, area);
}

/// Render a key legend such as "Enter Select  Esc Back"
pub fn render_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

/// Inline status line, red for errors and green otherwise
pub fn status_line(message: &str, is_error: bool) -> Line<'static> {
    let color = if is_error { Color::Red } else { Color::Green };
    Line::from(Span::styled(message.to_string(), Style::default().fg(color)))
}

/// Rectangle centered in `area` taking the given percentages
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Wrapping list selection
#[derive(Debug)]
pub struct Menu {
    len: usize,
    selected: usize,
    state: ListState,
}

impl Menu {
    pub fn new(len: usize) -> Self {
        let mut state = ListState::default();
        state.select(if len > 0 { Some(0) } else { None });
        Self {
            len,
            selected: 0,
            state,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the item count, keeping the selection in range
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        self.state.select(if len > 0 { Some(self.selected) } else { None });
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
            self.state.select(Some(index));
        }
    }

    /// Move selection up, wrapping to the last item
    pub fn select_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            self.len - 1
        };
        self.state.select(Some(self.selected));
    }

    /// Move selection down, wrapping to the first item
    pub fn select_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = if self.selected + 1 < self.len {
            self.selected + 1
        } else {
            0
        };
        self.state.select(Some(self.selected));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>) {
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(Style::default().bg(Color::Magenta).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub secret: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secret: false,
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(label)
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let shown = if self.secret {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };
        let border = if focused { Color::Magenta } else { Color::Gray };
        let text = if focused { format!("{}▏", shown) } else { shown };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.label)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(input, area);
    }
}

/// "[x] label" list row for a switch
pub fn toggle_item(label: &str, value: bool) -> ListItem<'static> {
    let mark = if value { "[x]" } else { "[ ]" };
    let style = if value {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", mark), style),
        Span::raw(label.to_string()),
    ]))
}

/// A focusable button label
pub fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .bg(Color::Magenta)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Magenta)
    };
    Line::from(Span::styled(format!("  {}  ", label), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wraps() {
        let mut menu = Menu::new(3);
        menu.select_previous();
        assert_eq!(menu.selected(), 2);
        menu.select_next();
        assert_eq!(menu.selected(), 0);
        menu.select_next();
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_menu_resize_clamps() {
        let mut menu = Menu::new(5);
        menu.select(4);
        menu.resize(2);
        assert_eq!(menu.selected(), 1);
        menu.resize(0);
        assert!(menu.is_empty());
        menu.select_next();
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::secret("Password");
        field.push('a');
        field.push('b');
        field.backspace();
        assert_eq!(field.value, "a");
        assert!(field.secret);
    }
}
