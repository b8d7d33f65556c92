//! Text input widget
//!
//! Draws a [`LineEditor`] on one line with a block cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::session::LineEditor;

/// One-line view over a line editor
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    editor: &'a LineEditor,
    focused: bool,
    placeholder: &'a str,
    label: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(editor: &'a LineEditor) -> Self {
        Self {
            editor,
            focused: true,
            placeholder: "",
            label: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Shown in gray while the editor is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width.min(area.width);
        let input_width = area.width.saturating_sub(label_width);

        if self.editor.is_empty() {
            if !self.placeholder.is_empty() {
                let start = if self.focused { input_start + 1 } else { input_start };
                let width = input_width.saturating_sub(start - input_start) as usize;
                buf.set_stringn(
                    start,
                    area.y,
                    self.placeholder,
                    width,
                    Style::default().fg(Color::DarkGray),
                );
            }
        } else {
            buf.set_stringn(
                input_start,
                area.y,
                self.editor.value(),
                input_width as usize,
                Style::default().fg(Color::White),
            );
        }

        if self.focused {
            let cursor_x = input_start + self.editor.cursor() as u16;
            if cursor_x < area.x + area.width {
                let (_, after) = self.editor.split_at_cursor();
                let cursor_char = after.chars().next().unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
