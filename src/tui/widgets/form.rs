//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one rendered field, borders included.
pub const FIELD_HEIGHT: u16 = 3;

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Maximum number of characters accepted.
    pub max_len: usize,
    /// Characters the field accepts; anything else is ignored.
    pub accepts: fn(char) -> bool,
}

impl FormField {
    /// Creates a new empty form field.
    pub fn new(label: impl Into<String>, max_len: usize, accepts: fn(char) -> bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            max_len,
            accepts,
        }
    }
}

/// A multi-field text form. Focus can be parked outside the form with `None`.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: Option<usize>,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        let focus = (!fields.is_empty()).then_some(0);
        Self { fields, focus }
    }

    /// Returns the index of the focused field, if the form has focus.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Moves focus to a field, or away from the form with `None`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_focus(&mut self, focus: Option<usize>) {
        match focus {
            Some(i) if i >= self.fields.len() => {}
            other => self.focus = other,
        }
    }

    /// Appends a character to the focused field.
    ///
    /// Returns `true` if the value changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let Some(field) = self.focus.and_then(|i| self.fields.get_mut(i)) else {
            return false;
        };
        if !(field.accepts)(ch) || field.value.chars().count() >= field.max_len {
            return false;
        }
        field.value.push(ch);
        true
    }

    /// Deletes the last character from the focused field.
    ///
    /// Returns `true` if the value changed.
    pub fn delete_char(&mut self) -> bool {
        self.focus
            .and_then(|i| self.fields.get_mut(i))
            .and_then(|field| field.value.pop())
            .is_some()
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Resets all field values and moves focus back to the first field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = (!self.fields.is_empty()).then_some(0);
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the height needed to draw every field.
    pub fn height(&self) -> u16 {
        FIELD_HEIGHT * self.fields.len() as u16
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = form.focus == Some(i);

        let border_color = if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);
    }
}
