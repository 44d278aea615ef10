//! Booking screen: date, time, bowlers, lanes and one shoe size per bowler.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::BookingRequest;
use crate::model::{BookingDraft, DraftEdit, ShoeId};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the booking date.
const DATE: usize = 0;
/// Field index for the booking time.
const TIME: usize = 1;
/// Field index for the number of players.
const PLAYERS: usize = 2;
/// Field index for the number of lanes.
const LANES: usize = 3;

/// Longest shoe size accepted, in characters.
const MAX_SHOE_SIZE_LEN: usize = 2;

fn date_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-'
}

fn time_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ':'
}

fn count_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Empty or unparsable counts are zero, which validation treats as missing.
fn parse_count(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}

/// Which input currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the fixed form fields, by index.
    Field(usize),
    /// A shoe-size entry, by identifier.
    Shoe(ShoeId),
}

/// State for the booking screen.
///
/// Every edit goes through [`BookingDraft::apply`]; the form only holds the
/// text being typed into the fixed fields.
#[derive(Debug, Clone)]
pub struct BookingState {
    form: Form,
    draft: BookingDraft,
    focus: Focus,
    error: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingState {
    /// Creates an empty booking form.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Date (YYYY-MM-DD)", 10, date_char),
                FormField::new("Time (HH:MM)", 5, time_char),
                FormField::new("Number of awesome bowlers", 2, count_char),
                FormField::new("Number of lanes", 2, count_char),
            ]),
            draft: BookingDraft::new(),
            focus: Focus::Field(DATE),
            error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Char('+') => {
                self.add_shoe();
                Action::None
            }
            KeyCode::Delete => {
                self.remove_focused_shoe();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::F(2) => Action::Navigate(Screen::Confirmation),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the draft being edited.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the focused input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the message on the error line, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the message on the error line.
    ///
    /// Used to show submission failures reported by the API.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Discards the draft and starts over.
    pub fn reset(&mut self) {
        self.form.reset();
        self.draft = BookingDraft::new();
        self.focus = Focus::Field(DATE);
        self.error = None;
    }

    /// Focus stops in Tab order: fixed fields, then shoe entries.
    fn focus_stops(&self) -> Vec<Focus> {
        (DATE..=LANES)
            .map(Focus::Field)
            .chain(self.draft.shoes().iter().map(|shoe| Focus::Shoe(shoe.id)))
            .collect()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Field(i) => self.form.set_focus(Some(i)),
            Focus::Shoe(_) => self.form.set_focus(None),
        }
    }

    fn focus_next(&mut self) {
        let stops = self.focus_stops();
        let next = stops
            .iter()
            .position(|stop| *stop == self.focus)
            .map_or(0, |i| (i + 1) % stops.len());
        self.set_focus(stops[next]);
    }

    fn focus_prev(&mut self) {
        let stops = self.focus_stops();
        let prev = stops
            .iter()
            .position(|stop| *stop == self.focus)
            .map_or(0, |i| (i + stops.len() - 1) % stops.len());
        self.set_focus(stops[prev]);
    }

    fn insert_char(&mut self, ch: char) {
        match self.focus {
            Focus::Field(i) => {
                if self.form.insert_char(ch) {
                    self.sync_field(i);
                }
            }
            Focus::Shoe(id) => {
                let Some(shoe) = self.draft.shoe(id) else {
                    return;
                };
                if ch.is_ascii_digit() && shoe.size.len() < MAX_SHOE_SIZE_LEN {
                    let size = format!("{}{ch}", shoe.size);
                    self.draft.apply(DraftEdit::ShoeSize(id, size));
                }
            }
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Focus::Field(i) => {
                if self.form.delete_char() {
                    self.sync_field(i);
                }
            }
            Focus::Shoe(id) => {
                if let Some(shoe) = self.draft.shoe(id) {
                    let mut size = shoe.size.clone();
                    if size.pop().is_some() {
                        self.draft.apply(DraftEdit::ShoeSize(id, size));
                    }
                }
            }
        }
    }

    /// Copies a fixed field's text into the draft.
    fn sync_field(&mut self, index: usize) {
        let value = self.form.value(index).to_string();
        let edit = match index {
            DATE => DraftEdit::Date(value),
            TIME => DraftEdit::Time(value),
            PLAYERS => DraftEdit::Players(parse_count(&value)),
            _ => DraftEdit::Lanes(parse_count(&value)),
        };
        self.draft.apply(edit);
    }

    /// Appends a shoe entry and focuses it.
    fn add_shoe(&mut self) {
        if let Some(id) = self.draft.apply(DraftEdit::AddShoe) {
            self.set_focus(Focus::Shoe(id));
        }
    }

    /// Removes the focused shoe entry; focus moves to its neighbour.
    fn remove_focused_shoe(&mut self) {
        let Focus::Shoe(id) = self.focus else {
            return;
        };
        let Some(index) = self.draft.shoes().iter().position(|shoe| shoe.id == id) else {
            return;
        };
        self.draft.apply(DraftEdit::RemoveShoe(id));

        let shoes = self.draft.shoes();
        let next = shoes
            .get(index)
            .or_else(|| index.checked_sub(1).and_then(|i| shoes.get(i)))
            .map_or(Focus::Field(LANES), |shoe| Focus::Shoe(shoe.id));
        self.set_focus(next);
    }

    /// Validates the draft; on success hands a request to the app.
    fn submit(&mut self) -> Action {
        match BookingRequest::from_draft(&self.draft) {
            Ok(request) => {
                self.error = None;
                Action::Submit(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Action::None
            }
        }
    }
}

/// First shoe row to draw so the focused entry stays inside a list `height` rows tall.
///
/// Without a focused entry the list starts at the top.
fn shoe_scroll(focused: Option<usize>, total: usize, height: u16) -> u16 {
    let height = usize::from(height);
    let max_scroll = total.saturating_sub(height);
    let scroll = focused.map_or(0, |i| (i + 1).saturating_sub(height));
    u16::try_from(scroll.min(max_scroll)).unwrap_or(u16::MAX)
}

/// Renders the booking screen.
#[mutants::skip]
pub fn draw_booking(state: &BookingState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Strajk Bowling ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [heading_area, form_area, shoes_title_area, shoes_area, error_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(state.form().height()),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "When, WHAT & Who",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, heading_area);

    draw_form(state.form(), frame, form_area);

    let shoes_title = Paragraph::new(Line::from(Span::styled(
        "Shoes",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(shoes_title, shoes_title_area);

    let shoe_lines: Vec<Line> = state
        .draft()
        .shoes()
        .iter()
        .enumerate()
        .map(|(i, shoe)| {
            let focused = state.focus() == Focus::Shoe(shoe.id);
            let style = if focused {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            let cursor = if focused { "\u{2588}" } else { "" };
            Line::from(Span::styled(
                format!("Shoe size / person {}: {}{cursor}", i + 1, shoe.size),
                style,
            ))
        })
        .collect();
    let focused_shoe = match state.focus() {
        Focus::Shoe(id) => state.draft().shoes().iter().position(|s| s.id == id),
        Focus::Field(_) => None,
    };
    let scroll = shoe_scroll(focused_shoe, shoe_lines.len(), shoes_area.height);
    frame.render_widget(Paragraph::new(shoe_lines).scroll((scroll, 0)), shoes_area);

    if let Some(err) = state.error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(vec![
        Line::from("Tab: next  +: add shoe  Del: remove shoe  Enter: strIIIIIike!"),
        Line::from("F2: last booking  Esc: quit"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
