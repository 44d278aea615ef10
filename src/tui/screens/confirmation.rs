//! Confirmation screen: shows the latest booking or says there is none.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::BookingConfirmation;
use crate::storage::{SessionStorage, load_confirmation};
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Shown when neither navigation nor storage holds a confirmation.
pub const NO_BOOKING_MESSAGE: &str = "Inga bokning gjord!";

/// State for the confirmation screen.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationState {
    confirmation: Option<BookingConfirmation>,
}

impl ConfirmationState {
    /// Creates a state with no booking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the confirmation to show: the navigation payload if present,
    /// otherwise whatever session storage holds.
    ///
    /// A stored value that cannot be read or decoded counts as no booking.
    pub fn resolve<S: SessionStorage + ?Sized>(
        navigation: Option<BookingConfirmation>,
        storage: &S,
    ) -> Self {
        if let Some(confirmation) = navigation {
            tracing::debug!(booking_id = %confirmation.booking_id, "confirmation from navigation");
            return Self {
                confirmation: Some(confirmation),
            };
        }

        let confirmation = match load_confirmation(storage) {
            Ok(found) => {
                tracing::debug!(found = found.is_some(), "confirmation from session storage");
                found
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable stored confirmation");
                None
            }
        };
        Self { confirmation }
    }

    /// Returns the confirmation being shown, if any.
    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
                Action::Navigate(Screen::Booking)
            }
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the confirmation screen.
#[mutants::skip]
pub fn draw_confirmation(state: &ConfirmationState, frame: &mut Frame, area: Rect) {
    let Some(confirmation) = state.confirmation() else {
        let message = Paragraph::new(vec![Line::from(""), Line::from(NO_BOOKING_MESSAGE)])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    };

    let block = Block::default()
        .title(" See you soon! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [details_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label = Style::default().fg(Color::DarkGray);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("When: ", label),
            Span::raw(confirmation.formatted_when()),
        ]),
        Line::from(vec![
            Span::styled("Who: ", label),
            Span::raw(format!("{} pers", confirmation.people)),
        ]),
        Line::from(vec![
            Span::styled("Lanes: ", label),
            Span::raw(confirmation.lanes.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Booking number: ", label),
            Span::raw(confirmation.booking_id.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total: ", bold),
            Span::styled(confirmation.formatted_price(), bold),
        ]),
        Line::from(Span::styled(confirmation.breakdown(), label)),
    ];
    frame.render_widget(Paragraph::new(lines), details_area);

    let footer = Paragraph::new(Line::from("Enter: new booking  q: quit"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
