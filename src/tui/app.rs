use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::{Builder, Runtime};

use crate::api::{BookingApi, BookingRequest};
use crate::model::BookingConfirmation;
use crate::storage::{SessionStorage, save_confirmation};

use super::action::Action;
use super::error::AppError;
use super::screens::{BookingState, ConfirmationState, draw_booking, draw_confirmation};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit a booking.
    Booking,
    /// Show the latest booking.
    Confirmation,
}

impl Screen {
    /// Route the screen is known by.
    pub fn path(self) -> &'static str {
        match self {
            Self::Booking => "/",
            Self::Confirmation => "/confirmation",
        }
    }
}

/// Top-level application state.
///
/// Owns the booking API and the session storage; screens never touch either
/// directly and instead return an [`Action`].
pub struct App<A, S> {
    screen: Screen,
    booking: BookingState,
    confirmation: ConfirmationState,
    api: A,
    storage: S,
    endpoint: String,
    runtime: Runtime,
    should_quit: bool,
}

impl<A: BookingApi, S: SessionStorage> App<A, S> {
    /// Creates a new `App` starting on the [`Screen::Booking`] screen.
    ///
    /// `endpoint` is only shown in the status bar.
    pub fn new(api: A, storage: S, endpoint: impl Into<String>) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            screen: Screen::Booking,
            booking: BookingState::new(),
            confirmation: ConfirmationState::new(),
            api,
            storage,
            endpoint: endpoint.into(),
            runtime,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen with the status bar underneath.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [screen_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Booking => draw_booking(&self.booking, frame, screen_area),
            Screen::Confirmation => draw_confirmation(&self.confirmation, frame, screen_area),
        }

        let ctx = StatusBarContext {
            route: self.screen.path().to_string(),
            endpoint: self.endpoint.clone(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: Ctrl+C first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match self.screen {
            Screen::Booking => self.booking.handle_key(key),
            Screen::Confirmation => self.confirmation.handle_key(key),
        };
        self.apply(action);
    }

    /// Opens the confirmation route without a payload, as a fresh load would.
    pub fn open_confirmation(&mut self) {
        self.navigate(Screen::Confirmation, None);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen, None),
            Action::Submit(request) => self.submit(request),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Switches screens. The confirmation screen resolves `payload` first,
    /// then session storage; the booking screen always starts from a fresh draft.
    fn navigate(&mut self, screen: Screen, payload: Option<BookingConfirmation>) {
        match screen {
            Screen::Booking => self.booking.reset(),
            Screen::Confirmation => {
                self.confirmation = ConfirmationState::resolve(payload, &self.storage);
            }
        }
        tracing::debug!(route = screen.path(), "navigate");
        self.screen = screen;
    }

    /// Sends a validated booking and, on success, persists and shows it.
    ///
    /// Blocks until the API answers. A failure keeps the draft and shows the
    /// reason on the booking screen.
    fn submit(&mut self, request: BookingRequest) {
        tracing::info!(
            players = request.player_count(),
            lanes = request.lane_count(),
            price = request.price(),
            "submitting booking"
        );

        let result = self.runtime.block_on(self.api.create_booking(&request));
        match result {
            Ok(confirmation) => {
                if confirmation.price != request.price() {
                    tracing::warn!(
                        expected = request.price(),
                        returned = confirmation.price,
                        "booking API returned a different price"
                    );
                }
                if let Err(e) = save_confirmation(&mut self.storage, &confirmation) {
                    tracing::warn!(error = %e, "could not store confirmation");
                }
                tracing::info!(booking_id = %confirmation.booking_id, "booking confirmed");
                self.navigate(Screen::Confirmation, Some(confirmation));
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking failed");
                self.booking.set_error(format!("Bokningen misslyckades: {e}"));
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the booking screen state.
    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    /// Returns the confirmation screen state.
    pub fn confirmation(&self) -> &ConfirmationState {
        &self.confirmation
    }

    /// Returns a reference to the booking API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns a reference to the session storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
