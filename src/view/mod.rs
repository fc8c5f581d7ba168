//! TUI rendering and terminal management (impure shell).

pub mod constants;
pub mod home;
pub mod search;

use crate::config::ResolvedConfig;
use crate::loader::RecordStore;
use crate::model::AppError;
use crate::state::{Kiosk, Screen};
use constants::POLL_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::info;

/// Draw whichever screen is active.
///
/// Pure with respect to the controller: rendering never mutates state, so
/// it can be exercised against a `TestBackend`.
pub fn draw_ui(frame: &mut Frame, kiosk: &Kiosk, config: &ResolvedConfig) {
    match kiosk.screen {
        Screen::Home => home::render_home(frame, kiosk),
        Screen::Search => search::render_search(frame, kiosk, config),
    }
}

/// Main TUI application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    kiosk: Kiosk,
    config: ResolvedConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and arms
    /// the auto-advance countdown.
    pub fn new(store: RecordStore, config: ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let kiosk = Kiosk::new(
            store,
            config.page_interval,
            config.inactivity_timeout,
            Instant::now(),
        );

        Ok(Self {
            terminal,
            kiosk,
            config,
        })
    }

    /// Run the main event loop until the user quits.
    ///
    /// Single-threaded and event-driven: each pass handles at most one
    /// input event, then offers the current instant to the controller's
    /// countdowns. All timer effects are synchronous within the pass.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            self.kiosk.on_timer(Instant::now());
            self.draw()?;
        }
    }

    /// Restore the terminal to its original state.
    pub fn restore(&mut self) -> Result<(), AppError> {
        disable_raw_mode()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn draw(&mut self) -> Result<(), AppError> {
        let kiosk = &self.kiosk;
        let config = &self.config;
        self.terminal.draw(|frame| draw_ui(frame, kiosk, config))?;
        Ok(())
    }

    /// Handle a single keyboard event. Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, on either screen.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let now = Instant::now();
        match self.kiosk.screen {
            Screen::Home => match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('s') | KeyCode::Char('/') => self.kiosk.go_to_search(),
                _ => {}
            },
            Screen::Search => match key.code {
                KeyCode::Esc => self.kiosk.go_to_home(now),
                KeyCode::Enter => self.kiosk.submit(now),
                KeyCode::Backspace => self.kiosk.backspace(),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.kiosk.push_char(ch)
                }
                _ => {}
            },
        }

        false
    }
}

/// Run the board against a loaded record store.
///
/// Owns terminal setup and teardown; the terminal is restored even when
/// the loop exits with an error.
pub fn run_with_store(store: RecordStore, config: ResolvedConfig) -> Result<(), AppError> {
    let mut app = TuiApp::new(store, config)?;
    let result = app.run();
    let restore_result = app.restore();
    info!("Display board shut down");
    result.and(restore_result)
}
