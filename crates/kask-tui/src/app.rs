//! Main application state and logic for the kask TUI.
//!
//! The `App` struct owns the kegs being shown, the selection cursor, and the
//! pane registry, and runs the terminal event loop.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use kask_core::{KaskError, KegOnTap};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, info};

use crate::event::{AppEvent, InputHandler};
use crate::navigation::Navigator;
use crate::pane::{LayoutPass, PaneKey, PaneRegistry};
use crate::theme::Theme;
use crate::widget::PaneView;

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// How long to wait for input before checking the quit flag again.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state.
pub struct App {
    /// Active kegs in tap order
    kegs: Vec<KegOnTap>,
    /// Which keg is selected
    navigator: Navigator,
    /// Every pane on screen, plus stacking and focus
    panes: PaneRegistry,
    /// Input handler for key events
    input_handler: InputHandler,
    /// Colors
    theme: Theme,
    /// Whether the app should quit
    should_quit: bool,
    /// Dirty flag - whether UI needs redraw
    dirty: bool,
    /// Terminal size the panes were last laid out for
    cached_size: Option<Rect>,
}

impl App {
    /// Create an app showing `kegs`, with the first keg selected.
    ///
    /// Fails with [`KaskError::EmptyDashboard`] when there is nothing to show.
    pub fn new(kegs: Vec<KegOnTap>) -> kask_core::Result<Self> {
        let navigator = Navigator::new(kegs.len()).ok_or(KaskError::EmptyDashboard)?;
        Ok(Self {
            kegs,
            navigator,
            panes: PaneRegistry::new(),
            input_handler: InputHandler::new(),
            theme: Theme::default(),
            should_quit: false,
            dirty: true,
            cached_size: None,
        })
    }

    /// Kegs in display order.
    pub fn kegs(&self) -> &[KegOnTap] {
        &self.kegs
    }

    /// Index of the selected keg.
    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    /// The selected keg.
    pub fn current_keg(&self) -> &KegOnTap {
        &self.kegs[self.navigator.current()]
    }

    /// The pane registry.
    pub fn panes(&self) -> &PaneRegistry {
        &self.panes
    }

    /// Returns whether the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Mark the UI as dirty (needs redraw).
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if UI needs redraw and clear the dirty flag.
    fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Whether something changed since the last draw.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Select the next keg.
    pub fn advance(&mut self) {
        self.navigator.advance();
        self.show_current();
    }

    /// Select the previous keg.
    pub fn retreat(&mut self) {
        self.navigator.retreat();
        self.show_current();
    }

    /// Put the selected keg's panes on top, focus them, and repaint the tap
    /// list.
    fn show_current(&mut self) {
        let current = self.navigator.current();
        let keg_id = self.kegs[current].keg.id;
        self.panes.bring_to_front(current);
        self.panes.repaint_tap_list(&self.kegs, current, &self.theme);
        debug!(index = current, keg_id, "selected keg");
        self.mark_dirty();
    }

    /// Lay panes out for a terminal area.
    ///
    /// A no-op when nothing changed since the last pass.
    pub fn layout(&mut self, area: Rect) -> LayoutPass {
        let pass = self.panes.layout(&self.kegs, area, &self.theme);
        self.cached_size = Some(area);
        if !pass.is_noop() {
            self.show_current();
        }
        pass
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let event = self.input_handler.handle_key(key);
        self.handle_app_event(event);
    }

    /// Handle an application event.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Advance => self.advance(),
            AppEvent::Retreat => self.retreat(),
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Resize => self.mark_dirty(),
            AppEvent::None => {}
        }
    }

    /// Run the main application loop.
    ///
    /// The terminal is handed back on every exit path, including setup
    /// failures part way through.
    pub fn run(&mut self) -> AppResult<()> {
        let guard = TerminalGuard::acquire()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(|e| KaskError::terminal_init(e.to_string()))?;

        info!(kegs = self.kegs.len(), "dashboard started");

        let result = self.run_loop(&mut terminal);
        drop(terminal);

        let restored = guard.release();
        result?;
        restored?;
        Ok(())
    }

    /// The inner event loop. Redraws only after something changed.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
        while !self.should_quit {
            if self.take_dirty() {
                terminal.draw(|frame| self.draw(frame))?;
            }

            if event::poll(EVENT_POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.handle_app_event(AppEvent::Resize);
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if self.cached_size != Some(area) {
            self.layout(area);
        }

        let focused = self.panes.focused();
        for pane in self.panes.visible() {
            let view = PaneView::new(pane, &self.theme).focused(focused == Some(pane.key()));
            frame.render_widget(view, pane.area());
        }

        if let Some(tap_list) = self.panes.get(&PaneKey::TapList) {
            frame.render_widget(PaneView::new(tap_list, &self.theme), tap_list.area());
        }

        // Anything the layout pass marked is on screen now.
        self.dirty = false;
    }
}

/// Raw mode and the alternate screen, held for the dashboard's lifetime.
///
/// Dropping the guard restores the terminal; [`TerminalGuard::release`] does
/// the same and reports failures.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen. Raw mode is undone again if
    /// the screen switch fails.
    fn acquire() -> kask_core::Result<Self> {
        crossterm::terminal::enable_raw_mode()
            .map_err(|e| KaskError::terminal_init(e.to_string()))?;
        let guard = Self { active: true };
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
            .map_err(|e| KaskError::terminal_init(e.to_string()))?;
        Ok(guard)
    }

    /// Restore the terminal now.
    fn release(mut self) -> kask_core::Result<()> {
        self.active = false;
        restore_terminal(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal(&mut io::stdout());
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Every step runs even when an earlier one fails; the first failure is
/// returned.
fn restore_terminal<W: Write>(out: &mut W) -> kask_core::Result<()> {
    let steps = [
        crossterm::terminal::disable_raw_mode(),
        leave_screen(out),
    ];
    first_failure(steps)
}

/// Switch back to the main screen and show the cursor.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    crossterm::execute!(
        out,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )
}

fn first_failure<const N: usize>(steps: [io::Result<()>; N]) -> kask_core::Result<()> {
    match steps.into_iter().find_map(|step| step.err()) {
        Some(e) => Err(KaskError::terminal_restore(e.to_string())),
        None => Ok(()),
    }
}
