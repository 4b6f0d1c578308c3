//! Crossterm terminal driver.
//!
//! [`TermDriver`] owns the terminal: it switches to the alternate screen,
//! draws grid [`Frame`]s two columns per cell, and maps crossterm events to
//! [`Input`]s.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Frame, Point};

use crate::palette;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Lines below the grid used for status text.
pub const STATUS_LINES: u16 = 2;

/// A user command decoded from a terminal event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Primary button pressed or dragged over a cell.
    Place(Point),
    /// Secondary button pressed or dragged over a cell.
    Erase(Point),
    /// Start the search.
    Run,
    /// Quit when idle, cancel when a search is running.
    Quit,
    /// Drop search marks, keep the maze.
    ClearSearch,
    /// Reset the whole grid.
    ClearAll,
    /// Scatter random barriers.
    Scatter,
    /// The terminal was resized; everything must be redrawn.
    Redraw,
}

/// Cell under a terminal position.
#[inline]
pub fn to_point(column: u16, row: u16) -> Point {
    Point::new(row as i32, (column / CELL_WIDTH) as i32)
}

fn key_input(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Input::Run),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('c') => Some(Input::ClearSearch),
        KeyCode::Char('x') => Some(Input::ClearAll),
        KeyCode::Char('r') => Some(Input::Scatter),
        _ => None,
    }
}

fn mouse_input(me: MouseEvent) -> Option<Input> {
    let p = to_point(me.column, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Input::Place(p))
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(Input::Erase(p))
        }
        _ => None,
    }
}

/// Maps a crossterm [`Event`] to an [`Input`].
pub fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(key) => key_input(key),
        Event::Mouse(me) => mouse_input(me),
        Event::Resize(..) => Some(Input::Redraw),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct TermDriver {
    out: Stdout,
    mouse_enabled: bool,
    active: bool,
}

impl TermDriver {
    /// Create a new driver. Nothing touches the terminal until
    /// [`init`](TermDriver::init).
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Take over the terminal for a grid of `rows` rows.
    ///
    /// Fails without changing the terminal if it is too small.
    pub fn init(&mut self, rows: i32) -> io::Result<()> {
        let (cols, lines) = terminal::size()?;
        let need_cols = rows as u32 * CELL_WIDTH as u32;
        let need_lines = rows as u32 + STATUS_LINES as u32;
        if (cols as u32) < need_cols || (lines as u32) < need_lines {
            return Err(io::Error::other(format!(
                "terminal is {cols}x{lines}, a {rows}-row grid needs {need_cols}x{need_lines}"
            )));
        }

        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(self.out, event::EnableMouseCapture)?;
        }
        log::debug!("terminal {}x{} initialised", cols, lines);
        Ok(())
    }

    /// Wait up to `timeout` for one event and decode it.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_input(event::read()?))
    }

    /// Sleep for `delay` while watching for [`Input::Quit`]. Other input is
    /// discarded. Returns `true` if quit was requested.
    pub fn wait_for_quit(&mut self, delay: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if self.poll(left)? == Some(Input::Quit) {
                return Ok(true);
            }
            if left.is_zero() || Instant::now() >= deadline {
                return Ok(false);
            }
        }
    }

    /// Draw the changed cells of `frame`.
    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        for fc in &frame.cells {
            let p = fc.pos;
            queue!(
                self.out,
                cursor::MoveTo(p.col as u16 * CELL_WIDTH, p.row as u16),
                SetBackgroundColor(palette::color(fc.state)),
                SetForegroundColor(palette::BLACK),
                Print(palette::glyph(fc.state))
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Replace the text on terminal line `line`.
    pub fn status(&mut self, line: u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, line),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    /// Wipe the screen, e.g. after a resize.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, terminal::Clear(ClearType::All))
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if self.mouse_enabled {
            let _ = execute!(self.out, event::DisableMouseCapture);
        }
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for TermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermDriver {
    fn drop(&mut self) {
        self.close();
    }
}
