//! The interactive loop: paint with the mouse, press space to search.

use std::error::Error;
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gridpath_core::{self as core, CellState, Grid};
use gridpath_search::{CancelToken, Outcome, Session, Step, StepHook};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::TermConfig;
use crate::driver::{Input, TermDriver};
use crate::scatter::scatter_barriers;

const IDLE_POLL: Duration = Duration::from_millis(50);

const HELP: &str = "left: place  right: erase  space: search  c: clear search  x: clear all  r: scatter  q: quit";

// ---------------------------------------------------------------------------
// Animator
// ---------------------------------------------------------------------------

/// Step hook that redraws changed cells after every settle, then pauses
/// while watching for a quit key.
struct Animator<'a> {
    driver: &'a mut TermDriver,
    drawn: &'a mut Vec<CellState>,
    token: CancelToken,
    delay: Duration,
}

impl StepHook for Animator<'_> {
    fn on_step(&mut self, grid: &Grid, _step: Step) {
        let frame = grid.diff(self.drawn.as_slice());
        if let Err(e) = self.driver.flush(&frame) {
            log::error!("redraw failed, cancelling search: {e}");
            self.token.cancel();
            return;
        }
        self.drawn.clear();
        self.drawn.extend_from_slice(grid.states());

        match self.driver.wait_for_quit(self.delay) {
            Ok(true) => {
                log::info!("search cancelled from keyboard");
                self.token.cancel();
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("input failed, cancelling search: {e}");
                self.token.cancel();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// TermApp
// ---------------------------------------------------------------------------

/// Terminal application owning one [`Session`] and the driver that shows it.
pub struct TermApp {
    session: Session,
    driver: TermDriver,
    config: TermConfig,
    rng: StdRng,
    // Cell states as last drawn, for frame diffs.
    drawn: Vec<CellState>,
    message: String,
    quit: bool,
}

impl TermApp {
    pub fn new(config: TermConfig) -> Result<Self, Box<dyn Error>> {
        let session = Session::new(config.session)?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        log::info!(
            "grid {}x{}, barrier seed {}",
            config.session.rows,
            config.session.rows,
            seed
        );
        Ok(Self {
            session,
            driver: TermDriver::new().with_mouse(config.mouse),
            rng: StdRng::seed_from_u64(seed),
            config,
            drawn: Vec::new(),
            message: String::from(HELP),
            quit: false,
        })
    }

    /// Run until the user quits. The terminal is restored on every exit
    /// path.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init(self.session.grid().rows())?;
        let result = self.event_loop();
        self.driver.close();
        result.map_err(Into::into)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.refresh()?;
        while !self.quit {
            let Some(input) = self.driver.poll(IDLE_POLL)? else {
                continue;
            };
            self.handle(input)?;
            self.refresh()?;
        }
        Ok(())
    }

    fn handle(&mut self, input: Input) -> io::Result<()> {
        match input {
            Input::Quit => self.quit = true,
            Input::Place(p) => {
                let r = self.session.place(p).map(drop);
                self.report(r);
            }
            Input::Erase(p) => {
                let r = self.session.erase(p).map(drop);
                self.report(r);
            }
            Input::Run => self.run_search()?,
            Input::ClearSearch => {
                self.session.clear_search();
                self.message = String::from(HELP);
            }
            Input::ClearAll => {
                self.session.clear();
                self.message = String::from(HELP);
            }
            Input::Scatter => {
                match scatter_barriers(&mut self.session, &mut self.rng, self.config.barrier_density)
                {
                    Ok(n) => self.message = format!("added {n} barriers"),
                    Err(e) => self.report(Err(e)),
                }
            }
            Input::Redraw => {
                self.drawn.clear();
                self.driver.clear_screen()?;
            }
        }
        Ok(())
    }

    fn run_search(&mut self) -> io::Result<()> {
        let token = CancelToken::new();
        let animator = Animator {
            driver: &mut self.driver,
            drawn: &mut self.drawn,
            token: token.clone(),
            delay: self.config.step_delay,
        };
        match self.session.run(animator, token) {
            Ok(outcome) => {
                self.message = match outcome {
                    Outcome::Found => format!(
                        "path found: {} steps, {} cells settled (c to clear)",
                        self.session.engine().path().len().saturating_sub(1),
                        self.session.engine().settled().len()
                    ),
                    Outcome::NotReached => String::from("no path exists (c to clear)"),
                    Outcome::Cancelled => String::from("search cancelled (c to clear)"),
                };
            }
            Err(e) => self.report(Err(e)),
        }
        Ok(())
    }

    fn report(&mut self, result: core::Result<()>) {
        match result {
            Ok(()) => {}
            // Clicks outside the grid are not worth a message.
            Err(core::Error::OutOfBounds { .. }) => {}
            Err(e) => {
                log::warn!("{e}");
                self.message = e.to_string();
            }
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        let grid = self.session.grid();
        let frame = grid.diff(&self.drawn);
        self.driver.flush(&frame)?;
        self.drawn.clear();
        self.drawn.extend_from_slice(grid.states());

        let line = grid.rows() as u16;
        let status = self.status_line();
        self.driver.status(line, &status)?;
        self.driver.status(line + 1, &self.message)
    }

    fn status_line(&self) -> String {
        let fmt_point = |p: Option<core::Point>| p.map_or_else(|| String::from("-"), |p| p.to_string());
        let phase = if self.session.is_started() {
            "frozen"
        } else {
            "editing"
        };
        format!(
            "{phase} | start {} | end {} | barriers {}",
            fmt_point(self.session.paint().start()),
            fmt_point(self.session.paint().end()),
            self.session
                .grid()
                .count(CellState::Barrier)
                .saturating_sub(border_len(self.session.grid().rows())),
        )
    }
}

fn border_len(rows: i32) -> usize {
    (4 * (rows - 1)).max(0) as usize
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
