use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::{Action, CellVisual, Direction, Frame, KeyAction, SessionEvent};
use crate::domain::{Cell, LiveSet, presets};

/// Shortest allowed tick interval.
pub const MIN_SPEED: Duration = Duration::from_millis(1);
/// Longest allowed tick interval.
pub const MAX_SPEED: Duration = Duration::from_secs(2);
/// Amount one speed-key press adds or removes.
pub const SPEED_STEP: Duration = Duration::from_millis(50);
/// Tick interval a fresh session starts with.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);

/// Session orchestrates the simulation. This is the application layer that
/// turns discrete external events (ticks, keys, pointer presses, resizes)
/// into engine calls and state changes, and describes the current frame on
/// demand. It owns the live set exclusively and performs no I/O.
pub struct Session {
    width: u16,
    height: u16,
    cells: LiveSet,
    running: bool,
    speed: Duration,
    cell_width: u16,
    selected: Cell,
}

impl Session {
    /// Create a paused session sized to the viewport, pre-seeded with a
    /// small deterministic arrangement so there is something to watch.
    pub fn new(width: u16, height: u16) -> Self {
        let mut cells = LiveSet::new();
        // a blinker row and two stray dots, together a glider
        for (pattern, x, y) in [
            (presets::blinker(), 20, 14),
            (presets::dot(), 21, 14),
            (presets::dot(), 22, 16),
        ] {
            pattern.place_on(&mut cells, x, y);
            debug!(pattern = pattern.name, x, y, "seeded pattern");
        }

        Self {
            width,
            height,
            cells,
            running: false,
            speed: DEFAULT_SPEED,
            cell_width: 2,
            selected: Cell::new(0, 0),
        }
    }

    /// Set the rendered cell width (builder pattern)
    pub fn with_cell_width(mut self, cell_width: u16) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Set the tick interval, clamped to the allowed range (builder pattern)
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn selected(&self) -> Cell {
        self.selected
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    /// Process one event to completion, mutating the session in place.
    /// Returns at most one follow-up request for the event loop.
    pub fn handle(&mut self, event: SessionEvent) -> Option<Action> {
        match event {
            SessionEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
                debug!(width, height, "viewport resized");
                Some(Action::EnableMouseCapture)
            }
            SessionEvent::Tick => {
                if self.running {
                    self.cells = self.cells.step();
                    Some(Action::ScheduleTick(self.speed))
                } else {
                    // latent timer from before a pause; nothing to do
                    None
                }
            }
            SessionEvent::Mouse { column, row, press } => {
                if press {
                    self.toggle_at(column, row);
                }
                None
            }
            SessionEvent::Key(action) => self.handle_key(action),
        }
    }

    fn handle_key(&mut self, action: KeyAction) -> Option<Action> {
        match action {
            KeyAction::Quit => {
                debug!("quit requested");
                Some(Action::Quit)
            }
            KeyAction::ToggleRun => {
                self.running = !self.running;
                debug!(running = self.running, "toggled run state");
                self.running.then(|| Action::ScheduleTick(self.speed))
            }
            KeyAction::SpeedUp => {
                self.speed = self.speed.saturating_sub(SPEED_STEP).max(MIN_SPEED);
                None
            }
            KeyAction::SpeedDown => {
                // from the floor, fall back to one step rather than crawling
                // up a millisecond at a time
                self.speed = if self.speed == MIN_SPEED {
                    SPEED_STEP
                } else {
                    (self.speed + SPEED_STEP).min(MAX_SPEED)
                };
                None
            }
            KeyAction::Clear => {
                if !self.running {
                    self.cells = LiveSet::new();
                }
                None
            }
            KeyAction::Randomize => {
                if !self.running {
                    self.randomize();
                }
                None
            }
            KeyAction::ToggleSelected => {
                if !self.running {
                    self.cells.toggle(self.selected);
                }
                None
            }
            KeyAction::Move(direction) => {
                if !self.running {
                    self.move_selection(direction);
                }
                None
            }
            KeyAction::Step => {
                if !self.running {
                    self.cells = self.cells.step();
                }
                None
            }
        }
    }

    /// Toggle the cell under a pointer press and move the selection there.
    /// Presses outside the visible grid are ignored.
    fn toggle_at(&mut self, column: i32, row: i32) {
        let (grid_width, grid_height) = self.grid_size();
        if column < 0 || row < 0 || grid_width <= 0 {
            return;
        }
        let cx = column / i32::from(self.cell_width.max(1));
        let cy = row;
        if cx < grid_width && cy < grid_height {
            let cell = Cell::new(cx, cy);
            self.cells.toggle(cell);
            self.selected = cell;
        }
    }

    fn move_selection(&mut self, direction: Direction) {
        match direction {
            // X stops at zero; every other direction roams the plane freely
            Direction::Left => self.selected.x = (self.selected.x - 1).max(0),
            Direction::Right => self.selected.x += 1,
            Direction::Up => self.selected.y -= 1,
            Direction::Down => self.selected.y += 1,
        }
    }

    /// Coin-flip every cell of the full viewport extent into the set
    fn randomize(&mut self) {
        let mut rng = rand::rng();
        for x in 0..i32::from(self.width) {
            for y in 0..i32::from(self.height) {
                if rng.random_bool(0.5) {
                    self.cells.insert(Cell::new(x, y));
                }
            }
        }
    }

    /// Visible grid dimensions: two viewport lines are reserved for the
    /// help and status text, and the width is divided by the cell width.
    fn grid_size(&self) -> (i32, i32) {
        let height = (i32::from(self.height) - 2).max(0);
        let width = i32::from(self.width) / i32::from(self.cell_width.max(1));
        (width, height)
    }

    /// Describe the current frame: one visual state per visible cell plus
    /// the help and status lines. Styling is left to the renderer.
    pub fn frame(&self) -> Frame {
        if self.width == 0 || self.height == 0 {
            return Frame::Loading;
        }

        let (grid_width, grid_height) = self.grid_size();
        let mut rows = Vec::with_capacity(grid_height as usize);
        for y in 0..grid_height {
            let mut row = Vec::with_capacity(grid_width as usize);
            for x in 0..grid_width {
                let cell = Cell::new(x, y);
                let alive = self.cells.contains(cell);
                let selected = !self.running && cell == self.selected;
                row.push(match (selected, alive) {
                    (true, true) => CellVisual::SelectedAlive,
                    (true, false) => CellVisual::SelectedDead,
                    (false, true) => CellVisual::Alive,
                    (false, false) => CellVisual::Dead,
                });
            }
            rows.push(row);
        }

        Frame::Grid {
            cells: rows,
            cell_width: self.cell_width.max(1),
            help: self.help_line(),
            status: self.status_line(),
        }
    }

    fn help_line(&self) -> String {
        let help = if self.running {
            "[q] quit  [space|enter] pause  [+/-] speed  [click] add cell"
        } else {
            "[q] quit  [space|enter] run  [click] toggle  [arrows] select  [tab] toggle  [c] clear  [r] random  [s/n] step"
        };
        let width = usize::from(self.width);
        format!("{help:<width$}")
    }

    fn status_line(&self) -> String {
        let state = if self.running { "RUNNING" } else { "PAUSED" };
        let status = format!("{state} | refresh: {:?}  alive: {}", self.speed, self.cells.len());
        let width = usize::from(self.width);
        format!("{status:<width$}")
    }
}
