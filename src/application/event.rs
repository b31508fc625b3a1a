/// Direction of a selection-cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete key actions the session understands. The input adapter maps
/// physical keys onto these; the session never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Terminate the session.
    Quit,
    /// Empty the live set (paused only).
    Clear,
    /// Coin-flip every viewport cell into the live set (paused only).
    Randomize,
    /// Flip between running and paused.
    ToggleRun,
    /// Shorten the tick interval by one step.
    SpeedUp,
    /// Lengthen the tick interval by one step.
    SpeedDown,
    /// Flip the selected cell's membership (paused only).
    ToggleSelected,
    /// Move the selection cursor (paused only).
    Move(Direction),
    /// Advance one generation without starting the timer (paused only).
    Step,
}

/// One discrete external input delivered to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The terminal viewport changed size (character units).
    Resize { width: u16, height: u16 },

    /// A previously scheduled timer fired.
    Tick,

    /// Pointer event at the given character coordinates. `press` is false
    /// for releases, drags and motion, which the session ignores.
    Mouse { column: i32, row: i32, press: bool },

    /// A key press, already translated to its action.
    Key(KeyAction),
}
