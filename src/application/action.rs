use std::time::Duration;

/// Follow-up requests produced by the session state machine for the event
/// loop to execute. The session never performs I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deliver a `Tick` event after the given delay.
    ///
    /// Fire-and-forget: nothing tracks the outstanding timer. A tick that
    /// lands after the session was paused is a no-op by the transition
    /// table.
    ScheduleTick(Duration),

    /// (Re-)enable mouse capture so pointer presses keep reaching the
    /// session after a resize.
    EnableMouseCapture,

    /// Terminate the session.
    Quit,
}
