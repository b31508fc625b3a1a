// Domain layer - core simulation engine
pub mod domain;

// Application layer - interactive session state machine
pub mod application;

// Infrastructure layer - terminal I/O adapters
pub mod input;
pub mod rendering;
pub mod terminal;

// Re-exports for convenience
pub use application::{Action, Frame, Session, SessionEvent};
pub use domain::{Cell, LiveSet, Pattern, presets};
pub use terminal::{TerminalError, Tui};
