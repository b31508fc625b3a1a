use std::time::Duration;

use clap::Parser;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use termlife::application::{Action, Session, SessionEvent};
use termlife::terminal::{TerminalError, Tui};
use termlife::{input, rendering};

/// Conway's Game of Life in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Character columns used to draw one cell
    #[arg(long, default_value_t = 2)]
    cell_width: u16,

    /// Initial tick interval in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), TerminalError> {
    let args = Args::parse();
    // silent unless RUST_LOG asks for output; writes to stderr so the
    // alternate screen stays clean when piped elsewhere
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = crossterm::terminal::size()?;
    let mut session = Session::new(width, height)
        .with_cell_width(args.cell_width)
        .with_speed(Duration::from_millis(args.interval_ms));

    let mut tui = Tui::new()?;
    let mut events = EventStream::new();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

    loop {
        let view = session.frame();
        tui.terminal_mut().draw(|frame| rendering::draw(frame, &view))?;

        let event = tokio::select! {
            terminal_event = events.next() => match terminal_event {
                Some(Ok(event)) => input::translate(&event),
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(()) = tick_rx.recv() => Some(SessionEvent::Tick),
        };
        let Some(event) = event else { continue };

        match session.handle(event) {
            Some(Action::ScheduleTick(delay)) => {
                // fire-and-forget: the session ignores ticks that land
                // after a pause, so nothing tracks this task
                let tick_tx = tick_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tick_tx.send(());
                });
            }
            Some(Action::EnableMouseCapture) => tui.capture_mouse()?,
            Some(Action::Quit) => break,
            None => {}
        }
    }

    Ok(())
}
