//! The draw/event loop.

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::segments::SegmentStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// UI heartbeat. Repaints are cheap; the fetch cadence lives in the
/// refresh task, not here.
pub const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(store: SegmentStore, events: EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store);

    loop {
        terminal.draw(|frame| draw(frame, &app.segments()))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick | AppEvent::Refresh) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
