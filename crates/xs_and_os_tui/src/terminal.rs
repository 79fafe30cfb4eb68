//! Taking over the terminal and handing it back.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action when dropped.
pub(crate) struct OnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Enables raw mode, the alternate screen and mouse capture.
///
/// The returned guard undoes all three when dropped, whether the session
/// ends normally or any later step fails.
pub(crate) fn take_over() -> io::Result<OnDrop<fn()>> {
    take_over_with(
        enable_raw_mode,
        || execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture),
        restore as fn(),
    )
}

fn take_over_with<F: FnOnce()>(
    enter_raw: impl FnOnce() -> io::Result<()>,
    enter_screen: impl FnOnce() -> io::Result<()>,
    restore: F,
) -> io::Result<OnDrop<F>> {
    enter_raw()?;
    // Raw mode is on from here, so a failure below must still restore.
    let guard = OnDrop::new(restore);
    enter_screen()?;
    Ok(guard)
}

/// Best effort: each step runs even if an earlier one failed.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    debug!("Terminal restored");
}
