//! Translation of terminal events into intents.

use crate::app::ViewState;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::trace;
use xs_and_os::{Action, Loc, Scalar};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Push an action onto the bus.
    Act(Action),
    /// Move the cursor to a location.
    Cursor(Loc),
    /// Show or hide the state panel.
    ToggleDebug,
    /// Draw again without any state change.
    Redraw,
    /// Leave the game.
    Quit,
}

/// Maps a terminal event to an intent, given the view it happened in.
pub fn translate(event: &Event, view: &ViewState) -> Option<Intent> {
    let intent = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, view),
        Event::Mouse(mouse) => translate_mouse(mouse, view),
        Event::Resize(..) => Some(Intent::Redraw),
        _ => None,
    };
    trace!(?event, ?intent, "Translated event");
    intent
}

fn translate_key(key: &KeyEvent, view: &ViewState) -> Option<Intent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::Act(Action::Reset)),
        KeyCode::Char('f') => Some(Intent::Act(Action::Forfeit)),
        KeyCode::Char('d') => Some(Intent::ToggleDebug),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Act(Action::Place(view.cursor()))),
        KeyCode::Char(c) if ('1'..='9').contains(&c) => {
            let index = c.to_digit(10)? as usize - 1;
            Action::place_index(index).map(Intent::Act)
        }
        code => {
            let moved = move_cursor(view.cursor(), code);
            (moved != view.cursor()).then_some(Intent::Cursor(moved))
        }
    }
}

fn translate_mouse(mouse: &MouseEvent, view: &ViewState) -> Option<Intent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let point = Position::new(mouse.column, mouse.row);
    view.cells()
        .iter()
        .find(|(_, area)| area.contains(point))
        .map(|(loc, _)| Intent::Act(Action::Place(*loc)))
}

/// Moves the cursor with arrow keys or hjkl, stopping at the edges.
pub fn move_cursor(cursor: Loc, key: KeyCode) -> Loc {
    let (col, row) = (cursor.col().offset(), cursor.row().offset());

    let (col, row) = match key {
        KeyCode::Left | KeyCode::Char('h') => (col.saturating_sub(1), row),
        KeyCode::Right | KeyCode::Char('l') => (col + 1, row),
        KeyCode::Up | KeyCode::Char('k') => (col, row.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => (col, row + 1),
        _ => (col, row),
    };

    match (Scalar::from_offset(col), Scalar::from_offset(row)) {
        (Some(col), Some(row)) => Loc::new(col, row),
        _ => cursor,
    }
}
