//! Tests for the event loop, driven with scripted input on a test backend.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
};
use std::io;
use xs_and_os::{Loc, Play, Player, Scalar};
use xs_and_os_tui::{Theme, grid_cells, run, screen_layout};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 50;

fn key(c: char) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
}

fn code(code: KeyCode) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn click(column: u16, row: u16) -> io::Result<Event> {
    Ok(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal")
}

fn screen(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finds `text` inside `area`, returning the buffer cell of its first character.
fn find<'a>(buffer: &'a Buffer, area: Rect, text: &str) -> Option<&'a Cell> {
    let len = text.chars().count() as u16;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right().saturating_sub(len - 1) {
            let matches = text
                .chars()
                .zip(x..)
                .all(|(c, x)| buffer[(x, y)].symbol() == c.to_string());
            if matches {
                return Some(&buffer[(x, y)]);
            }
        }
    }
    None
}

fn cell_area(loc: Loc) -> Rect {
    let layout = screen_layout(Rect::new(0, 0, WIDTH, HEIGHT), false);
    grid_cells(layout.grid)
        .into_iter()
        .find(|(l, _)| *l == loc)
        .map(|(_, area)| area)
        .expect("cell on screen")
}

fn mark<'a>(buffer: &'a Buffer, loc: Loc, symbol: &str) -> &'a Cell {
    find(buffer, cell_area(loc), symbol).expect("mark drawn in cell")
}

fn forfeit_control(buffer: &Buffer) -> &Cell {
    find(buffer, buffer.area, "[f] Forfeit").expect("forfeit control drawn")
}

const THEME: Theme = Theme {
    x: Color::Magenta,
    o: Color::Green,
};

#[tokio::test]
async fn test_forfeit_after_two_moves() {
    let mut terminal = terminal();
    let events = futures::stream::iter(vec![key('5'), key('1'), key('f')]);

    let game = run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    assert_eq!(game.play(), Play::Won);
    assert_eq!(game.player(), Player::O);
    assert_eq!(game.score_of(Player::O), 1);
    assert_eq!(game.at(Loc::new(Scalar::B, Scalar::B)), Some(Player::X));

    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Xs and Os"));
    assert!(text.contains("O won!!!"));
    assert!(text.contains("Player O: 1"));
}

#[tokio::test]
async fn test_quit_stops_processing_input() {
    let mut terminal = terminal();
    let events = futures::stream::iter(vec![key('q'), key('5')]);

    let game = run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    assert!(game.board().is_empty());
    assert!(screen(terminal.backend().buffer()).contains("X to go!"));
}

#[tokio::test]
async fn test_cursor_and_enter_place_a_mark() {
    let mut terminal = terminal();
    let events = futures::stream::iter(vec![code(KeyCode::Up), code(KeyCode::Enter)]);

    let game = run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    assert_eq!(game.at(Loc::new(Scalar::B, Scalar::A)), Some(Player::X));
    assert_eq!(game.player(), Player::O);
}

#[tokio::test]
async fn test_mouse_click_places_a_mark() {
    let layout = screen_layout(Rect::new(0, 0, WIDTH, HEIGHT), false);
    let (loc, cell) = grid_cells(layout.grid)[8];

    let mut terminal = terminal();
    let events = futures::stream::iter(vec![click(cell.x + 1, cell.y + 1)]);

    let game = run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    assert_eq!(loc, Loc::new(Scalar::C, Scalar::C));
    assert_eq!(game.at(loc), Some(Player::X));
}

#[tokio::test]
async fn test_debug_panel_shows_state() {
    let mut terminal = terminal();
    let events = futures::stream::iter(vec![key('d')]);

    run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    let text = screen(terminal.backend().buffer());
    assert!(text.contains("State"));
    assert!(text.contains("\"play\": \"Active\""));
}

#[tokio::test]
async fn test_draw_is_reported() {
    let mut terminal = terminal();
    // X O X / X O O / O X X
    let events = futures::stream::iter(
        ['1', '2', '3', '5', '4', '6', '8', '7', '9']
            .into_iter()
            .map(key)
            .collect::<Vec<_>>(),
    );

    let game = run(&mut terminal, events, Theme::default(), false)
        .await
        .expect("session runs");

    assert_eq!(game.play(), Play::Draw);
    assert_eq!(game.score_of(Player::X), 0);
    assert!(screen(terminal.backend().buffer()).contains("It's a draw!"));
}

#[tokio::test]
async fn test_active_play_uses_theme_and_cursor() {
    let mut terminal = terminal();
    // X top-left, O top-right; cursor stays on the empty centre.
    let events = futures::stream::iter(vec![key('1'), key('3')]);

    run(&mut terminal, events, THEME, false)
        .await
        .expect("session runs");
    let buffer = terminal.backend().buffer();

    let x = mark(buffer, Loc::new(Scalar::A, Scalar::A), "X");
    assert_eq!(x.fg, Color::Magenta);
    assert!(x.modifier.contains(Modifier::BOLD));
    assert!(!x.modifier.contains(Modifier::DIM));

    let o = mark(buffer, Loc::new(Scalar::C, Scalar::A), "O");
    assert_eq!(o.fg, Color::Green);

    let cursor = mark(buffer, Loc::new(Scalar::B, Scalar::B), "-");
    assert_eq!(cursor.bg, Color::White);
    assert_eq!(cursor.fg, Color::Black);

    let empty = mark(buffer, Loc::new(Scalar::A, Scalar::B), "-");
    assert_eq!(empty.fg, Color::Reset);
    assert_eq!(empty.bg, Color::Reset);
    assert!(empty.modifier.is_empty());

    let forfeit = forfeit_control(buffer);
    assert_eq!(forfeit.fg, Color::Cyan);
    assert!(!forfeit.modifier.contains(Modifier::DIM));
}

#[tokio::test]
async fn test_finished_game_dims_cells_and_forfeit() {
    let mut terminal = terminal();
    let events = futures::stream::iter(vec![key('5'), key('f')]);

    let game = run(&mut terminal, events, THEME, false)
        .await
        .expect("session runs");
    assert_eq!(game.play(), Play::Won);
    let buffer = terminal.backend().buffer();

    // The centre is under the cursor, but a finished game shows no highlight.
    let x = mark(buffer, Loc::new(Scalar::B, Scalar::B), "X");
    assert!(x.modifier.contains(Modifier::DIM));
    assert_eq!(x.fg, Color::Magenta);
    assert_ne!(x.bg, Color::White);

    let empty = mark(buffer, Loc::new(Scalar::A, Scalar::A), "-");
    assert!(empty.modifier.contains(Modifier::DIM));

    let forfeit = forfeit_control(buffer);
    assert_eq!(forfeit.fg, Color::DarkGray);
    assert!(forfeit.modifier.contains(Modifier::DIM));
}
