//! Stateless rendering of a game.

use crate::app::ViewState;
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use xs_and_os::{Game, Loc, Play, Player};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Score panel.
    pub scores: Rect,
    /// Board panel, including its border.
    pub grid: Rect,
    /// Status alert.
    pub status: Rect,
    /// Reset and forfeit controls.
    pub controls: Rect,
    /// State panel, when shown.
    pub debug: Option<Rect>,
}

/// Splits the frame into its regions.
pub fn screen_layout(area: Rect, show_debug: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),               // Title
            Constraint::Length(GRID_HEIGHT + 2), // Scores and board
            Constraint::Length(3),               // Status
            Constraint::Length(3),               // Controls
            Constraint::Min(0),                  // State
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(rows[1]);

    ScreenLayout {
        title: rows[0],
        scores: main[0],
        grid: main[1],
        status: rows[2],
        controls: rows[3],
        debug: show_debug.then_some(rows[4]),
    }
}

/// Screen rectangles of the nine cells inside the board panel.
pub fn grid_cells(grid: Rect) -> Vec<(Loc, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(grid);
    let board = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    Loc::grid()
        .into_iter()
        .zip([rows[0], rows[2], rows[4]])
        .flat_map(|(places, row)| {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row);
            places.into_iter().zip([cols[0], cols[2], cols[4]])
        })
        .collect()
}

/// Renders the game and returns the cell rectangles it drew.
pub fn draw(frame: &mut Frame, game: &Game, view: &ViewState, theme: &Theme) -> Vec<(Loc, Rect)> {
    let layout = screen_layout(frame.area(), view.show_debug());

    let title = Paragraph::new("Xs and Os")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_scores(frame, layout.scores, game, theme);
    let cells = draw_grid(frame, layout.grid, game, view.cursor(), theme);
    draw_status(frame, layout.status, game, theme);
    draw_controls(frame, layout.controls, game);

    if let Some(area) = layout.debug {
        draw_debug(frame, area, game);
    }

    cells
}

fn player_style(player: Option<Player>, theme: &Theme) -> Style {
    match player {
        Some(Player::X) => Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        Some(Player::O) => Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
        None => Style::default(),
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, game: &Game, theme: &Theme) {
    let lines: Vec<Line> = [Player::X, Player::O]
        .into_iter()
        .map(|p| {
            Line::from(vec![
                Span::raw("Player "),
                Span::styled(p.to_string(), player_style(Some(p), theme)),
                Span::raw(format!(": {}", game.score_of(p))),
            ])
        })
        .collect();

    let scores = Paragraph::new(lines).block(Block::default().title("Scores").borders(Borders::ALL));
    frame.render_widget(scores, area);
}

fn draw_grid(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Loc,
    theme: &Theme,
) -> Vec<(Loc, Rect)> {
    frame.render_widget(Block::default().title("Board").borders(Borders::ALL), area);

    let cells = grid_cells(area);
    for (loc, rect) in &cells {
        draw_cell(frame, *rect, game, *loc, cursor, theme);
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Game, loc: Loc, cursor: Loc, theme: &Theme) {
    let occupant = game.at(loc);
    let symbol = occupant.map_or_else(|| "-".to_string(), |p| p.to_string());

    let mut style = player_style(occupant, theme);
    if !game.is_active() {
        style = style.add_modifier(Modifier::DIM);
    } else if loc == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically centre the symbol in the cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Status message for the current play state.
pub fn status_text(game: &Game) -> String {
    match game.play() {
        Play::Active => format!("{} to go!", game.player()),
        Play::Draw => "It's a draw!".to_string(),
        Play::Won => format!("{} won!!!", game.player()),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, game: &Game, theme: &Theme) {
    let style = match game.play() {
        Play::Active => player_style(Some(game.player()), theme),
        Play::Draw => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Play::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };

    let status = Paragraph::new(status_text(game))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, game: &Game) {
    let forfeit_style = if game.is_active() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let line = Line::from(vec![
        Span::styled("[r] Reset", Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::styled("[f] Forfeit", forfeit_style),
        Span::styled(
            "   arrows/enter or 1-9 to play, d state, q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}

fn draw_debug(frame: &mut Frame, area: Rect, game: &Game) {
    let text = serde_json::to_string_pretty(game)
        .unwrap_or_else(|e| format!("Failed to serialize state: {}", e));

    let state = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("State").borders(Borders::ALL));
    frame.render_widget(state, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
