//! Play command implementation - interactive TUI game.

// TUI rendering uses intentional casts for cursor math
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::needless_pass_by_value
)]

use super::CliError;
use conquid::config::GameConfig;
use conquid::game::{Coord, MoveKind, Tile};
use conquid::rhythm::Metronome;
use conquid::Session;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the TUI
/// fails.
pub(crate) fn execute(config: Option<PathBuf>) -> Result<(), CliError> {
    let config = match config {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };

    let track = Metronome::new(config.pulse_ms, config.track_offset_ms)?;
    let session = Session::new(&config, track)?;

    run_tui(session)
}

/// App state for the TUI.
struct App {
    session: Session<Metronome>,
    cursor: Coord,
    accepting: bool,
    background_flash: bool,
    feed: Vec<String>,
    next_tick: Instant,
}

impl App {
    fn new(session: Session<Metronome>) -> Self {
        Self {
            session,
            cursor: Coord::new(0, 0),
            accepting: false,
            background_flash: false,
            feed: Vec::new(),
            next_tick: Instant::now(),
        }
    }

    fn tick(&mut self) {
        let turn = self.session.board().turn();
        let acting = self.session.board().current_player();
        let report = self.session.tick();

        self.accepting = report.accepting;
        self.background_flash = report.flash;
        self.next_tick += report.next_delay;

        // The grid is redrawn whole every frame, so the pending change
        // notifications are only drained to keep the queue bounded.
        self.session.drain_changes();

        if let Some(kind) = report.committed {
            self.push_feed(format!("turn {turn}: player {acting} {}", kind.name()));
        } else if report.submit_beat {
            self.push_feed(format!("turn {turn}: player {acting} pass"));
        }
    }

    fn push_feed(&mut self, entry: String) {
        self.feed.push(entry);
        if self.feed.len() > 16 {
            self.feed.remove(0);
        }
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let grid = self.session.board().grid();
        let row = i32::from(self.cursor.row) + d_row;
        let col = i32::from(self.cursor.col) + d_col;
        if row >= 0 && row < i32::from(grid.height()) && col >= 0 && col < i32::from(grid.width())
        {
            self.cursor = Coord::new(row as u16, col as u16);
        }
    }

    fn activate(&mut self) {
        let accepted = self.session.tile_activated(self.cursor);
        if !accepted {
            self.push_feed("input rejected: off-beat".to_string());
        } else if self.session.board().current_move().kind() == Some(MoveKind::Skip) {
            self.push_feed("selection resolves to nothing".to_string());
        }
    }
}

fn run_tui(session: Session<Metronome>) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(session);

    loop {
        // Draw
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Keep the clock re-synchronized to the timing source
        if Instant::now() >= app.next_tick {
            app.tick();
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(10)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    // Main content - grid and stats
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_grid(f, main_chunks[0], app);
    render_side(f, main_chunks[1], app);

    render_footer(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let board = app.session.board();
    let window = if app.accepting { "ACCEPT" } else { "WAIT" };
    let title = format!(
        " Conquid | Turn {} | Player {} | {} ",
        board.turn(),
        board.current_player(),
        window
    );

    let style = if app.background_flash {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let header = Paragraph::new(title)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let board = app.session.board();
    let grid = board.grid();

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..grid.height() {
        let mut spans = Vec::new();
        for col in 0..grid.width() {
            let coord = Coord::new(row, col);
            let Some(tile) = grid.get(coord) else {
                continue;
            };
            let color = tile_color(tile, board.players());
            let mut style = Style::default().bg(color);
            if coord == app.cursor {
                style = style.fg(Color::Black).bg(Color::White);
            } else if app
                .session
                .board()
                .current_move()
                .inputs()
                .contains(&coord)
            {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
            }
            let ch = if coord == app.cursor {
                "[]"
            } else if tile.is_base {
                "##"
            } else if tile.owner.is_some() {
                "::"
            } else {
                "  "
            };
            spans.push(Span::styled(ch, style));
        }
        lines.push(Line::from(spans));
    }

    let grid_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));

    f.render_widget(grid_widget, area);
}

/// Map a tile to its display color.
///
/// Priority: flash-color while flashing, base-color for bases,
/// territory-color for owned tiles, then the neutral palette.
fn tile_color(tile: &Tile, players: &[conquid::Player]) -> Color {
    let style = tile
        .owner
        .and_then(|id| players.iter().find(|p| p.id == id))
        .map(|p| &p.style);

    match style {
        Some(style) => {
            let name = if tile.flash {
                &style.flash
            } else if tile.is_base {
                &style.base
            } else {
                &style.territory
            };
            color_from_name(name)
        }
        None if tile.is_base => Color::Gray,
        None => Color::DarkGray,
    }
}

/// Resolve a configured color name to a terminal color.
fn color_from_name(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "maroon" => Color::LightRed,
        "orange" => Color::LightYellow,
        "blue" => Color::Blue,
        "navy" => Color::LightBlue,
        "cyan" => Color::Cyan,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        "gray" => Color::Gray,
        _ => Color::White,
    }
}

fn render_side(f: &mut Frame, area: Rect, app: &App) {
    let board = app.session.board();
    let grid = board.grid();
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    for player in board.players() {
        let color = color_from_name(&player.style.territory);
        lines.push(Line::from(Span::styled(
            format!("Player {}", player.id),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "  Tiles: {}",
            grid.count_owned(player.id)
        )));
        lines.push(Line::from(format!(
            "  Bases: {}",
            grid.count_bases(player.id)
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Recent",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for entry in app.feed.iter().rev().take(8) {
        lines.push(Line::from(format!("  {entry}")));
    }

    let side_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Game "))
        .wrap(Wrap { trim: false });

    f.render_widget(side_widget, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let controls = " [q] Quit  [arrows/hjkl] Cursor  [Enter/Space] Select tile ";

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
