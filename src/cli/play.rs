//! Play command implementation - the game in the terminal.

// Terminal sizes are small and fit every cast below
#![allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]

use super::{CliError, SpeedArg};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use snake2::levels::Level;
use snake2::{Game, HighScoreTable, Key, Screen, Session};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Input poll interval; also the longest frame.
const FRAME: Duration = Duration::from_millis(16);

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the terminal fails, or
/// the game breaks.
pub(crate) fn execute(
    speed: Option<SpeedArg>,
    config: Option<PathBuf>,
    scores: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let config = super::load_config(config.as_deref(), speed, seed)?;
    let store = super::scores_path(scores)?;
    let table = HighScoreTable::load_or_default(&store);
    let session = Session::new(config.speed, table, Some(store));
    let game = Game::new(config, session)?;

    run_tui(game)
}

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, CliError> {
        enable_raw_mode()?;
        // From here on an early return still restores the terminal.
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen, EnableFocusChange)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn run_tui(mut game: Game) -> Result<(), CliError> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    event_loop(&mut terminal, &mut game)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    game: &mut Game,
) -> Result<(), CliError> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        game.advance(now - last_frame)?;
        last_frame = now;

        terminal.draw(|f| ui(f, game)).map_err(|e| CliError::new(e.to_string()))?;

        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mapped = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('p') => {
                        game.set_paused(!game.is_paused());
                        None
                    }
                    KeyCode::Up => Some(Key::Up),
                    KeyCode::Down => Some(Key::Down),
                    KeyCode::Left => Some(Key::Left),
                    KeyCode::Right => Some(Key::Right),
                    KeyCode::Enter => Some(Key::Confirm),
                    _ => None,
                };
                if let Some(key) = mapped {
                    game.key(key)?;
                }
            }
            Event::FocusLost => game.set_paused(true),
            Event::FocusGained => game.set_paused(false),
            _ => {}
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, game: &Game) {
    let config = game.config();
    // Two pixel rows per terminal row, plus the border.
    let width = config.screen_width + 2;
    let height = config.screen_height.div_ceil(2) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(height), // Screen
            Constraint::Length(3),      // Footer
            Constraint::Min(0),
        ])
        .split(f.area());

    let screen_area = centered(chunks[0], width);
    render_screen(f, screen_area, game);
    render_footer(f, centered(chunks[1], width), game);
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_screen(f: &mut Frame, area: Rect, game: &Game) {
    let config = game.config();
    let mut screen = Screen::new(u32::from(config.screen_width), u32::from(config.screen_height));
    game.paint(&mut screen);

    let lines: Vec<Line> = screen.to_half_blocks().into_iter().map(Line::from).collect();
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Rgb(0x43, 0x52, 0x3d)).bg(Color::Rgb(0xc7, 0xf0, 0xd8)))
        .block(Block::default().borders(Borders::ALL).title(" Snake II "));

    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, game: &Game) {
    let status = if game.is_paused() { "PAUSED" } else { level_name(game) };
    let controls = format!(" {status} | [←↑↓→] Move  [Enter] Select  [p] Pause  [q] Quit ");

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn level_name(game: &Game) -> &'static str {
    game.current().map_or("", Level::name)
}
