//! GRIDFALL - a falling-block puzzle for the terminal

mod board;
mod game;
mod input;
mod piece;
mod score;
mod settings;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use game::Game;
use input::{AppInput, KeyBindings};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

fn main() -> io::Result<()> {
    // a raw-mode terminal can't take stderr logs, write to a file instead
    let log_dir = std::env::temp_dir().join("gridfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::never(&log_dir, "gridfall.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!("gridfall starting up, log={}", log_dir.join("gridfall.log").display());

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Err(e) = settings.save() {
        eprintln!("Warning: could not save settings: {e}");
    }

    match result {
        Ok(game) => {
            println!("Final score: {}", game.score.points);
            println!("Level: {} | Lines: {}", game.score.level, game.score.lines);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<Game> {
    let bindings = KeyBindings::from_settings(settings);
    let mut game = Game::sized(settings.board.width, settings.board.height);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, &game))?;

        // Commands run synchronously between gravity steps
        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match bindings.map(key) {
                        Some(AppInput::Game(command)) => game.apply(command),
                        Some(AppInput::Quit) => break,
                        None => {}
                    }
                }
            }
        }

        // Gravity: the game only sees elapsed time, never the clock
        let now = Instant::now();
        game.advance(now - last_frame);
        last_frame = now;
    }

    Ok(game)
}
