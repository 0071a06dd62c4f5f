//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{action_for, move_cursor, Action};

use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use practice_tictactoe::{MoveSelector, Submission};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// How long to wait for a key before checking on the computer.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the TUI until the player quits.
pub async fn run_tui<S: MoveSelector>(session: GameSession<S>) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, session).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_game<S: MoveSelector>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut session: GameSession<S>,
) -> Result<()> {
    let mut app = App::new();
    let mut events = session.subscribe();

    loop {
        while let Some(turn) = session.try_next_turn() {
            session.apply_turn(turn);
        }
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| {
            let engine = session.engine();
            ui::draw(frame, &app, engine.board(), engine.input_enabled())
        })?;

        if event::poll(INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match action_for(key.code, app.cursor(), app.alert().is_some()) {
                Action::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                Action::Reset => session.reset(),
                Action::Cursor(pos) => app.set_cursor(pos),
                Action::Play(index) => match session.submit(index) {
                    Ok(Submission::Finished(status)) => {
                        info!(%status, "Human move ended the game")
                    }
                    Ok(Submission::ComputerToMove(_)) => {}
                    Err(e) => app.handle_rejection(&e),
                },
                Action::Ignore => {}
            }
        }

        // Let the computer's timer run between polls.
        tokio::task::yield_now().await;
    }
}
