//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use practice_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Play the given board index.
    Play(usize),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key to an action given the cursor and whether a game-over prompt is up.
pub fn action_for(key: KeyCode, cursor: Position, prompt_open: bool) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('y') | KeyCode::Enter if prompt_open => Action::Reset,
        KeyCode::Char('n') if prompt_open => Action::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor.to_index()),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Action::Play(digit as usize - 1),
            _ => Action::Ignore,
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::Ignore,
    }
}
