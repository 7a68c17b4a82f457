//! Key mapping from terminal events to game commands.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forwarded to the game state controller
    Game(GameAction),
    /// Ask the advisor for a suggestion on the current grid
    RequestAdvice,
    /// Play the last suggestion, if it still applies
    UseAdvice,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let command = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyCommand::Game(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyCommand::Game(GameAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            KeyCommand::Game(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyCommand::Game(GameAction::Move(Direction::Down))
        }

        // Game actions
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => KeyCommand::Game(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Game(GameAction::Restart),
        KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Game(GameAction::ContinueAfterWin),

        // Advice
        KeyCode::Char('?') | KeyCode::Char('i') | KeyCode::Char('I') => KeyCommand::RequestAdvice,
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => KeyCommand::UseAdvice,

        _ => return None,
    };
    Some(command)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
