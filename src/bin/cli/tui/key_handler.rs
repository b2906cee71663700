use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use lupo_lib::flashcards::Judgment;

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if handle_common_key(state, key) {
        return;
    }

    match state.mode {
        Mode::Drill => handle_drill_key(state, key),
        Mode::Summary => handle_summary_key(state, key),
    }
}

/// Keys that work in every mode; returns true when consumed
fn handle_common_key(state: &mut TuiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('?') => state.show_help = !state.show_help,
        KeyCode::Char('p') => state.toggle_pair(),
        KeyCode::Char('d') => state.toggle_direction(),
        KeyCode::Char('+') | KeyCode::Char('=') => state.adjust_sample(true),
        KeyCode::Char('-') => state.adjust_sample(false),
        KeyCode::Char('r') => state.new_session(),
        _ => return false,
    }
    true
}

fn handle_drill_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => state.reveal(),
        KeyCode::Char('y') | KeyCode::Right => state.judge(Judgment::Right),
        KeyCode::Char('n') | KeyCode::Left => state.judge(Judgment::Wrong),
        KeyCode::Char('s') => state.show_summary(),
        KeyCode::Esc => state.show_help = false,
        _ => {}
    }
}

fn handle_summary_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if state.session.is_ended() {
                state.new_session();
            } else {
                state.resume();
            }
        }
        KeyCode::Esc | KeyCode::Char('s') => state.resume(),
        KeyCode::Char('j') | KeyCode::Down => state.summary_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.summary_scroll_up(1),
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.mode == Mode::Drill => {
            // Click on the card reveals it
            if let Some(ref area) = state.card_area {
                if mouse.column >= area.x
                    && mouse.column < area.x + area.width
                    && mouse.row >= area.y
                    && mouse.row < area.y + area.height
                {
                    state.reveal();
                }
            }
        }
        MouseEventKind::ScrollDown if state.mode == Mode::Summary => state.summary_scroll_down(3),
        MouseEventKind::ScrollUp if state.mode == Mode::Summary => state.summary_scroll_up(3),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crossterm::event::KeyModifiers;
    use lupo_lib::flashcards::{Card, Direction, LanguagePair, SessionConfig, WordTable};

    fn state(words: usize, sample_size: Option<usize>) -> TuiState {
        let table: WordTable = (0..words)
            .map(|i| Card::new(format!("parola{}", i), format!("Wort{}", i), format!("word{}", i)))
            .collect();
        let config = SessionConfig::new(LanguagePair::German, Direction::Forward, sample_size);
        TuiState::new(App::from_parts(table, config, Some(7))).unwrap()
    }

    fn press(state: &mut TuiState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_reveal_then_judge() {
        let mut state = state(3, None);

        press(&mut state, KeyCode::Char('y'));
        assert_eq!(state.session.index(), 0);
        assert!(state.flash_message.is_some());

        press(&mut state, KeyCode::Char(' '));
        assert!(state.session.show_answer());
        assert!(state.flash_message.is_none());

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.session.index(), 1);
        assert_eq!(state.session.deck().len(), 4);
        assert_eq!(state.last_feedback, Some(Judgment::Wrong));
    }

    #[test]
    fn test_finishing_shows_summary() {
        let mut state = state(2, None);

        for _ in 0..2 {
            press(&mut state, KeyCode::Enter);
            press(&mut state, KeyCode::Right);
        }

        assert!(state.session.is_ended());
        assert_eq!(state.mode, Mode::Summary);
        assert_eq!(state.summary().right, 2);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, Mode::Drill);
        assert_eq!(state.session.index(), 0);
        assert!(state.session.ledger().is_empty());
    }

    #[test]
    fn test_partial_summary_and_resume() {
        let mut state = state(4, None);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('y'));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.mode, Mode::Summary);
        assert_eq!(state.summary().total, 1);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Drill);
        assert_eq!(state.session.index(), 1);
    }

    #[test]
    fn test_settings_changes_reset_session() {
        let mut state = state(4, None);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('y'));
        let id = state.session.id();

        press(&mut state, KeyCode::Char('p'));
        assert_ne!(state.session.id(), id);
        assert_eq!(state.session.index(), 0);
        assert_eq!(state.session.config().language_pair, LanguagePair::English);
        assert!(state.session.ledger().is_empty());

        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.session.config().direction, Direction::Reverse);
        assert_eq!(state.app.session_config.direction, Direction::Reverse);
        let face = state.session.face().unwrap();
        assert!(face.front.starts_with("word"));
    }

    #[test]
    fn test_adjust_sample() {
        let mut state = state(12, Some(6));

        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.session.config().sample_size, Some(1));
        assert_eq!(state.session.deck().len(), 1);

        let id = state.session.id();
        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.session.id(), id);

        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.session.config().sample_size, Some(6));
        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.session.config().sample_size, Some(11));
        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.session.config().sample_size, None);
        assert_eq!(state.session.deck().len(), 12);
    }

    #[test]
    fn test_summary_scroll_stops_at_last_word() {
        let mut state = state(4, None);
        for _ in 0..2 {
            press(&mut state, KeyCode::Enter);
            press(&mut state, KeyCode::Char('y'));
        }

        press(&mut state, KeyCode::Char('s'));
        for _ in 0..5 {
            press(&mut state, KeyCode::Char('j'));
        }
        assert_eq!(state.summary_scroll, 1);

        press(&mut state, KeyCode::Char('k'));
        press(&mut state, KeyCode::Char('k'));
        assert_eq!(state.summary_scroll, 0);
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = state(2, None);

        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);

        press(&mut state, KeyCode::Char('q'));
        assert!(state.quit);
    }
}
