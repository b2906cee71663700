use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let color = if msg.starts_with("Error") {
            Color::Red
        } else {
            Color::Green
        };
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(color).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Drill if state.session.show_answer() => {
            " y: right  n: wrong  s: summary  p/d: pair/direction  +/-: sample  ?: help  q: quit "
        }
        Mode::Drill => " Space: show answer  s: summary  r: new session  ?: help  q: quit ",
        Mode::Summary if state.session.is_ended() => {
            " Enter/r: new session  j/k: scroll  p/d: pair/direction  q: quit "
        }
        Mode::Summary => " Esc: back to cards  j/k: scroll  r: new session  q: quit ",
    };

    let status = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
