use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lupo_lib::flashcards::Judgment;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let (done, total) = state.session.progress();
    let block = Block::default()
        .title(format!(" Card {} of {} ", (done + 1).min(total), total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let face = match state.session.face() {
        Some(face) => face,
        None => {
            let paragraph = Paragraph::new("\u{1f389} You've gone through all the cards!")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
            return;
        }
    };

    let dim = Style::default().fg(Color::DarkGray);
    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(face.front_language.to_string(), dim)),
        Line::from(Span::styled(
            face.front.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if state.session.show_answer() {
        text.push(Line::from(Span::styled(face.back_language.to_string(), dim)));
        text.push(Line::from(Span::styled(
            face.back.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled("y: Corretto   n: Sbagliato", dim)));
    } else {
        text.push(Line::from(Span::styled("Space: Mostra la risposta", dim)));
    }

    match state.last_feedback {
        Some(Judgment::Right) => {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "Crepi il lupo \u{1f43a}",
                Style::default().fg(Color::Green),
            )));
        }
        Some(Judgment::Wrong) => {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "Il lupo ti ha mangiato \u{1f43a}",
                Style::default().fg(Color::Red),
            )));
        }
        None => {}
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
