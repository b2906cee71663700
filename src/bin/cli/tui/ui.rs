use ratatui::layout::{Constraint, Direction, Flex, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};

use super::app_state::{Mode, TuiState, SAMPLE_STEP};
use super::{card_widget, status_bar, summary_widget};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Header, main panel, progress gauge, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, outer[0], state);

    let main_area = outer[1];
    match state.mode {
        Mode::Drill => {
            state.card_area = Some(main_area);
            card_widget::draw(f, main_area, state);
        }
        Mode::Summary => {
            state.card_area = None;
            summary_widget::draw(f, main_area, state);
        }
    }

    draw_progress(f, outer[2], state);
    status_bar::draw(f, outer[3], state);

    if state.show_help {
        draw_help(f, size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let config = state.session.config();
    let sample = match config.sample_size {
        Some(n) => format!("{} of {} words", n, state.app.table.len()),
        None => format!("all {} words", state.app.table.len()),
    };

    let line = Line::from(vec![
        Span::styled(
            " In bocca al lupo ",
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {}  {}  {}",
            config.language_pair,
            config.direction.describe(config.language_pair),
            sample
        )),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_progress(f: &mut Frame, area: Rect, state: &TuiState) {
    let (done, total) = state.session.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(state.session.progress_ratio().clamp(0.0, 1.0))
        .label(format!("{}/{}", done, total));
    f.render_widget(gauge, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(" Space/Enter  show the answer"),
        Line::from(" y / \u{2192}        I knew it"),
        Line::from(" n / \u{2190}        I missed it (it will come back)"),
        Line::from(" s            summary"),
        Line::from(" p            switch Tedesco / Inglese"),
        Line::from(" d            switch direction"),
        Line::from(format!(" + / -        sample size \u{00b1}{}", SAMPLE_STEP)),
        Line::from(" r            new session"),
        Line::from(" q            quit"),
    ];

    let [popup] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(lines.len() as u16 + 2)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
