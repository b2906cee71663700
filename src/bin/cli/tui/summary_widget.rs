use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::app_state::TuiState;
use crate::render::terminal::format_elapsed;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let summary = state.summary();

    let title = if state.session.is_ended() {
        " Final Score "
    } else {
        " Score so far "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [score_area, table_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

    let score = Line::from(vec![
        Span::styled(
            format!(" {}", summary.score_line()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", format_elapsed(summary.elapsed_secs)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(score), score_area);

    if summary.words.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No cards judged.",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(empty, table_area);
        return;
    }

    let rows: Vec<Row> = summary
        .words
        .iter()
        .skip(state.summary_scroll)
        .map(|word| {
            let style = if word.wrong > 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(word.prompt.clone()),
                Cell::from(word.answer.clone()),
                Cell::from(word.right.to_string()),
                Cell::from(word.wrong.to_string()),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["Word", "Answer", "Right", "Wrong"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header);

    f.render_widget(table, table_area);
}
