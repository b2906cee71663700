use std::io::{self, BufRead, Write};

use anyhow::Result;

use lupo_lib::flashcards::{Judgment, Session};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

/// How a drill loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillOutcome {
    Finished,
    Quit,
}

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut session = app.start_session()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = drill_loop(&mut session, stdin.lock(), stdout.lock(), use_color)?;

    let summary = session.summarize();
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sessionId": session.id().to_string(),
                "completed": outcome == DrillOutcome::Finished,
                "config": session.config(),
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!();
            println!("{}", terminal::render_summary(&summary, use_color));
        }
    }

    Ok(())
}

/// Present cards until the deck runs out or the learner quits.
///
/// Enter reveals the answer; then `y` marks it right and `n` wrong.
/// `q` or end of input stops early.
pub fn drill_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    use_color: bool,
) -> Result<DrillOutcome> {
    let config = *session.config();
    writeln!(
        out,
        "{} | {}",
        config.language_pair,
        config.direction.describe(config.language_pair)
    )?;

    while let Some(face) = session.face() {
        let (done, total) = session.progress();
        writeln!(out)?;
        writeln!(out, "{}", terminal::render_prompt(&face, done, total, use_color))?;
        write!(out, "[Enter] Mostra la risposta  [q] quit: ")?;
        out.flush()?;

        match read_command(&mut input)? {
            None => return Ok(DrillOutcome::Quit),
            Some(cmd) if cmd == "q" => return Ok(DrillOutcome::Quit),
            Some(_) => session.reveal()?,
        }

        writeln!(out, "{}", terminal::render_answer(&face, use_color))?;

        let judgment = loop {
            write!(out, "[y] Corretto  [n] Sbagliato  [q] quit: ")?;
            out.flush()?;

            match read_command(&mut input)?.as_deref() {
                None | Some("q") => return Ok(DrillOutcome::Quit),
                Some("y") | Some("s") | Some("c") => break Judgment::Right,
                Some("n") | Some("x") => break Judgment::Wrong,
                Some(_) => writeln!(out, "Answer y or n.")?,
            }
        };

        session.judge(judgment)?;
        let feedback = match judgment {
            Judgment::Right => terminal::paint("Crepi il lupo \u{1f43a}", Color::GREEN, use_color),
            Judgment::Wrong => terminal::paint(
                "Il lupo ti ha mangiato \u{1f43a} (it will come back)",
                Color::RED,
                use_color,
            ),
        };
        writeln!(out, "{}", feedback)?;
    }

    writeln!(out)?;
    writeln!(out, "\u{1f389} You've gone through all the cards!")?;
    Ok(DrillOutcome::Finished)
}

/// Next trimmed, lowercased line; `None` at end of input
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
