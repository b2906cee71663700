use anyhow::Result;

use lupo_lib::flashcards::{Card, Language, WordTable};

use crate::app::App;
use crate::render::terminal::{paint, truncate, Color};
use crate::OutputFormat;

const COLUMNS: [Language; 3] = [Language::Italian, Language::German, Language::English];

pub fn run(app: &App, prefix: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = matching_words(&app.table, prefix);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = words
                .iter()
                .map(|card| {
                    serde_json::json!({
                        "italian": card.term(Language::Italian),
                        "german": card.term(Language::German),
                        "english": card.term(Language::English),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words found.");
                return Ok(());
            }

            println!("{}", render_table(&words, use_color));
            println!(
                "\n{} of {} words in {}",
                words.len(),
                app.table.len(),
                app.words_path.display()
            );
        }
    }

    Ok(())
}

/// Cards whose Italian term starts with `prefix` (case-insensitive), sorted
fn matching_words<'a>(table: &'a WordTable, prefix: Option<&str>) -> Vec<&'a Card> {
    let prefix = prefix.map(str::to_lowercase);
    let mut words: Vec<&Card> = table
        .cards()
        .iter()
        .filter(|card| match &prefix {
            Some(p) => card.source_term().to_lowercase().starts_with(p.as_str()),
            None => true,
        })
        .collect();

    words.sort_by_key(|card| card.source_term().to_lowercase());
    words
}

fn render_table(words: &[&Card], use_color: bool) -> String {
    let widths: Vec<usize> = COLUMNS
        .iter()
        .map(|&lang| {
            words
                .iter()
                .map(|card| card.term(lang).chars().count())
                .max()
                .unwrap_or(0)
                .clamp(lang.display_name().len(), 30)
        })
        .collect();

    let mut lines = Vec::with_capacity(words.len() + 2);

    let header = format!(
        "{:<w0$} {:<w1$} {}",
        Language::Italian.display_name(),
        Language::German.display_name(),
        Language::English.display_name(),
        w0 = widths[0],
        w1 = widths[1]
    );
    lines.push(paint(&header, Color::BOLD, use_color));
    lines.push(
        widths
            .iter()
            .map(|&w| "\u{2500}".repeat(w))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for card in words {
        lines.push(format!(
            "{:<w0$} {:<w1$} {}",
            truncate(card.term(Language::Italian), widths[0]),
            truncate(card.term(Language::German), widths[1]),
            truncate(card.term(Language::English), widths[2]),
            w0 = widths[0],
            w1 = widths[1]
        ));
    }

    lines.join("\n")
}
