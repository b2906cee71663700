use lupo_lib::flashcards::{CardFace, SessionSummary};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap text in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Fixed-width text progress bar
pub fn progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (done.min(total) * width) / total
    };
    format!(
        "[{}{}]",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

/// Shorten to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn format_elapsed(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Progress line plus the prompt side of a card
pub fn render_prompt(face: &CardFace, done: usize, total: usize, use_color: bool) -> String {
    let header = format!(
        "Card {} of {} {}",
        done + 1,
        total,
        progress_bar(done, total, 20)
    );
    format!(
        "{}\n{}: {}",
        paint(&header, Color::GRAY, use_color),
        face.front_language,
        paint(&face.front, Color::BOLD, use_color)
    )
}

pub fn render_answer(face: &CardFace, use_color: bool) -> String {
    format!(
        "{}: {}",
        face.back_language,
        paint(&face.back, Color::GREEN, use_color)
    )
}

/// Final score and the per-word table, worst words first
pub fn render_summary(summary: &SessionSummary, use_color: bool) -> String {
    let mut lines = Vec::new();

    let score = format!("Final Score: {}", summary.score_line());
    lines.push(paint(&score, Color::BOLD, use_color));
    lines.push(format!("Time: {}", format_elapsed(summary.elapsed_secs)));

    if summary.words.is_empty() {
        lines.push(String::new());
        lines.push("No cards judged.".to_string());
        return lines.join("\n");
    }

    let prompt_width = summary
        .words
        .iter()
        .map(|w| w.prompt.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 30);
    let answer_width = summary
        .words
        .iter()
        .map(|w| w.answer.chars().count())
        .max()
        .unwrap_or(6)
        .clamp(6, 30);

    lines.push(String::new());
    lines.push(format!(
        "{:<pw$} {:<aw$} {:>5} {:>5}",
        "Word",
        "Answer",
        "Right",
        "Wrong",
        pw = prompt_width,
        aw = answer_width
    ));
    lines.push(format!(
        "{} {} {} {}",
        "\u{2500}".repeat(prompt_width),
        "\u{2500}".repeat(answer_width),
        "\u{2500}".repeat(5),
        "\u{2500}".repeat(5)
    ));

    for word in &summary.words {
        let row = format!(
            "{:<pw$} {:<aw$} {:>5} {:>5}",
            truncate(&word.prompt, prompt_width),
            truncate(&word.answer, answer_width),
            word.right,
            word.wrong,
            pw = prompt_width,
            aw = answer_width
        );
        let color = if word.wrong > 0 { Color::RED } else { Color::GREEN };
        lines.push(paint(&row, color, use_color));
    }

    lines.join("\n")
}
