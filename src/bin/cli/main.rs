mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lupo_lib::{Direction, LanguagePair};

#[derive(Parser)]
#[command(name = "lupo-cli", about = "In bocca al lupo: Italian vocabulary drills", version)]
struct Cli {
    /// Word table (CSV with italian, german and english columns)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Settings file (default: <config dir>/lupo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language drilled against Italian
    #[arg(long, global = true)]
    pair: Option<PairArg>,

    /// Which side is the prompt
    #[arg(long, global = true)]
    direction: Option<DirectionArg>,

    /// Words per session (default: the whole table)
    #[arg(long, global = true)]
    sample: Option<usize>,

    /// Seed for a reproducible deck
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PairArg {
    /// Italiano ↔ Tedesco
    German,
    /// Italiano ↔ Inglese
    English,
}

impl From<PairArg> for LanguagePair {
    fn from(arg: PairArg) -> Self {
        match arg {
            PairArg::German => LanguagePair::German,
            PairArg::English => LanguagePair::English,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DirectionArg {
    /// Italian prompt
    Forward,
    /// Italian answer
    Reverse,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Reverse => Direction::Reverse,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run a line-based drill session on stdin/stdout
    Drill,

    /// List the words in the table
    Words {
        /// Only words whose Italian term starts with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let overrides = app::Overrides {
        words_file: cli.words,
        settings_file: cli.config,
        language_pair: cli.pair.map(Into::into),
        direction: cli.direction.map(Into::into),
        sample_size: cli.sample,
        seed: cli.seed,
    };
    let app = app::App::new(overrides)?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                commands::drill::run(&app, &cli.format, use_color)?;
            }
        }
        Some(Command::Drill) => {
            commands::drill::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Words { prefix }) => {
            commands::words::run(&app, prefix.as_deref(), &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
