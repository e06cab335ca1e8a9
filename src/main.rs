//! Snake2 CLI - play, simulate and inspect the snake game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Snake2 - a monochrome snake game
#[derive(Parser, Debug)]
#[command(name = "snake2")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in the terminal
    Play {
        /// Starting speed (default: from config, else normal)
        #[arg(long)]
        speed: Option<cli::SpeedArg>,

        /// Game configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// High-score file (default: ~/.snake2/highscores.json)
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Random seed for food placement (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a headless game driven by an autopilot
    Simulate {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum movement ticks (default: 1000)
        #[arg(short, long, default_value = "1000")]
        ticks: u32,

        /// Speed tier (default: from config, else normal)
        #[arg(long)]
        speed: Option<cli::SpeedArg>,

        /// Game configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print the high-score table
    Scores {
        /// High-score file (default: ~/.snake2/highscores.json)
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Render text in a game font as ASCII art
    Text {
        /// Text to render
        #[arg(required = true)]
        text: String,

        /// Font: main, small or digits
        #[arg(long, default_value = "main")]
        font: cli::FontChoice,

        /// Pad or crop to this width
        #[arg(short, long)]
        width: Option<u32>,

        /// Pad or crop to this height
        #[arg(long)]
        height: Option<u32>,

        /// Alignment inside the width
        #[arg(short, long, default_value = "center")]
        align: cli::AlignArg,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The terminal belongs to the game while playing.
    let log_to_stderr = !matches!(args.command, Commands::Play { .. });
    if let Err(e) = cli::init_logging(args.log_file.as_deref(), log_to_stderr) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Commands::Play {
            speed,
            config,
            scores,
            seed,
        } => cli::play::execute(speed, config, scores, seed),

        Commands::Simulate {
            seed,
            ticks,
            speed,
            config,
            format,
        } => cli::simulate::execute(seed, ticks, speed, config, format),

        Commands::Scores { scores, format } => cli::scores::execute(scores, format),

        Commands::Text {
            text,
            font,
            width,
            height,
            align,
        } => cli::text::execute(&text, font, width, height, align),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
