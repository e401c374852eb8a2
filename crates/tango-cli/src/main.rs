//! tango CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::QuizArgs;

#[derive(Parser)]
#[command(name = "tango", version, about = "Vocabulary quiz trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the pool selected by a range and the resulting quiz size
    Pool {
        #[command(flatten)]
        quiz: QuizArgs,

        /// List every entry in the pool
        #[arg(long)]
        list: bool,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write printable question and answer sheets
    Print {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Output directory
        #[arg(long, default_value = "./tango-print")]
        output: PathBuf,

        /// Sheet title (defaults to the word-list name)
        #[arg(long)]
        title: Option<String>,

        /// Also write a JSON answer key
        #[arg(long)]
        key: bool,
    },

    /// Practice: answer each question correctly to move on
    Practice {
        #[command(flatten)]
        quiz: QuizArgs,
    },

    /// Timed game with score and high-score reporting
    Game {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Game length in seconds (overrides config)
        #[arg(long)]
        duration: Option<u32>,

        /// Play against an in-memory high score
        #[arg(long)]
        offline: bool,

        /// Directory to save the game report in
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Browse the pool as flashcards
    Cards {
        #[command(flatten)]
        quiz: QuizArgs,
    },

    /// Show or submit the high score
    Highscore {
        /// Submit a score instead of reading the best
        #[arg(long)]
        submit: Option<u64>,

        /// Check that the high-score server is up
        #[arg(long)]
        ping: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a word-list file
    Validate {
        /// Path to a .toml or .json word list
        #[arg(long)]
        words: PathBuf,
    },

    /// Create starter config and sample word list
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "tango=info"
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pool { quiz, list, json } => commands::pool::execute(quiz, list, json),
        Commands::Print {
            quiz,
            output,
            title,
            key,
        } => commands::print::execute(quiz, output, title, key),
        Commands::Practice { quiz } => commands::practice::execute(quiz),
        Commands::Game {
            quiz,
            duration,
            offline,
            save,
        } => commands::game::execute(quiz, duration, offline, save).await,
        Commands::Cards { quiz } => commands::cards::execute(quiz),
        Commands::Highscore {
            submit,
            ping,
            config,
        } => commands::highscore::execute(submit, ping, config).await,
        Commands::Validate { words } => commands::validate::execute(words),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
