//! Subcommand implementations.

pub mod cards;
pub mod game;
pub mod highscore;
pub mod init;
pub mod pool;
pub mod practice;
pub mod print;
pub mod validate;

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;

use tango_core::parser::load_word_list;
use tango_core::{
    filter_pool, session_rng, Direction, Pool, QuizSettings, WordList, DEFAULT_CHOICES,
};
use tango_gateway::config::{load_config_from, TangoConfig};

/// Input line that ends an interactive command.
pub const QUIT: &str = ":q";

/// Flags shared by every command that builds a quiz.
#[derive(Args, Debug, Clone)]
pub struct QuizArgs {
    /// Word-list file (.toml or .json)
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// First entry number of the range (defaults to the list's first)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last entry number of the range (defaults to the list's last)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Number of questions
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Allow the same entry more than once
    #[arg(long)]
    pub dup: bool,

    /// Keep the pool order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Question direction: jp2en, en2jp, random
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Options per multiple-choice question
    #[arg(long)]
    pub choices: Option<usize>,

    /// RNG seed for a reproducible quiz
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Everything a command needs to build a quiz.
pub struct QuizContext {
    pub config: TangoConfig,
    pub list: WordList,
    pub range: (i64, i64),
    pub pool: Pool,
    pub settings: QuizSettings,
    pub rng: StdRng,
}

impl QuizArgs {
    /// Load config and word list, apply flags over config defaults, and filter the pool.
    pub fn load(&self) -> Result<QuizContext> {
        let config = load_config_from(self.config.as_deref())?;

        let words = self
            .words
            .clone()
            .or_else(|| config.words.path.clone())
            .context("no word list given: pass --words or set [words] path in tango.toml")?;
        let list = load_word_list(&words)?;

        let (first, last) = list.bounds().unwrap_or((1, 1));
        let range = (self.start.unwrap_or(first), self.end.unwrap_or(last));
        let pool = filter_pool(list.entries(), range.0, range.1);

        let mut settings = config.quiz.clone();
        if let Some(count) = self.count {
            settings.count = count;
        }
        if self.dup {
            settings.allow_duplicates = true;
        }
        if self.no_shuffle {
            settings.shuffle = false;
        }
        if let Some(direction) = self.direction {
            settings.direction = direction;
        }
        if let Some(choices) = self.choices {
            settings.choices = choices;
        }
        settings.choices = settings.choices.clamp(1, DEFAULT_CHOICES);

        tracing::debug!(
            list = %list.name,
            start = range.0,
            end = range.1,
            pool = pool.len(),
            "pool selected"
        );

        Ok(QuizContext {
            config,
            list,
            range,
            pool,
            settings,
            rng: session_rng(self.seed),
        })
    }
}

/// Read trimmed lines from stdin until EOF or `:q`.
pub fn read_commands() -> impl Iterator<Item = String> {
    std::io::stdin()
        .lock()
        .lines()
        .map_while(|line| line.ok())
        .map(|line| line.trim().to_string())
        .take_while(|line| line != QUIT)
}

/// `A. option` lines for a multiple-choice item.
pub fn format_choices(choices: &[String]) -> String {
    choices
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {c}", tango_print::html::choice_letter(i)))
        .collect::<Vec<_>>()
        .join("\n")
}
