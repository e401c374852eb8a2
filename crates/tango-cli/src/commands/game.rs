//! The `tango game` command.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tokio::sync::mpsc;

use tango_core::session::{GameRules, GameSnapshot, GameSummary};
use tango_core::traits::HighScoreGateway;
use tango_core::{
    build_with_settings, load_initial_best, prepare_choices, AnswerOutcome, GameEngine, GameInput,
    GameObserver, GameOutcome, GameReport, QuizItem,
};
use tango_gateway::{create_gateway, MemoryGateway};

use super::{format_choices, QuizArgs, QUIT};

/// Console observer.
struct ConsoleObserver {
    best: u64,
    warned_low: AtomicBool,
}

impl ConsoleObserver {
    fn hud(&self, hud: &GameSnapshot) -> String {
        let lead = if hud.is_leading(self.best) { " ★" } else { "" };
        format!(
            "{:.1}s | score {}{lead} | best {}",
            hud.time_left, hud.score, self.best
        )
    }
}

impl GameObserver for ConsoleObserver {
    fn on_question(&self, item: &QuizItem, hud: &GameSnapshot) {
        println!("\n[{}] {}", self.hud(hud), item.prompt());
        if item.is_multiple_choice() {
            println!("{}", format_choices(item.choices()));
        }
    }

    fn on_answer(&self, item: &QuizItem, outcome: AnswerOutcome, _hud: &GameSnapshot) {
        match outcome {
            AnswerOutcome::Correct => println!("○ +10"),
            AnswerOutcome::Incorrect => println!("× {}", item.expected()),
            AnswerOutcome::Ignored => {}
        }
    }

    fn on_tick(&self, hud: &GameSnapshot) {
        if hud.is_low_time && !self.warned_low.swap(true, Ordering::Relaxed) {
            println!("-- {:.0} seconds left --", hud.time_left);
        }
    }

    fn on_finish(&self, summary: &GameSummary) {
        println!("\nGame over ({}).", summary.reason);
    }
}

/// Forward stdin lines to the game on a plain thread so a pending read
/// never holds the runtime open after the game ends.
fn spawn_stdin_reader(tx: mpsc::Sender<GameInput>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let line = line.trim();
            let input = if line == QUIT {
                GameInput::Stop
            } else if line.is_empty() {
                continue;
            } else {
                GameInput::Answer(line.to_string())
            };
            let stop = input == GameInput::Stop;
            if tx.blocking_send(input).is_err() || stop {
                break;
            }
        }
    });
}

pub async fn execute(
    args: QuizArgs,
    duration: Option<u32>,
    offline: bool,
    save: Option<PathBuf>,
) -> Result<()> {
    let mut ctx = args.load()?;

    let quiz = build_with_settings(&ctx.pool, &ctx.settings, &mut ctx.rng);
    let quiz = prepare_choices(
        quiz,
        &ctx.pool,
        ctx.list.entries(),
        ctx.settings.choices,
        &mut ctx.rng,
    );
    if quiz.is_empty() {
        println!("No questions in range {}-{}.", ctx.range.0, ctx.range.1);
        return Ok(());
    }
    let questions = quiz.len();

    let gateway: Arc<dyn HighScoreGateway> = if offline {
        Arc::new(MemoryGateway::new())
    } else {
        create_gateway(&ctx.config.gateway)?
    };
    let best = load_initial_best(gateway.as_ref()).await;

    let mut engine_config = ctx.config.game.engine_config();
    if let Some(secs) = duration {
        engine_config.rules = GameRules::with_duration_secs(secs);
    }
    println!(
        "Game: {} questions, {}s. Best score: {}. Type {QUIT} to stop.",
        questions,
        engine_config.rules.start_tenths / 10,
        best.get()
    );

    let observer = ConsoleObserver {
        best: best.get(),
        warned_low: AtomicBool::new(false),
    };
    let (tx, rx) = mpsc::channel(32);
    spawn_stdin_reader(tx);

    let mut engine = GameEngine::new(engine_config, gateway, best);
    let Some(outcome) = engine.run(quiz, rx, &observer).await else {
        return Ok(());
    };

    print_summary(&outcome);

    if let Some(dir) = save {
        let report =
            GameReport::from_outcome(&outcome, ctx.list.name.as_str(), ctx.range, questions);
        let path = dir.join(report.file_name());
        report.save_json(&path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(outcome: &GameOutcome) {
    let s = &outcome.summary;

    let mut table = Table::new();
    table.set_header(vec![
        "Score",
        "Correct",
        "Wrong",
        "Accuracy",
        "Best streak",
        "Time left",
        "Best",
    ]);
    table.add_row(vec![
        Cell::new(s.score),
        Cell::new(s.ok),
        Cell::new(s.ng),
        Cell::new(format!("{:.1}%", s.accuracy() * 100.0)),
        Cell::new(s.best_streak),
        Cell::new(format!("{:.1}s", s.time_left)),
        Cell::new(outcome.best),
    ]);
    println!("{table}");

    if outcome.is_new_record() {
        println!("New record!");
    }
    if outcome.report.is_none() {
        println!("High score could not be reported.");
    }
}
