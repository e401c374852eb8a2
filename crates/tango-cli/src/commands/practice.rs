//! The `tango practice` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tango_core::answer::resolve_input;
use tango_core::session::{Phase, PracticeSession};
use tango_core::{build_with_settings, prepare_choices, AnswerOutcome, QuizItem};

use super::{format_choices, read_commands, QuizArgs, QUIT};

fn show(item: &QuizItem, position: usize, total: usize) {
    println!("\n[{}/{}] {}", position + 1, total, item.prompt());
    if item.is_multiple_choice() {
        println!("{}", format_choices(item.choices()));
    }
}

pub fn execute(args: QuizArgs) -> Result<()> {
    let mut ctx = args.load()?;

    let quiz = build_with_settings(&ctx.pool, &ctx.settings, &mut ctx.rng);
    let quiz = prepare_choices(
        quiz,
        &ctx.pool,
        ctx.list.entries(),
        ctx.settings.choices,
        &mut ctx.rng,
    );

    let mut session = PracticeSession::new();
    if !session.start(quiz) {
        println!("No questions in range {}-{}.", ctx.range.0, ctx.range.1);
        return Ok(());
    }

    println!("Practice: {} questions. Type {QUIT} to quit.", session.len());
    if let Some(item) = session.current() {
        show(item, session.position(), session.len());
    }

    for line in read_commands().filter(|l| !l.is_empty()) {
        let Some(item) = session.current().cloned() else {
            break;
        };
        match session.submit(resolve_input(&item, &line)) {
            AnswerOutcome::Correct => {
                println!("○ correct");
                match session.current() {
                    Some(next) => show(next, session.position(), session.len()),
                    None => break,
                }
            }
            AnswerOutcome::Incorrect => println!("× try again"),
            AnswerOutcome::Ignored => break,
        }
    }

    let finished = session.phase() == Phase::Completed;
    let mut table = Table::new();
    table.set_header(vec!["Questions", "Answered", "Mistakes", "Finished"]);
    table.add_row(vec![
        Cell::new(session.len()),
        Cell::new(session.position()),
        Cell::new(session.mistakes()),
        Cell::new(if finished { "yes" } else { "no" }),
    ]);
    println!("\n{table}");

    Ok(())
}
