//! The `tango print` command.

use std::path::PathBuf;

use anyhow::Result;

use tango_core::build_with_settings;
use tango_core::session::PrintSession;
use tango_print::html::{write_sheet, SheetKind, SheetMeta};
use tango_print::json::{generate_answer_key, write_answer_key};

use super::QuizArgs;

pub fn execute(args: QuizArgs, output: PathBuf, title: Option<String>, key: bool) -> Result<()> {
    let mut ctx = args.load()?;

    let quiz = build_with_settings(&ctx.pool, &ctx.settings, &mut ctx.rng);
    let mut session = PrintSession::new();
    let master = ctx.list.entries();
    if !session.prepare(quiz, &ctx.pool, master, ctx.settings.choices, &mut ctx.rng) {
        println!(
            "No questions in range {}-{}; nothing to print.",
            ctx.range.0, ctx.range.1
        );
        return Ok(());
    }
    let Some(sheet) = session.sheet() else {
        return Ok(());
    };

    let meta = SheetMeta::today(title.unwrap_or_else(|| ctx.list.name.clone()));

    let questions = output.join("questions.html");
    write_sheet(sheet, &meta, SheetKind::Questions, &questions)?;
    println!("Question sheet: {}", questions.display());

    let answers = output.join("answers.html");
    write_sheet(sheet, &meta, SheetKind::Answers, &answers)?;
    println!("Answer sheet: {}", answers.display());

    if key {
        let path = output.join("answer-key.json");
        write_answer_key(&generate_answer_key(sheet, &meta.title, meta.date), &path)?;
        println!("Answer key: {}", path.display());
    }

    println!("{} questions", sheet.len());
    Ok(())
}
