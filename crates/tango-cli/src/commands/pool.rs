//! The `tango pool` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tango_core::PoolStats;

use super::QuizArgs;

pub fn execute(args: QuizArgs, list: bool, json: bool) -> Result<()> {
    let ctx = args.load()?;
    let stats = PoolStats::compute(&ctx.pool, ctx.settings.count, ctx.settings.allow_duplicates);

    if json {
        let value = serde_json::json!({
            "word_list": ctx.list.name,
            "start": ctx.range.0,
            "end": ctx.range.1,
            "pool_size": stats.pool_size,
            "question_count": stats.question_count,
            "entries": if list { Some(ctx.pool.entries()) } else { None },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Word list", "Range", "Pool", "Questions", "Duplicates"]);
    table.add_row(vec![
        Cell::new(&ctx.list.name),
        Cell::new(format!("{}-{}", ctx.range.0, ctx.range.1)),
        Cell::new(stats.pool_size),
        Cell::new(stats.question_count),
        Cell::new(if ctx.settings.allow_duplicates { "yes" } else { "no" }),
    ]);
    println!("{table}");

    if list && !ctx.pool.is_empty() {
        let mut entries = Table::new();
        entries.set_header(vec!["No", "English", "Japanese"]);
        for e in ctx.pool.entries() {
            entries.add_row(vec![Cell::new(e.no), Cell::new(&e.en), Cell::new(&e.jp)]);
        }
        println!("{entries}");
    }

    Ok(())
}
