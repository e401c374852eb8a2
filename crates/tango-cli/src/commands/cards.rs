//! The `tango cards` command.

use anyhow::Result;

use tango_core::session::CardDeck;

use super::{read_commands, QuizArgs, QUIT};

fn show(deck: &CardDeck) {
    if let Some(text) = deck.text() {
        let (pos, total) = deck.progress();
        println!("[{pos}/{total}] {text}");
    }
}

pub fn execute(args: QuizArgs) -> Result<()> {
    let mut ctx = args.load()?;

    let mut deck = CardDeck::new();
    if !deck.open(&ctx.pool) {
        println!("No cards in range {}-{}.", ctx.range.0, ctx.range.1);
        return Ok(());
    }
    if ctx.settings.shuffle {
        deck.shuffle(&mut ctx.rng);
    }

    println!("Cards: Enter/n next, p previous, f flip, s shuffle, {QUIT} quit.");
    show(&deck);

    for line in read_commands() {
        match line.as_str() {
            "" | "n" => deck.next(),
            "p" => deck.prev(),
            "f" => deck.flip(),
            "s" => deck.shuffle(&mut ctx.rng),
            other => {
                println!("unknown command: {other}");
                continue;
            }
        }
        show(&deck);
    }

    deck.close();
    Ok(())
}
