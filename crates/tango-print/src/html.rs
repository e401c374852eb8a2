//! Printable HTML question and answer sheets.
//!
//! Produces a self-contained A4 page with all CSS inlined, ready for
//! print-to-PDF. Both sheets read the options stored on the quiz, so the
//! letters on the answer sheet always match the question sheet.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tango_core::model::{QuestionDirection, Quiz, QuizItem};

/// Options per printed row.
const ROW_WIDTH: usize = 4;

/// Header information shared by both sheets.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub title: String,
    pub date: NaiveDate,
}

impl SheetMeta {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// Today's date in local time.
    pub fn today(title: impl Into<String>) -> Self {
        Self::new(title, chrono::Local::now().date_naive())
    }
}

/// Which sheet to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Questions,
    Answers,
}

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Letter for the option at `index`: A, B, C, ...
pub fn choice_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

fn question_block(number: usize, item: &QuizItem) -> String {
    match item.direction {
        QuestionDirection::JpToEn => format!(
            "<div class=\"q\">{number}. <span class=\"jp\">{}</span> <span class=\"blank\"></span></div>\n",
            html_escape(&item.entry.jp)
        ),
        QuestionDirection::EnToJp => {
            let mut block = format!(
                "<div class=\"q\">{number}. <span class=\"en\">{}</span>\n",
                html_escape(&item.entry.en)
            );
            for (row, chunk) in item.choices().chunks(ROW_WIDTH).enumerate() {
                block.push_str("<div class=\"opts\">");
                for (k, option) in chunk.iter().enumerate() {
                    block.push_str(&format!(
                        "<span>{}. <span class=\"jp\">{}</span></span>",
                        choice_letter(row * ROW_WIDTH + k),
                        html_escape(option)
                    ));
                }
                block.push_str("</div>\n");
            }
            block.push_str("</div>\n");
            block
        }
    }
}

fn answer_block(number: usize, item: &QuizItem) -> String {
    match item.direction {
        QuestionDirection::JpToEn => format!(
            "<div class=\"q\">{number}. <span class=\"en\">{}</span></div>\n",
            html_escape(&item.entry.en)
        ),
        QuestionDirection::EnToJp => {
            // Unprepared items have no options on the question sheet either.
            let letter = item.correct_choice().map(choice_letter).unwrap_or('?');
            format!(
                "<div class=\"q\">{number}. {letter} <span class=\"jp\">{}</span></div>\n",
                html_escape(&item.entry.jp)
            )
        }
    }
}

/// Render one sheet for `quiz`.
pub fn generate_sheet(quiz: &Quiz, meta: &SheetMeta, kind: SheetKind) -> String {
    let label = match kind {
        SheetKind::Questions => "Questions",
        SheetKind::Answers => "Answers",
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} ({label})</title>\n",
        html_escape(&meta.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"sheet\">\n");
    html.push_str(&format!(
        "<div class=\"meta\">{} / {} / {label}</div>\n",
        meta.date.format("%Y-%m-%d"),
        quiz.len()
    ));
    html.push_str("<div class=\"grid2\">\n");
    for (i, item) in quiz.iter().enumerate() {
        let block = match kind {
            SheetKind::Questions => question_block(i + 1, item),
            SheetKind::Answers => answer_block(i + 1, item),
        };
        html.push_str(&block);
    }
    html.push_str("</div>\n</div>\n");

    html.push_str("</body>\n</html>");
    html
}

pub fn generate_question_sheet(quiz: &Quiz, meta: &SheetMeta) -> String {
    generate_sheet(quiz, meta, SheetKind::Questions)
}

pub fn generate_answer_sheet(quiz: &Quiz, meta: &SheetMeta) -> String {
    generate_sheet(quiz, meta, SheetKind::Answers)
}

/// Write a sheet to a file, creating parent directories.
pub fn write_sheet(quiz: &Quiz, meta: &SheetMeta, kind: SheetKind, path: &Path) -> Result<()> {
    let html = generate_sheet(quiz, meta, kind);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write sheet to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
@page { size: A4; margin: 12mm; }
body { font-family: 'Hiragino Sans', 'Noto Sans JP', -apple-system, sans-serif; margin: 0; color: #111; }
.sheet { font-size: 10.5pt; }
.meta { text-align: right; color: #555; margin-bottom: 6mm; }
.grid2 { column-count: 2; column-gap: 10mm; }
.q { break-inside: avoid; margin: 0 0 3mm; line-height: 1.5; }
.opts { display: grid; grid-template-columns: repeat(4, 1fr); font-size: 9pt; margin-left: 1.2em; }
.blank { display: inline-block; min-width: 45%; border-bottom: 1px solid #333; }
.jp { font-weight: 500; }
"#;
