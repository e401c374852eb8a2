//! tango-print: Print and export of prepared quizzes.
//!
//! Renders HTML question and answer sheets and a JSON answer key from the
//! same prepared quiz.

pub mod html;
pub mod json;

pub use html::{generate_answer_sheet, generate_question_sheet, write_sheet, SheetKind, SheetMeta};
pub use json::{generate_answer_key, write_answer_key, AnswerKey};
