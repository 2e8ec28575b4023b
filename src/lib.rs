//! # exam-bank
//!
//! A built-in bank of English reading-comprehension, cloze and
//! translation exercises, normalized for a quiz front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_bank::{question_data, QuestionBank, BankError};
//!
//! fn main() -> Result<(), BankError> {
//!     // The embedded bank, numbered once on first access
//!     for chapter in question_data() {
//!         println!("{} ({} sets)", chapter.title, chapter.question_sets.len());
//!     }
//!
//!     // Or load and normalize another bank of the same shape
//!     let bank = QuestionBank::from_json("bank.json")?;
//!     assert!(bank.validate().is_empty());
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod logger;
mod models;
pub mod report;

use std::path::Path;

use thiserror::Error;

pub use app::QuestionBank;
pub use data::{
    load_raw_chapters_from_path, load_raw_chapters_from_str, normalize_chapters, question_data,
    validate, IssueKind, LoadError, ValidationIssue, RAW_BANK_JSON,
};
pub use models::{
    AnswerOption, Article, Chapter, Paragraph, Question, QuestionSet, QuestionSetType, RawChapter,
    RawQuestionSet,
};

/// Error type for question bank operations.
#[derive(Debug, Error)]
pub enum BankError {
    /// Error loading a bank from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// Error writing output.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl QuestionBank {
    /// Load and normalize a raw bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use exam_bank::QuestionBank;
    ///
    /// let bank = QuestionBank::from_json("bank.json").expect("Failed to load bank");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let raw = load_raw_chapters_from_path(path)?;
        Ok(Self::from_raw(&raw))
    }

    /// Serialize the normalized chapters as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, BankError> {
        let json = if pretty {
            serde_json::to_string_pretty(self.chapters())?
        } else {
            serde_json::to_string(self.chapters())?
        };
        Ok(json)
    }
}
