mod chapter;
mod question;

pub use chapter::{Article, Chapter, Paragraph, QuestionSet, RawChapter, RawQuestionSet};
pub use question::{AnswerOption, Question, QuestionSetType};
