use serde::{Deserialize, Serialize};

use super::question::{Question, QuestionSetType};

/// One paragraph of an article with its Chinese rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(rename = "textCN", default)]
    pub text_cn: String,
}

/// Bilingual source text shared by the questions of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(rename = "titleCN", default, skip_serializing_if = "Option::is_none")]
    pub title_cn: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

/// A question-set as authored, before ids and titles are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestionSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: QuestionSetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    pub questions: Vec<Question>,
}

/// A chapter as authored. `id` may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChapter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub question_sets: Vec<RawQuestionSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: QuestionSetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_sets: Vec<QuestionSet>,
}

impl Chapter {
    pub fn total_questions(&self) -> usize {
        self.question_sets.iter().map(|set| set.questions.len()).sum()
    }
}
