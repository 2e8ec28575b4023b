use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of exercise a question-set (and its questions) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSetType {
    Reading,
    Cloze,
    Translation,
}

impl QuestionSetType {
    pub const ALL: [QuestionSetType; 3] = [Self::Reading, Self::Cloze, Self::Translation];

    /// Identifier prefix used for generated set ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Cloze => "cloze",
            Self::Translation => "translation",
        }
    }

    /// Chinese display label used for generated set titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Reading => "阅读理解",
            Self::Cloze => "完形填空",
            Self::Translation => "英译汉",
        }
    }
}

impl fmt::Display for QuestionSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(rename = "textCN", default, skip_serializing_if = "String::is_empty")]
    pub text_cn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionSetType,
    pub text: String,
    #[serde(rename = "textCN", default)]
    pub text_cn: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options
            .iter()
            .find(|option| option.id == self.correct_option_id)
    }
}
