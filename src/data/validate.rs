//! Consistency checks for authored data.
//!
//! Normalization never looks at answers or options, so a bank can be
//! renumbered successfully and still point a question at an option that
//! does not exist. These checks report such problems without touching
//! the data.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::models::{Chapter, Question, QuestionSet, QuestionSetType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    UnknownCorrectOption { correct_option_id: String },
    DuplicateOptionId { option_id: String },
    DuplicateQuestionId,
    EmptyQuestionSet,
    MissingArticle,
    MismatchedQuestionType { expected: QuestionSetType, found: QuestionSetType },
}

/// A problem found at a specific place in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub chapter_id: String,
    pub set_id: String,
    pub question_id: Option<String>,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chapter_id, self.set_id)?;
        if let Some(question_id) = &self.question_id {
            write!(f, "/{}", question_id)?;
        }
        match &self.kind {
            IssueKind::UnknownCorrectOption { correct_option_id } => {
                write!(f, ": correct option {:?} is not one of the options", correct_option_id)
            }
            IssueKind::DuplicateOptionId { option_id } => {
                write!(f, ": option id {:?} appears more than once", option_id)
            }
            IssueKind::DuplicateQuestionId => write!(f, ": duplicate question id"),
            IssueKind::EmptyQuestionSet => write!(f, ": question-set has no questions"),
            IssueKind::MissingArticle => write!(f, ": reading set has no article"),
            IssueKind::MismatchedQuestionType { expected, found } => {
                write!(f, ": question type {} in a {} set", found, expected)
            }
        }
    }
}

pub fn validate(chapters: &[Chapter]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for chapter in chapters {
        for set in &chapter.question_sets {
            validate_set(&chapter.id, set, &mut issues);
        }
    }

    for issue in &issues {
        warn!(%issue, "validation issue");
    }

    issues
}

fn validate_set(chapter_id: &str, set: &QuestionSet, issues: &mut Vec<ValidationIssue>) {
    let mut push = |question_id: Option<&str>, kind: IssueKind| {
        issues.push(ValidationIssue {
            chapter_id: chapter_id.to_string(),
            set_id: set.id.clone(),
            question_id: question_id.map(str::to_string),
            kind,
        });
    };

    if set.questions.is_empty() {
        push(None, IssueKind::EmptyQuestionSet);
    }

    if set.kind == QuestionSetType::Reading && set.article.is_none() {
        push(None, IssueKind::MissingArticle);
    }

    let mut seen_questions = HashSet::new();
    for question in &set.questions {
        if !seen_questions.insert(question.id.as_str()) {
            push(Some(question.id.as_str()), IssueKind::DuplicateQuestionId);
        }

        if question.kind != set.kind {
            push(
                Some(question.id.as_str()),
                IssueKind::MismatchedQuestionType {
                    expected: set.kind,
                    found: question.kind,
                },
            );
        }

        for kind in question_issues(question) {
            push(Some(question.id.as_str()), kind);
        }
    }
}

fn question_issues(question: &Question) -> Vec<IssueKind> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for option in &question.options {
        if !seen.insert(option.id.as_str()) {
            found.push(IssueKind::DuplicateOptionId {
                option_id: option.id.clone(),
            });
        }
    }

    if question.correct_option().is_none() {
        found.push(IssueKind::UnknownCorrectOption {
            correct_option_id: question.correct_option_id.clone(),
        });
    }

    found
}
