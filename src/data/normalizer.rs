//! Assigns chapter ids and per-type question-set ids and titles.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Chapter, QuestionSet, QuestionSetType, RawChapter, RawQuestionSet};

/// Running 1-based count of question-sets seen so far, per type.
#[derive(Debug, Default)]
struct SetCounters {
    counts: HashMap<QuestionSetType, usize>,
}

impl SetCounters {
    fn next(&mut self, kind: QuestionSetType) -> usize {
        let count = self.counts.entry(kind).or_insert(0);
        *count += 1;
        *count
    }
}

/// Build a normalized copy of `raw`.
///
/// Chapters without an id get `chapter<N>` from their 1-based position.
/// Every question-set is renumbered as `<type><count>` and titled
/// `"<label> 第<count>篇"`, counting each type across the whole bank.
/// The input is left untouched.
pub fn normalize_chapters(raw: &[RawChapter]) -> Vec<Chapter> {
    let mut counters = SetCounters::default();

    let chapters: Vec<Chapter> = raw
        .iter()
        .enumerate()
        .map(|(index, chapter)| normalize_chapter(index, chapter, &mut counters))
        .collect();

    debug!(
        chapters = chapters.len(),
        reading = counters.counts.get(&QuestionSetType::Reading).copied().unwrap_or(0),
        cloze = counters.counts.get(&QuestionSetType::Cloze).copied().unwrap_or(0),
        translation = counters
            .counts
            .get(&QuestionSetType::Translation)
            .copied()
            .unwrap_or(0),
        "normalized question bank"
    );

    chapters
}

fn normalize_chapter(index: usize, chapter: &RawChapter, counters: &mut SetCounters) -> Chapter {
    let id = chapter
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("chapter{}", index + 1));

    Chapter {
        id,
        title: chapter.title.clone(),
        description: chapter.description.clone(),
        question_sets: chapter
            .question_sets
            .iter()
            .map(|set| normalize_set(set, counters.next(set.kind)))
            .collect(),
    }
}

fn normalize_set(set: &RawQuestionSet, count: usize) -> QuestionSet {
    QuestionSet {
        id: set_id(set.kind, count),
        title: set_title(set.kind, count),
        description: set.description.clone(),
        kind: set.kind,
        article: set.article.clone(),
        questions: set.questions.clone(),
    }
}

pub fn set_id(kind: QuestionSetType, count: usize) -> String {
    format!("{}{}", kind.as_str(), count)
}

pub fn set_title(kind: QuestionSetType, count: usize) -> String {
    format!("{} 第{}篇", kind.label(), count)
}
