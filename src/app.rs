use crate::data::{normalize_chapters, question_data, validate, ValidationIssue};
use crate::models::{Chapter, QuestionSet, QuestionSetType, RawChapter};

/// A normalized chapter list with lookup helpers.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    chapters: Vec<Chapter>,
}

impl QuestionBank {
    /// The built-in exercise bank.
    pub fn builtin() -> Self {
        Self {
            chapters: question_data().to_vec(),
        }
    }

    pub fn from_raw(raw: &[RawChapter]) -> Self {
        Self {
            chapters: normalize_chapters(raw),
        }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }

    pub fn sets(&self) -> impl Iterator<Item = &QuestionSet> {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.question_sets.iter())
    }

    pub fn find_set(&self, id: &str) -> Option<&QuestionSet> {
        self.sets().find(|set| set.id == id)
    }

    pub fn sets_of_type(&self, kind: QuestionSetType) -> Vec<&QuestionSet> {
        self.sets().filter(|set| set.kind == kind).collect()
    }

    pub fn total_sets(&self) -> usize {
        self.sets().count()
    }

    pub fn total_questions(&self) -> usize {
        self.chapters.iter().map(Chapter::total_questions).sum()
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(&self.chapters)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{load_raw_chapters_from_str, RAW_BANK_JSON};

    #[test]
    fn test_builtin_matches_question_data() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.chapters(), question_data());
    }

    #[test]
    fn test_find_set() {
        let bank = QuestionBank::builtin();

        let set = bank.find_set("reading1").unwrap();
        assert_eq!(set.kind, QuestionSetType::Reading);
        assert_eq!(set.title, "阅读理解 第1篇");
        assert!(bank.find_set("reading0").is_none());
    }

    #[test]
    fn test_sets_of_type_are_in_order() {
        let bank = QuestionBank::builtin();

        for kind in QuestionSetType::ALL {
            let sets = bank.sets_of_type(kind);
            assert!(!sets.is_empty(), "no {} sets", kind);
            for (index, set) in sets.iter().enumerate() {
                assert_eq!(set.id, format!("{}{}", kind, index + 1));
            }
        }
    }

    #[test]
    fn test_totals() {
        let raw = load_raw_chapters_from_str(RAW_BANK_JSON).unwrap();
        let bank = QuestionBank::from_raw(&raw);

        let raw_sets: usize = raw.iter().map(|c| c.question_sets.len()).sum();
        let raw_questions: usize = raw
            .iter()
            .flat_map(|c| c.question_sets.iter())
            .map(|s| s.questions.len())
            .sum();

        assert_eq!(bank.total_sets(), raw_sets);
        assert_eq!(bank.total_questions(), raw_questions);
        assert_eq!(
            bank.total_sets(),
            QuestionSetType::ALL
                .iter()
                .map(|kind| bank.sets_of_type(*kind).len())
                .sum::<usize>()
        );
    }

    #[test]
    fn test_mutating_a_copy_leaves_builtin_alone() {
        let mut chapters = QuestionBank::builtin().into_chapters();
        chapters[0].question_sets[0].title = "edited".to_string();

        assert_eq!(question_data()[0].question_sets[0].title, "阅读理解 第1篇");
    }
}
