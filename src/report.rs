//! Plain-text overview of a bank for the `summary` command.

use std::fmt::Write;

use crate::models::{Chapter, QuestionSet, QuestionSetType};

const ARTICLE_PREVIEW_LENGTH: usize = 40;

pub fn summary(chapters: &[Chapter]) -> String {
    let mut out = String::new();

    for chapter in chapters {
        let _ = writeln!(
            out,
            "{}  {}  ({} sets, {} questions)",
            chapter.id,
            chapter.title,
            chapter.question_sets.len(),
            chapter.total_questions()
        );
        for set in &chapter.question_sets {
            let _ = writeln!(out, "{}", set_line(set));
        }
    }

    let _ = writeln!(out, "{}", totals_line(chapters));
    out
}

fn set_line(set: &QuestionSet) -> String {
    let mut line = format!(
        "  {:<14} {}  {:2} q",
        set.id,
        set.title,
        set.questions.len()
    );
    if let Some(article) = &set.article {
        line.push_str("  ");
        line.push_str(&truncate(&article.title));
    }
    line
}

fn totals_line(chapters: &[Chapter]) -> String {
    let counts: Vec<String> = QuestionSetType::ALL
        .iter()
        .map(|kind| {
            let count = chapters
                .iter()
                .flat_map(|chapter| chapter.question_sets.iter())
                .filter(|set| set.kind == *kind)
                .count();
            format!("{} {}", kind.label(), count)
        })
        .collect();
    format!("total: {}", counts.join(" · "))
}

fn truncate(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > ARTICLE_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(ARTICLE_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn set(id: &str, kind: QuestionSetType, article_title: Option<&str>) -> QuestionSet {
        QuestionSet {
            id: id.to_string(),
            title: format!("{} 第1篇", kind.label()),
            description: String::new(),
            kind,
            article: article_title.map(|title| Article {
                title: title.to_string(),
                title_cn: None,
                paragraphs: Vec::new(),
            }),
            questions: Vec::new(),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short title"), "Short title");
        let long = "a".repeat(ARTICLE_PREVIEW_LENGTH + 5);
        assert_eq!(truncate(&long), format!("{}...", "a".repeat(ARTICLE_PREVIEW_LENGTH)));
        // counts characters, not bytes
        let wide = "读".repeat(ARTICLE_PREVIEW_LENGTH);
        assert_eq!(truncate(&wide), wide);
    }

    #[test]
    fn test_summary_lists_sets_and_totals() {
        let chapters = vec![Chapter {
            id: "chapter1".to_string(),
            title: "模拟测试一".to_string(),
            description: String::new(),
            question_sets: vec![
                set("reading1", QuestionSetType::Reading, Some("Libraries")),
                set("cloze1", QuestionSetType::Cloze, None),
            ],
        }];

        let text = summary(&chapters);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "chapter1  模拟测试一  (2 sets, 0 questions)");
        assert!(lines[1].contains("reading1"));
        assert!(lines[1].ends_with("Libraries"));
        assert!(lines[2].contains("完形填空 第1篇"));
        assert_eq!(lines[3], "total: 阅读理解 1 · 完形填空 1 · 英译汉 0");
    }
}
