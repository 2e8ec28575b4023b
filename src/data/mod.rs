mod loader;
mod normalizer;
mod validate;

pub use loader::{
    load_raw_chapters_from_path, load_raw_chapters_from_str, question_data, LoadError,
    RAW_BANK_JSON,
};
pub use normalizer::normalize_chapters;
pub use validate::{validate, IssueKind, ValidationIssue};
