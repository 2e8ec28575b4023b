use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use thiserror::Error;
use tracing::{debug, info};

use super::normalizer::normalize_chapters;
use crate::models::{Chapter, RawChapter};

/// The built-in exercise bank, as authored.
pub const RAW_BANK_JSON: &str = include_str!("../../data/question_bank.json");

const EMBEDDED_SOURCE: &str = "<embedded>";

static QUESTION_DATA: LazyLock<Vec<Chapter>> = LazyLock::new(|| {
    let raw = load_raw_chapters_from_str(RAW_BANK_JSON)
        .unwrap_or_else(|err| panic!("built-in question bank is invalid: {}", err));
    normalize_chapters(&raw)
});

/// Error loading a raw question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} must contain at least one chapter")]
    Empty { origin: String },
}

/// The normalized built-in bank, built on first use.
pub fn question_data() -> &'static [Chapter] {
    &QUESTION_DATA
}

pub fn load_raw_chapters_from_str(json: &str) -> Result<Vec<RawChapter>, LoadError> {
    parse_raw_chapters(json, EMBEDDED_SOURCE)
}

pub fn load_raw_chapters_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawChapter>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let chapters = parse_raw_chapters(&json_content, &path.display().to_string())?;
    info!(path = %path.display(), chapters = chapters.len(), "loaded question bank");
    Ok(chapters)
}

fn parse_raw_chapters(json: &str, origin: &str) -> Result<Vec<RawChapter>, LoadError> {
    let chapters: Vec<RawChapter> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    if chapters.is_empty() {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }

    debug!(origin, chapters = chapters.len(), "parsed raw chapters");
    Ok(chapters)
}
