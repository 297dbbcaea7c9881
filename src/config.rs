use crate::error::ComicError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_BASE_URL: &str = "https://xkcd.com";
pub const SITE_URL: &str = "https://xkcd.com";
pub const DOCS_DIR: &str = "docs";
pub const INDEX_FILE: &str = "index.md";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Widths of the three index table columns, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub title: usize,
    pub link: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: 10,
            title: 50,
            link: 142,
        }
    }
}

/// Everything a run needs to know about where to fetch from and write to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Day zero for the comic number.
    pub epoch: NaiveDate,
    /// Prefix of `{page_no}/info.0.json`.
    pub api_base_url: String,
    /// Prefix of the "Visit the original page" link.
    pub site_url: String,
    pub docs_dir: PathBuf,
    pub index_path: PathBuf,
    pub layout: ColumnLayout,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_docs_dir(DOCS_DIR)
    }
}

impl Config {
    /// Default configuration rooted at `docs_dir`, with the index inside it.
    pub fn with_docs_dir(docs_dir: impl Into<PathBuf>) -> Self {
        let docs_dir = docs_dir.into();
        Self {
            epoch: epoch(),
            api_base_url: API_BASE_URL.to_string(),
            site_url: SITE_URL.to_string(),
            index_path: docs_dir.join(INDEX_FILE),
            docs_dir,
            layout: ColumnLayout::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = path.into();
        self
    }

    pub fn page_path(&self, file_name: &str) -> PathBuf {
        self.docs_dir.join(file_name)
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Comic number for `date`: whole days elapsed since the epoch.
    pub fn page_no(&self, date: NaiveDate) -> Result<u32, ComicError> {
        let days = date.signed_duration_since(self.epoch).num_days();
        u32::try_from(days).map_err(|_| ComicError::BeforeEpoch {
            date,
            epoch: self.epoch,
        })
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 17).unwrap_or(NaiveDate::MIN)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
