use crate::client::Client;
use crate::config::{Config, format_date};
use crate::error::ComicError;
use crate::index::{InsertOutcome, insert_to_content_page};
use crate::models::Comic;
use crate::render::{generate_file_name, link_stem, render_comic};
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub comic: Comic,
    pub page_path: PathBuf,
    pub index: InsertOutcome,
}

/// Write the page for an already fetched comic and list it in the index.
pub fn publish(config: &Config, comic: Comic, date: NaiveDate) -> Result<RunReport, ComicError> {
    let date_str = format_date(date);
    let file_name = generate_file_name(&comic.title, &date_str);
    let page_path = config.page_path(&file_name);

    fs::write(&page_path, render_comic(&comic, &date_str, &config.site_url))
        .map_err(|err| ComicError::io(&page_path, err))?;
    info!("Wrote {}", page_path.display());

    let index = insert_to_content_page(
        config.index_path(),
        config.layout,
        &comic.title,
        &date_str,
        link_stem(&file_name),
    )?;

    Ok(RunReport {
        comic,
        page_path,
        index,
    })
}

/// Fetch the comic for `date` and publish it. Nothing is written if the
/// fetch fails.
pub async fn run(config: &Config, date: NaiveDate) -> Result<RunReport, ComicError> {
    let page_no = config.page_no(date)?;
    info!("Fetching comic {} for {}", page_no, date);
    let client = Client::new(config)?;
    let comic = client.fetch_comic(page_no).await?;
    publish(config, comic, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn comic() -> Comic {
        Comic {
            title: "Barrel - Part 1".into(),
            img: "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg".into(),
            alt: "Don't we all.".into(),
            num: 1,
        }
    }

    #[test]
    fn publish_writes_page_and_index_row() {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_docs_dir(tmp.path());
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

        let report = publish(&config, comic(), date).unwrap();
        assert_eq!(report.index, InsertOutcome::Inserted);
        assert_eq!(
            report.page_path,
            tmp.path().join("2024-03-18_Barrel - Part 1.md")
        );
        let page = fs::read_to_string(&report.page_path).unwrap();
        assert!(page.contains("## Barrel - Part 1"));

        let index = fs::read_to_string(config.index_path()).unwrap();
        assert!(index.contains("[Link](./2024-03-18_Barrel%20-%20Part%201 \"Barrel - Part 1\")"));

        let again = publish(&config, comic(), date).unwrap();
        assert_eq!(again.index, InsertOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(config.index_path()).unwrap(), index);
    }

    #[test]
    fn publish_fails_without_docs_dir() {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_docs_dir(tmp.path().join("missing"));
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let err = publish(&config, comic(), date).unwrap_err();
        assert!(matches!(err, ComicError::Io { .. }));
    }
}
