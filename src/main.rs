use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process;
use xkcd_daily::config::{API_BASE_URL, DATE_FORMAT, DOCS_DIR};
use xkcd_daily::{ComicError, Config, InsertOutcome, run};

#[derive(Debug, Parser)]
#[command(
    name = "xkcd-daily",
    version,
    about = "Fetch today's xkcd comic into a markdown page and index"
)]
struct Cli {
    /// Directory the comic pages are written to
    #[arg(long, env = "XKCD_DOCS_DIR", default_value = DOCS_DIR)]
    docs_dir: PathBuf,

    /// Index document; defaults to index.md inside the docs directory
    #[arg(long, env = "XKCD_INDEX")]
    index: Option<PathBuf>,

    /// Base URL of the comic JSON API
    #[arg(long, env = "XKCD_API_BASE_URL", default_value = API_BASE_URL)]
    api_base_url: String,

    /// Day to fetch (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

impl Cli {
    fn config(&self) -> Config {
        let config = Config::with_docs_dir(&self.docs_dir).with_api_base_url(&self.api_base_url);
        match &self.index {
            Some(index) => config.with_index_path(index),
            None => config,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    match run(&config, date).await {
        Ok(report) => {
            match report.index {
                InsertOutcome::Inserted => info!(
                    "Published comic #{} to {}",
                    report.comic.num,
                    report.page_path.display()
                ),
                InsertOutcome::AlreadyPresent => info!(
                    "Comic #{} was already indexed, page {} rewritten",
                    report.comic.num,
                    report.page_path.display()
                ),
            }
            Ok(())
        }
        Err(ComicError::Status(status)) => {
            error!(
                "Failed to get the data from the API. Status code: {}",
                status.as_u16()
            );
            process::exit(1);
        }
        Err(err) => {
            error!("{err}");
            Err(err.into())
        }
    }
}
