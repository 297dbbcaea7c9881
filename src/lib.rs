//! Fetch the daily xkcd comic, write it as a markdown page and list it in a
//! markdown index table.

pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod pipeline;
pub mod render;

pub use client::Client;
pub use config::{ColumnLayout, Config};
pub use error::ComicError;
pub use index::{
    IndexDocument, IndexRow, InsertOutcome, generate_content_line, insert_to_content_page,
};
pub use models::Comic;
pub use pipeline::{RunReport, publish, run};
pub use render::{generate_file_name, generate_markdown};
