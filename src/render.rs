//! Markdown for a single comic page and the name of the file it lives in.

use crate::models::Comic;

const PAGE_SUFFIX: &str = ".md";

/// `{date}_{title}.md`, with path separators in the title replaced by `-`.
pub fn generate_file_name(title: &str, date: &str) -> String {
    let title: String = title
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{date}_{title}{PAGE_SUFFIX}")
}

/// File name without its `.md` suffix, as linked from the index.
pub fn link_stem(file_name: &str) -> &str {
    file_name.strip_suffix(PAGE_SUFFIX).unwrap_or(file_name)
}

pub fn generate_markdown(
    title: &str,
    img_url: &str,
    alt: &str,
    num: u32,
    date: &str,
    site_url: &str,
) -> String {
    format!(
        "
# XKCD Comic for day {date}

## {title}

![{title}]({img_url} \"{alt}\")

[Visit the original page]({site_url}/{num}/)
"
    )
}

pub fn render_comic(comic: &Comic, date: &str, site_url: &str) -> String {
    generate_markdown(
        &comic.title,
        &comic.img,
        &comic.alt,
        comic.num,
        date,
        site_url,
    )
}
