use crate::error::ComicError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "No title";
pub const DEFAULT_IMAGE: &str = "No image";
pub const DEFAULT_ALT: &str = "No alt";
pub const DEFAULT_NUM: u32 = 1;

/// One comic as rendered into the docs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    pub title: String,
    pub img: String,
    pub alt: String,
    pub num: u32,
}

#[derive(Debug, Deserialize)]
struct RawComic {
    title: Option<Value>,
    img: Option<Value>,
    alt: Option<Value>,
    num: Option<Value>,
}

fn json_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or(value: &Option<Value>, default: &str) -> String {
    value
        .as_ref()
        .and_then(json_value_to_string)
        .unwrap_or_else(|| default.to_string())
}

fn parse_num(value: &Option<Value>) -> Result<u32, ComicError> {
    let Some(value) = value else {
        return Ok(DEFAULT_NUM);
    };
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| ComicError::InvalidNumber(n.to_string()));
    }
    let raw = json_value_to_string(value).unwrap_or_else(|| value.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ComicError::InvalidNumber(raw))
}

impl TryFrom<RawComic> for Comic {
    type Error = ComicError;

    fn try_from(raw: RawComic) -> Result<Self, Self::Error> {
        Ok(Comic {
            num: parse_num(&raw.num)?,
            title: text_or(&raw.title, DEFAULT_TITLE),
            img: text_or(&raw.img, DEFAULT_IMAGE),
            alt: text_or(&raw.alt, DEFAULT_ALT),
        })
    }
}

/// Parse an `info.0.json` payload.
pub fn parse_comic(data: &str) -> Result<Comic, ComicError> {
    let raw: RawComic = serde_json::from_str(data).map_err(|_| ComicError::InvalidResponse)?;
    let comic = Comic::try_from(raw)?;
    debug!("Parsed comic #{} {:?}", comic.num, comic.title);
    Ok(comic)
}
