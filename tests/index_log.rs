use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;
use xkcd_daily::{ColumnLayout, InsertOutcome, insert_to_content_page};

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn index_updates_are_logged() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("index.md");
    let layout = ColumnLayout::default();
    let insert = || {
        insert_to_content_page(&path, layout, "Foo", "2024-03-17", "2024-03-17_Foo").unwrap()
    };

    assert_eq!(insert(), InsertOutcome::Inserted);
    let before = fs::read_to_string(&path).unwrap();
    assert_eq!(insert(), InsertOutcome::AlreadyPresent);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);

    let title = "x ".repeat(60);
    let stem = format!("2024-03-18_{title}");
    insert_to_content_page(&path, layout, &title, "2024-03-18", &stem).unwrap();

    let lines = LOGGER.lines.lock().unwrap();
    assert!(lines.iter().any(|(level, msg)| {
        *level == Level::Info && msg.contains("already lists 2024-03-17 \"Foo\", skipping")
    }));
    assert!(lines.iter().any(|(level, msg)| {
        *level == Level::Debug && msg.contains("exceeds 142 characters, truncating")
    }));
}
