use record::{Record, RecordWriter};
use std::path::Path;

pub fn book(title: &str) -> Record {
    Record::new("Author", title, "Publisher", 2000, 100).unwrap()
}

/// Writes one record per title to `path`.
pub fn write_catalog(path: &Path, titles: &[&str]) {
    let mut w = RecordWriter::create(path).unwrap();
    for t in titles {
        w.append(&book(t)).unwrap();
    }
    w.finish().unwrap();
}

pub fn titles_of(rows: &[&Record]) -> Vec<String> {
    rows.iter()
        .map(|r| r.title().to_string_lossy().into_owned())
        .collect()
}
