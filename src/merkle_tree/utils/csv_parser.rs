use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvNote {
    note: String,
}

pub fn parse_csv_to_notes<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let mut notes = Vec::new();
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    for result in rdr.deserialize() {
        let record: CsvNote = result?;
        let note = record.note.trim();

        if note.is_empty() {
            return Err("note identifier can't be empty".into());
        }
        notes.push(note.to_string());
    }

    if notes.is_empty() {
        return Err("the csv file doesn't contain any note".into());
    }

    Ok(notes)
}
