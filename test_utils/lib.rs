use csv::Reader;
use name_matcher::EntryList;
use std::error::Error;

/// Utility to load reference name entries from a CSV file for testing and
/// benchmarking. Expects `name,id` rows with a header line.
pub fn load_entries_from_file(file_path: &str) -> Result<EntryList<u32>, Box<dyn Error>> {
    let mut entries = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let name = record.get(0).unwrap_or_default().to_string();
            let id = record.get(1).unwrap_or_default().parse::<u32>()?;
            entries.push((name, id));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(entries)
}
