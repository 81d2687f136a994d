use log::error;
use name_matcher::{batch, scorers, top_n, EntryList, TokenIndex};
use std::io::{self, Read};

/// Loads `(name, identifier)` reference entries from a two-column CSV file.
fn load_entries(file_path: &str) -> Result<EntryList<String>, Box<dyn std::error::Error>> {
    let mut entries = Vec::new();
    let mut reader = csv::Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let name = record.get(0).unwrap_or_default().to_string();
            let id = record.get(1).unwrap_or_default().to_string();
            entries.push((name, id));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(entries)
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <entries.csv> [top-n]", args[0]);
        std::process::exit(1);
    }

    let top = args
        .get(2)
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(5);

    let entries = match load_entries(&args[1]) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to load entries from {}: {}", args[1], e);
            std::process::exit(1);
        }
    };

    let index = TokenIndex::new(entries);

    // Read the query names from stdin, one per line
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let queries: EntryList<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| (line.to_string(), line.to_string()))
        .collect();

    for ((query, _), ranked) in batch(top_n, &index, top, &scorers::jaro_winkler, &queries) {
        println!("{}", query);
        for (score, (name, id)) in ranked {
            println!("  {:>3} {} ({})", score, name, id);
        }
    }
}
