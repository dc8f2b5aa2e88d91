//! Simple CLI that reads a channel page from stdin and prints the extracted
//! page record as JSON to stdout.

use std::io::{self, Read};

use tg_preview_feed::extract_page_bytes;

fn main() {
    // Read raw bytes so the charset can be detected
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let page = match extract_page_bytes(&html) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Extraction failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize page: {e}");
            std::process::exit(1);
        }
    }
}
