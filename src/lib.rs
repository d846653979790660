pub mod config;
pub mod engine; // The rule-based diagnostic core

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

/// Console entry point: tracing init, rule-table validation, then a
/// comma-separated symptom prompt loop. Everything here is presentation
/// plumbing around [`engine::diagnose`].
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Surface a malformed rule table before serving any request.
    if let Err(err) = engine::rules::validate_table() {
        tracing::error!(%err, "diagnosis rule table is invalid, refusing to start");
        std::process::exit(1);
    }

    let json_output = std::env::args().any(|arg| arg == "--json");

    println!("Known symptoms (for reference):");
    for symptom in engine::list_known_symptoms() {
        println!("  - {symptom}");
    }
    println!("\nEnter your symptoms, comma-separated (Ctrl-D to quit):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        if let Err(err) = stdout.flush() {
            tracing::debug!(%err, "failed to flush prompt");
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "failed to read input");
                break;
            }
        }

        let phrases: Vec<String> = line
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if phrases.is_empty() {
            println!("Please enter at least one symptom.");
            continue;
        }

        let results = engine::diagnose(&phrases);
        if json_output {
            match serde_json::to_string(&results) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => tracing::error!(%err, "failed to render results as JSON"),
            }
        } else {
            for result in results {
                println!("{result}");
            }
        }
    }
}
