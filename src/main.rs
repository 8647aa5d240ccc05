use std::path::Path;

use tmdb_snapshot::api_client::TmdbClient;
use tmdb_snapshot::config::TmdbConfig;
use tmdb_snapshot::probe::{self, OUTPUT_DIR, SWEEP_ITEMS};

fn main() {
    tmdb_snapshot::logging::init();

    let config = match TmdbConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let client = TmdbClient::new(&config.base_url, &config.api_key);

    println!("Testing TMDB API calls...\n");
    let report = probe::run_sweep(&client, SWEEP_ITEMS, Path::new(OUTPUT_DIR));

    println!();
    if report.failed == 0 {
        println!("✓ All {} fetches completed!", report.attempted);
    } else {
        println!(
            "✗ {} of {} fetches failed",
            report.failed, report.attempted
        );
    }
    println!("Check the {}/ directory for JSON files.", OUTPUT_DIR);
}
