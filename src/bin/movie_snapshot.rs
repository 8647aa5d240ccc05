use std::path::Path;

use tmdb_snapshot::api_client::TmdbClient;
use tmdb_snapshot::config::TmdbConfig;
use tmdb_snapshot::movie_summary::MovieSummary;
use tmdb_snapshot::probe::{MOVIE_SNAPSHOT_ITEM, OUTPUT_DIR};

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
    let item = &MOVIE_SNAPSHOT_ITEM;

    println!("Fetching {}", item.label);
    println!("URL: {}/{}", config.base_url, item.resource);

    let value = match client.fetch(item.resource, item.append_to_response) {
        Ok(value) => value,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    let path = Path::new(OUTPUT_DIR).join(item.filename);
    if let Err(e) = tmdb_snapshot::snapshot::write_snapshot(&value, &path) {
        println!("✗ Error: {:#}", e);
        return;
    }

    println!("\n✓ Success! Saved raw response to: {}", path.display());
    print!("{}", MovieSummary::from_value(&value));
}
