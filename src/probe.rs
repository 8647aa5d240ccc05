use std::path::Path;

use crate::api_client::TmdbClient;
use crate::snapshot;

/// Directory the raw responses land in, relative to the working directory.
pub const OUTPUT_DIR: &str = "test_responses";

/// One resource to fetch and persist.
pub struct ProbeItem {
    pub label: &'static str,
    pub resource: &'static str,
    pub append_to_response: Option<&'static str>,
    pub filename: &'static str,
}

/// The fixed sweep: one movie and three TV shows with embedded sub-resources,
/// plus both popularity lists.
pub const SWEEP_ITEMS: &[ProbeItem] = &[
    ProbeItem {
        label: "movie details (The Matrix - ID: 603)",
        resource: "movie/603",
        append_to_response: Some("videos,credits,images"),
        filename: "movie_603_matrix_raw.json",
    },
    ProbeItem {
        label: "TV show details (Breaking Bad - ID: 1396)",
        resource: "tv/1396",
        append_to_response: Some("videos,credits,images"),
        filename: "tv_1396_breaking_bad_raw.json",
    },
    ProbeItem {
        label: "TV show details (Law & Order: SVU - ID: 2734)",
        resource: "tv/2734",
        append_to_response: Some("videos,credits,images"),
        filename: "tv_2734_law_order_svu_raw.json",
    },
    ProbeItem {
        label: "TV show details (Stranger Things - ID: 66732)",
        resource: "tv/66732",
        append_to_response: Some("videos,credits,images"),
        filename: "tv_66732_stranger_things_raw.json",
    },
    ProbeItem {
        label: "popular movies",
        resource: "movie/popular",
        append_to_response: None,
        filename: "popular_movies_raw.json",
    },
    ProbeItem {
        label: "popular TV shows",
        resource: "tv/popular",
        append_to_response: None,
        filename: "popular_tv_raw.json",
    },
];

/// The single movie fetched by the `movie-snapshot` binary.
pub const MOVIE_SNAPSHOT_ITEM: ProbeItem = ProbeItem {
    label: "movie details (Operation Blood Hunt - ID: 1084222)",
    resource: "movie/1084222",
    append_to_response: Some("videos,credits,images"),
    filename: "movie_1084222_raw.json",
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetch and persist every item in order.
///
/// Items fail independently: a bad response or a write error is printed with
/// a `✗` indicator and the sweep moves on to the next item.
pub fn run_sweep(client: &TmdbClient, items: &[ProbeItem], output_dir: &Path) -> SweepReport {
    let mut report = SweepReport::default();

    for (index, item) in items.iter().enumerate() {
        println!("{}. Fetching {}...", index + 1, item.label);
        report.attempted += 1;

        match fetch_and_persist(client, item, output_dir) {
            Ok(path) => {
                println!("   ✓ Saved to {}", path);
                report.succeeded += 1;
            }
            Err(e) => {
                tracing::warn!(target: "probe", "{} failed: {:#}", item.resource, e);
                println!("   ✗ Error: {:#}", e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Fetch one item and write its snapshot, returning the path written to.
pub fn fetch_and_persist(
    client: &TmdbClient,
    item: &ProbeItem,
    output_dir: &Path,
) -> anyhow::Result<String> {
    let value = client.fetch(item.resource, item.append_to_response)?;
    let path = output_dir.join(item.filename);
    snapshot::write_snapshot(&value, &path)?;
    Ok(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_table_filenames_are_unique() {
        let mut filenames: Vec<_> = SWEEP_ITEMS.iter().map(|item| item.filename).collect();
        filenames.sort();
        filenames.dedup();
        assert_eq!(filenames.len(), SWEEP_ITEMS.len());
    }

    #[test]
    fn detail_items_embed_sub_resources() {
        for item in SWEEP_ITEMS {
            let is_popular = item.resource.ends_with("/popular");
            assert_eq!(item.append_to_response.is_none(), is_popular);
        }
        assert_eq!(
            MOVIE_SNAPSHOT_ITEM.append_to_response,
            Some("videos,credits,images")
        );
    }
}
