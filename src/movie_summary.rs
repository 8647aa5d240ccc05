use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Read-only projection over a fetched movie response, for printing a quick
/// sanity check after the snapshot is written. Nothing here is persisted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovieSummary {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub images: ImageCollection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageCollection {
    pub logos: Vec<Logo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Logo {
    pub file_path: Option<String>,
    pub iso_3166_1: Option<String>,
    pub iso_639_1: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

impl MovieSummary {
    /// Project the fields of interest out of a raw response. A body that does
    /// not look like a movie object yields an all-`N/A` summary rather than
    /// an error.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Movie title: {}", text(&self.title))?;
        writeln!(f, "Release date: {}", text(&self.release_date))?;
        writeln!(f)?;
        writeln!(f, "Logos found: {}", self.images.logos.len())?;

        if let Some(logo) = self.images.logos.first() {
            writeln!(f, "First logo details:")?;
            writeln!(f, "  - File path: {}", text(&logo.file_path))?;
            writeln!(f, "  - Country: {}", text(&logo.iso_3166_1))?;
            writeln!(f, "  - Language: {}", text(&logo.iso_639_1))?;
            writeln!(f, "  - Aspect ratio: {}", number(&logo.aspect_ratio))?;
            writeln!(f, "  - Height: {}", number(&logo.height))?;
            writeln!(f, "  - Width: {}", number(&logo.width))?;
        }

        Ok(())
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("N/A")
}

fn number<T: ToString>(field: &Option<T>) -> String {
    field
        .as_ref()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
