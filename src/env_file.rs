use std::fs;
use std::io;
use std::path::Path;

/// Read-only view of a `KEY=VALUE` environment file.
///
/// A missing file loads as an empty set of entries. `#`-prefixed lines,
/// blank lines and lines without `=` are skipped. The first assignment of a
/// key wins; later ones are kept but never returned by [`EnvFile::get`].
#[derive(Debug, Default)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some(pair) => pair,
                None => continue,
            };

            entries.push((
                key.trim().to_string(),
                strip_quotes(value.trim()).to_string(),
            ));
        }

        Self { entries }
    }

    /// Value of the first assignment of `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }
}

fn strip_quotes(value: &str) -> &str {
    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return inner;
    }
    if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
        return inner;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_simple_assignments() {
        let file = EnvFile::parse("TMDB_API_KEY=abc123\nTMDB_BASE_URL=https://example.test/3\n");
        assert_eq!(file.get("TMDB_API_KEY"), Some("abc123"));
        assert_eq!(file.get("TMDB_BASE_URL"), Some("https://example.test/3"));
        assert_eq!(file.get("OTHER"), None);
    }

    #[test]
    fn ignores_comments_blanks_and_malformed_lines() {
        let file = EnvFile::parse("# comment\n\nnot an assignment\nKEY=value\n");
        assert_eq!(file.get("KEY"), Some("value"));
        assert_eq!(file.get("# comment"), None);
        assert_eq!(file.get("not an assignment"), None);
    }

    #[test]
    fn strips_whitespace_and_matching_quotes() {
        let file = EnvFile::parse("A = \"quoted\" \nB = 'single'\nC=\"unbalanced\n");
        assert_eq!(file.get("A"), Some("quoted"));
        assert_eq!(file.get("B"), Some("single"));
        assert_eq!(file.get("C"), Some("\"unbalanced"));
    }

    #[test]
    fn first_assignment_wins() {
        let file = EnvFile::parse("KEY=first\nKEY=second\n");
        assert_eq!(file.get("KEY"), Some("first"));
    }

    #[test]
    fn value_may_contain_equals() {
        let file = EnvFile::parse("KEY=a=b=c\n");
        assert_eq!(file.get("KEY"), Some("a=b=c"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let file = EnvFile::load(Path::new("no-such-file.env")).unwrap();
        assert_eq!(file.get("TMDB_API_KEY"), None);
    }

    #[test]
    fn loads_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "TMDB_API_KEY=abc123").unwrap();

        let file = EnvFile::load(temp.path()).unwrap();
        assert_eq!(file.get("TMDB_API_KEY"), Some("abc123"));
    }
}
