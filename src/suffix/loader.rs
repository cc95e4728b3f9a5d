use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::trie::SuffixTrie;
use crate::error::{CategorizerError, Result};
use crate::host::{is_blank, trim_blank};

/// Token marking a comment line in the suffix list
pub const COMMENT_TOKEN: &str = "//";

/// Public suffix list compiled into the crate.
pub const BUNDLED_SUFFIX_LIST: &str = include_str!("../../data/public_suffix_list.dat");

/// Where a suffix list is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuffixSource {
    /// The list shipped with the crate
    #[default]
    Bundled,
    /// A newline-delimited UTF-8 file on disk
    File(PathBuf),
}

impl std::fmt::Display for SuffixSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuffixSource::Bundled => write!(f, "bundled"),
            SuffixSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Return the suffix entry carried by a list line, if any.
///
/// Lines are trimmed; blank lines and `//` comments carry no entry.
fn suffix_entry(line: &str) -> Option<&str> {
    let trimmed = trim_blank(line);
    if is_blank(trimmed) || trimmed.starts_with(COMMENT_TOKEN) {
        None
    } else {
        Some(trimmed)
    }
}

/// Build a trie from suffix list text.
pub fn parse_suffix_list(text: &str) -> SuffixTrie {
    text.lines().filter_map(suffix_entry).collect()
}

/// Build a trie from a line reader.
///
/// Any read error aborts the load; no partial trie is returned.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<SuffixTrie> {
    let mut trie = SuffixTrie::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(entry) = suffix_entry(&line) {
            trie.insert(entry);
        }
    }
    Ok(trie)
}

/// Build a trie from a suffix list file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<SuffixTrie> {
    let path = path.as_ref();
    let read_error = |source| CategorizerError::SuffixListRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    load_from_reader(BufReader::new(file)).map_err(|e| match e {
        CategorizerError::IoError(source) => read_error(source),
        other => other,
    })
}

/// Build a trie from the given source.
pub fn load(source: &SuffixSource) -> Result<SuffixTrie> {
    debug!(source = %source, "loading public suffix list");

    let trie = match source {
        SuffixSource::Bundled => parse_suffix_list(BUNDLED_SUFFIX_LIST),
        SuffixSource::File(path) => load_from_file(path)?,
    };

    debug!(
        source = %source,
        entries = trie.entry_count(),
        nodes = trie.node_count(),
        "public suffix list loaded"
    );
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_suffix_entry_filters_comments_and_blanks() {
        assert_eq!(suffix_entry("  co.uk  "), Some("co.uk"));
        assert_eq!(suffix_entry("// comment"), None);
        assert_eq!(suffix_entry("   // indented comment"), None);
        assert_eq!(suffix_entry(""), None);
        assert_eq!(suffix_entry(" \t "), None);
        // Only a leading marker starts a comment
        assert_eq!(suffix_entry("com // trailing"), Some("com // trailing"));
        // Unicode spaces are not trimmed
        assert_eq!(suffix_entry("\u{a0}"), Some("\u{a0}"));
    }

    #[test]
    fn test_parse_suffix_list() {
        let text = "// header\n\nuk\nco.uk\n  com  \r\n// ===END===\n";
        let trie = parse_suffix_list(text);

        assert_eq!(trie.entry_count(), 3);
        assert!(trie.contains("co.uk"));
        assert!(trie.contains("com"));
        assert!(!trie.contains("header"));
    }

    #[test]
    fn test_load_from_reader_matches_parse() {
        let text = "uk\nco.uk\ncom\n";
        let from_reader = load_from_reader(Cursor::new(text)).unwrap();
        let parsed = parse_suffix_list(text);

        assert_eq!(from_reader.entry_count(), parsed.entry_count());
        assert_eq!(from_reader.node_count(), parsed.node_count());
    }

    #[test]
    fn test_load_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"com\n\xff\xfe\n";
        let result = load_from_reader(Cursor::new(bytes));
        assert!(matches!(result, Err(CategorizerError::IoError(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn test_load_from_reader_propagates_read_error() {
        let result = load_from_reader(BufReader::new(FailingReader));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_from_file("/nonexistent/public_suffix_list.dat");
        match result {
            Err(CategorizerError::SuffixListRead { path, source }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/public_suffix_list.dat"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected SuffixListRead, got {:?}", other.map(|t| t.node_count())),
        }
    }

    #[test]
    fn test_bundled_list_loads() {
        let trie = load(&SuffixSource::Bundled).unwrap();
        assert!(!trie.is_empty());
        assert!(trie.contains("com"));
        assert!(trie.contains("co.uk"));
        assert!(trie.contains("github.io"));
        assert!(trie.contains("com.sg"));
        assert!(
            trie.entry_count() > 9000,
            "expected the full upstream list, got {} entries",
            trie.entry_count()
        );
    }

    #[test]
    fn test_source_display() {
        assert_eq!(SuffixSource::Bundled.to_string(), "bundled");
        assert_eq!(
            SuffixSource::File(PathBuf::from("/etc/psl.dat")).to_string(),
            "/etc/psl.dat"
        );
    }
}
