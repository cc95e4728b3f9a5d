//! Domain categorizer.
//!
//! Reduces URL- and host-like strings to their registrable domain (public
//! suffix plus one label) using a [`SuffixTrie`].

use std::io::BufRead;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{trace, warn};

use crate::error::{CategorizerError, Result};
use crate::host::{is_blank, sanitized_host};
use crate::suffix::{self, SuffixSource, SuffixTrie};

/// Environment variable naming a suffix list file for the shared instance
pub const SUFFIX_LIST_ENV: &str = "DOMAIN_CATEGORIZER_SUFFIX_LIST";

/// Character for joining domain labels
const JOINER: &str = ".";

static INSTANCE: OnceCell<DomainCategorizer> = OnceCell::new();

/// Categorizer builder options.
#[derive(Debug, Clone, Default)]
pub struct CategorizerOptions {
    /// Where the public suffix list is read from
    pub source: SuffixSource,
}

impl CategorizerOptions {
    /// Create new options using the bundled suffix list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix list source.
    pub fn with_source(mut self, source: SuffixSource) -> Self {
        self.source = source;
        self
    }

    /// Read the suffix list from a file instead of the bundled copy.
    pub fn with_suffix_list_path(self, path: impl AsRef<Path>) -> Self {
        self.with_source(SuffixSource::File(path.as_ref().to_path_buf()))
    }

    /// Options for the shared instance, honoring [`SUFFIX_LIST_ENV`].
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(SUFFIX_LIST_ENV) {
            None => Ok(Self::new()),
            Some(value) if value.is_empty() => Err(CategorizerError::ConfigError(format!(
                "{} is set but empty",
                SUFFIX_LIST_ENV
            ))),
            Some(value) => Ok(Self::new().with_suffix_list_path(PathBuf::from(value))),
        }
    }
}

/// Attempts to get the domain from a url/domain, removing the subdomain(s).
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone)]
pub struct DomainCategorizer {
    trie: SuffixTrie,
}

impl DomainCategorizer {
    /// Build a categorizer from options.
    pub fn new(options: CategorizerOptions) -> Result<Self> {
        suffix::load(&options.source).map(Self::from_trie)
    }

    /// Build a categorizer from the bundled public suffix list.
    pub fn bundled() -> Self {
        Self::from_list(suffix::BUNDLED_SUFFIX_LIST)
    }

    /// Build a categorizer from a suffix list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        suffix::load_from_file(path).map(Self::from_trie)
    }

    /// Build a categorizer from a suffix list reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        suffix::load_from_reader(reader).map(Self::from_trie)
    }

    /// Build a categorizer from suffix list text (comments and blanks allowed).
    pub fn from_list(text: &str) -> Self {
        Self::from_trie(suffix::parse_suffix_list(text))
    }

    /// Build a categorizer from bare suffix entries such as `"co.uk"`.
    pub fn from_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_trie(suffixes.into_iter().collect())
    }

    /// Wrap an already built trie.
    pub fn from_trie(trie: SuffixTrie) -> Self {
        Self { trie }
    }

    /// Get the domain by identifying the host and stripping its subdomains.
    ///
    /// - Blank input returns `None`.
    /// - If no host can be extracted, the input is returned as is.
    /// - If the rightmost label is not a known suffix, the host is returned.
    /// - Otherwise the matched suffix plus one label to its left is returned,
    ///   or the whole host when it consists only of suffix labels.
    pub fn get_domain(&self, url: &str) -> Option<String> {
        if is_blank(url) {
            return None;
        }

        let Some(host) = sanitized_host(url) else {
            trace!(input = url, "no host extracted");
            return Some(url.to_string());
        };

        let labels: Vec<&str> = host.split('.').filter(|l| !is_blank(l)).collect();
        let matched = self.trie.matched_depth(&labels);

        if matched == 0 {
            trace!(host, "no public suffix matched");
            return Some(host.to_string());
        }

        // matched suffix plus one label, clamped to the whole host
        let start = labels.len().saturating_sub(matched + 1);
        Some(labels[start..].join(JOINER))
    }

    /// Check whether `suffix` is a path in the suffix trie.
    pub fn contains_suffix(&self, suffix: &str) -> bool {
        self.trie.contains(suffix)
    }

    /// Number of suffix entries loaded.
    pub fn suffix_count(&self) -> usize {
        self.trie.entry_count()
    }

    /// Number of trie nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Check if no suffixes are loaded
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for DomainCategorizer {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Returns the shared categorizer, loading it on first call.
///
/// The suffix list comes from [`SUFFIX_LIST_ENV`] when set, otherwise the
/// bundled list. Concurrent first callers block until one load completes.
/// On failure nothing is stored and the next call tries again.
pub fn get_instance() -> Result<&'static DomainCategorizer> {
    INSTANCE
        .get_or_try_init(|| {
            let options = CategorizerOptions::from_env()?;
            DomainCategorizer::new(options)
        })
        .map_err(|e| {
            warn!(error = %e, "failed to initialize domain categorizer");
            e
        })
}
