//! Public suffix list storage.
//!
//! This module provides:
//! - A label trie keyed right-to-left (TLD first) for longest-suffix walks
//! - A loader for the flat `public_suffix_list.dat` text format
//!
//! ## Example
//!
//! ```
//! use domain_categorizer::suffix::parse_suffix_list;
//!
//! let trie = parse_suffix_list("// comment\nuk\nco.uk\n");
//!
//! assert!(trie.contains("co.uk"));
//! assert_eq!(trie.matched_depth(&["www", "google", "co", "uk"]), 2);
//! ```

mod loader;
mod trie;

pub use loader::{
    load, load_from_file, load_from_reader, parse_suffix_list, SuffixSource,
    BUNDLED_SUFFIX_LIST, COMMENT_TOKEN,
};
pub use trie::SuffixTrie;
