//! Domain Categorizer - registrable domain extraction for Rust
//!
//! This library reduces arbitrary URL- or host-like strings to their
//! registrable domain (public suffix plus one label) using:
//! - A label trie built once from a public suffix list
//! - Permissive regex-based host extraction
//! - A fallback chain that never fails on malformed input
//!
//! # Example
//!
//! ```rust
//! use domain_categorizer::DomainCategorizer;
//!
//! let categorizer = DomainCategorizer::from_suffixes(["uk", "co.uk", "com"]);
//!
//! assert_eq!(
//!     categorizer.get_domain("https://www.google.co.uk/search?q=rust"),
//!     Some("google.co.uk".to_string())
//! );
//! assert_eq!(
//!     categorizer.get_domain("sub.example.com"),
//!     Some("example.com".to_string())
//! );
//! assert_eq!(categorizer.get_domain("localhost"), Some("localhost".to_string()));
//! assert_eq!(categorizer.get_domain("   "), None);
//! ```
//!
//! # Shared instance
//!
//! [`get_instance`] loads the suffix list once per process and hands out a
//! `&'static` reference. The list is read from the file named by
//! `DOMAIN_CATEGORIZER_SUFFIX_LIST` when set, otherwise from the copy bundled
//! with the crate.
//!
//! ```rust
//! let categorizer = domain_categorizer::get_instance().unwrap();
//! assert_eq!(
//!     categorizer.get_domain("http://news.bbc.co.uk/"),
//!     Some("bbc.co.uk".to_string())
//! );
//! ```
//!
//! # Suffix list format
//!
//! | Line | Meaning |
//! |------|---------|
//! | `// text` | Comment |
//! | blank | Ignored |
//! | `co.uk` | Suffix entry |
//! | `*.ck`, `!www.ck` | Stored as literal labels |

pub mod categorizer;
pub mod error;
pub mod host;
pub mod suffix;

// Re-export commonly used items
pub use categorizer::{get_instance, CategorizerOptions, DomainCategorizer, SUFFIX_LIST_ENV};
pub use error::{CategorizerError, Result};
pub use host::sanitized_host;
pub use suffix::{SuffixSource, SuffixTrie};
