//! autocomplete-core
//!
//! Weighted prefix trie and best-first top-k retrieval for autocomplete.
//!
//! The crate answers prefix queries over a fixed vocabulary of weighted
//! terms: build a [`WeightedTrie`] once from parallel term/weight slices,
//! then query it read-only. Every trie node carries the maximum weight
//! reachable in its subtree, so ranked queries run as a best-first
//! branch-and-bound search instead of scanning the vocabulary.
//!
//! Public API:
//! - `WeightedTrie` - The trie itself: `add`, `weight_of`, `top_match`,
//!   `top_matches`, `top_candidates`
//! - `Candidate` - A ranked result with its weight
//! - `Autocompleter` - Trie plus `Config` behind a suggestion convenience API
//! - `Config` - TOML-loadable settings
//! - `TrieError` - Construction/insertion argument errors
use serde::{Deserialize, Serialize};

pub mod trie;
pub use trie::WeightedTrie;

pub mod candidate;
pub use candidate::Candidate;

pub mod error;
pub use error::{Result, TrieError};

/// Configuration for the suggestion convenience layer.
///
/// Designed to be deserialized from TOML (via `serde`). The core trie
/// queries take explicit limits; this only configures the defaults applied
/// by [`Autocompleter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of suggestions returned by `Autocompleter::suggest`.
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_limit: 10,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// A trie paired with configuration, exposing a suggestion API.
///
/// This is the surface an input frontend talks to: it owns the trie built
/// from the caller-supplied vocabulary and applies the configured default
/// limit. Both members are read-only after construction, so shared
/// references can be used from multiple threads.
///
/// # Example
/// ```
/// use autocomplete_core::{Autocompleter, Config};
///
/// let ac = Autocompleter::from_pairs(
///     &["air", "bat", "bell", "boy"],
///     &[3.0, 2.0, 4.0, 1.0],
///     Config::default(),
/// ).unwrap();
///
/// let suggestions = ac.suggest("b");
/// assert_eq!(suggestions[0].term, "bell");
/// assert_eq!(suggestions[0].weight, 4.0);
/// ```
#[derive(Debug)]
pub struct Autocompleter {
    trie: WeightedTrie,
    config: Config,
}

impl Autocompleter {
    /// Wrap an already-built trie.
    pub fn new(trie: WeightedTrie, config: Config) -> Self {
        Self { trie, config }
    }

    /// Build the trie from parallel term/weight slices and wrap it.
    pub fn from_pairs<S: AsRef<str>>(
        terms: &[S],
        weights: &[f64],
        config: Config,
    ) -> Result<Self> {
        Ok(Self {
            trie: WeightedTrie::new(terms, weights)?,
            config,
        })
    }

    /// Ranked suggestions for `prefix`, capped at the configured limit.
    pub fn suggest(&self, prefix: &str) -> Vec<Candidate> {
        self.trie.top_candidates(prefix, self.config.suggestion_limit)
    }

    /// Ranked suggestions for `prefix` with an explicit cap.
    pub fn suggest_n(&self, prefix: &str, k: usize) -> Vec<Candidate> {
        self.trie.top_candidates(prefix, k)
    }

    /// The underlying trie, for direct queries.
    pub fn trie(&self) -> &WeightedTrie {
        &self.trie
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
