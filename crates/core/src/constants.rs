//! Constants used throughout the catalog core crate.
//!
//! Defaults for runtime configuration and the fixed markup used by the highlight stage live here
//! so the REST layer and the tests agree on them.

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default location of the remote product catalog document.
pub const DEFAULT_SOURCE_URL: &str = "https://pastebin.com/raw/JucRNpWs";

/// Default timeout for the outbound catalog request, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default expected value of the request authentication header.
pub const DEFAULT_API_KEY: &str = "123";

/// Opening marker inserted before a highlighted keyword.
pub const HIGHLIGHT_OPEN: &str = "<em>";

/// Closing marker inserted after a highlighted keyword.
pub const HIGHLIGHT_CLOSE: &str = "</em>";

/// Characters that separate description tokens when counting common words.
pub const WORD_SEPARATORS: [char; 3] = [' ', ',', '.'];

/// Number of most frequent tokens treated as noise and skipped.
pub const COMMON_WORDS_SKIP: usize = 5;

/// Number of tokens reported as common words after the skipped ones.
pub const COMMON_WORDS_TAKE: usize = 10;
