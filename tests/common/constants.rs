//! Shared constants for end-to-end tests
//!
//! Canned catalog data and credentials served by the fake backends.
//! When test data changes, update only this file.

// ============================================================================
// Fake backend credentials
// ============================================================================

pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_CLIENT_SECRET: &str = "test-client-secret";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";
pub const TEST_MODEL: &str = "gemini-test";

// ============================================================================
// Catalog queries with special behaviour
// ============================================================================

/// Search query for which the fake catalog returns no tracks
pub const NO_MATCH_QUERY: &str = "zzzz no such song";

/// Query whose second result carries a preview clip
pub const PREVIEW_QUERY: &str = "yesterday";

/// Query whose results carry no preview clip at all
pub const EMBED_ONLY_QUERY: &str = "obscure b-side";

/// Number of tracks the fake catalog has for any other query
pub const GENERIC_RESULT_COUNT: usize = 8;

// ============================================================================
// Catalog data
// ============================================================================

pub const PREVIEW_TRACK_ID: &str = "track-with-preview";
pub const PREVIEW_TRACK_TITLE: &str = "Yesterday";
pub const PREVIEW_TRACK_ARTIST: &str = "The Beatles";
pub const PREVIEW_URL: &str = "https://p.scdn.co/mp3-preview/yesterday";

pub const EMBED_TRACK_ID: &str = "track-without-preview";

// ============================================================================
// Generated text
// ============================================================================

/// The fake generator answers with this prefix followed by the prompt
pub const GENERATED_PREFIX: &str = "GENERATED: ";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for server to be ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
