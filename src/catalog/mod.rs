//! Music catalog access.
//!
//! The catalog is an external service; this module exposes a trait-based
//! client plus the Spotify Web API implementation used in production.

mod client;
mod models;
mod spotify;

#[cfg(any(test, feature = "mock"))]
pub use client::MockCatalogClient;
pub use client::{CatalogClient, CatalogError};
pub use models::{TrackRecord, UNKNOWN_ARTIST, UNKNOWN_GENRE};
pub use spotify::{SpotifyCatalogClient, SPOTIFY_ACCOUNTS_BASE, SPOTIFY_API_BASE};
