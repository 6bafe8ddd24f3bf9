//! `MovieArtApi` trait definition.

use anyhow::Result;

use super::params::MovieArtParams;

/// Movie artwork API trait.
///
/// Abstracts the lookup operation for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
pub trait MovieArtApi {
    /// Fetches artwork metadata for a movie by its IMDB identifier.
    ///
    /// Returns the raw response body (JSON or PHP-serialized, per the
    /// client's configured response format) without decoding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server answers
    /// with a non-success status.
    fn fetch_by_movie_id(&self, id: &str, params: &MovieArtParams) -> Result<String>;
}
