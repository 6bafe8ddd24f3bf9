//! fanart.tv movie artwork API client module.
//!
//! Handles HTTP requests to the `webservice/movie` endpoint and returns
//! the response body verbatim (JSON or PHP-serialized, per client
//! configuration).

mod api;
mod client;
mod params;

pub use api::MovieArtApi;
#[allow(clippy::module_name_repetitions)]
pub use client::{FanartClient, FanartClientBuilder};
pub use params::{ImageCategory, MovieArtParams, ResponseFormat, ResultLimit, SortOrder};
