//! API client library for the fanart.tv movie artwork webservice.
//!
//! Composes request URLs from typed parameters and returns the raw
//! response body without decoding it.

/// fanart.tv movie artwork API client.
pub mod movie;
