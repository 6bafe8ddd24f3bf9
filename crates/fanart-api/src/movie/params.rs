//! fanart.tv movie artwork request parameter types.
//!
//! Every value here is serialized into a URL path segment through an
//! explicit mapping table; the remote API never sees enum names or
//! derived `Display` output.

/// Serialization the remote service should use for the response body.
///
/// Selected per client instance, not per call. The client returns the
/// body verbatim either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON string.
    Json,
    /// PHP `serialize()` key-value array.
    Php,
}

impl ResponseFormat {
    /// URL path segment for this format.
    #[must_use]
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Php => "php",
        }
    }
}

/// Artwork category the service searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    /// All categories.
    All,
    /// Only movie logos.
    MovieLogo,
    /// Only movie arts.
    MovieArt,
    /// Only movie disc overlays.
    MovieDiscOverlay,
}

impl ImageCategory {
    /// URL path segment for this category.
    #[must_use]
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::MovieLogo => "movielogo",
            Self::MovieArt => "movieart",
            Self::MovieDiscOverlay => "moviediscoverlay",
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most popular first, then newest.
    MostPopularThenNewest,
    /// Newest first.
    Newest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// 1-based ordinal the API expects as a URL path segment.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::MostPopularThenNewest => 1,
            Self::Newest => 2,
            Self::Oldest => 3,
        }
    }
}

/// How many results the service returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLimit {
    /// Only the first match.
    First,
    /// All matches.
    All,
}

impl ResultLimit {
    /// 1-based ordinal the API expects as a URL path segment.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::First => 1,
            Self::All => 2,
        }
    }
}

/// Request parameters for a movie artwork lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieArtParams {
    /// Artwork category filter.
    pub category: ImageCategory,
    /// Result ordering.
    pub sort: SortOrder,
    /// Result count limit.
    pub limit: ResultLimit,
}

impl Default for MovieArtParams {
    fn default() -> Self {
        Self {
            category: ImageCategory::All,
            sort: SortOrder::MostPopularThenNewest,
            limit: ResultLimit::All,
        }
    }
}

impl MovieArtParams {
    /// Creates parameters with explicit values.
    #[must_use]
    pub const fn new(category: ImageCategory, sort: SortOrder, limit: ResultLimit) -> Self {
        Self {
            category,
            sort,
            limit,
        }
    }

    /// True when every field matches the service defaults.
    ///
    /// The API exposes a shorter URL template for this case; the client
    /// uses it whenever possible.
    #[must_use]
    pub fn is_service_default(&self) -> bool {
        *self == Self::default()
    }
}
