//! Catalog data types mirroring the remote movie API wire format.
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Remote-assigned movie identifier.
pub type MovieId = u64;

/// A single movie as returned by every listing and search endpoint.
///
/// Immutable once fetched; the client never mutates movie data locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    /// Image path fragment, resolved against the image CDN base.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    /// `YYYY-MM-DD`, or absent for unreleased/limbo entries.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}

impl Movie {
    /// Release year parsed out of the wire date, when present and well-formed.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One page of listing or search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
}

const fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A cast entry from the embedded credits of a detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// Full movie detail, only available from the detail-by-id endpoint.
///
/// Credits are embedded via the append-to-response mechanism, so they are
/// present exactly when the client asked for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub credits: Option<Credits>,
}

/// The fixed set of browsable listings the catalog exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Popular,
    TopRated,
    Upcoming,
}

impl ListingKind {
    /// Path segment used by the remote endpoint, also the `type` query value.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
        }
    }

    /// Section heading shown above the listing.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::TopRated => "Top Rated",
            Self::Upcoming => "Upcoming",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "popular" => Some(Self::Popular),
            "top_rated" => Some(Self::TopRated),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}
