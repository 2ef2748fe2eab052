//! Pure data-to-viewmodel transforms.
//!
//! Everything here turns wire types plus profile state into plain display
//! structs and hrefs; the rendering layer only interpolates them. Keeping the
//! transforms free of any DOM type is what lets them run under native tests.
use crate::favorites::FavoriteSet;
use crate::movie::{ListingKind, Movie, MovieDetail, MovieId};

/// Image CDN bases for the size classes the UI uses.
pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/w1280";
pub const HEADSHOT_BASE: &str = "https://image.tmdb.org/t/p/w185";

/// Shipped placeholder art for movies without a poster.
pub const FALLBACK_POSTER: &str = "/static/img/no-poster.svg";

/// The search dropdown previews this many results.
pub const DROPDOWN_LIMIT: usize = 5;
/// The hero carousel rotates through this many backdropped movies.
pub const HERO_LIMIT: usize = 5;
/// Cast entries shown on the detail page.
pub const CAST_LIMIT: usize = 10;

const HERO_OVERVIEW_CHARS: usize = 180;

#[must_use]
pub fn poster_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{POSTER_BASE}{p}"))
}

#[must_use]
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{BACKDROP_BASE}{p}"))
}

#[must_use]
pub fn detail_href(id: MovieId) -> String {
    format!("/detail?id={id}")
}

#[must_use]
pub fn listing_href(kind: ListingKind, page: u32) -> String {
    format!("/movies?type={}&page={page}", kind.param())
}

#[must_use]
pub fn search_href(query: &str, page: u32) -> String {
    format!("/search?q={}&page={page}", urlencoding::encode(query))
}

/// Everything a movie card renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCardVm {
    pub id: MovieId,
    pub title: String,
    pub poster: String,
    pub rating: String,
    pub year: Option<i32>,
    pub detail_href: String,
    pub favorite: bool,
}

#[must_use]
pub fn movie_card(movie: &Movie, favorites: &FavoriteSet) -> MovieCardVm {
    MovieCardVm {
        id: movie.id,
        title: movie.title.clone(),
        poster: poster_url(movie.poster_path.as_deref())
            .unwrap_or_else(|| FALLBACK_POSTER.to_string()),
        rating: format!("{:.1}", movie.vote_average),
        year: movie.release_year(),
        detail_href: detail_href(movie.id),
        favorite: favorites.contains(movie.id),
    }
}

#[must_use]
pub fn movie_cards(movies: &[Movie], favorites: &FavoriteSet) -> Vec<MovieCardVm> {
    movies.iter().map(|m| movie_card(m, favorites)).collect()
}

/// Dropdown preview entries: first [`DROPDOWN_LIMIT`] results, favorites
/// state irrelevant in that surface.
#[must_use]
pub fn suggestions(movies: &[Movie]) -> Vec<MovieCardVm> {
    movies
        .iter()
        .take(DROPDOWN_LIMIT)
        .map(|m| movie_card(m, &FavoriteSet::new()))
        .collect()
}

/// One rotating hero slide.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlideVm {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub backdrop: String,
    pub detail_href: String,
}

/// Hero slides: the first movies that actually have backdrop art.
#[must_use]
pub fn hero_slides(movies: &[Movie]) -> Vec<HeroSlideVm> {
    movies
        .iter()
        .filter_map(|m| {
            let backdrop = backdrop_url(m.backdrop_path.as_deref())?;
            Some(HeroSlideVm {
                id: m.id,
                title: m.title.clone(),
                overview: shorten(&m.overview, HERO_OVERVIEW_CHARS),
                backdrop,
                detail_href: detail_href(m.id),
            })
        })
        .take(HERO_LIMIT)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastVm {
    pub name: String,
    pub character: String,
    pub headshot: Option<String>,
}

/// Detail page viewmodel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailVm {
    pub id: MovieId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub poster: String,
    pub backdrop: Option<String>,
    pub rating: String,
    pub year: Option<i32>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub cast: Vec<CastVm>,
    pub favorite: bool,
}

#[must_use]
pub fn detail_vm(detail: &MovieDetail, favorites: &FavoriteSet) -> DetailVm {
    let movie = &detail.movie;
    DetailVm {
        id: movie.id,
        title: movie.title.clone(),
        tagline: detail.tagline.clone().filter(|t| !t.is_empty()),
        overview: movie.overview.clone(),
        poster: poster_url(movie.poster_path.as_deref())
            .unwrap_or_else(|| FALLBACK_POSTER.to_string()),
        backdrop: backdrop_url(movie.backdrop_path.as_deref()),
        rating: format!("{:.1}", movie.vote_average),
        year: movie.release_year(),
        runtime: detail.runtime.filter(|&m| m > 0).map(runtime_label),
        genres: detail.genres.iter().map(|g| g.name.clone()).collect(),
        cast: detail
            .credits
            .as_ref()
            .map(|credits| {
                credits
                    .cast
                    .iter()
                    .take(CAST_LIMIT)
                    .map(|member| CastVm {
                        name: member.name.clone(),
                        character: member.character.clone(),
                        headshot: member
                            .profile_path
                            .as_deref()
                            .map(|p| format!("{HEADSHOT_BASE}{p}")),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        favorite: favorites.contains(movie.id),
    }
}

fn runtime_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{rest}m")
    } else {
        format!("{hours}h {rest}m")
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
