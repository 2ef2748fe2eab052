use yew_router::prelude::*;

/// Page identity lives in the pathname; everything else (movie id, listing
/// type, page number, search query, auth signals) travels in the query
/// string.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/movies")]
    Movies,
    #[at("/detail")]
    Detail,
    #[at("/favorites")]
    Favorites,
    #[at("/search")]
    Search,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathnames_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/movies"), Some(Route::Movies));
        assert_eq!(Route::recognize("/detail"), Some(Route::Detail));
        assert_eq!(Route::recognize("/favorites"), Some(Route::Favorites));
        assert_eq!(Route::recognize("/search"), Some(Route::Search));
    }
}
