//! Compile-time deployment configuration.
///
/// Each value can be overridden at build time (e.g. a proxy endpoint for the
/// catalog, or a different API key per deployment). Local builds fall back to
/// the public defaults.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("REELVIEW_API_BASE").unwrap_or("https://api.themoviedb.org/3")
}

/// Key sent as a query parameter with every catalog request.
#[must_use]
pub fn api_key() -> &'static str {
    option_env!("REELVIEW_API_KEY").unwrap_or("51e92d390f844b7720230baaf82f763c")
}

/// Authorize page the login round-trip visits; the service redirects back
/// with the token signals in the query string.
#[must_use]
pub fn authorize_base() -> &'static str {
    option_env!("REELVIEW_AUTH_BASE").unwrap_or("https://www.themoviedb.org/authenticate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_absolute_urls() {
        assert!(api_base().starts_with("https://"));
        assert!(authorize_base().starts_with("https://"));
        assert!(!api_key().is_empty());
    }
}
