//! Remote catalog client over the browser fetch API.
//!
//! One HTTP request per operation, no retries, no timeouts. Listing and
//! search failures are logged and collapse to `None`; everything else
//! surfaces as a typed [`CatalogError`] for the caller to present.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use reelview_core::{Account, CatalogApi, ListingKind, MovieDetail, MovieId, MoviePage};

use crate::{config, dom};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog returned HTTP {0}")]
    Status(u16),
    #[error("malformed catalog response: {0}")]
    Decode(String),
    #[error("catalog rejected the request: {0}")]
    Rejected(String),
}

/// Stateless client; endpoint and key come from [`crate::config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TmdbCatalog;

impl TmdbCatalog {
    #[allow(clippy::future_not_send)]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = dom::fetch_response(url)
            .await
            .map_err(|e| CatalogError::Network(dom::js_error_message(&e)))?;
        decode(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, CatalogError> {
        let response = dom::fetch_post_json(url, &body.to_string())
            .await
            .map_err(|e| CatalogError::Network(dom::js_error_message(&e)))?;
        decode(response).await
    }
}

#[allow(clippy::future_not_send)]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let promise = response
        .json()
        .map_err(|e| CatalogError::Decode(dom::js_error_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| CatalogError::Decode(dom::js_error_message(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| CatalogError::Decode(e.to_string()))
}

fn listing_url(kind: ListingKind, page: u32) -> String {
    format!(
        "{}/movie/{}?api_key={}&language=en-US&page={page}",
        config::api_base(),
        kind.param(),
        config::api_key(),
    )
}

fn search_url(query: &str, page: u32) -> String {
    format!(
        "{}/search/movie?api_key={}&language=en-US&include_adult=false&page={page}&query={}",
        config::api_base(),
        config::api_key(),
        urlencoding::encode(query),
    )
}

fn detail_url(id: MovieId) -> String {
    format!(
        "{}/movie/{id}?api_key={}&language=en-US&append_to_response=credits",
        config::api_base(),
        config::api_key(),
    )
}

fn token_url() -> String {
    format!(
        "{}/authentication/token/new?api_key={}",
        config::api_base(),
        config::api_key(),
    )
}

fn session_url() -> String {
    format!(
        "{}/authentication/session/new?api_key={}",
        config::api_base(),
        config::api_key(),
    )
}

fn account_url(session_id: &str) -> String {
    format!(
        "{}/account?api_key={}&session_id={}",
        config::api_base(),
        config::api_key(),
        urlencoding::encode(session_id),
    )
}

fn favorite_url(account_id: u64, session_id: &str) -> String {
    format!(
        "{}/account/{account_id}/favorite?api_key={}&session_id={}",
        config::api_base(),
        config::api_key(),
        urlencoding::encode(session_id),
    )
}

fn favorite_movies_url(account_id: u64, session_id: &str, page: u32) -> String {
    format!(
        "{}/account/{account_id}/favorite/movies?api_key={}&session_id={}&language=en-US&page={page}&sort_by=created_at.asc",
        config::api_base(),
        config::api_key(),
        urlencoding::encode(session_id),
    )
}

/// Envelope of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    request_token: Option<String>,
}

/// Envelope of the session-exchange endpoint.
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    session_id: Option<String>,
}

/// Envelope of mutation endpoints reporting a status pair.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status_message: String,
}

#[derive(Debug, Deserialize)]
struct AccountEnvelope {
    id: u64,
    username: String,
    #[serde(default)]
    avatar: Option<AvatarEnvelope>,
}

#[derive(Debug, Default, Deserialize)]
struct AvatarEnvelope {
    #[serde(default)]
    tmdb: TmdbAvatar,
}

#[derive(Debug, Default, Deserialize)]
struct TmdbAvatar {
    #[serde(default)]
    avatar_path: Option<String>,
}

impl CatalogApi for TmdbCatalog {
    type Error = CatalogError;

    async fn listing(&self, kind: ListingKind, page: u32) -> Option<MoviePage> {
        match self.get_json::<MoviePage>(&listing_url(kind, page)).await {
            Ok(fetched) => Some(fetched),
            Err(e) => {
                log::error!("failed to fetch {} movies: {e}", kind.param());
                None
            }
        }
    }

    async fn search(&self, query: &str, page: u32) -> Option<MoviePage> {
        match self.get_json::<MoviePage>(&search_url(query, page)).await {
            Ok(fetched) => Some(fetched),
            Err(e) => {
                log::error!("movie search failed: {e}");
                None
            }
        }
    }

    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, Self::Error> {
        self.get_json(&detail_url(id)).await
    }

    async fn new_request_token(&self) -> Result<String, Self::Error> {
        let envelope: TokenEnvelope = self.get_json(&token_url()).await?;
        match envelope.request_token {
            Some(token) if envelope.success => Ok(token),
            _ => Err(CatalogError::Rejected("no request token issued".into())),
        }
    }

    async fn create_session(&self, request_token: &str) -> Result<String, Self::Error> {
        let body = serde_json::json!({ "request_token": request_token });
        let envelope: SessionEnvelope = self.post_json(&session_url(), &body).await?;
        match envelope.session_id {
            Some(session_id) if envelope.success => Ok(session_id),
            _ => Err(CatalogError::Rejected("no session id issued".into())),
        }
    }

    async fn account(&self, session_id: &str) -> Result<Account, Self::Error> {
        let envelope: AccountEnvelope = self.get_json(&account_url(session_id)).await?;
        Ok(Account {
            id: envelope.id,
            username: envelope.username,
            avatar_path: envelope.avatar.and_then(|a| a.tmdb.avatar_path),
        })
    }

    async fn set_favorite(
        &self,
        account_id: u64,
        session_id: &str,
        movie_id: MovieId,
        favorite: bool,
    ) -> Result<(), Self::Error> {
        let body = serde_json::json!({
            "media_type": "movie",
            "media_id": movie_id,
            "favorite": favorite,
        });
        let envelope: StatusEnvelope = self
            .post_json(&favorite_url(account_id, session_id), &body)
            .await?;
        if envelope.success == Some(false) {
            return Err(CatalogError::Rejected(envelope.status_message));
        }
        Ok(())
    }

    async fn favorite_movies(
        &self,
        account_id: u64,
        session_id: &str,
        page: u32,
    ) -> Result<MoviePage, Self::Error> {
        self.get_json(&favorite_movies_url(account_id, session_id, page))
            .await
    }
}
