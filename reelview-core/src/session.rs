//! Authenticated session state and the delegated-login callback protocol.
use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// Account data resolved from a session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub avatar_path: Option<String>,
}

/// An authenticated identity: the session id plus the account it resolves to.
///
/// At most one session exists per browser profile. Presence of a `Session`
/// on the profile is what "authenticated" means everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub account_id: u64,
    pub username: String,
    #[serde(default)]
    pub avatar_path: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(session_id: String, account: Account) -> Self {
        Self {
            session_id,
            account_id: account.id,
            username: account.username,
            avatar_path: account.avatar_path,
        }
    }
}

/// Inbound signal carried on the query string after the authorize redirect.
///
/// The remote service echoes back either an approved request token or an
/// explicit denial. Anything else is not a callback at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCallback {
    /// Token approved by the user; promotion to a session may be attempted.
    Approved { request_token: String },
    /// The user declined on the authorize page.
    Denied,
    /// No callback signals present.
    None,
}

impl AuthCallback {
    /// Query parameters the redirect leaves behind; stripped from the
    /// visible URL once the callback is handled so a refresh cannot
    /// re-process it.
    pub const TRANSIENT_PARAMS: &'static [&'static str] =
        &["request_token", "approved", "denied"];

    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let params = QueryParams::parse(query);
        if params.flag("denied") {
            return Self::Denied;
        }
        match (params.get("request_token"), params.flag("approved")) {
            (Some(token), true) => Self::Approved {
                request_token: token.to_string(),
            },
            _ => Self::None,
        }
    }

    /// Whether handling this callback must clean the URL afterwards.
    #[must_use]
    pub const fn needs_url_cleanup(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_token_is_recognized() {
        let cb = AuthCallback::from_query("?request_token=tok123&approved=true");
        assert_eq!(
            cb,
            AuthCallback::Approved {
                request_token: "tok123".into()
            }
        );
        assert!(cb.needs_url_cleanup());
    }

    #[test]
    fn denial_wins_over_everything_else() {
        let cb = AuthCallback::from_query("request_token=tok123&denied=true");
        assert_eq!(cb, AuthCallback::Denied);
        assert!(cb.needs_url_cleanup());
    }

    #[test]
    fn token_without_approval_is_a_no_op() {
        assert_eq!(
            AuthCallback::from_query("request_token=tok123"),
            AuthCallback::None
        );
        assert_eq!(AuthCallback::from_query("approved=true"), AuthCallback::None);
        assert_eq!(AuthCallback::from_query("id=55"), AuthCallback::None);
        assert!(!AuthCallback::from_query("").needs_url_cleanup());
    }

    #[test]
    fn session_serializes_round_trip() {
        let session = Session::new(
            "sess-1".into(),
            Account {
                id: 77,
                username: "casey".into(),
                avatar_path: Some("/av.png".into()),
            },
        );
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(back.account_id, 77);
    }
}
