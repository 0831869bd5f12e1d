//! `session_id` cookie helpers over [`axum_extra`]'s cookie jar.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const SESSION_COOKIE: &str = "session_id";

/// Session id carried by the request, if it is a well-formed cookie value.
///
/// One pair of surrounding double quotes is dropped. Values holding bytes
/// outside the RFC 6265 cookie-octet set (whitespace, `"`, `,`, `;`, `\`,
/// controls, non-ASCII) are treated as absent.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    let raw = jar.get(SESSION_COOKIE)?.value();
    let value = raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(raw);

    if value.bytes().all(is_cookie_octet) {
        Some(value.to_string())
    } else {
        tracing::debug!("malformed session cookie ignored");
        None
    }
}

fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2b | 0x2d..=0x3a | 0x3c..=0x5b | 0x5d..=0x7e)
}

/// Cookie issuing a session.
pub fn issue(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .http_only(true)
        .path("/")
        .build()
}

/// Expired cookie clearing the session on the client.
pub fn clear() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .path("/")
        .removal()
        .build()
}
