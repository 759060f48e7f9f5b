//! The admin session cookie.
//!
//! The whole session state is one flag cookie set after a successful
//! shared-password login. HttpOnly and SameSite=Lax always; Secure only
//! when the production flag is set, so local development over plain HTTP
//! keeps working.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name.
pub const AUTH_COOKIE: &str = "admin-auth";

/// Cookie value expected on authenticated requests.
pub const AUTH_COOKIE_VALUE: &str = "authenticated";

/// Session lifetime.
const MAX_AGE_DAYS: i64 = 7;

/// Build the session cookie set on a successful login.
pub fn session_cookie(production: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, AUTH_COOKIE_VALUE))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(production)
        .max_age(Duration::days(MAX_AGE_DAYS))
        .build()
}

/// Build the expired cookie set on logout (cleared immediately).
pub fn removal_cookie(production: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(production)
        .max_age(Duration::ZERO)
        .build()
}

/// Whether the request carries a valid session cookie.
pub fn is_authenticated(jar: &CookieJar) -> bool {
    jar.get(AUTH_COOKIE)
        .map(|cookie| cookie.value() == AUTH_COOKIE_VALUE)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie(false);
        assert_eq!(cookie.name(), "admin-auth");
        assert_eq!(cookie.value(), "authenticated");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn production_flag_turns_on_secure() {
        assert_eq!(session_cookie(true).secure(), Some(true));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie(false);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn jar_without_cookie_is_unauthenticated() {
        let jar = CookieJar::new();
        assert!(!is_authenticated(&jar));
    }

    #[test]
    fn jar_with_wrong_value_is_unauthenticated() {
        let jar = CookieJar::new().add(Cookie::new(AUTH_COOKIE, "guessed"));
        assert!(!is_authenticated(&jar));
    }

    #[test]
    fn jar_with_session_cookie_is_authenticated() {
        let jar = CookieJar::new().add(session_cookie(false));
        assert!(is_authenticated(&jar));
    }
}
