//! Session cookie boundary
//!
//! Every cookie written or cleared here shares one attribute set, so a
//! deletion always matches the scoping of the cookie it deletes.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

use super::TokenIssuer;
use crate::config::Config;

pub const TOKEN_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct CookieOptions {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age: Duration,
    pub path: String,
    pub domain: Option<String>,
}

/// Per-call changes applied on top of [`SessionCookies`] defaults.
#[derive(Debug, Clone, Default)]
pub struct CookieOverrides {
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub same_site: Option<SameSite>,
    pub max_age: Option<Duration>,
    pub path: Option<String>,
    pub domain: Option<String>,
}

impl CookieOptions {
    fn merge(mut self, overrides: CookieOverrides) -> Self {
        if let Some(http_only) = overrides.http_only {
            self.http_only = http_only;
        }
        if let Some(secure) = overrides.secure {
            self.secure = secure;
        }
        if let Some(same_site) = overrides.same_site {
            self.same_site = same_site;
        }
        if let Some(max_age) = overrides.max_age {
            self.max_age = max_age;
        }
        if let Some(path) = overrides.path {
            self.path = path;
        }
        if overrides.domain.is_some() {
            self.domain = overrides.domain;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct SessionCookies {
    defaults: CookieOptions,
}

impl SessionCookies {
    pub fn new(secure: bool, max_age: Duration) -> Self {
        Self {
            defaults: CookieOptions {
                http_only: true,
                secure,
                same_site: SameSite::Strict,
                max_age,
                path: "/".to_string(),
                domain: None,
            },
        }
    }

    /// Cookies live exactly as long as the tokens they carry.
    pub fn from_config(config: &Config, tokens: &TokenIssuer) -> Self {
        Self::new(config.is_production(), tokens.lifetime())
    }

    pub fn options(&self, overrides: Option<CookieOverrides>) -> CookieOptions {
        self.defaults
            .clone()
            .merge(overrides.unwrap_or_default())
    }

    pub fn build(
        &self,
        name: &str,
        value: &str,
        overrides: Option<CookieOverrides>,
    ) -> Cookie<'static> {
        let options = self.options(overrides);

        let mut cookie = Cookie::build((name.to_owned(), value.to_owned()))
            .path(options.path)
            .http_only(options.http_only)
            .secure(options.secure)
            .same_site(options.same_site)
            .max_age(options.max_age)
            .build();

        if let Some(domain) = options.domain {
            cookie.set_domain(domain);
        }

        cookie
    }

    /// Same attributes as [`SessionCookies::build`], with an empty value
    /// and an expiry in the past.
    pub fn build_removal(&self, name: &str, overrides: Option<CookieOverrides>) -> Cookie<'static> {
        let mut cookie = self.build(name, "", overrides);
        cookie.make_removal();
        cookie
    }

    pub fn set(
        &self,
        jar: CookieJar,
        name: &str,
        value: &str,
        overrides: Option<CookieOverrides>,
    ) -> CookieJar {
        jar.add(self.build(name, value, overrides))
    }

    pub fn get(&self, jar: &CookieJar, name: &str) -> Option<String> {
        jar.get(name).map(|cookie| cookie.value().to_owned())
    }

    pub fn clear(
        &self,
        jar: CookieJar,
        name: &str,
        overrides: Option<CookieOverrides>,
    ) -> CookieJar {
        // `CookieJar::remove` emits nothing for cookies the request did not
        // carry, so the removal cookie is added explicitly.
        jar.add(self.build_removal(name, overrides))
    }
}
