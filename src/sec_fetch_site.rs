use crate::constants::sec_fetch_site;
use crate::context::RequestContext;
use crate::options::ValidationError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type SecFetchSitePredicateFn =
    dyn for<'a> Fn(SecFetchSite, &RequestContext<'a>) -> bool + Send + Sync;

/// The four values a browser may send in `Sec-Fetch-Site`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecFetchSite {
    SameOrigin,
    SameSite,
    /// User-initiated navigation (address bar, bookmark).
    None,
    CrossSite,
}

impl SecFetchSite {
    pub const ALL: [SecFetchSite; 4] = [
        SecFetchSite::SameOrigin,
        SecFetchSite::SameSite,
        SecFetchSite::None,
        SecFetchSite::CrossSite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecFetchSite::SameOrigin => sec_fetch_site::SAME_ORIGIN,
            SecFetchSite::SameSite => sec_fetch_site::SAME_SITE,
            SecFetchSite::None => sec_fetch_site::NONE,
            SecFetchSite::CrossSite => sec_fetch_site::CROSS_SITE,
        }
    }
}

impl fmt::Display for SecFetchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown Sec-Fetch-Site value `{0}`")]
pub struct UnknownSecFetchSite(pub String);

impl FromStr for SecFetchSite {
    type Err = UnknownSecFetchSite;

    /// Tokens are matched exactly; browsers always send them lowercase.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            sec_fetch_site::SAME_ORIGIN => Ok(SecFetchSite::SameOrigin),
            sec_fetch_site::SAME_SITE => Ok(SecFetchSite::SameSite),
            sec_fetch_site::NONE => Ok(SecFetchSite::None),
            sec_fetch_site::CROSS_SITE => Ok(SecFetchSite::CrossSite),
            other => Err(UnknownSecFetchSite(other.to_string())),
        }
    }
}

/// Which `Sec-Fetch-Site` values count as a passing signal.
#[derive(Clone, Default)]
pub enum TrustedSecFetchSite {
    /// Only `same-origin` passes.
    #[default]
    SameOrigin,
    Exact(SecFetchSite),
    List(Vec<SecFetchSite>),
    Predicate(Arc<SecFetchSitePredicateFn>),
}

impl TrustedSecFetchSite {
    pub fn exact(value: SecFetchSite) -> Self {
        Self::Exact(value)
    }

    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = SecFetchSite>,
    {
        Self::List(values.into_iter().collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(SecFetchSite, &RequestContext<'a>) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Build a trusted set from raw tokens, e.g. values read from a config file.
    ///
    /// A single token resolves to [`TrustedSecFetchSite::Exact`], several to
    /// [`TrustedSecFetchSite::List`].
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                token
                    .parse::<SecFetchSite>()
                    .map_err(|_| ValidationError::InvalidSecFetchSite(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() == 1 {
            Ok(Self::Exact(values.remove(0)))
        } else {
            Ok(Self::List(values))
        }
    }

    pub fn matches(&self, site: SecFetchSite, ctx: &RequestContext<'_>) -> bool {
        match self {
            TrustedSecFetchSite::SameOrigin => site == SecFetchSite::SameOrigin,
            TrustedSecFetchSite::Exact(value) => *value == site,
            TrustedSecFetchSite::List(values) => values.contains(&site),
            TrustedSecFetchSite::Predicate(predicate) => predicate(site, ctx),
        }
    }
}

#[cfg(test)]
#[path = "sec_fetch_site_test.rs"]
mod sec_fetch_site_test;
