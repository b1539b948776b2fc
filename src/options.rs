use crate::content_type::ProtectedContentTypes;
use crate::origin::TrustedOrigin;
use crate::sec_fetch_site::TrustedSecFetchSite;
use thiserror::Error;
use tracing::warn;

#[derive(Clone)]
pub struct CsrfOptions {
    pub origin: TrustedOrigin,
    pub sec_fetch_site: TrustedSecFetchSite,
    /// When `false` the Referer signal never passes.
    pub check_referer: bool,
    pub allowed_content_types: ProtectedContentTypes,
}

impl Default for CsrfOptions {
    fn default() -> Self {
        Self {
            origin: TrustedOrigin::default(),
            sec_fetch_site: TrustedSecFetchSite::default(),
            check_referer: true,
            allowed_content_types: ProtectedContentTypes::default(),
        }
    }
}

/// Raw configuration values that cannot be turned into options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "`{0}` is not a Sec-Fetch-Site value; expected same-origin, same-site, none or cross-site"
    )]
    InvalidSecFetchSite(String),
}

impl CsrfOptions {
    /// Log settings that are accepted but likely not what the caller meant.
    pub(crate) fn warn_suspicious(&self) {
        for origin in self.origin.unusual_entries() {
            warn!(
                origin,
                "trusted origin is not a browser-serialized origin and only matches verbatim"
            );
        }

        if self.allowed_content_types.has_blank_entry() {
            warn!("blank allowed content type matches every content type");
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
