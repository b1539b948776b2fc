use crate::constants::status;
use thiserror::Error;

/// Final outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn into_result(self) -> Result<(), CsrfError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny => Err(CsrfError::ValidationFailed),
        }
    }
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        if allowed { Verdict::Allow } else { Verdict::Deny }
    }
}

/// Why a request was or was not subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// `GET`, `HEAD` or `OPTIONS`.
    ExemptMethod,
    /// The body type is outside the protected set.
    ExemptContentType,
    Protected,
}

/// Results of the three independent trust checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub origin: bool,
    pub referer: bool,
    pub sec_fetch_site: bool,
}

impl Signals {
    pub fn any(&self) -> bool {
        self.origin || self.referer || self.sec_fetch_site
    }
}

/// Rejection surfaced to the host layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CsrfError {
    #[error("CSRF validation failed")]
    ValidationFailed,
}

impl CsrfError {
    /// HTTP status the host layer should respond with.
    pub fn status_code(&self) -> u16 {
        match self {
            CsrfError::ValidationFailed => status::FORBIDDEN,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
