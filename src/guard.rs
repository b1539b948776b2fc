use crate::constants::method;
use crate::context::{RequestContext, present};
use crate::options::CsrfOptions;
use crate::result::{Applicability, CsrfError, Signals, Verdict};
use crate::sec_fetch_site::SecFetchSite;
use crate::util::serialized_origin;
use tracing::{debug, trace};

/// Core CSRF policy engine that evaluates requests using [`CsrfOptions`].
///
/// Unsafe requests carrying a protected content type pass when at least one
/// of the Origin, Referer or Sec-Fetch-Site checks passes.
pub struct CsrfGuard {
    options: CsrfOptions,
}

impl CsrfGuard {
    pub fn new(options: CsrfOptions) -> Self {
        options.warn_suspicious();
        Self { options }
    }

    pub fn options(&self) -> &CsrfOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Verdict {
        let applicability = self.applicability(request);
        if applicability != Applicability::Protected {
            trace!(
                method = request.method,
                reason = ?applicability,
                "request exempt from CSRF validation"
            );
            return Verdict::Allow;
        }

        let signals = self.signals(request);
        let verdict = Verdict::from(signals.any());
        if verdict == Verdict::Deny {
            debug!(
                method = request.method,
                origin = ?request.origin,
                referer = ?request.referer,
                sec_fetch_site = ?request.sec_fetch_site,
                "CSRF validation failed"
            );
        }

        verdict
    }

    /// Same as [`CsrfGuard::evaluate`], returning the rejection as an error.
    pub fn check(&self, request: &RequestContext<'_>) -> Result<(), CsrfError> {
        self.evaluate(request).into_result()
    }

    pub fn applicability(&self, request: &RequestContext<'_>) -> Applicability {
        if is_safe_method(request.method) {
            Applicability::ExemptMethod
        } else if !self
            .options
            .allowed_content_types
            .requires_protection(request.content_type)
        {
            Applicability::ExemptContentType
        } else {
            Applicability::Protected
        }
    }

    /// Run all three checks. None of them short-circuits the others.
    pub fn signals(&self, request: &RequestContext<'_>) -> Signals {
        Signals {
            origin: self.origin_signal(request),
            referer: self.referer_signal(request),
            sec_fetch_site: self.sec_fetch_site_signal(request),
        }
    }

    fn origin_signal(&self, request: &RequestContext<'_>) -> bool {
        present(request.origin).is_some_and(|origin| self.options.origin.matches(origin, request))
    }

    fn referer_signal(&self, request: &RequestContext<'_>) -> bool {
        if !self.options.check_referer {
            return false;
        }

        present(request.referer)
            .and_then(serialized_origin)
            .is_some_and(|origin| origin == request.request_origin)
    }

    fn sec_fetch_site_signal(&self, request: &RequestContext<'_>) -> bool {
        present(request.sec_fetch_site)
            .and_then(|value| value.parse::<SecFetchSite>().ok())
            .is_some_and(|site| self.options.sec_fetch_site.matches(site, request))
    }
}

fn is_safe_method(value: &str) -> bool {
    method::SAFE
        .iter()
        .any(|safe| value.eq_ignore_ascii_case(safe))
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
