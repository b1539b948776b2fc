use csrf_guard_rs::constants::method;
use csrf_guard_rs::{
    Applicability, CsrfError, CsrfGuard, CsrfOptions, ProtectedContentTypes, RequestContext, Signals,
    TrustedOrigin, TrustedSecFetchSite, Verdict,
};

pub const REQUEST_ORIGIN: &str = "http://localhost";

#[derive(Default)]
pub struct GuardBuilder {
    origin: Option<TrustedOrigin>,
    sec_fetch_site: Option<TrustedSecFetchSite>,
    check_referer: Option<bool>,
    allowed_content_types: Option<ProtectedContentTypes>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: TrustedOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn sec_fetch_site(mut self, sec_fetch_site: TrustedSecFetchSite) -> Self {
        self.sec_fetch_site = Some(sec_fetch_site);
        self
    }

    pub fn check_referer(mut self, enabled: bool) -> Self {
        self.check_referer = Some(enabled);
        self
    }

    pub fn allowed_content_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_content_types = Some(ProtectedContentTypes::list(values));
        self
    }

    pub fn build(self) -> CsrfGuard {
        let CsrfOptions {
            origin: default_origin,
            sec_fetch_site: default_sec_fetch_site,
            check_referer: default_check_referer,
            allowed_content_types: default_allowed_content_types,
        } = CsrfOptions::default();

        CsrfGuard::new(CsrfOptions {
            origin: self.origin.unwrap_or(default_origin),
            sec_fetch_site: self.sec_fetch_site.unwrap_or(default_sec_fetch_site),
            check_referer: self.check_referer.unwrap_or(default_check_referer),
            allowed_content_types: self
                .allowed_content_types
                .unwrap_or(default_allowed_content_types),
        })
    }
}

#[derive(Clone)]
pub struct RequestBuilder {
    method: String,
    content_type: Option<String>,
    origin: Option<String>,
    referer: Option<String>,
    sec_fetch_site: Option<String>,
    request_origin: String,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            content_type: None,
            origin: None,
            referer: None,
            sec_fetch_site: None,
            request_origin: REQUEST_ORIGIN.into(),
        }
    }

    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    pub fn origin(mut self, value: impl Into<String>) -> Self {
        self.origin = Some(value.into());
        self
    }

    pub fn referer(mut self, value: impl Into<String>) -> Self {
        self.referer = Some(value.into());
        self
    }

    pub fn sec_fetch_site(mut self, value: impl Into<String>) -> Self {
        self.sec_fetch_site = Some(value.into());
        self
    }

    pub fn request_origin(mut self, value: impl Into<String>) -> Self {
        self.request_origin = value.into();
        self
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            content_type: self.content_type.as_deref(),
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
            request_origin: &self.request_origin,
        }
    }

    pub fn evaluate(&self, guard: &CsrfGuard) -> Verdict {
        guard.evaluate(&self.context())
    }

    pub fn check(&self, guard: &CsrfGuard) -> Result<(), CsrfError> {
        guard.check(&self.context())
    }

    pub fn signals(&self, guard: &CsrfGuard) -> Signals {
        guard.signals(&self.context())
    }

    pub fn applicability(&self, guard: &CsrfGuard) -> Applicability {
        guard.applicability(&self.context())
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn post() -> RequestBuilder {
    RequestBuilder::new(method::POST)
}
