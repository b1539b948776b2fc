/// Request facts the host layer extracts before asking for a verdict.
///
/// Header fields are `None` when the header is missing. Empty values are
/// treated the same as missing ones during evaluation; anything else is
/// compared as given.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub content_type: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub sec_fetch_site: Option<&'a str>,
    /// The request's own origin (`scheme://host[:port]`) as known by the host.
    pub request_origin: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, request_origin: &'a str) -> Self {
        Self {
            method,
            request_origin,
            ..Self::default()
        }
    }
}

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
