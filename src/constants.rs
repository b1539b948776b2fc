pub mod header {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
    pub const SEC_FETCH_SITE: &str = "Sec-Fetch-Site";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods that never require CSRF validation.
    pub const SAFE: [&str; 3] = [GET, HEAD, OPTIONS];
}

pub mod content_type {
    pub const FORM_URLENCODED: &str = "x-www-form-urlencoded";
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const APPLICATION_JSON: &str = "application/json";
    pub const APPLICATION_XML: &str = "application/xml";
    pub const TEXT_XML: &str = "text/xml";
}

pub mod sec_fetch_site {
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const SAME_SITE: &str = "same-site";
    pub const NONE: &str = "none";
    pub const CROSS_SITE: &str = "cross-site";
}

pub mod status {
    pub const FORBIDDEN: u16 = 403;
}
