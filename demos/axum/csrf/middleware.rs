use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use csrf_guard_rs::{CsrfError, RequestContext, constants::header};

use super::AppState;

pub async fn csrf_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);

    match state.guard.check(&owned_ctx.as_request_context()) {
        Ok(()) => next.run(request).await,
        Err(err) => rejection_response(err),
    }
}

fn rejection_response(err: CsrfError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::FORBIDDEN);
    Response::builder()
        .status(status)
        .body(Body::from(err.to_string()))
        .unwrap()
}

struct OwnedRequestContext {
    method: String,
    content_type: Option<String>,
    origin: Option<String>,
    referer: Option<String>,
    sec_fetch_site: Option<String>,
    request_origin: String,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();
        let host = header_value(headers, header::HOST).unwrap_or_default();

        Self {
            method: request.method().as_str().to_string(),
            content_type: header_value(headers, header::CONTENT_TYPE),
            origin: header_value(headers, header::ORIGIN),
            referer: header_value(headers, header::REFERER),
            sec_fetch_site: header_value(headers, header::SEC_FETCH_SITE),
            // The example serves plain HTTP only.
            request_origin: format!("http://{host}"),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            content_type: self.content_type.as_deref(),
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
            sec_fetch_site: self.sec_fetch_site.as_deref(),
            request_origin: &self.request_origin,
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
