use std::sync::Arc;

use csrf_guard_rs::{CsrfGuard, CsrfOptions, SecFetchSite, TrustedSecFetchSite};

pub type SharedGuard = Arc<CsrfGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CsrfOptions {
        sec_fetch_site: TrustedSecFetchSite::list([SecFetchSite::SameOrigin, SecFetchSite::None]),
        ..CsrfOptions::default()
    };

    AppState {
        guard: Arc::new(CsrfGuard::new(options)),
        greeting: "Welcome to the Axum CSRF example!",
    }
}

pub mod middleware;
