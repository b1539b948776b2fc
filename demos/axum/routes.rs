use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::csrf::AppState;

pub async fn profile(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><form method=\"post\"><input name=\"name\"><button>Save</button></form>",
        state.greeting
    ))
}

pub async fn update_profile() -> impl IntoResponse {
    Html("<p>Profile updated.</p>")
}
