//! Browser surface: server-rendered page plus a form endpoint that starts a
//! generation cycle.
//!
//! Endpoints:
//! - GET  /          - Page rendered from the current UI state
//! - POST /generate  - Set the prompt and submit (form field `prompt`)
//! - GET  /state     - UI state as JSON
//! - GET  /health    - Liveness

use crate::app::App;
use crate::render::render_page;
use crate::Result;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
}

pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/state", get(state))
        .route("/health", get(health))
        .with_state(app)
}

/// Bind and serve until the process is stopped.
pub async fn serve(app: Arc<App>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Story UI listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(app)).await?;
    Ok(())
}

async fn index(State(app): State<Arc<App>>) -> Html<String> {
    Html(render_page(&app.snapshot().await))
}

/// Loading is entered before the redirect is sent; the call itself runs on
/// its own task so that a dropped connection cannot abandon the state there.
async fn generate(State(app): State<Arc<App>>, Form(form): Form<GenerateForm>) -> Redirect {
    app.set_prompt(form.prompt).await;
    if let Ok(pending) = app.begin_cycle().await {
        tokio::spawn(async move {
            app.finish_cycle(pending).await;
        });
    }
    Redirect::to("/")
}

async fn state(State(app): State<Arc<App>>) -> impl IntoResponse {
    Json(app.snapshot().await.to_json())
}

async fn health() -> &'static str {
    "OK"
}
