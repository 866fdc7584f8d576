//! HTTP transport for the catalog — maps requests to catalog operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /gallery` — all paintings; `?author=<id>` filters by author,
//!   otherwise `?search=<q>` searches titles and author names.
//! - `POST /gallery` — add a painting (JSON body). 201 on success.
//! - `DELETE /gallery?id=<id>` — delete a painting. 404 if absent.
//! - `PATCH /gallery?id=<id>` — toggle the favorite flag. 404 if absent.
//! - `GET /authors`, `POST /authors` — list or add authors.
//! - `GET /facts` — trivia facts.
//! - `GET /popular` — popular paintings.
//! - `GET /health` — `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use art_gallery::{http, Catalog, JsonFileStore};
//!
//! let catalog = Arc::new(Catalog::open(JsonFileStore::new("gallery.json"))?);
//! http::serve(catalog, "0.0.0.0:8080", std::future::pending()).await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::catalog::{Catalog, CatalogError};
use crate::model::{Author, Painting};
use crate::persistence::DocumentStore;

type Shared<S> = State<Arc<Catalog<S>>>;

/// Query parameters accepted by `GET /gallery`.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// `?id=` query parameter for `DELETE` and `PATCH /gallery`.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: String,
}

/// Build an axum `Router` serving the given catalog.
pub fn router<S: DocumentStore + 'static>(catalog: Arc<Catalog<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/gallery",
            get(list_gallery::<S>)
                .post(add_painting::<S>)
                .delete(delete_painting::<S>)
                .patch(toggle_favorite::<S>),
        )
        .route("/authors", get(list_authors::<S>).post(add_author::<S>))
        .route("/facts", get(list_facts::<S>))
        .route("/popular", get(list_popular::<S>))
        .with_state(catalog)
}

/// Serve the catalog over HTTP at `addr` until `shutdown` resolves.
pub async fn serve<S, F>(
    catalog: Arc<Catalog<S>>,
    addr: &str,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: DocumentStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "art gallery listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Catalog errors rendered as `{ "error": ... }` with the mapped status.
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "catalog operation failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

/// `GET /health`
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /gallery`
async fn list_gallery<S: DocumentStore>(
    State(catalog): Shared<S>,
    Query(query): Query<GalleryQuery>,
) -> Result<Response, CatalogError> {
    let author = query.author.filter(|a| !a.is_empty());
    let search = query.search.filter(|s| !s.is_empty());

    let views = match (author, search) {
        (Some(author), _) => catalog.list_paintings_by_author(&author)?,
        (None, Some(search)) => catalog.search_paintings(&search)?,
        (None, None) => catalog.list_paintings()?,
    };
    Ok(Json(views).into_response())
}

/// `POST /gallery`
async fn add_painting<S: DocumentStore>(
    State(catalog): Shared<S>,
    Json(painting): Json<Painting>,
) -> Result<Response, CatalogError> {
    let id = painting.id.clone();
    catalog.add_painting(painting)?;
    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "id": id }))).into_response())
}

/// `DELETE /gallery?id=`
async fn delete_painting<S: DocumentStore>(
    State(catalog): Shared<S>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CatalogError> {
    if catalog.delete_painting(&query.id)? {
        Ok(Json(json!({ "ok": true, "id": query.id })).into_response())
    } else {
        Ok(not_found())
    }
}

/// `PATCH /gallery?id=`
async fn toggle_favorite<S: DocumentStore>(
    State(catalog): Shared<S>,
    Query(query): Query<IdQuery>,
) -> Result<Response, CatalogError> {
    if catalog.toggle_favorite(&query.id)? {
        Ok(Json(json!({ "ok": true, "id": query.id })).into_response())
    } else {
        Ok(not_found())
    }
}

/// `GET /authors`
async fn list_authors<S: DocumentStore>(
    State(catalog): Shared<S>,
) -> Result<Response, CatalogError> {
    Ok(Json(catalog.list_authors()?).into_response())
}

/// `POST /authors`
async fn add_author<S: DocumentStore>(
    State(catalog): Shared<S>,
    Json(author): Json<Author>,
) -> Result<Response, CatalogError> {
    let id = author.id.clone();
    catalog.add_author(author)?;
    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "id": id }))).into_response())
}

/// `GET /facts`
async fn list_facts<S: DocumentStore>(
    State(catalog): Shared<S>,
) -> Result<Response, CatalogError> {
    Ok(Json(catalog.list_facts()?).into_response())
}

/// `GET /popular`
async fn list_popular<S: DocumentStore>(
    State(catalog): Shared<S>,
) -> Result<Response, CatalogError> {
    Ok(Json(catalog.list_popular_paintings()?).into_response())
}
