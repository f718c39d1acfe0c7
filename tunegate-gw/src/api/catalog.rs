//! Catalog proxy routes
//!
//! One thin handler per inbound route; each delegates to the mediator
//! and maps the envelope's failure kind onto an HTTP status. The
//! envelope itself is serialized verbatim as the response body.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tunegate_common::api::{FailureKind, ResponseEnvelope};

use crate::catalog::OperationId;
use crate::AppState;

/// Build the `/api` proxy routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/search/all", get(search_all))
        .route("/api/search/songs", get(search_songs))
        .route("/api/search/albums", get(search_albums))
        .route("/api/search/artists", get(search_artists))
        .route("/api/search/playlists", get(search_playlists))
        .route("/api/songs/:id", get(get_song))
        .route("/api/albums/:id", get(get_album))
        .route("/api/artists/:id", get(get_artist))
        .route("/api/playlists/:id", get(get_playlist))
        .route("/api/modules", get(get_home_modules))
        .route("/api/trending", get(get_trending))
        .route("/api/charts", get(get_charts))
        .route("/api/lyrics/:id", get(get_lyrics))
}

/// Status mapping is a presentation concern: the mediation layer only
/// guarantees the failure kind
fn status_for(envelope: &ResponseEnvelope) -> StatusCode {
    match envelope.failure_kind() {
        None => StatusCode::OK,
        Some(FailureKind::Validation) => StatusCode::BAD_REQUEST,
        Some(FailureKind::NotFound) => StatusCode::NOT_FOUND,
        Some(FailureKind::Timeout) => StatusCode::GATEWAY_TIMEOUT,
        Some(
            FailureKind::Transport
            | FailureKind::BadUpstreamPayload
            | FailureKind::UpstreamReportedFailure,
        ) => StatusCode::BAD_GATEWAY,
    }
}

async fn respond(state: &AppState, op: OperationId, params: HashMap<String, String>) -> Response {
    let envelope = state.mediator.mediate(op, &params).await;
    (status_for(&envelope), Json(envelope)).into_response()
}

fn id_params(id: String) -> HashMap<String, String> {
    HashMap::from([("id".to_string(), id)])
}

async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, OperationId::SearchAll, params).await
}

async fn search_songs(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, OperationId::SearchSongs, params).await
}

async fn search_albums(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, OperationId::SearchAlbums, params).await
}

async fn search_artists(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, OperationId::SearchArtists, params).await
}

async fn search_playlists(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, OperationId::SearchPlaylists, params).await
}

async fn get_song(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(&state, OperationId::GetSong, id_params(id)).await
}

async fn get_album(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(&state, OperationId::GetAlbum, id_params(id)).await
}

async fn get_artist(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(&state, OperationId::GetArtist, id_params(id)).await
}

async fn get_playlist(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(&state, OperationId::GetPlaylist, id_params(id)).await
}

async fn get_home_modules(State(state): State<AppState>) -> Response {
    respond(&state, OperationId::GetHomeModules, HashMap::new()).await
}

async fn get_trending(State(state): State<AppState>) -> Response {
    respond(&state, OperationId::GetTrending, HashMap::new()).await
}

async fn get_charts(State(state): State<AppState>) -> Response {
    respond(&state, OperationId::GetCharts, HashMap::new()).await
}

async fn get_lyrics(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(&state, OperationId::GetLyrics, id_params(id)).await
}
