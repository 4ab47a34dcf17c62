//! Domain route groups (sources, manga, downloads, preferences, progress).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;

pub fn source_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/sources", API_PREFIX),
            get(handlers::sources::list_sources).post(handlers::sources::create_source),
        )
        .route(
            &format!("{}/sources/{{source_id}}", API_PREFIX),
            delete(handlers::sources::delete_source),
        )
}

pub fn manga_routes() -> Router<Arc<AppState>> {
    // `/manga/search` is a static segment and wins over `/manga/{manga_id}`.
    Router::new()
        .route(
            &format!("{}/manga/search", API_PREFIX),
            get(handlers::search::search_manga),
        )
        .route(
            &format!("{}/manga/{{manga_id}}", API_PREFIX),
            get(handlers::manga::get_manga),
        )
        .route(
            &format!("{}/manga/{{manga_id}}/chapters", API_PREFIX),
            get(handlers::manga::get_manga_chapters),
        )
        .route(
            &format!("{}/chapter/{{chapter_id}}", API_PREFIX),
            get(handlers::manga::get_chapter),
        )
        .route(
            &format!("{}/translate", API_PREFIX),
            post(handlers::translate::translate_chapter),
        )
}

pub fn download_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/download/manga/{{manga_id}}", API_PREFIX),
            post(handlers::downloads::download_manga),
        )
        .route(
            &format!("{}/download/chapter/{{chapter_id}}", API_PREFIX),
            post(handlers::downloads::download_chapter),
        )
        .route(
            &format!("{}/downloads/stats", API_PREFIX),
            get(handlers::downloads::download_stats),
        )
        .route(
            &format!("{}/downloads", API_PREFIX),
            get(handlers::downloads::list_downloads),
        )
}

pub fn reader_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/preferences", API_PREFIX),
            get(handlers::preferences::get_preferences)
                .post(handlers::preferences::update_preferences),
        )
        .route(
            &format!("{}/reading-progress", API_PREFIX),
            post(handlers::reading_progress::update_reading_progress),
        )
        .route(
            &format!("{}/reading-progress/{{manga_id}}", API_PREFIX),
            get(handlers::reading_progress::get_reading_progress),
        )
}
