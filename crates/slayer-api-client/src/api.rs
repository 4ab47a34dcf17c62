//! Domain methods for the Manga Slayer API client.
//!
//! Response types come from `slayer_core::models`, the same structs the server serializes.

use crate::ApiClient;
use anyhow::Result;
use urlencoding::encode;
use slayer_core::models::{
    Chapter, ChapterMessageResponse, CreateSourceRequest, DownloadStats, DownloadsResponse,
    MangaDetail, MangaDownloadResponse, MessageResponse, ReadingProgress, SearchResponse,
    SourceCreatedResponse, SourcesResponse, UserPreferences,
};

impl ApiClient {
    /// List built-in and custom sources.
    pub async fn list_sources(&self) -> Result<SourcesResponse> {
        self.get("/sources", &[]).await
    }

    /// Add a custom source. The server checks the URL before storing it.
    pub async fn add_source(
        &self,
        name: &str,
        url: &str,
        enabled: Option<bool>,
    ) -> Result<SourceCreatedResponse> {
        let request = CreateSourceRequest {
            name: name.to_string(),
            url: url.to_string(),
            enabled,
        };
        self.post_json("/sources", &request).await
    }

    pub async fn delete_source(&self, source_id: &str) -> Result<MessageResponse> {
        self.delete(&format!("/sources/{}", encode(source_id))).await
    }

    /// Search one source, or every known source when `source_id` is `None`.
    pub async fn search(&self, query: &str, source_id: Option<&str>) -> Result<SearchResponse> {
        let mut params = vec![("query", query.to_string())];
        if let Some(id) = source_id {
            params.push(("source_id", id.to_string()));
        }
        self.get("/manga/search", &params).await
    }

    pub async fn get_manga(&self, manga_id: &str) -> Result<MangaDetail> {
        self.get(&format!("/manga/{}", encode(manga_id)), &[]).await
    }

    pub async fn get_chapter(&self, chapter_id: &str) -> Result<Chapter> {
        self.get(&format!("/chapter/{}", encode(chapter_id)), &[]).await
    }

    pub async fn download_manga(&self, manga_id: &str) -> Result<MangaDownloadResponse> {
        self.post_query(&format!("/download/manga/{}", encode(manga_id)), &[])
            .await
    }

    pub async fn download_chapter(&self, chapter_id: &str) -> Result<ChapterMessageResponse> {
        self.post_query(&format!("/download/chapter/{}", encode(chapter_id)), &[])
            .await
    }

    pub async fn download_stats(&self) -> Result<DownloadStats> {
        self.get("/downloads/stats", &[]).await
    }

    pub async fn list_downloads(&self) -> Result<DownloadsResponse> {
        self.get("/downloads", &[]).await
    }

    pub async fn translate_chapter(
        &self,
        chapter_id: &str,
        target_lang: &str,
    ) -> Result<ChapterMessageResponse> {
        self.post_query(
            "/translate",
            &[
                ("chapter_id", chapter_id.to_string()),
                ("target_lang", target_lang.to_string()),
            ],
        )
        .await
    }

    pub async fn get_preferences(&self) -> Result<UserPreferences> {
        self.get("/preferences", &[]).await
    }

    pub async fn update_preferences(&self, preferences: &UserPreferences) -> Result<MessageResponse> {
        self.post_json("/preferences", preferences).await
    }

    pub async fn get_progress(&self, manga_id: &str) -> Result<ReadingProgress> {
        self.get(&format!("/reading-progress/{}", encode(manga_id)), &[])
            .await
    }

    pub async fn update_progress(
        &self,
        manga_id: &str,
        chapter_id: Option<&str>,
        page: i32,
    ) -> Result<MessageResponse> {
        let mut params = vec![
            ("manga_id", manga_id.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(chapter) = chapter_id {
            params.push(("chapter_id", chapter.to_string()));
        }
        self.post_query("/reading-progress", &params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::ApiClient;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::collections::HashMap;

    async fn spawn_server(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(format!("http://{}", addr)).unwrap()
    }

    #[tokio::test]
    async fn update_progress_sends_query_parameters() {
        let router = Router::new().route(
            "/api/reading-progress",
            post(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("manga_id").map(String::as_str), Some("m1"));
                assert_eq!(params.get("page").map(String::as_str), Some("4"));
                assert!(!params.contains_key("chapter_id"));
                Json(serde_json::json!({ "message": "Progress updated" }))
            }),
        );
        let client = spawn_server(router).await;

        let response = client.update_progress("m1", None, 4).await.unwrap();
        assert_eq!(response.message, "Progress updated");
    }

    #[tokio::test]
    async fn error_status_carries_server_message() {
        let router = Router::new().route(
            "/api/chapter/{chapter_id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "error": "Chapter not found", "code": "NOT_FOUND" })),
                )
            }),
        );
        let client = spawn_server(router).await;

        let err = client.get_chapter("missing").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Chapter not found"));
    }

    #[tokio::test]
    async fn path_ids_with_reserved_characters_reach_the_server_intact() {
        let router = Router::new().route(
            "/api/reading-progress/{manga_id}",
            get(|Path(manga_id): Path<String>| async move {
                Json(serde_json::json!({ "manga_id": manga_id, "chapter_id": null, "page": 0 }))
            }),
        );
        let client = spawn_server(router).await;

        for id in ["one?piece", "vol#2", "a/b", "space here"] {
            let progress = client.get_progress(id).await.unwrap();
            assert_eq!(progress.manga_id, id);
        }
    }
}
