//! Search integration tests.
//!
//! Run with: `cargo test -p slayer-api --test search_test`

mod helpers;

use chrono::{Duration, Utc};
use helpers::{api_path, setup_test_app, TestAppBuilder};
use slayer_core::models::{CreateSourceRequest, MangaSource};

fn custom_source(name: &str, url: &str, enabled: bool, minutes_ago: i64) -> MangaSource {
    let mut source = MangaSource::new_custom(CreateSourceRequest {
        name: name.to_string(),
        url: url.to_string(),
        enabled: Some(enabled),
    });
    source.added_date = Some(Utc::now() - Duration::minutes(minutes_ago));
    source
}

#[tokio::test]
async fn test_search_all_sources_in_listing_order() {
    let app = setup_test_app().await;
    app.sources
        .add_source(custom_source("On", "https://on.example", true, 10));
    app.sources
        .add_source(custom_source("Off", "https://off.example", false, 5));

    let response = app
        .client()
        .get(&api_path("/manga/search"))
        .add_query_param("query", "piece")
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["count"], 10);
    assert_eq!(data["results"].as_array().unwrap().len(), 10);

    let mut searched = app.catalog.searched();
    searched.sort();
    assert_eq!(
        searched,
        vec![
            "https://api.mangadex.org",
            "https://mangakakalot.com",
            "https://manganato.com",
            "https://off.example",
            "https://on.example",
        ]
    );

    let sources: Vec<&str> = data["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["source"].as_str().unwrap())
        .collect();
    assert_eq!(sources[0], "https://api.mangadex.org");
    assert_eq!(sources[7], "https://on.example");
    assert_eq!(sources[9], "https://off.example");
}

#[tokio::test]
async fn test_search_results_have_sample_shape() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path("/manga/search"))
        .add_query_param("query", "anything")
        .add_query_param("source_id", "mangadex")
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["count"], 2);
    let first = &data["results"][0];
    assert_eq!(first["title"], "One Piece");
    assert_eq!(first["title_ar"], "قطعة واحدة");
    assert_eq!(first["chapters_count"], 1000);
    assert_eq!(first["cover_image"], "https://via.placeholder.com/300x400");
    let id = first["id"].as_str().unwrap();
    assert!(id.starts_with("manga_"));
    assert_eq!(id.len(), "manga_".len() + 8);
}

#[tokio::test]
async fn test_search_custom_source_by_id() {
    let app = setup_test_app().await;
    let source = custom_source("Mine", "https://mine.example", false, 1);
    let id = source.id.clone();
    app.sources.add_source(source);

    let response = app
        .client()
        .get(&api_path("/manga/search"))
        .add_query_param("source_id", &id)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(app.catalog.searched(), vec!["https://mine.example"]);
}

#[tokio::test]
async fn test_search_unknown_source_is_empty() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path("/manga/search"))
        .add_query_param("query", "naruto")
        .add_query_param("source_id", "does-not-exist")
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["count"], 0);
    assert!(data["results"].as_array().unwrap().is_empty());
    assert!(app.catalog.searched().is_empty());
}

#[tokio::test]
async fn test_search_source_id_is_not_trimmed() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path("/manga/search"))
        .add_query_param("source_id", " mangadex ")
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["count"], 0);
    assert!(app.catalog.searched().is_empty());
}

#[tokio::test]
async fn test_search_failing_source_contributes_nothing() {
    let app = TestAppBuilder::default()
        .failing_source("https://mangakakalot.com")
        .build()
        .await;

    let response = app.client().get(&api_path("/manga/search")).await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["count"], 4);
    assert!(data["results"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["source"] != "https://mangakakalot.com"));
}
