use axum_test::TestServer;

use marquee_api::api::{create_router, AppState};
use marquee_api::models::MovieRecord;
use marquee_api::services::{MovieCatalog, Recommender, SimilarityMatrix};

fn record(title: &str, cast: &[&str], crew: &[&str], genres: &[&str]) -> MovieRecord {
    MovieRecord {
        id: 0,
        title: title.to_string(),
        cast: cast.iter().map(|s| s.to_string()).collect(),
        crew: crew.iter().map(|s| s.to_string()).collect(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        keywords: vec![],
    }
}

fn create_test_server() -> TestServer {
    let catalog = MovieCatalog::from_records(vec![
        record(
            "The Matrix",
            &["KeanuReeves", "CarrieAnneMoss"],
            &["LanaWachowski"],
            &["Action", "ScienceFiction"],
        ),
        record(
            "Inception",
            &["LeonardoDiCaprio"],
            &["ChristopherNolan"],
            &["Action", "Thriller"],
        ),
        record(
            "The Notebook",
            &["RyanGosling"],
            &["NickCassavetes"],
            &["Romance"],
        ),
        record(
            "Interstellar",
            &["MatthewMcConaughey"],
            &["ChristopherNolan"],
            &["Adventure", "ScienceFiction"],
        ),
        record(
            "Blade Runner",
            &["HarrisonFord"],
            &["RidleyScott"],
            &["ScienceFiction", "Thriller"],
        ),
        record(
            "Arrival",
            &["AmyAdams"],
            &["DenisVilleneuve"],
            &["Drama", "ScienceFiction"],
        ),
    ]);

    let similarity = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.3, 0.4, 0.2, 0.25, 0.6],
        vec![0.3, 1.0, 0.1, 0.9, 0.35, 0.45],
        vec![0.4, 0.1, 1.0, 0.05, 0.15, 0.5],
        vec![0.2, 0.9, 0.05, 1.0, 0.7, 0.1],
        vec![0.25, 0.35, 0.15, 0.7, 1.0, 0.55],
        vec![0.6, 0.45, 0.5, 0.1, 0.55, 1.0],
    ])
    .unwrap();

    let recommender = Recommender::new(catalog, similarity).unwrap();
    let app = create_router(AppState::new(recommender));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_movies_in_store_order() {
    let server = create_test_server();

    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let titles: Vec<String> = response.json();
    assert_eq!(
        titles,
        vec![
            "The Matrix",
            "Inception",
            "The Notebook",
            "Interstellar",
            "Blade Runner",
            "Arrival"
        ]
    );
}

#[tokio::test]
async fn test_recommendations_for_title() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/recommendations")
        .add_query_param("title", "Interstellar")
        .add_query_param("k", "2")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Interstellar");
    assert_eq!(
        body["recommendations"],
        serde_json::json!(["Inception", "Blade Runner"])
    );
}

#[tokio::test]
async fn test_recommendations_default_k_is_five() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/recommendations")
        .add_query_param("title", "The Matrix")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_recommendations_unknown_title() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/recommendations")
        .add_query_param("title", "The Room")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("The Room"));
}

#[tokio::test]
async fn test_category_values_sorted() {
    let server = create_test_server();

    let response = server.get("/api/v1/categories/genres/values").await;
    response.assert_status_ok();

    let values: Vec<String> = response.json();
    assert_eq!(
        values,
        vec![
            "Action",
            "Adventure",
            "Drama",
            "Romance",
            "ScienceFiction",
            "Thriller"
        ]
    );
}

#[tokio::test]
async fn test_genre_filter_lists_in_store_order() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/categories/genres/titles")
        .add_query_param("value", "ScienceFiction")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["field"], "genres");
    assert_eq!(
        body["titles"],
        serde_json::json!(["The Matrix", "Interstellar", "Blade Runner", "Arrival"])
    );
}

#[tokio::test]
async fn test_cast_filter_recommends_via_representative() {
    let server = create_test_server();

    // MatthewMcConaughey only appears in Interstellar (id 3), so the
    // listing is Interstellar's own top five neighbors
    let response = server
        .get("/api/v1/categories/cast/titles")
        .add_query_param("value", "MatthewMcConaughey")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["titles"],
        serde_json::json!([
            "Inception",
            "Blade Runner",
            "The Matrix",
            "Arrival",
            "The Notebook"
        ])
    );
}

#[tokio::test]
async fn test_crew_filter_uses_first_matching_movie() {
    let server = create_test_server();

    // ChristopherNolan matches Inception (id 1) first
    let response = server
        .get("/api/v1/categories/crew/titles")
        .add_query_param("value", "ChristopherNolan")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["titles"],
        serde_json::json!([
            "Interstellar",
            "Arrival",
            "Blade Runner",
            "The Matrix",
            "The Notebook"
        ])
    );
}

#[tokio::test]
async fn test_category_filter_with_no_matches() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/categories/cast/titles")
        .add_query_param("value", "Nobody")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Nobody"));
}

#[tokio::test]
async fn test_unknown_category_field_rejected() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/categories/keywords/titles")
        .add_query_param("value", "space")
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_request_id_echoed_on_response() {
    let server = create_test_server();

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
