#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_api::db;
use trivia_api::server::app::build_router;

/// Build the application router exactly as the server binary does, so tests
/// exercise the same middleware stack and fallbacks production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_router(pool)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// Categories are read-only through the API, so tests insert them directly.
pub async fn seed_category(pool: &SqlitePool, kind: &str) -> i64 {
    sqlx::query("INSERT INTO categories (type) VALUES (?1)")
        .bind(kind)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> i64 {
    db::queries::questions::create_question(pool, question, answer, category, difficulty)
        .await
        .unwrap()
}

/// Seed `count` questions in one category, returning their ids.
pub async fn seed_questions(pool: &SqlitePool, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        ids.push(
            seed_question(
                pool,
                &format!("Question number {n}?"),
                &format!("Answer number {n}"),
                category,
                1,
            )
            .await,
        );
    }
    ids
}
