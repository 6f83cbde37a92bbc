use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiPath};
use crate::server::pagination::{paginate, PageQuery};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionList {
    success: bool,
    questions: Vec<db::Question>,
    total_questions: usize,
    current_category: Vec<String>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> Result<Json<CategoryList>, ApiError> {
    let categories = db::queries::categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryList {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

// Everything that can go wrong on this path reads as "no such resource" to
// the caller, the category lookup included.
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<CategoryQuestionList>, ApiError> {
    let category = db::queries::categories::get_category(&pool, id)
        .await
        .map_err(|_| ApiError::NotFound)?
        .ok_or(ApiError::NotFound)?;

    let questions = db::queries::questions::get_questions_for_category(&pool, id)
        .await
        .map_err(|_| ApiError::NotFound)?;
    let current = paginate(&questions, page.page());

    Ok(Json(CategoryQuestionList {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        current_category: vec![category.kind],
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
