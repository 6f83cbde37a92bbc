use axum::extract::{Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiJson, ApiPath};
use crate::server::pagination::{paginate, PageQuery};

#[derive(Deserialize)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<db::Question>,
    total_questions: usize,
    current_category: Vec<String>,
    categories: Vec<String>,
}

#[derive(Serialize)]
struct QuestionPage {
    success: bool,
    questions: Vec<db::Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct DeletedQuestion {
    success: bool,
    deleted: i64,
    questions: Vec<db::Question>,
    total_questions: usize,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let questions = db::queries::questions::get_all_questions(&pool).await?;
    // An out-of-range page on a non-empty set is fine; only an empty store
    // is a missing resource.
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = db::queries::categories::get_all_categories(&pool).await?;
    let current = paginate(&questions, page.page());

    Ok(Json(QuestionList {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        current_category: vec![],
        categories: categories.into_iter().map(|c| c.kind).collect(),
    }))
}

async fn create_or_search_question(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    ApiJson(body): ApiJson<NewQuestionBody>,
) -> Result<Json<QuestionPage>, ApiError> {
    if let Some(term) = body.search_term.as_deref().filter(|t| !t.is_empty()) {
        let matches = db::queries::questions::search_questions(&pool, term).await?;
        return Ok(Json(QuestionPage {
            success: true,
            total_questions: matches.len(),
            questions: matches,
        }));
    }

    let (question, answer, category, difficulty) =
        match (body.question, body.answer, body.category, body.difficulty) {
            (Some(q), Some(a), Some(c), Some(d)) => (q, a, c, d),
            _ => {
                tracing::error!("question insert rejected: missing fields");
                return Err(ApiError::Unprocessable);
            }
        };

    db::queries::questions::create_question(&pool, &question, &answer, category, difficulty)
        .await?;

    let questions = db::queries::questions::get_all_questions(&pool).await?;
    let current = paginate(&questions, page.page());

    Ok(Json(QuestionPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
    }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<DeletedQuestion>, ApiError> {
    db::queries::questions::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    db::queries::questions::delete_question(&pool, id).await?;

    let questions = db::queries::questions::get_all_questions(&pool).await?;
    let current = paginate(&questions, page.page());

    Ok(Json(DeletedQuestion {
        success: true,
        deleted: id,
        questions: current.to_vec(),
        total_questions: questions.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(get_questions).post(create_or_search_question),
        )
        .route("/questions/{id}", delete(remove_question))
        .with_state(state)
}
