use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiJson};
use crate::telemetry::QUIZ_QUESTION_CNTR;

/// Category id 0 means "any category".
const ANY_CATEGORY: i64 = 0;

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Option<db::Question>,
}

// The eligible set is computed deterministically (ordered fetch, then the
// seen-filter); only the final choice is random.
async fn next_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<NextQuestion>, ApiError> {
    let candidates = if body.quiz_category.id == ANY_CATEGORY {
        db::queries::questions::get_all_questions(&pool).await?
    } else {
        db::queries::questions::get_questions_for_category(&pool, body.quiz_category.id).await?
    };

    let eligible: Vec<db::Question> = candidates
        .into_iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();

    let question = eligible.choose(&mut rand::thread_rng()).cloned();
    if let Some(q) = &question {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[q.category.to_string().as_str()])
            .inc();
    }

    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
