//! Leaderboard endpoints.
//!
//! ```text
//! GET  /scores
//! POST /scores
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ScoreEntry, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// How many entries the leaderboard shows.
const LEADERBOARD_SIZE: i64 = 10;

/// Request body for a score submission.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    /// Submitting player; blank or absent maps to `Anonymous`.
    pub username: Option<String>,
    /// Seconds survived; must be positive.
    pub survival_time: Option<f64>,
}

/// One leaderboard row.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    /// Row identifier.
    pub id: i32,
    /// Player name.
    pub username: String,
    /// Seconds survived, rounded to two decimals.
    pub survival_time: f64,
    /// ISO 8601 submission timestamp.
    pub created_at: String,
}

impl From<ScoreEntry> for ScoreResponse {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            id: entry.id,
            username: entry.username.into_string(),
            survival_time: (entry.survival_time * 100.0).round() / 100.0,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// Confirmation payload for a recorded score.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmittedScoreResponse {
    /// Row identifier.
    pub id: i32,
    /// Player name as stored.
    pub username: String,
    /// Seconds survived as stored.
    pub survival_time: f64,
}

/// List the best scores, longest survival first.
#[utoipa::path(
    get,
    path = "/scores",
    responses(
        (status = 200, description = "Top scores", body = [ScoreResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["scores"],
    operation_id = "getScores"
)]
#[get("/scores")]
pub async fn get_scores(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entries = state.scoreboard.top(LEADERBOARD_SIZE).await?;
    let response: Vec<ScoreResponse> = entries.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Record a finished run.
#[utoipa::path(
    post,
    path = "/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded", body = SubmittedScoreResponse),
        (status = 400, description = "Invalid survival time", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["scores"],
    operation_id = "postScore"
)]
#[post("/scores")]
pub async fn post_score(
    state: web::Data<HttpState>,
    body: web::Json<SubmitScoreRequest>,
) -> ApiResult<HttpResponse> {
    let username = Username::normalise(body.username.as_deref().unwrap_or(""));
    let survival_time = body.survival_time.unwrap_or(0.0);
    let entry = state.scoreboard.submit(&username, survival_time).await?;
    Ok(HttpResponse::Created().json(SubmittedScoreResponse {
        id: entry.id,
        username: entry.username.into_string(),
        survival_time: entry.survival_time,
    }))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use chrono::Utc;
    use serde_json::{Value, json};

    use crate::domain::ports::{
        FixtureEconomyCommand, FixtureEconomyQuery, FixtureMessageBoard, MockScoreboard,
    };
    use crate::inbound::http::state::{HttpState, HttpStatePorts};

    use super::*;

    fn state(scoreboard: MockScoreboard) -> HttpState {
        HttpState::new(HttpStatePorts {
            economy: Arc::new(FixtureEconomyCommand),
            economy_query: Arc::new(FixtureEconomyQuery),
            scoreboard: Arc::new(scoreboard),
            message_board: Arc::new(FixtureMessageBoard),
        })
    }

    fn entry(id: i32, survival_time: f64) -> ScoreEntry {
        ScoreEntry {
            id,
            username: Username::normalise("Ann"),
            survival_time,
            created_at: Utc::now(),
        }
    }

    async fn spawn(state: HttpState) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_scores)
                .service(post_score),
        )
        .await
    }

    #[actix_web::test]
    async fn get_scores_rounds_to_two_decimals() {
        let mut scoreboard = MockScoreboard::new();
        scoreboard
            .expect_top()
            .withf(|limit| *limit == 10)
            .return_once(|_| Ok(vec![entry(1, 12.3456)]));
        let app = spawn(state(scoreboard)).await;

        let req = test::TestRequest::get().uri("/scores").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["survival_time"], json!(12.35));
        assert_eq!(body[0]["username"], json!("Ann"));
    }

    #[actix_web::test]
    async fn post_score_returns_201_with_record() {
        let mut scoreboard = MockScoreboard::new();
        scoreboard
            .expect_submit()
            .withf(|username, survival_time| {
                username.as_str() == "Ann" && (*survival_time - 42.5).abs() < f64::EPSILON
            })
            .return_once(|_, survival_time| Ok(entry(7, survival_time)));
        let app = spawn(state(scoreboard)).await;

        let req = test::TestRequest::post()
            .uri("/scores")
            .set_json(json!({ "username": "Ann", "survival_time": 42.5 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "id": 7, "username": "Ann", "survival_time": 42.5 }));
    }

    #[actix_web::test]
    async fn post_score_defaults_blank_username_to_anonymous() {
        let mut scoreboard = MockScoreboard::new();
        scoreboard
            .expect_submit()
            .withf(|username, _| username.as_str() == "Anonymous")
            .return_once(|_, survival_time| Ok(entry(8, survival_time)));
        let app = spawn(state(scoreboard)).await;

        let req = test::TestRequest::post()
            .uri("/scores")
            .set_json(json!({ "survival_time": 3.0 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn post_score_rejects_missing_survival_time() {
        let mut scoreboard = MockScoreboard::new();
        scoreboard
            .expect_submit()
            .return_once(|_, _| Err(Error::invalid_request("Invalid survival time")));
        let app = spawn(state(scoreboard)).await;

        let req = test::TestRequest::post()
            .uri("/scores")
            .set_json(json!({ "username": "Ann" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("Invalid survival time"));
    }
}
