//! Public message-board endpoints.
//!
//! ```text
//! GET    /messages
//! POST   /messages
//! DELETE /messages/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Message, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// How many messages the board serves per listing.
const BOARD_LIMIT: i64 = 200;

/// Header carrying the admin capability for deletions.
pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Request body for posting a message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PostMessageRequest {
    /// Posting player; blank or absent maps to `Anonymous`.
    pub username: Option<String>,
    /// Message text; must be non-empty after trimming.
    pub content: Option<String>,
}

/// One board message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Row identifier.
    pub id: i32,
    /// Message text.
    pub content: String,
    /// Posting player.
    pub username: String,
    /// ISO 8601 post timestamp.
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            username: message.username.into_string(),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// List board messages, oldest first.
#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "Board messages", body = [MessageResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["messages"],
    operation_id = "getMessages"
)]
#[get("/messages")]
pub async fn get_messages(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let messages = state.message_board.list(BOARD_LIMIT).await?;
    let response: Vec<MessageResponse> = messages.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Append a message to the board.
#[utoipa::path(
    post,
    path = "/messages",
    request_body = PostMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = MessageResponse),
        (status = 400, description = "Empty content", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["messages"],
    operation_id = "postMessage"
)]
#[post("/messages")]
pub async fn post_message(
    state: web::Data<HttpState>,
    body: web::Json<PostMessageRequest>,
) -> ApiResult<HttpResponse> {
    let username = Username::normalise(body.username.as_deref().unwrap_or(""));
    let content = body.content.as_deref().unwrap_or("");
    let message = state.message_board.post(&username, content).await?;
    Ok(HttpResponse::Created().json(MessageResponse::from(message)))
}

/// Delete a message. Requires the admin token header.
#[utoipa::path(
    delete,
    path = "/messages/{id}",
    params(("id" = i32, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 403, description = "Bad or missing admin token", body = Error),
        (status = 404, description = "No such message", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["messages"],
    operation_id = "deleteMessage",
    security(("AdminToken" = []))
)]
#[delete("/messages/{id}")]
pub async fn delete_message(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let token = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    state.message_board.delete(id, token).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": "deleted" })))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use chrono::Utc;
    use serde_json::{Value, json};

    use crate::domain::ports::{
        FixtureEconomyCommand, FixtureEconomyQuery, FixtureScoreboard, MockMessageBoard,
    };
    use crate::inbound::http::state::{HttpState, HttpStatePorts};

    use super::*;

    fn state(message_board: MockMessageBoard) -> HttpState {
        HttpState::new(HttpStatePorts {
            economy: Arc::new(FixtureEconomyCommand),
            economy_query: Arc::new(FixtureEconomyQuery),
            scoreboard: Arc::new(FixtureScoreboard),
            message_board: Arc::new(message_board),
        })
    }

    fn sample_message(id: i32, content: &str) -> Message {
        Message {
            id,
            content: content.to_owned(),
            username: Username::normalise("Ann"),
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
                .service(get_messages)
                .service(post_message)
                .service(delete_message),
        )
        .await
    }

    #[actix_web::test]
    async fn get_messages_serialises_rows() {
        let mut board = MockMessageBoard::new();
        board
            .expect_list()
            .withf(|limit| *limit == 200)
            .return_once(|_| Ok(vec![sample_message(1, "hello")]));
        let app = spawn(state(board)).await;

        let req = test::TestRequest::get().uri("/messages").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["content"], json!("hello"));
        assert_eq!(body[0]["username"], json!("Ann"));
    }

    #[actix_web::test]
    async fn post_message_returns_201() {
        let mut board = MockMessageBoard::new();
        board
            .expect_post()
            .withf(|username, content| username.as_str() == "Ann" && content == "hi")
            .return_once(|_, content| Ok(sample_message(2, content)));
        let app = spawn(state(board)).await;

        let req = test::TestRequest::post()
            .uri("/messages")
            .set_json(json!({ "username": "Ann", "content": "hi" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["id"], json!(2));
    }

    #[actix_web::test]
    async fn post_empty_message_is_rejected() {
        let mut board = MockMessageBoard::new();
        board
            .expect_post()
            .return_once(|_, _| Err(Error::invalid_request("Empty content")));
        let app = spawn(state(board)).await;

        let req = test::TestRequest::post()
            .uri("/messages")
            .set_json(json!({ "username": "Ann", "content": "   " }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("Empty content"));
    }

    #[actix_web::test]
    async fn delete_with_token_reports_deleted() {
        let mut board = MockMessageBoard::new();
        board
            .expect_delete()
            .withf(|id, token| *id == 3 && token == "s3cret")
            .return_once(|_, _| Ok(()));
        let app = spawn(state(board)).await;

        let req = test::TestRequest::delete()
            .uri("/messages/3")
            .insert_header((ADMIN_TOKEN_HEADER, "s3cret"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "result": "deleted" }));
    }

    #[actix_web::test]
    async fn delete_without_token_is_forbidden() {
        let mut board = MockMessageBoard::new();
        board
            .expect_delete()
            .withf(|_, token| token.is_empty())
            .return_once(|_, _| Err(Error::forbidden("forbidden")));
        let app = spawn(state(board)).await;

        let req = test::TestRequest::delete().uri("/messages/3").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("forbidden"));
    }
}
