//! Coin balance endpoints.
//!
//! ```text
//! GET  /api/coins
//! POST /api/coins
//! POST /api/coins/add
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, require_username};

/// Query parameters for the balance read.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CoinsQuery {
    /// Account to read.
    pub username: Option<String>,
}

/// Request body for the generic balance update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCoinsRequest {
    /// Account to update.
    pub username: Option<String>,
    /// Optional delta; absent degrades to a read.
    pub coins: Option<i64>,
}

/// Request body for the accrual endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCoinsRequest {
    /// Account to credit.
    pub username: Option<String>,
    /// Coins earned; must be positive.
    pub coins: Option<i64>,
}

/// Balance payload shared by the read and update paths.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoinsResponse {
    /// Normalised account name.
    #[schema(example = "Ann")]
    pub username: String,
    /// Committed balance.
    #[schema(example = 50)]
    pub coins: i64,
}

/// Accrual confirmation payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddCoinsResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Normalised account name.
    pub username: String,
    /// Balance after the credit.
    pub coins: i64,
}

/// Read an account's coin balance, creating the account on first reference.
#[utoipa::path(
    get,
    path = "/api/coins",
    params(CoinsQuery),
    responses(
        (status = 200, description = "Current balance", body = CoinsResponse),
        (status = 400, description = "Missing username", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["coins"],
    operation_id = "getCoins"
)]
#[get("/coins")]
pub async fn get_coins(
    state: web::Data<HttpState>,
    query: web::Query<CoinsQuery>,
) -> ApiResult<HttpResponse> {
    let username = require_username(query.username.as_deref())?;
    let profile = state.economy_query.profile(&username).await?;
    Ok(HttpResponse::Ok().json(CoinsResponse {
        username: username.into_string(),
        coins: profile.coins,
    }))
}

/// Apply a coin delta to an account. Negative deltas are rejected.
#[utoipa::path(
    post,
    path = "/api/coins",
    request_body = UpdateCoinsRequest,
    responses(
        (status = 200, description = "Committed balance", body = CoinsResponse),
        (status = 400, description = "Missing username or negative delta", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["coins"],
    operation_id = "updateCoins"
)]
#[post("/coins")]
pub async fn update_coins(
    state: web::Data<HttpState>,
    body: web::Json<UpdateCoinsRequest>,
) -> ApiResult<HttpResponse> {
    let username = require_username(body.username.as_deref())?;
    let coins = state.economy.update_coins(&username, body.coins).await?;
    Ok(HttpResponse::Ok().json(CoinsResponse {
        username: username.into_string(),
        coins,
    }))
}

/// Credit coins earned in game. The amount must be positive.
#[utoipa::path(
    post,
    path = "/api/coins/add",
    request_body = AddCoinsRequest,
    responses(
        (status = 200, description = "Balance after the credit", body = AddCoinsResponse),
        (status = 400, description = "Missing username or non-positive amount", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["coins"],
    operation_id = "addCoins"
)]
#[post("/coins/add")]
pub async fn add_coins(
    state: web::Data<HttpState>,
    body: web::Json<AddCoinsRequest>,
) -> ApiResult<HttpResponse> {
    let username = require_username(body.username.as_deref())?;
    let amount = body
        .coins
        .ok_or_else(|| missing_field_error(FieldName::new("coins")))?;
    let coins = state.economy.add_coins(&username, amount).await?;
    Ok(HttpResponse::Ok().json(AddCoinsResponse {
        success: true,
        username: username.into_string(),
        coins,
    }))
}
