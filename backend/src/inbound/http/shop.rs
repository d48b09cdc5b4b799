//! Shop endpoints: catalog listing, profile sync, purchase, and equip.
//!
//! ```text
//! GET  /api/shop/items
//! GET  /api/shop/user
//! POST /api/shop/user
//! POST /api/shop/buy
//! POST /api/shop/equip
//! GET  /api/shop/sync
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CatalogItem, Error, ProfileSnapshot, ProfileUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_field, require_username};

/// Query parameters for profile reads.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProfileQueryParams {
    /// Account to read.
    pub username: Option<String>,
}

/// Request body for the legacy profile sync write.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// Account to update.
    pub username: Option<String>,
    /// New player cosmetic key, if changing.
    pub player_skin: Option<String>,
    /// New enemy cosmetic key, if changing.
    pub enemy_skin: Option<String>,
    /// Absolute balance, if changing. Negative values are rejected.
    pub coins: Option<i64>,
}

/// Request body for purchase and equip.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemActionRequest {
    /// Acting account.
    pub username: Option<String>,
    /// Catalog key of the target item.
    pub item_key: Option<String>,
}

/// One catalog entry as rendered by the shop page.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShopItemResponse {
    /// Unique catalog key.
    #[schema(example = "skin_blue")]
    pub key: String,
    /// Which equipped-slot the item affects.
    #[schema(example = "player")]
    pub category: String,
    /// Human-readable name.
    pub display_name: String,
    /// Flat coin price.
    pub price: i64,
    /// Image path served by the static site.
    pub img: String,
}

impl From<CatalogItem> for ShopItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            key: item.key,
            category: item.category.as_str().to_owned(),
            display_name: item.display_name,
            price: item.price,
            img: item.img,
        }
    }
}

/// Full client-visible account state.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    /// Normalised account name.
    pub username: String,
    /// Committed balance.
    pub coins: i64,
    /// Equipped player cosmetic key.
    pub player_skin: String,
    /// Equipped enemy cosmetic key.
    pub enemy_skin: String,
    /// Keys of every owned item.
    pub owned_items: Vec<String>,
}

impl From<ProfileSnapshot> for ProfileResponse {
    fn from(snapshot: ProfileSnapshot) -> Self {
        Self {
            username: snapshot.username.into_string(),
            coins: snapshot.coins,
            player_skin: snapshot.player_skin,
            enemy_skin: snapshot.enemy_skin,
            owned_items: snapshot.owned_items,
        }
    }
}

/// Profile state without the ownership list, for the lightweight sync path.
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncResponse {
    /// Normalised account name.
    pub username: String,
    /// Committed balance.
    pub coins: i64,
    /// Equipped player cosmetic key.
    pub player_skin: String,
    /// Equipped enemy cosmetic key.
    pub enemy_skin: String,
}

impl From<ProfileSnapshot> for SyncResponse {
    fn from(snapshot: ProfileSnapshot) -> Self {
        Self {
            username: snapshot.username.into_string(),
            coins: snapshot.coins,
            player_skin: snapshot.player_skin,
            enemy_skin: snapshot.enemy_skin,
        }
    }
}

/// Purchase confirmation payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct BuyResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Balance after the debit.
    pub coins: i64,
}

/// Equip confirmation payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipResponse {
    /// Always `true` on the success path.
    pub success: bool,
}

/// List the purchasable catalog in display order.
#[utoipa::path(
    get,
    path = "/api/shop/items",
    responses(
        (status = 200, description = "Catalog entries", body = [ShopItemResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["shop"],
    operation_id = "listShopItems"
)]
#[get("/shop/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let items = state.economy_query.list_items().await?;
    let response: Vec<ShopItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Read the full shop profile, creating the account on first reference.
#[utoipa::path(
    get,
    path = "/api/shop/user",
    params(ProfileQueryParams),
    responses(
        (status = 200, description = "Profile state", body = ProfileResponse),
        (status = 400, description = "Missing username", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["shop"],
    operation_id = "getShopUser"
)]
#[get("/shop/user")]
pub async fn get_user(
    state: web::Data<HttpState>,
    query: web::Query<ProfileQueryParams>,
) -> ApiResult<HttpResponse> {
    let username = require_username(query.username.as_deref())?;
    let profile = state.economy_query.profile(&username).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// Apply a partial profile write and return the settled state.
#[utoipa::path(
    post,
    path = "/api/shop/user",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = serde_json::Value),
        (status = 400, description = "Missing username or negative coins", body = Error),
        (status = 500, description = "Commit failure", body = Error)
    ),
    tags = ["shop"],
    operation_id = "updateShopUser"
)]
#[post("/shop/user")]
pub async fn update_user(
    state: web::Data<HttpState>,
    body: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let username = require_username(body.username.as_deref())?;
    let update = ProfileUpdate {
        player_skin: body.player_skin,
        enemy_skin: body.enemy_skin,
        coins: body.coins,
    };
    let profile = state.economy.update_profile(&username, update).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated",
        "data": ProfileResponse::from(profile),
    })))
}

/// Buy a catalog item: debit and grant in one transaction.
#[utoipa::path(
    post,
    path = "/api/shop/buy",
    request_body = ItemActionRequest,
    responses(
        (status = 200, description = "Purchase committed", body = BuyResponse),
        (status = 400, description = "Missing fields, already owned, or insufficient coins", body = Error),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Purchase failed", body = Error)
    ),
    tags = ["shop"],
    operation_id = "buyItem"
)]
#[post("/shop/buy")]
pub async fn buy_item(
    state: web::Data<HttpState>,
    body: web::Json<ItemActionRequest>,
) -> ApiResult<HttpResponse> {
    let username = require_username(body.username.as_deref())?;
    let item_key = require_field(body.item_key.as_deref(), FieldName::new("item_key"))?;
    let coins = state.economy.purchase(&username, &item_key).await?;
    Ok(HttpResponse::Ok().json(BuyResponse {
        success: true,
        coins,
    }))
}

/// Equip an owned item as the active cosmetic for its category.
#[utoipa::path(
    post,
    path = "/api/shop/equip",
    request_body = ItemActionRequest,
    responses(
        (status = 200, description = "Item equipped", body = EquipResponse),
        (status = 400, description = "Missing fields or item not owned", body = Error),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Equip failed", body = Error)
    ),
    tags = ["shop"],
    operation_id = "equipItem"
)]
#[post("/shop/equip")]
pub async fn equip_item(
    state: web::Data<HttpState>,
    body: web::Json<ItemActionRequest>,
) -> ApiResult<HttpResponse> {
    let username = require_username(body.username.as_deref())?;
    let item_key = require_field(body.item_key.as_deref(), FieldName::new("item_key"))?;
    state.economy.equip(&username, &item_key).await?;
    Ok(HttpResponse::Ok().json(EquipResponse { success: true }))
}

/// Lightweight profile sync without the ownership list.
#[utoipa::path(
    get,
    path = "/api/shop/sync",
    params(ProfileQueryParams),
    responses(
        (status = 200, description = "Profile state", body = SyncResponse),
        (status = 400, description = "Missing username", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["shop"],
    operation_id = "syncProfile"
)]
#[get("/shop/sync")]
pub async fn sync_profile(
    state: web::Data<HttpState>,
    query: web::Query<ProfileQueryParams>,
) -> ApiResult<HttpResponse> {
    let username = require_username(query.username.as_deref())?;
    let profile = state.economy_query.profile(&username).await?;
    Ok(HttpResponse::Ok().json(SyncResponse::from(profile)))
}
