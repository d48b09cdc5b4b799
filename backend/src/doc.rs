//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (coins, shop,
//!   scores, messages, health)
//! - **Schemas**: Request/response payloads and the shared error envelope
//! - **Security**: The admin token header guarding message deletion
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::coins::{AddCoinsRequest, AddCoinsResponse, CoinsResponse,
    UpdateCoinsRequest};
use crate::inbound::http::messages::{MessageResponse, PostMessageRequest};
use crate::inbound::http::scores::{ScoreResponse, SubmitScoreRequest, SubmittedScoreResponse};
use crate::inbound::http::shop::{
    BuyResponse, EquipResponse, ItemActionRequest, ProfileResponse, ShopItemResponse,
    SyncResponse, UpdateProfileRequest,
};

/// Enrich the generated document with the admin token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AdminToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Admin-Token",
                "Shared secret authorising message deletion.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Aplegoetia backend API",
        description = "HTTP interface for the browser game's account economy, \
                       leaderboard, and message board."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::coins::get_coins,
        crate::inbound::http::coins::update_coins,
        crate::inbound::http::coins::add_coins,
        crate::inbound::http::shop::list_items,
        crate::inbound::http::shop::get_user,
        crate::inbound::http::shop::update_user,
        crate::inbound::http::shop::buy_item,
        crate::inbound::http::shop::equip_item,
        crate::inbound::http::shop::sync_profile,
        crate::inbound::http::scores::get_scores,
        crate::inbound::http::scores::post_score,
        crate::inbound::http::messages::get_messages,
        crate::inbound::http::messages::post_message,
        crate::inbound::http::messages::delete_message,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CoinsResponse,
        UpdateCoinsRequest,
        AddCoinsRequest,
        AddCoinsResponse,
        ShopItemResponse,
        ProfileResponse,
        SyncResponse,
        UpdateProfileRequest,
        ItemActionRequest,
        BuyResponse,
        EquipResponse,
        ScoreResponse,
        SubmitScoreRequest,
        SubmittedScoreResponse,
        PostMessageRequest,
        MessageResponse,
    )),
    tags(
        (name = "coins", description = "Coin balance operations"),
        (name = "shop", description = "Catalog, purchase, and equip operations"),
        (name = "scores", description = "Leaderboard operations"),
        (name = "messages", description = "Public message board"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
