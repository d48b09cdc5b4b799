//! Row types bridging Diesel and the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::warn;

use crate::domain::{
    Account, CatalogItem, ItemCategory, Message, ProfileUpdate, ScoreEntry, Username,
};

use super::schema::{accounts, messages, owned_items, scores, shop_items};

/// Read model for one account row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    pub username: String,
    pub coins: i64,
    pub player_skin: String,
    pub enemy_skin: String,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            username: Username::normalise(&row.username),
            coins: row.coins,
            player_skin: row.player_skin,
            enemy_skin: row.enemy_skin,
        }
    }
}

/// Insert model for a fresh zero-balance account.
#[derive(Debug, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow<'a> {
    pub username: &'a str,
    pub coins: i64,
    pub player_skin: &'a str,
    pub enemy_skin: &'a str,
}

/// Partial update model for profile writes; `None` columns stay untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = accounts)]
pub struct AccountChangeset<'a> {
    pub player_skin: Option<&'a str>,
    pub enemy_skin: Option<&'a str>,
    pub coins: Option<i64>,
}

impl<'a> From<&'a ProfileUpdate> for AccountChangeset<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            player_skin: update.player_skin.as_deref(),
            enemy_skin: update.enemy_skin.as_deref(),
            // Callers reject negative values before reaching this layer, but
            // the non-negativity invariant still holds in storage.
            coins: update.coins.map(|coins| coins.max(0)),
        }
    }
}

/// Read model for one catalog row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = shop_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShopItemRow {
    pub id: i32,
    pub key: String,
    pub category: String,
    pub display_name: String,
    pub price: i64,
    pub img: String,
}

impl From<ShopItemRow> for CatalogItem {
    fn from(row: ShopItemRow) -> Self {
        let category = row.category.parse().unwrap_or_else(|_| {
            warn!(
                value = %row.category,
                item_key = %row.key,
                "unrecognised item category, defaulting to player"
            );
            ItemCategory::Player
        });
        Self {
            key: row.key,
            category,
            display_name: row.display_name,
            price: row.price,
            img: row.img,
        }
    }
}

/// Insert model for an ownership grant.
#[derive(Debug, Insertable)]
#[diesel(table_name = owned_items)]
pub struct NewOwnedItemRow<'a> {
    pub username: &'a str,
    pub item_key: &'a str,
}

/// Read model for one score row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = scores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScoreRow {
    pub id: i32,
    pub username: String,
    pub survival_time: f64,
    pub created_at: DateTime<Utc>,
}

impl From<ScoreRow> for ScoreEntry {
    fn from(row: ScoreRow) -> Self {
        Self {
            id: row.id,
            username: Username::normalise(&row.username),
            survival_time: row.survival_time,
            created_at: row.created_at,
        }
    }
}

/// Insert model for a score submission.
#[derive(Debug, Insertable)]
#[diesel(table_name = scores)]
pub struct NewScoreRow<'a> {
    pub username: &'a str,
    pub survival_time: f64,
}

/// Read model for one message row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    pub id: i32,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            username: Username::normalise(&row.username),
            created_at: row.created_at,
        }
    }
}

/// Insert model for a posted message.
#[derive(Debug, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow<'a> {
    pub content: &'a str,
    pub username: &'a str,
}
