//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses them
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Per-username economy state.
    ///
    /// `username` is the primary key, which is the uniqueness constraint that
    /// resolves concurrent get-or-create races. `coins` carries a
    /// `CHECK (coins >= 0)` in the deployed schema as a last line of defence.
    accounts (username) {
        /// Case-sensitive account identifier (max 64 characters).
        username -> Varchar,
        /// Coin balance; never negative once committed.
        coins -> Int8,
        /// Equipped player cosmetic key, or the `default` sentinel.
        player_skin -> Varchar,
        /// Equipped enemy cosmetic key, or the `default` sentinel.
        enemy_skin -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Seeded shop catalog; read-only at runtime.
    ///
    /// `id` is a serial used purely to preserve insertion order for display;
    /// `key` carries a unique constraint.
    shop_items (id) {
        /// Display-order serial.
        id -> Int4,
        /// Unique, immutable item key.
        key -> Varchar,
        /// Slot the item occupies: `player` or `enemy`.
        category -> Varchar,
        /// Human-readable shop label.
        display_name -> Varchar,
        /// Flat coin price.
        price -> Int8,
        /// Image path served to the shop page.
        img -> Varchar,
    }
}

diesel::table! {
    /// Ownership ledger: one row per successful purchase.
    ///
    /// `(username, item_key)` carries a unique constraint; a violated insert
    /// is how a double-grant is detected.
    owned_items (id) {
        /// Surrogate key.
        id -> Int4,
        /// Purchasing account.
        username -> Varchar,
        /// Purchased catalog key.
        item_key -> Varchar,
    }
}

diesel::table! {
    /// Leaderboard records.
    scores (id) {
        /// Surrogate key.
        id -> Int4,
        /// Submitting player, defaulting to `Anonymous`.
        username -> Varchar,
        /// Survival time in seconds; positive.
        survival_time -> Float8,
        /// Submission timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Public message board.
    messages (id) {
        /// Surrogate key.
        id -> Int4,
        /// Message body; non-empty.
        content -> Text,
        /// Posting player, defaulting to `Anonymous`.
        username -> Varchar,
        /// Posting timestamp.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(accounts, owned_items, shop_items);
