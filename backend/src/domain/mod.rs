//! Domain entities, services, and ports.
//!
//! Everything in this module is transport and storage agnostic: the HTTP
//! adapter lives in `inbound` and the Diesel adapters in `outbound`. Types
//! document their invariants; the services enforce them.

pub mod account;
pub mod catalog;
pub mod economy;
pub mod error;
pub mod message_board;
pub mod ports;
pub mod scoreboard;

pub use self::account::{
    ANONYMOUS, Account, DEFAULT_SKIN, ProfileSnapshot, ProfileUpdate, Username,
};
pub use self::catalog::{CatalogItem, ItemCategory, ItemCategoryParseError};
pub use self::economy::EconomyService;
pub use self::error::{Error, ErrorCode};
pub use self::message_board::{Message, MessageBoardService};
pub use self::scoreboard::{ScoreEntry, ScoreboardService};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
