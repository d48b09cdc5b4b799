//! Domain ports: the seams between the services and their collaborators.
//!
//! Driven ports (`*Repository`, `OwnershipLedger`, `ProfileQuery`,
//! `AdminAuthorization`) are implemented by outbound adapters; driving ports
//! (`EconomyCommand`, `EconomyQuery`, `Scoreboard`, `MessageBoard`) are
//! implemented by the domain services and consumed by the HTTP layer.

mod account_repository;
mod admin_authorization;
mod boards;
mod catalog_repository;
mod economy;
pub(crate) mod macros;
mod message_repository;
mod ownership_ledger;
mod profile_query;
mod purchase_repository;
mod score_repository;

pub use account_repository::{
    AccountRepository, AccountRepositoryError, FixtureAccountRepository,
};
pub use admin_authorization::{AdminAuthorization, StaticTokenAuthorization};
pub use boards::{FixtureMessageBoard, FixtureScoreboard, MessageBoard, Scoreboard};
pub use catalog_repository::{
    CatalogRepository, CatalogRepositoryError, FixtureCatalogRepository,
};
pub use economy::{
    EconomyCommand, EconomyQuery, FixtureEconomyCommand, FixtureEconomyQuery,
};
pub use message_repository::{MessageRepository, MessageRepositoryError};
pub use ownership_ledger::{FixtureOwnershipLedger, OwnershipLedger, OwnershipLedgerError};
pub use profile_query::{FixtureProfileQuery, ProfileQuery, ProfileQueryError};
pub use purchase_repository::{PurchaseRepository, PurchaseRepositoryError};
pub use score_repository::{ScoreRepository, ScoreRepositoryError};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use admin_authorization::MockAdminAuthorization;
#[cfg(test)]
pub use boards::{MockMessageBoard, MockScoreboard};
#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use economy::{MockEconomyCommand, MockEconomyQuery};
#[cfg(test)]
pub use message_repository::MockMessageRepository;
#[cfg(test)]
pub use ownership_ledger::MockOwnershipLedger;
#[cfg(test)]
pub use profile_query::MockProfileQuery;
#[cfg(test)]
pub use purchase_repository::MockPurchaseRepository;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
