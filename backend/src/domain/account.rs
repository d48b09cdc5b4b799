//! Account model: per-username persistent economy state.

use std::fmt;

/// Sentinel skin key meaning "no cosmetic equipped".
pub const DEFAULT_SKIN: &str = "default";

/// Fallback label for requests that arrive without a usable username.
pub const ANONYMOUS: &str = "Anonymous";

/// Maximum stored username length, matching the column width.
const MAX_USERNAME_LEN: usize = 64;

/// Case-sensitive account identifier.
///
/// Construction never fails: input is trimmed, truncated to 64 characters,
/// and coerced to [`ANONYMOUS`] when empty after trimming. The game treats a
/// blank name as the anonymous player rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Normalise raw client input into a storable username.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Username;
    ///
    /// assert_eq!(Username::normalise("  Ann ").as_str(), "Ann");
    /// assert_eq!(Username::normalise("   ").as_str(), "Anonymous");
    /// ```
    pub fn normalise(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self(ANONYMOUS.to_owned());
        }
        let clipped: String = trimmed.chars().take(MAX_USERNAME_LEN).collect();
        Self(clipped)
    }

    /// Borrow the normalised name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper, yielding the normalised name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Persistent economy state for one username.
///
/// Invariant: `coins >= 0` after every committed mutation. The storage layer
/// enforces this; the type simply carries the committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: Username,
    pub coins: i64,
    pub player_skin: String,
    pub enemy_skin: String,
}

impl Account {
    /// Fresh zero-balance account with default cosmetics.
    pub fn new(username: Username) -> Self {
        Self {
            username,
            coins: 0,
            player_skin: DEFAULT_SKIN.to_owned(),
            enemy_skin: DEFAULT_SKIN.to_owned(),
        }
    }
}

/// Partial update applied to an account by the legacy profile sync path.
///
/// `None` fields are left untouched; the write commits in one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub player_skin: Option<String>,
    pub enemy_skin: Option<String>,
    pub coins: Option<i64>,
}

impl ProfileUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.player_skin.is_none() && self.enemy_skin.is_none() && self.coins.is_none()
    }
}

/// Client-visible account state read in a single consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub username: Username,
    pub coins: i64,
    pub player_skin: String,
    pub enemy_skin: String,
    pub owned_items: Vec<String>,
}

impl ProfileSnapshot {
    /// Snapshot of an account with the given owned item keys.
    pub fn from_account(account: Account, owned_items: Vec<String>) -> Self {
        Self {
            username: account.username,
            coins: account.coins,
            player_skin: account.player_skin,
            enemy_skin: account.enemy_skin,
            owned_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ann", "Ann")]
    #[case("  Ann  ", "Ann")]
    #[case("", "Anonymous")]
    #[case("   ", "Anonymous")]
    #[case("ANN", "ANN")]
    fn normalise_trims_and_coerces(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(Username::normalise(raw).as_str(), expected);
    }

    #[test]
    fn normalise_clips_to_column_width() {
        let long = "x".repeat(100);
        assert_eq!(Username::normalise(&long).as_str().len(), 64);
    }

    #[test]
    fn usernames_are_case_sensitive() {
        assert_ne!(Username::normalise("ann"), Username::normalise("Ann"));
    }

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new(Username::normalise("Ann"));
        assert_eq!(account.coins, 0);
        assert_eq!(account.player_skin, DEFAULT_SKIN);
        assert_eq!(account.enemy_skin, DEFAULT_SKIN);
    }

    #[test]
    fn empty_update_detected() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            coins: Some(5),
            ..ProfileUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
