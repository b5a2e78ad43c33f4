//! In-memory account store
//!
//! Holds the collection of accounts for the lifetime of the process. The
//! store is populated once at startup, from the built-in seed list or a
//! user-supplied JSON file, and only ever shrinks (account closure).
//! Nothing is persisted back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BankError, BankResult};
use crate::models::{Account, Money};

/// Mutable collection of accounts, unique by username
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Build a store from an account list, rejecting duplicate usernames
    ///
    /// Lookup is by derived username, so two owners whose initials collide
    /// would shadow each other; that is a startup error, not a runtime one.
    pub fn from_accounts(accounts: Vec<Account>) -> BankResult<Self> {
        for (i, account) in accounts.iter().enumerate() {
            if accounts[..i].iter().any(|a| a.username == account.username) {
                return Err(BankError::DuplicateUsername {
                    username: account.username.clone(),
                });
            }
        }
        Ok(Self { accounts })
    }

    /// The built-in reference accounts
    pub fn seed() -> Self {
        let jonas = Account::with_history(
            "Jonas Schmedtmann",
            1111,
            1.2,
            "EUR",
            "pt-PT",
            vec![
                (Money::from_minor(20000), seed_date("2019-11-18T21:31:17.178Z")),
                (Money::from_minor(45523), seed_date("2019-12-23T07:42:02.383Z")),
                (Money::from_minor(-30650), seed_date("2020-01-28T09:15:04.904Z")),
                (Money::from_minor(2500000), seed_date("2020-04-01T10:17:24.185Z")),
                (Money::from_minor(-64221), seed_date("2020-05-08T14:11:59.604Z")),
                (Money::from_minor(-13390), seed_date("2022-09-20T17:01:17.194Z")),
                (Money::from_minor(7997), seed_date("2022-09-24T23:36:17.929Z")),
                (Money::from_minor(130000), seed_date("2022-09-25T10:51:36.790Z")),
            ],
        );

        let jessica = Account::with_history(
            "Jessica Davis",
            2222,
            1.5,
            "USD",
            "en-US",
            vec![
                (Money::from_minor(500000), seed_date("2019-11-01T13:15:33.035Z")),
                (Money::from_minor(340000), seed_date("2019-11-30T09:48:16.867Z")),
                (Money::from_minor(-15000), seed_date("2019-12-25T06:04:23.907Z")),
                (Money::from_minor(-79000), seed_date("2020-01-25T14:18:46.235Z")),
                (Money::from_minor(-321000), seed_date("2020-02-05T16:33:06.386Z")),
                (Money::from_minor(-100000), seed_date("2020-04-10T14:43:26.374Z")),
                (Money::from_minor(850000), seed_date("2020-06-25T18:49:59.371Z")),
                (Money::from_minor(-3000), seed_date("2020-07-26T12:01:20.894Z")),
            ],
        );

        // Seed usernames ("js", "jd") are known distinct
        Self {
            accounts: vec![jonas, jessica],
        }
    }

    /// Load a store from a JSON seed file
    pub fn load_from_file(path: &Path) -> BankResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let seeds: Vec<SeedAccount> = serde_json::from_str(&contents)?;

        let mut accounts = Vec::with_capacity(seeds.len());
        for seed in seeds {
            accounts.push(seed.into_account()?);
        }

        Self::from_accounts(accounts)
    }

    /// Linear username lookup
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Position of an account by username
    pub fn find_index(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.username == username)
    }

    /// Mutable access by position
    pub fn account_mut(&mut self, index: usize) -> &mut Account {
        &mut self.accounts[index]
    }

    /// Remove the account with the given username; no-op if absent
    pub fn remove(&mut self, username: &str) {
        if let Some(index) = self.find_index(username) {
            self.accounts.remove(index);
        }
    }

    /// All accounts, in seed order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// On-disk shape of one seeded account
///
/// Movement amounts are minor units; dates are RFC 3339. The username is
/// always re-derived from the owner name, never read from the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub owner: String,
    pub pin: u32,
    pub interest_rate: f64,
    pub currency: String,
    pub locale: String,
    #[serde(default)]
    pub movements: Vec<Money>,
    #[serde(default)]
    pub movement_dates: Vec<DateTime<Utc>>,
}

impl SeedAccount {
    fn into_account(self) -> BankResult<Account> {
        if self.movements.len() != self.movement_dates.len() {
            return Err(BankError::Config(format!(
                "Account '{}' has {} movements but {} movement dates",
                self.owner,
                self.movements.len(),
                self.movement_dates.len()
            )));
        }

        let history = self
            .movements
            .into_iter()
            .zip(self.movement_dates)
            .collect();

        Ok(Account::with_history(
            self.owner,
            self.pin,
            self.interest_rate,
            self.currency,
            self.locale,
            history,
        ))
    }
}

fn seed_date(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_seed_accounts() {
        let store = AccountStore::seed();
        assert_eq!(store.len(), 2);

        let jonas = store.find_by_username("js").unwrap();
        assert_eq!(jonas.owner, "Jonas Schmedtmann");
        assert_eq!(jonas.pin, 1111);
        assert_eq!(jonas.movements().len(), 8);
        assert_eq!(jonas.movements().len(), jonas.movement_dates().len());

        let jessica = store.find_by_username("jd").unwrap();
        assert_eq!(jessica.currency, "USD");
        assert_eq!(jessica.locale, "en-US");
    }

    #[test]
    fn test_find_unknown_username() {
        let store = AccountStore::seed();
        assert!(store.find_by_username("zz").is_none());
        assert!(store.find_index("zz").is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = AccountStore::seed();
        store.remove("js");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_username("js").is_none());

        // Removing a missing username is a no-op
        store.remove("js");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_usernames_rejected() {
        let a = Account::new("Jane Smith", 1234, 1.0, "USD", "en-US");
        let b = Account::new("John Stone", 5678, 1.0, "USD", "en-US");
        assert_eq!(a.username, b.username);

        let err = AccountStore::from_accounts(vec![a, b]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateUsername { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "owner": "Sarah Connor",
                "pin": 3333,
                "interest_rate": 0.8,
                "currency": "GBP",
                "locale": "en-GB",
                "movements": [10000, -2500],
                "movement_dates": ["2024-01-01T10:00:00Z", "2024-02-01T10:00:00Z"]
            }}]"#
        )
        .unwrap();

        let store = AccountStore::load_from_file(file.path()).unwrap();
        let sarah = store.find_by_username("sc").unwrap();
        assert_eq!(sarah.balance().minor(), 7500);
    }

    #[test]
    fn test_load_rejects_misaligned_ledger() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "owner": "Sarah Connor",
                "pin": 3333,
                "interest_rate": 0.8,
                "currency": "GBP",
                "locale": "en-GB",
                "movements": [10000],
                "movement_dates": []
            }}]"#
        )
        .unwrap();

        assert!(AccountStore::load_from_file(file.path()).is_err());
    }
}
