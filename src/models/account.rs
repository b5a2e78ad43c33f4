//! Account model and ledger
//!
//! An account owns its ledger: two index-aligned, append-only sequences of
//! signed amounts and timestamps. Appending through [`Account::append`] is
//! the only mutation path, so `movements.len() == movement_dates.len()`
//! holds at all times. Balance, inflow, outflow and interest are derived
//! queries, never stored.

use chrono::{DateTime, Utc};
use std::fmt;

use super::money::Money;

/// One ledger row: a signed amount paired with its timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl LedgerEntry {
    /// Row label for display ("deposit" or "withdrawal")
    pub fn kind(&self) -> &'static str {
        if self.amount.is_positive() {
            "deposit"
        } else {
            "withdrawal"
        }
    }
}

/// A bank account with its ledger and presentation parameters
#[derive(Debug, Clone)]
pub struct Account {
    /// Owner display name (e.g., "Jonas Schmedtmann")
    pub owner: String,

    /// Login identifier derived from the owner name; unique within a store
    pub username: String,

    /// Numeric secret, compared by exact value
    pub pin: u32,

    /// Percentage applied to each deposit when computing interest income
    pub interest_rate: f64,

    /// ISO 4217 currency code for display (e.g., "EUR")
    pub currency: String,

    /// BCP 47 locale tag for display (e.g., "pt-PT")
    pub locale: String,

    /// Signed amounts in insertion order
    movements: Vec<Money>,

    /// Timestamps index-aligned with `movements`
    movement_dates: Vec<DateTime<Utc>>,
}

impl Account {
    /// Create an account with an empty ledger
    pub fn new(
        owner: impl Into<String>,
        pin: u32,
        interest_rate: f64,
        currency: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let username = Self::derive_username(&owner);
        Self {
            owner,
            username,
            pin,
            interest_rate,
            currency: currency.into(),
            locale: locale.into(),
            movements: Vec::new(),
            movement_dates: Vec::new(),
        }
    }

    /// Create an account with an existing ledger history
    ///
    /// Taking amount/timestamp pairs keeps the two sequences aligned by
    /// construction.
    pub fn with_history(
        owner: impl Into<String>,
        pin: u32,
        interest_rate: f64,
        currency: impl Into<String>,
        locale: impl Into<String>,
        history: Vec<(Money, DateTime<Utc>)>,
    ) -> Self {
        let mut account = Self::new(owner, pin, interest_rate, currency, locale);
        for (amount, date) in history {
            account.append(amount, date);
        }
        account
    }

    /// Derive the login username from an owner name: the lowercase first
    /// character of each space-separated word, concatenated
    ///
    /// "Jonas Schmedtmann" -> "js"
    pub fn derive_username(owner: &str) -> String {
        owner
            .to_lowercase()
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Append a signed movement with its timestamp
    ///
    /// Movements are immutable once appended; there is no edit or delete.
    pub fn append(&mut self, amount: Money, date: DateTime<Utc>) {
        self.movements.push(amount);
        self.movement_dates.push(date);
    }

    /// Signed amounts in insertion order
    pub fn movements(&self) -> &[Money] {
        &self.movements
    }

    /// Timestamps, index-aligned with [`Account::movements`]
    pub fn movement_dates(&self) -> &[DateTime<Utc>] {
        &self.movement_dates
    }

    /// Current balance: the sum of all movements
    pub fn balance(&self) -> Money {
        self.movements.iter().copied().sum()
    }

    /// Sum of all deposits (movements > 0)
    pub fn total_in(&self) -> Money {
        self.movements.iter().filter(|m| m.is_positive()).copied().sum()
    }

    /// Sum of all withdrawals (movements < 0); sign preserved
    pub fn total_out(&self) -> Money {
        self.movements.iter().filter(|m| m.is_negative()).copied().sum()
    }

    /// Interest income: `movement * rate / 100` over deposits, each share
    /// rounded to the nearest minor unit
    pub fn total_interest(&self) -> Money {
        self.movements
            .iter()
            .filter(|m| m.is_positive())
            .map(|m| m.interest_at(self.interest_rate))
            .sum()
    }

    /// Whether any single past movement covers `amount` at 10%
    ///
    /// One qualifying deposit is enough; the rule deliberately ignores the
    /// overall balance.
    pub fn covers_loan(&self, amount: Money) -> bool {
        self.movements.iter().any(|m| amount.within_tenth_of(*m))
    }

    /// Ledger rows in insertion order
    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.movements
            .iter()
            .zip(&self.movement_dates)
            .map(|(amount, date)| LedgerEntry {
                amount: *amount,
                date: *date,
            })
            .collect()
    }

    /// Ledger rows for display: insertion order, or an ascending-by-amount
    /// copy when `sorted` is set
    ///
    /// The stored sequences are never reordered; rows keep their own
    /// timestamps either way.
    pub fn display_entries(&self, sorted: bool) -> Vec<LedgerEntry> {
        let mut rows = self.entries();
        if sorted {
            rows.sort_by_key(|row| row.amount);
        }
        rows
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.owner, self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
    }

    fn sample() -> Account {
        Account::with_history(
            "Jonas Schmedtmann",
            1111,
            1.2,
            "EUR",
            "pt-PT",
            vec![
                (Money::from_minor(20000), ts(2019, 11, 18)),
                (Money::from_minor(45523), ts(2019, 12, 23)),
                (Money::from_minor(-30650), ts(2020, 1, 28)),
                (Money::from_minor(2500000), ts(2020, 4, 1)),
            ],
        )
    }

    #[test]
    fn test_derive_username() {
        assert_eq!(Account::derive_username("Jonas Schmedtmann"), "js");
        assert_eq!(Account::derive_username("Jessica Davis"), "jd");
        assert_eq!(Account::derive_username("Steven Thomas Williams"), "stw");
    }

    #[test]
    fn test_append_keeps_sequences_aligned() {
        let mut account = sample();
        assert_eq!(account.movements().len(), account.movement_dates().len());

        account.append(Money::from_major(50), ts(2020, 5, 8));
        assert_eq!(account.movements().len(), 5);
        assert_eq!(account.movement_dates().len(), 5);
    }

    #[test]
    fn test_balance_is_in_plus_out() {
        let account = sample();
        assert_eq!(account.balance(), account.total_in() + account.total_out());
        assert_eq!(account.balance().minor(), 20000 + 45523 - 30650 + 2500000);
    }

    #[test]
    fn test_totals_split_by_sign() {
        let account = sample();
        assert_eq!(account.total_in().minor(), 20000 + 45523 + 2500000);
        assert_eq!(account.total_out().minor(), -30650);
    }

    #[test]
    fn test_total_interest_over_deposits_only() {
        let account = sample();
        // 1.2% of 200.00, 455.23 and 25000.00, rounded per movement
        assert_eq!(account.total_interest().minor(), 240 + 546 + 30000);
    }

    #[test]
    fn test_covers_loan() {
        let account = sample();
        assert!(account.covers_loan(Money::from_major(2500)));
        assert!(!account.covers_loan(Money::from_major(2600)));
    }

    #[test]
    fn test_display_entries_sorted_is_a_copy() {
        let account = sample();
        let before: Vec<Money> = account.movements().to_vec();

        let sorted = account.display_entries(true);
        let amounts: Vec<i64> = sorted.iter().map(|e| e.amount.minor()).collect();
        assert_eq!(amounts, vec![-30650, 20000, 45523, 2500000]);

        // Underlying order is untouched and the unsorted view matches it
        assert_eq!(account.movements(), &before[..]);
        let unsorted: Vec<Money> = account.display_entries(false).iter().map(|e| e.amount).collect();
        assert_eq!(unsorted, before);
    }

    #[test]
    fn test_sorted_rows_keep_their_own_dates() {
        let account = sample();
        let sorted = account.display_entries(true);
        // The withdrawal from 2020-01-28 sorts first and brings its date along
        assert_eq!(sorted[0].amount.minor(), -30650);
        assert_eq!(sorted[0].date, ts(2020, 1, 28));
    }

    #[test]
    fn test_entry_kind() {
        let account = sample();
        let rows = account.entries();
        assert_eq!(rows[0].kind(), "deposit");
        assert_eq!(rows[2].kind(), "withdrawal");
    }
}
