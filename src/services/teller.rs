//! Teller service: the transaction engine
//!
//! Owns the account store, the active session and the pending-loan queue,
//! and is the only writer to any of them. Every operation either applies
//! completely or returns a [`Rejection`] with nothing mutated. Time
//! advances only through [`Teller::tick`], which the event loop calls once
//! per second.

use chrono::{DateTime, Utc};

use crate::config::settings::Settings;
use crate::error::Rejection;
use crate::models::{Account, LedgerEntry, Money};
use crate::services::session::Session;
use crate::store::AccountStore;

/// Emitted on successful login; the view renders the greeting from it
#[derive(Debug, Clone, PartialEq)]
pub struct Welcome {
    /// Owner display name
    pub owner: String,
    /// Locale tag for formatting the login timestamp
    pub locale: String,
    /// When the session opened
    pub logged_in_at: DateTime<Utc>,
}

/// A loan accepted for processing but not yet posted
#[derive(Debug, Clone)]
struct PendingLoan {
    username: String,
    amount: Money,
    remaining_ticks: u32,
}

/// A loan that posted during a tick
#[derive(Debug, Clone)]
pub struct PostedLoan {
    pub username: String,
    pub amount: Money,
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Loans whose processing delay elapsed this tick
    pub posted_loans: Vec<PostedLoan>,
    /// The session countdown reached zero and forced a logout
    pub session_expired: bool,
}

/// The transaction engine
pub struct Teller {
    store: AccountStore,
    session: Option<Session>,
    pending_loans: Vec<PendingLoan>,
    session_timeout: u32,
    loan_delay: u32,
}

impl Teller {
    /// Create a teller over a store using configured timings
    pub fn new(store: AccountStore, settings: &Settings) -> Self {
        Self::with_policy(store, settings.session_timeout_secs, settings.loan_processing_secs)
    }

    /// Create a teller with explicit timeout and loan-delay tick counts
    pub fn with_policy(store: AccountStore, session_timeout: u32, loan_delay: u32) -> Self {
        Self {
            store,
            session: None,
            pending_loans: Vec::new(),
            session_timeout,
            loan_delay,
        }
    }

    // ---- inbound operations -------------------------------------------

    /// Log in with a username and a pin typed as text
    ///
    /// Replaces any existing session, resets the sort toggle and starts a
    /// fresh countdown. A wrong username and a wrong pin are not
    /// distinguished.
    pub fn login(&mut self, username: &str, pin_text: &str) -> Result<Welcome, Rejection> {
        let pin: u32 = pin_text
            .trim()
            .parse()
            .map_err(|_| Rejection::InvalidCredentials)?;

        let account = self
            .store
            .find_by_username(username.trim())
            .ok_or(Rejection::InvalidCredentials)?;

        if account.pin != pin {
            return Err(Rejection::InvalidCredentials);
        }

        let welcome = Welcome {
            owner: account.owner.clone(),
            locale: account.locale.clone(),
            logged_in_at: Utc::now(),
        };

        self.session = Some(Session::open(&account.username, self.session_timeout));
        Ok(welcome)
    }

    /// Transfer to another account, amount typed as text
    ///
    /// Appends a withdrawal to the sender and a deposit to the receiver,
    /// both timestamped now, and restarts the countdown. Either both
    /// ledgers change or neither does.
    pub fn transfer(&mut self, to_username: &str, amount_text: &str) -> Result<(), Rejection> {
        let sender_name = self.session_username()?;

        let receiver_name = to_username.trim();
        let receiver_idx = self
            .store
            .find_index(receiver_name)
            .ok_or(Rejection::UnknownRecipient)?;

        if receiver_name == sender_name {
            return Err(Rejection::SelfTransfer);
        }

        let amount = parse_positive(amount_text)?;

        let sender_idx = self
            .store
            .find_index(&sender_name)
            .ok_or(Rejection::NotLoggedIn)?;

        if amount > self.store.accounts()[sender_idx].balance() {
            return Err(Rejection::InsufficientFunds);
        }

        let now = Utc::now();
        self.store.account_mut(sender_idx).append(-amount, now);
        self.store.account_mut(receiver_idx).append(amount, now);
        self.restart_countdown();
        Ok(())
    }

    /// Request a loan, amount typed as text
    ///
    /// The loan qualifies if any single past movement is at least ten times
    /// the requested amount. An accepted loan does not post immediately: it
    /// joins the pending queue and posts after the configured number of
    /// ticks, whether or not the session is still alive by then.
    pub fn request_loan(&mut self, amount_text: &str) -> Result<(), Rejection> {
        let username = self.session_username()?;
        let amount = parse_positive(amount_text)?;

        let account = self
            .store
            .find_by_username(&username)
            .ok_or(Rejection::NotLoggedIn)?;

        if !account.covers_loan(amount) {
            return Err(Rejection::LoanNotCovered);
        }

        self.pending_loans.push(PendingLoan {
            username,
            amount,
            remaining_ticks: self.loan_delay,
        });
        Ok(())
    }

    /// Close the logged-in account
    ///
    /// The typed username must match the active session and the pin must
    /// match the account. Removal is irreversible and forces a logout.
    pub fn close_account(&mut self, username: &str, pin_text: &str) -> Result<(), Rejection> {
        let current = self.session_username()?;

        if username.trim() != current {
            return Err(Rejection::AccountMismatch);
        }

        let pin: u32 = pin_text
            .trim()
            .parse()
            .map_err(|_| Rejection::InvalidCredentials)?;

        let account = self
            .store
            .find_by_username(&current)
            .ok_or(Rejection::NotLoggedIn)?;

        if account.pin != pin {
            return Err(Rejection::InvalidCredentials);
        }

        self.store.remove(&current);
        self.session = None;
        Ok(())
    }

    /// End the session; the countdown goes with it
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Flip the display-sort toggle; returns the new state
    pub fn toggle_sort(&mut self) -> Result<bool, Rejection> {
        let session = self.session.as_mut().ok_or(Rejection::NotLoggedIn)?;
        session.sorted = !session.sorted;
        Ok(session.sorted)
    }

    /// Advance one time unit
    ///
    /// Posts any loan whose processing delay has elapsed (dropped silently
    /// if its account was closed meanwhile), then decrements the session
    /// countdown, forcing a logout at zero. A loan posting restarts
    /// whatever countdown is active at that moment.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let now = Utc::now();

        let mut still_pending = Vec::with_capacity(self.pending_loans.len());
        for mut loan in self.pending_loans.drain(..) {
            loan.remaining_ticks = loan.remaining_ticks.saturating_sub(1);
            if loan.remaining_ticks > 0 {
                still_pending.push(loan);
                continue;
            }

            if let Some(idx) = self.store.find_index(&loan.username) {
                self.store.account_mut(idx).append(loan.amount, now);
                if let Some(session) = self.session.as_mut() {
                    session.timer.restart();
                }
                outcome.posted_loans.push(PostedLoan {
                    username: loan.username,
                    amount: loan.amount,
                });
            }
        }
        self.pending_loans = still_pending;

        if let Some(session) = self.session.as_mut() {
            if session.timer.tick() {
                self.session = None;
                outcome.session_expired = true;
            }
        }

        outcome
    }

    // ---- outbound queries ---------------------------------------------

    /// The active session, if any
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The logged-in account, if any
    pub fn current_account(&self) -> Option<&Account> {
        let session = self.session.as_ref()?;
        self.store.find_by_username(&session.username)
    }

    /// Ledger rows of the logged-in account, honoring the sort toggle
    pub fn ledger_rows(&self) -> Vec<LedgerEntry> {
        match (self.current_account(), self.session.as_ref()) {
            (Some(account), Some(session)) => account.display_entries(session.sorted),
            _ => Vec::new(),
        }
    }

    /// Remaining session time as an `MM:SS` label
    pub fn remaining_session_time(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.timer.label())
    }

    /// Whether any loan is still processing
    pub fn has_pending_loans(&self) -> bool {
        !self.pending_loans.is_empty()
    }

    /// Read access to the account store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    fn session_username(&self) -> Result<String, Rejection> {
        self.session
            .as_ref()
            .map(|s| s.username.clone())
            .ok_or(Rejection::NotLoggedIn)
    }

    fn restart_countdown(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.timer.restart();
        }
    }
}

/// Parse a strictly positive amount from UI text
fn parse_positive(amount_text: &str) -> Result<Money, Rejection> {
    match Money::parse(amount_text) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        _ => Err(Rejection::NonPositiveAmount),
    }
}
