use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bankist::config::{paths::BankistPaths, settings::Settings};
use bankist::display::{format_currency, format_login_stamp, format_movement_date};
use bankist::services::Teller;
use bankist::store::AccountStore;

#[derive(Parser)]
#[command(
    name = "bankist",
    version,
    about = "Terminal banking session simulator",
    long_about = "Bankist simulates a minimal personal-banking session: log into one \
                  of the in-memory accounts, watch the ledger, transfer money, request \
                  loans, close the account, and get logged out automatically after a \
                  period of inactivity. Nothing is persisted."
)]
struct Cli {
    /// Load accounts from a JSON seed file instead of the built-in list
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Override the session timeout (seconds)
    #[arg(long, global = true)]
    timeout: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Log in once and print the ledger to stdout
    Demo {
        /// Username (lowercase initials of the owner)
        username: String,
        /// Account pin
        #[arg(long)]
        pin: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BankistPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(timeout) = cli.timeout {
        settings.session_timeout_secs = timeout;
    }

    let store = match &cli.seed {
        Some(path) => AccountStore::load_from_file(path)?,
        None => AccountStore::seed(),
    };

    match cli.command {
        Some(Commands::Tui) => {
            let teller = Teller::new(store, &settings);
            bankist::tui::run_tui(teller)?;
        }
        Some(Commands::Demo { username, pin }) => {
            run_demo(store, &settings, &username, &pin)?;
        }
        Some(Commands::Config) => {
            println!("Bankist Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!();
            println!("Settings:");
            println!("  Session timeout:  {} s", settings.session_timeout_secs);
            println!("  Loan processing:  {} s", settings.loan_processing_secs);
            println!("  Accounts seeded:  {}", store.len());
        }
        None => {
            println!("Bankist - terminal banking session simulator");
            println!();
            println!("Run 'bankist --help' for usage information.");
            println!("Run 'bankist tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Log in and print the account the way the dashboard shows it
fn run_demo(store: AccountStore, settings: &Settings, username: &str, pin: &str) -> Result<()> {
    let mut teller = Teller::new(store, settings);
    let welcome = teller.login(username, pin)?;

    let account = teller
        .current_account()
        .ok_or_else(|| anyhow::anyhow!("no account bound to the session"))?;
    let locale = account.locale.clone();
    let currency = account.currency.clone();

    println!(
        "Welcome back, {}!  {}",
        welcome.owner.split(' ').next().unwrap_or(&welcome.owner),
        format_login_stamp(welcome.logged_in_at, &locale)
    );
    println!();

    let now = Utc::now();
    for (i, entry) in teller.ledger_rows().iter().enumerate().rev() {
        println!(
            "{:>2} {:10}  {:12}  {:>14}",
            i + 1,
            entry.kind(),
            format_movement_date(entry.date, now, &locale),
            format_currency(entry.amount, &locale, &currency)
        );
    }

    println!();
    println!(
        "Balance: {}   In: {}   Out: {}   Interest: {}",
        format_currency(account.balance(), &locale, &currency),
        format_currency(account.total_in(), &locale, &currency),
        format_currency(account.total_out(), &locale, &currency),
        format_currency(account.total_interest(), &locale, &currency)
    );

    Ok(())
}
