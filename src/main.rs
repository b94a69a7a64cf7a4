use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use bank_ledger::{load_accounts, Account, AppConfig, Bank, BigDecimal};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config);

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo") => run_demo(&config)?,
        Some("transfer") => run_transfer(&config, &args[2..])?,
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: bank-ledger [demo]");
            eprintln!("          bank-ledger transfer <accounts.csv> <from-owner> <to-owner> <amount>");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(config: &AppConfig) -> Result<()> {
    tracing::info!(bank = %config.bank_name, "running transfer demo");

    let mut bank = Bank::new(config.bank_name.as_str());
    let origin = bank.add_account(Account::new("Dennis", "2500".parse()?));
    let destination = bank.add_account(Account::new("Mike", "12207.81".parse()?));

    bank.transfer_between(origin, destination, &BigDecimal::from(100))?;

    for account in bank.accounts() {
        println!("💳 {:<10} {}", account.owner(), account.balance().to_plain_string());
    }
    println!("{}", serde_json::to_string_pretty(&bank)?);

    Ok(())
}

fn run_transfer(config: &AppConfig, args: &[String]) -> Result<()> {
    let [csv_path, from_owner, to_owner, amount] = args else {
        bail!("transfer expects <accounts.csv> <from-owner> <to-owner> <amount>");
    };

    let amount: BigDecimal = amount
        .parse()
        .with_context(|| format!("Invalid amount: {}", amount))?;

    let accounts = load_accounts(Path::new(csv_path))?;
    tracing::info!(count = accounts.len(), path = %csv_path, "accounts loaded");

    let mut bank = Bank::new(config.bank_name.as_str());
    for account in accounts {
        bank.add_account(account);
    }

    let from = bank
        .find_by_owner(from_owner)
        .with_context(|| format!("No account owned by {}", from_owner))?;
    let to = bank
        .find_by_owner(to_owner)
        .with_context(|| format!("No account owned by {}", to_owner))?;

    bank.transfer_between(from, to, &amount)?;
    tracing::info!(from = %from_owner, to = %to_owner, %amount, "transfer complete");

    println!("{}", serde_json::to_string_pretty(&bank)?);

    Ok(())
}
