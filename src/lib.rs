// Bank Ledger - Core Library
// Account/Bank entity models with exact decimal balances, used by the CLI and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod fixtures;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use entities::{Account, AccountHandle, Bank, BankId, BankRef};
pub use error::{InsufficientFunds, TransferError};
pub use fixtures::{load_accounts, read_accounts};

// BigDecimal is part of every public signature
pub use bigdecimal::BigDecimal;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
