// 📂 Account fixtures - CSV → Account
//
// Expected headers: owner,balance
// Balances are parsed as exact decimal strings ("12207.81"), never floats.

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::entities::Account;

/// One CSV row
#[derive(Debug, Deserialize)]
struct AccountRecord {
    owner: String,
    balance: BigDecimal,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::new(record.owner, record.balance)
    }
}

/// Read accounts from any CSV source (file, stdin, in-memory bytes)
pub fn read_accounts<R: Read>(reader: R) -> Result<Vec<Account>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV headers")?.clone();

    let mut accounts = Vec::new();

    for result in rdr.records() {
        // csv::Error already names the line for malformed records
        let record = result.context("Failed to read CSV record")?;
        let line = record.position().map_or(0, |pos| pos.line());

        let parsed: AccountRecord = record
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to deserialize account on line {}", line))?;
        accounts.push(parsed.into());
    }

    Ok(accounts)
}

pub fn load_accounts(csv_path: &Path) -> Result<Vec<Account>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;
    read_accounts(file)
}
