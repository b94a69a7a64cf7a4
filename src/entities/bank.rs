// 🏦 Bank Entity - ordered account membership + transfers
//
// "Bank UUID is IDENTITY, bank name is a VALUE"
//
// - The bank owns the accounts registered with it, in insertion order
// - Registered accounts get a BankRef (id + name) instead of a pointer back
// - transfer = withdraw on the source, then deposit on the destination.
//   A refused withdrawal stops before the destination is touched; there is
//   no rollback beyond that ordering.

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::account::Account;
use crate::error::{InsufficientFunds, TransferError};

// ============================================================================
// IDENTITY
// ============================================================================

/// Stable identity of a bank (UUID v4) - never changes, even on rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(Uuid);

impl BankId {
    pub fn new() -> Self {
        BankId(Uuid::new_v4())
    }
}

impl Default for BankId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What an account knows about the bank that registered it.
///
/// Informational only: it is never used to reach the bank's account list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRef {
    pub id: BankId,
    pub name: String,
}

/// Position of a registered account inside its bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountHandle(usize);

impl AccountHandle {
    pub fn new(index: usize) -> Self {
        AccountHandle(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AccountHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// BANK ENTITY
// ============================================================================

/// Bank Entity - a name plus the accounts registered with it
///
/// Deserializing re-stamps every account with this bank's id and name, so a
/// loaded bank always [`owns`](Bank::owns) what it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BankRecord")]
pub struct Bank {
    id: BankId,

    name: String,

    /// Registration order is preserved; duplicates are allowed
    accounts: Vec<Account>,
}

/// Wire shape of a [`Bank`], before back-references are rebuilt
#[derive(Deserialize)]
struct BankRecord {
    id: BankId,
    name: String,
    #[serde(default)]
    accounts: Vec<Account>,
}

impl From<BankRecord> for Bank {
    fn from(record: BankRecord) -> Self {
        let mut bank = Bank {
            id: record.id,
            name: record.name,
            accounts: record.accounts,
        };
        bank.restamp_accounts();
        bank
    }
}

impl Bank {
    /// Create an empty bank with a fresh identity
    pub fn new(name: impl Into<String>) -> Self {
        Bank {
            id: BankId::new(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the bank and refresh the back-reference of every account it holds
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.restamp_accounts();
    }

    fn restamp_accounts(&mut self) {
        let bank_ref = self.bank_ref();
        for account in &mut self.accounts {
            account.set_bank(Some(bank_ref.clone()));
        }
    }

    fn bank_ref(&self) -> BankRef {
        BankRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, handle: AccountHandle) -> Option<&Account> {
        self.accounts.get(handle.index())
    }

    pub fn account_mut(&mut self, handle: AccountHandle) -> Option<&mut Account> {
        self.accounts.get_mut(handle.index())
    }

    /// Register an account at the end of the list and point it back at this bank.
    ///
    /// No duplicate detection: registering an equal account twice yields two
    /// entries.
    pub fn add_account(&mut self, mut account: Account) -> AccountHandle {
        account.set_bank(Some(self.bank_ref()));
        let handle = AccountHandle::new(self.accounts.len());

        tracing::debug!(
            bank = %self.name,
            owner = %account.owner(),
            position = handle.index(),
            "account registered"
        );

        self.accounts.push(account);
        handle
    }

    /// Move `amount` from `source` to `destination`.
    ///
    /// Works on any two accounts, registered here or not. The destination is
    /// only credited once the source withdrawal succeeded.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: &BigDecimal,
    ) -> Result<(), InsufficientFunds> {
        tracing::debug!(
            bank = %self.name,
            from = %source.owner(),
            to = %destination.owner(),
            %amount,
            "transfer"
        );

        source.withdraw(amount)?;
        destination.deposit(amount);
        Ok(())
    }

    /// Same as [`transfer`](Self::transfer) for two accounts held by this bank.
    ///
    /// Both handles are checked before anything moves. `from == to` is
    /// allowed and leaves the balance as it was (provided the funds check
    /// passes).
    pub fn transfer_between(
        &mut self,
        from: AccountHandle,
        to: AccountHandle,
        amount: &BigDecimal,
    ) -> Result<(), TransferError> {
        for handle in [from, to] {
            if handle.index() >= self.accounts.len() {
                return Err(TransferError::UnknownAccount(handle));
            }
        }

        tracing::debug!(
            bank = %self.name,
            from = %self.accounts[from.index()].owner(),
            to = %self.accounts[to.index()].owner(),
            %amount,
            "transfer"
        );

        self.accounts[from.index()].withdraw(amount)?;
        self.accounts[to.index()].deposit(amount);
        Ok(())
    }

    /// Whether `account` carries this bank's identity
    pub fn owns(&self, account: &Account) -> bool {
        account.bank().is_some_and(|bank| bank.id == self.id)
    }

    /// First registered account whose owner matches (case-insensitive)
    pub fn find_by_owner(&self, owner: &str) -> Option<AccountHandle> {
        let lower_owner = owner.to_lowercase();
        self.accounts
            .iter()
            .position(|acc| acc.owner().to_lowercase() == lower_owner)
            .map(AccountHandle::new)
    }

    /// Whether any registered account belongs to `owner` (case-insensitive)
    pub fn any_owned_by(&self, owner: &str) -> bool {
        self.find_by_owner(owner).is_some()
    }

    /// Exact sum of every registered balance
    pub fn total_balance(&self) -> BigDecimal {
        self.accounts.iter().map(Account::balance).sum()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================
