// ⚠️ Domain errors
//
// Withdrawing more than the balance is the only way an account operation can
// fail. Handle-based transfers can additionally point at an account the bank
// never registered.

use thiserror::Error;

use crate::entities::AccountHandle;

/// Raised when a withdrawal asks for more than the current balance.
///
/// No amount or balance snapshot is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient funds")]
pub struct InsufficientFunds;

/// Failure of [`Bank::transfer_between`](crate::entities::Bank::transfer_between).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFunds),

    #[error("no account registered at position {0}")]
    UnknownAccount(AccountHandle),
}
