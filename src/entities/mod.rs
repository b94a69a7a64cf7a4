// Entity Models
// Following Rich Hickey's philosophy: "Identity persists, values change"
//
// - Bank has a stable identity (UUID) and owns its registered accounts
// - Account holds owner + balance and an informational BankRef

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::{AccountHandle, Bank, BankId, BankRef};
