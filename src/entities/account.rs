// 💳 Account Entity - owner + exact decimal balance
//
// "The balance only moves through deposit and withdraw"
//
// - Balance is an arbitrary-precision BigDecimal: no float, no rounding, no overflow
// - Withdrawing the full balance is allowed, one unit more is refused
// - The bank back-reference is an informational BankRef (id + name), never
//   an owning pointer

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::entities::bank::BankRef;
use crate::error::InsufficientFunds;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity - who owns it, how much it holds, which bank registered it
///
/// Equality compares owner (case-sensitive) and balance (numerically), and
/// ignores the bank reference: `Mike 8900.9997` equals `Mike 8900.99970`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,

    #[serde(serialize_with = "serialize_plain")]
    balance: BigDecimal,

    /// Set by [`Bank::add_account`](crate::entities::Bank::add_account)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank: Option<BankRef>,
}

/// Balances are written in plain notation ("0.0000001", never "1E-7")
fn serialize_plain<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_plain_string())
}

impl Account {
    /// Create an account that no bank has registered yet
    pub fn new(owner: impl Into<String>, balance: BigDecimal) -> Self {
        Account {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Overwrite the balance directly.
    ///
    /// Prefer [`deposit`](Self::deposit) and [`withdraw`](Self::withdraw);
    /// this bypasses the funds check entirely.
    pub fn set_balance(&mut self, balance: BigDecimal) {
        self.balance = balance;
    }

    /// Bank that registered this account, if any
    pub fn bank(&self) -> Option<&BankRef> {
        self.bank.as_ref()
    }

    pub fn set_bank(&mut self, bank: Option<BankRef>) {
        self.bank = bank;
    }

    /// Take `amount` out of the account.
    ///
    /// Fails when `amount > balance`; the balance is left untouched in that
    /// case. Negative amounts are not rejected and end up raising the balance.
    pub fn withdraw(&mut self, amount: &BigDecimal) -> Result<(), InsufficientFunds> {
        if amount > &self.balance {
            tracing::debug!(
                owner = %self.owner,
                balance = %self.balance,
                %amount,
                "withdrawal refused"
            );
            return Err(InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Add `amount` to the account. Always succeeds, sign is not checked.
    pub fn deposit(&mut self, amount: &BigDecimal) {
        self.balance += amount;
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::bank::BankId;
    use bigdecimal::Zero;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn create_test_account() -> Account {
        Account::new("Mike", dec("1000.12345"))
    }

    #[test]
    fn test_account_creation() {
        let account = create_test_account();

        assert_eq!(account.owner(), "Mike");
        assert_eq!(account.balance(), &dec("1000.12345"));
        assert!(account.bank().is_none());
        assert!(account.balance() > &BigDecimal::zero());
    }

    #[test]
    fn test_withdraw() {
        let mut account = create_test_account();

        account.withdraw(&BigDecimal::from(100)).unwrap();

        assert_eq!(account.balance().with_scale(0), BigDecimal::from(900));
        assert_eq!(account.balance().to_plain_string(), "900.12345");
    }

    #[test]
    fn test_withdraw_full_balance() {
        let mut account = create_test_account();

        account.withdraw(&dec("1000.12345")).unwrap();

        assert!(account.balance().is_zero());
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = create_test_account();

        let err = account.withdraw(&BigDecimal::from(2000)).unwrap_err();

        assert_eq!(err, InsufficientFunds);
        assert_eq!(err.to_string(), "insufficient funds");
        assert_eq!(account.balance().to_plain_string(), "1000.12345");
    }

    #[test]
    fn test_withdraw_smallest_overdraw_refused() {
        let mut account = create_test_account();

        assert!(account.withdraw(&dec("1000.12346")).is_err());
        assert!(account
            .withdraw(&dec("1000.123450000000000000000000000000000001"))
            .is_err());
        assert_eq!(account.balance(), &dec("1000.12345"));
    }

    #[test]
    fn test_deposit() {
        let mut account = create_test_account();

        account.deposit(&BigDecimal::from(100));

        assert_eq!(account.balance().with_scale(0), BigDecimal::from(1100));
        assert_eq!(account.balance().to_plain_string(), "1100.12345");
    }

    #[test]
    fn test_round_trip_keeps_every_digit() {
        let balance = dec("0.1234567890123456789012345678");
        let mut account = Account::new("Mike", balance.clone());
        let amount = BigDecimal::from(10_000_000_000i64);

        account.deposit(&amount);
        account.withdraw(&amount).unwrap();

        assert_eq!(account.balance(), &balance);
        assert_eq!(
            account.balance().to_plain_string(),
            "0.1234567890123456789012345678"
        );
    }

    #[test]
    fn test_deposit_beyond_96_bit_range() {
        let huge = dec("79228162514264337593543950335");
        let mut account = Account::new("Mike", huge.clone());

        account.deposit(&huge);
        account.deposit(&BigDecimal::from(1));

        assert_eq!(
            account.balance().to_plain_string(),
            "158456325028528675187087900671"
        );
    }

    #[test]
    fn test_negative_amounts_are_not_validated() {
        let mut account = Account::new("Mike", BigDecimal::from(10));

        account.deposit(&BigDecimal::from(-4));
        assert_eq!(account.balance(), &BigDecimal::from(6));

        account.withdraw(&BigDecimal::from(-4)).unwrap();
        assert_eq!(account.balance(), &BigDecimal::from(10));
    }

    #[test]
    fn test_equality_same_owner_and_balance() {
        let account = Account::new("Mike", dec("8900.9997"));
        let account2 = Account::new("Mike", dec("8900.9997"));

        assert_eq!(account2, account);
        assert_eq!(account, account2);
    }

    #[test]
    fn test_equality_is_numeric_on_balance() {
        let account = Account::new("Mike", dec("8900.9997"));
        let account2 = Account::new("Mike", dec("8900.99970"));

        assert_eq!(account, account2);
    }

    #[test]
    fn test_inequality() {
        let account = Account::new("Mike", dec("8900.9997"));

        assert_ne!(account, Account::new("Mike", dec("8900.9998")));
        assert_ne!(account, Account::new("mike", dec("8900.9997")));
        assert_ne!(account, Account::new("Dennis", dec("8900.9997")));
    }

    #[test]
    fn test_equality_ignores_bank() {
        let mut registered = Account::new("Mike", BigDecimal::from(5));
        registered.set_bank(Some(BankRef {
            id: BankId::new(),
            name: "Santander".to_string(),
        }));

        assert_eq!(registered, Account::new("Mike", BigDecimal::from(5)));
    }

    #[test]
    fn test_setters() {
        let mut account = create_test_account();

        account.set_owner("Dennis");
        account.set_balance(BigDecimal::from(42));

        assert_eq!(account.owner(), "Dennis");
        assert_eq!(account.balance(), &BigDecimal::from(42));
    }

    #[test]
    fn test_serializes_balance_as_string() {
        let account = create_test_account();

        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["owner"], "Mike");
        assert_eq!(json["balance"], "1000.12345");
        assert!(json.get("bank").is_none());

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_serializes_tiny_balance_in_plain_notation() {
        let account = Account::new("Mike", dec("0.0000001"));

        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["balance"], "0.0000001");
    }
}
