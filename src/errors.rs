use thiserror::Error;
use uuid::Uuid;

use crate::decimal::Money;

/// the single error kind for ledger operations: a rejected precondition.
/// every failure leaves state untouched; nothing in the core panics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("the amount is too high, max loan is {cap} (twice your current balance)")]
    LoanExceedsCap {
        cap: Money,
        requested: Money,
    },

    #[error("please repay your existing loan of {outstanding} first")]
    LoanOutstanding {
        outstanding: Money,
    },

    #[error("not enough money: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("down payment must not exceed the outstanding loan: outstanding {outstanding}, requested {requested}")]
    RepaymentExceedsLoan {
        outstanding: Money,
        requested: Money,
    },

    #[error("amount must be greater than 0, got {amount}")]
    NonPositiveAmount {
        amount: Money,
    },

    #[error("you don't have enough money to buy this: price {price}, balance {balance}")]
    InsufficientFundsForPurchase {
        price: Money,
        balance: Money,
    },

    #[error("earner is bound to account {expected}, got {actual}")]
    AccountMismatch {
        expected: Uuid,
        actual: Uuid,
    },

    #[error("invalid policy: {message}")]
    InvalidPolicy {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
