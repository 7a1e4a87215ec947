use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountId};
use crate::config::WorkTerms;
use crate::decimal::Money;
use crate::errors::{Result, ValidationError};

/// an earner accumulates pay through work and transfers it into the one
/// account it was bound to at construction.
///
/// the binding is by id, not by reference: several earners may share an
/// account, and the caller hands the account in mutably per transfer, which
/// serializes access.
#[derive(Debug)]
pub struct Earner {
    account: AccountId,
    pay: Money,
    terms: WorkTerms,
}

/// what a pay transfer actually moved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub deposited: Money,
    pub down_payment: Money,
}

impl TransferReceipt {
    pub const EMPTY: TransferReceipt = TransferReceipt {
        deposited: Money::ZERO,
        down_payment: Money::ZERO,
    };
}

impl Earner {
    /// bind a new earner to an account, with default work terms
    pub fn new(account: &Account) -> Self {
        Self::with_terms(account, WorkTerms::default())
    }

    /// bind a new earner to an account with explicit terms
    pub fn with_terms(account: &Account, terms: WorkTerms) -> Self {
        Self {
            account: account.id(),
            pay: Money::ZERO,
            terms,
        }
    }

    pub fn pay(&self) -> Money {
        self.pay
    }

    pub fn account_id(&self) -> AccountId {
        self.account
    }

    pub fn terms(&self) -> &WorkTerms {
        &self.terms
    }

    /// one unit of labor. never fails.
    pub fn work(&mut self) {
        self.pay += self.terms.pay_per_shift;
    }

    /// move the accumulated pay into the bound account.
    ///
    /// the full pay is deposited first; if the account then has an
    /// outstanding loan, a down payment of `down_payment_rate * pay`
    /// (computed against the pay just deposited, capped at the remaining
    /// loan) is repaid. pay is reset to zero unconditionally at the end.
    pub fn transfer_to_account(&mut self, account: &mut Account) -> Result<TransferReceipt> {
        if account.id() != self.account {
            return Err(ValidationError::AccountMismatch {
                expected: self.account,
                actual: account.id(),
            });
        }

        if !self.pay.is_positive() {
            self.pay = Money::ZERO;
            return Ok(TransferReceipt::EMPTY);
        }

        let deposited = self.pay;
        account.deposit_funds(deposited)?;

        let mut down_payment = Money::ZERO;
        if account.has_outstanding_loan() {
            down_payment = account
                .outstanding_loan()
                .min(self.terms.down_payment_rate.of(deposited));
            if down_payment.is_positive() {
                account.repay_loan(down_payment)?;
            }
        }

        self.pay = Money::ZERO;

        Ok(TransferReceipt {
            deposited,
            down_payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_accumulates_pay() {
        let account = Account::open(Money::from_major(1000));
        let mut earner = Earner::new(&account);

        earner.work();
        earner.work();
        assert_eq!(earner.pay(), Money::from_major(200));
    }

    #[test]
    fn test_transfer_without_loan_deposits_everything() {
        let mut account = Account::open(Money::from_major(100));
        let mut earner = Earner::new(&account);
        earner.work();

        let receipt = earner.transfer_to_account(&mut account).unwrap();
        assert_eq!(receipt.deposited, Money::from_major(100));
        assert_eq!(receipt.down_payment, Money::ZERO);
        assert_eq!(account.balance(), Money::from_major(200));
        assert_eq!(earner.pay(), Money::ZERO);
    }

    #[test]
    fn test_transfer_with_loan_redirects_ten_percent() {
        // 1000 balance, 1000 loan, two shifts
        let mut account = Account::open(Money::from_major(1000));
        account.request_loan(Money::from_major(1000)).unwrap();

        let mut earner = Earner::new(&account);
        earner.work();
        earner.work();
        assert_eq!(earner.pay(), Money::from_major(200));

        let receipt = earner.transfer_to_account(&mut account).unwrap();
        assert_eq!(receipt.deposited, Money::from_major(200));
        assert_eq!(receipt.down_payment, Money::from_major(20));

        assert_eq!(account.balance(), Money::from_major(2180));
        assert_eq!(account.outstanding_loan(), Money::from_major(980));
        assert_eq!(earner.pay(), Money::ZERO);
    }

    #[test]
    fn test_down_payment_capped_at_outstanding_loan() {
        let mut account = Account::open(Money::from_major(1000));
        account.request_loan(Money::from_major(5)).unwrap();

        let mut earner = Earner::new(&account);
        earner.work(); // 10% of 100 would be 10, but only 5 is owed

        let receipt = earner.transfer_to_account(&mut account).unwrap();
        assert_eq!(receipt.down_payment, Money::from_major(5));
        assert!(!account.has_outstanding_loan());
        assert_eq!(account.balance(), Money::from_major(1100));
    }

    #[test]
    fn test_transfer_with_zero_pay_is_a_noop() {
        let mut account = Account::open(Money::from_major(100));
        let mut earner = Earner::new(&account);

        let receipt = earner.transfer_to_account(&mut account).unwrap();
        assert_eq!(receipt, TransferReceipt::EMPTY);
        assert_eq!(account.balance(), Money::from_major(100));
        assert_eq!(earner.pay(), Money::ZERO);
    }

    #[test]
    fn test_transfer_rejects_unbound_account() {
        let mut bound = Account::open(Money::from_major(100));
        let mut other = Account::open(Money::from_major(100));
        let mut earner = Earner::new(&bound);
        earner.work();

        let err = earner.transfer_to_account(&mut other);
        assert!(matches!(err, Err(ValidationError::AccountMismatch { .. })));
        // pay survives a rejected transfer
        assert_eq!(earner.pay(), Money::from_major(100));
        assert_eq!(other.balance(), Money::from_major(100));

        earner.transfer_to_account(&mut bound).unwrap();
        assert_eq!(bound.balance(), Money::from_major(200));
    }

    #[test]
    fn test_two_earners_one_account() {
        let mut account = Account::open(Money::from_major(0));
        let mut first = Earner::new(&account);
        let mut second = Earner::new(&account);

        first.work();
        second.work();
        first.transfer_to_account(&mut account).unwrap();
        second.transfer_to_account(&mut account).unwrap();

        assert_eq!(account.balance(), Money::from_major(200));
    }

    #[test]
    fn test_custom_terms() {
        let mut account = Account::open(Money::from_major(1000));
        account.request_loan(Money::from_major(1000)).unwrap();

        let terms = WorkTerms {
            pay_per_shift: Money::from_major(250),
            down_payment_rate: crate::decimal::Rate::from_percentage(20),
        };
        let mut earner = Earner::with_terms(&account, terms);
        earner.work();

        let receipt = earner.transfer_to_account(&mut account).unwrap();
        assert_eq!(receipt.deposited, Money::from_major(250));
        assert_eq!(receipt.down_payment, Money::from_major(50));
        assert_eq!(account.outstanding_loan(), Money::from_major(950));
    }
}
