use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LoanPolicy;
use crate::decimal::Money;
use crate::errors::{Result, ValidationError};
use crate::events::{Event, EventStore};

/// unique identifier for an account
pub type AccountId = Uuid;

/// a personal bank account holding a balance and at most one outstanding loan.
///
/// fields are private: the `outstanding_loan >= 0` and single-active-loan
/// invariants hold only because every mutation goes through an operation
/// that validates before touching state. operations are all-or-nothing; a
/// returned error means nothing changed.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Money,
    outstanding_loan: Money,
    policy: LoanPolicy,
    opened_at: DateTime<Utc>,

    // running totals
    total_deposited: Money,
    total_repaid: Money,
    total_spent: Money,
    loan_count: u32,

    events: EventStore,
}

impl Account {
    /// open an account with an initial balance and the default loan policy
    pub fn open(opening_balance: Money) -> Self {
        Self::open_with_policy(opening_balance, LoanPolicy::default())
    }

    /// open an account with an explicit loan policy
    pub fn open_with_policy(opening_balance: Money, policy: LoanPolicy) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut events = EventStore::new();
        events.emit(Event::AccountOpened {
            account_id: id,
            opening_balance,
            timestamp: now,
        });

        Self {
            id,
            balance: opening_balance,
            outstanding_loan: Money::ZERO,
            policy,
            opened_at: now,
            total_deposited: Money::ZERO,
            total_repaid: Money::ZERO,
            total_spent: Money::ZERO,
            loan_count: 0,
            events,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn outstanding_loan(&self) -> Money {
        self.outstanding_loan
    }

    pub fn has_outstanding_loan(&self) -> bool {
        self.outstanding_loan.is_positive()
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// take a loan. the loan is credited to the balance immediately.
    ///
    /// rejected when the amount is non-positive, exceeds the policy cap
    /// (inclusive: exactly the cap is allowed), or a loan is already active.
    pub fn request_loan(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount { amount });
        }

        let cap = self.policy.cap_for(self.balance);
        if amount > cap {
            return Err(ValidationError::LoanExceedsCap {
                cap,
                requested: amount,
            });
        }

        if self.has_outstanding_loan() {
            return Err(ValidationError::LoanOutstanding {
                outstanding: self.outstanding_loan,
            });
        }

        self.outstanding_loan = amount;
        self.balance += amount;
        self.loan_count += 1;

        self.events.emit(Event::LoanIssued {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// pay down the outstanding loan from the balance.
    ///
    /// the account validates, it never clamps: callers wanting "as much as
    /// possible" compute `min(outstanding_loan, available)` themselves.
    /// repaying exactly the outstanding amount zeroes the loan.
    pub fn repay_loan(&mut self, amount: Money) -> Result<()> {
        if self.balance < amount {
            return Err(ValidationError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        if amount > self.outstanding_loan {
            return Err(ValidationError::RepaymentExceedsLoan {
                outstanding: self.outstanding_loan,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.outstanding_loan -= amount;
        self.total_repaid += amount;

        self.events.emit(Event::LoanRepaid {
            account_id: self.id,
            amount,
            remaining_loan: self.outstanding_loan,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// credit the balance. rejected for non-positive amounts.
    pub fn deposit_funds(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount { amount });
        }

        self.balance += amount;
        self.total_deposited += amount;

        self.events.emit(Event::FundsDeposited {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// spend from the balance. loan state is untouched.
    pub fn purchase(&mut self, price: Money) -> Result<()> {
        if price > self.balance {
            return Err(ValidationError::InsufficientFundsForPurchase {
                price,
                balance: self.balance,
            });
        }

        self.balance -= price;
        self.total_spent += price;

        self.events.emit(Event::PurchaseMade {
            account_id: self.id,
            price,
            new_balance: self.balance,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// drain events collected since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// events collected so far, without draining
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// serializable snapshot of the account
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            balance: self.balance,
            outstanding_loan: self.outstanding_loan,
            opened_at: self.opened_at,
            total_deposited: self.total_deposited,
            total_repaid: self.total_repaid,
            total_spent: self.total_spent,
            loan_count: self.loan_count,
        }
    }

    /// pretty-printed json snapshot
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(&self.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// serializable view of an account's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: AccountId,
    pub balance: Money,
    pub outstanding_loan: Money,
    pub opened_at: DateTime<Utc>,
    pub total_deposited: Money,
    pub total_repaid: Money,
    pub total_spent: Money,
    pub loan_count: u32,
}
